use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("CSV generation failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV buffer error: {0}")]
    Buffer(String),

    #[error("CSV payload is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}
