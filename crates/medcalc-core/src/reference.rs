use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A bibliographic citation attached to a calculator. Purely descriptive.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Reference {
    pub citation: String,
    pub url: String,
}

impl Reference {
    pub fn new(citation: &str, url: &str) -> Self {
        Self {
            citation: citation.to_string(),
            url: url.to_string(),
        }
    }
}
