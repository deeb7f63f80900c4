use thiserror::Error;

use medcalc_core::InputError;

#[derive(Debug, Error)]
pub enum CalculatorError {
    #[error("unknown calculator: {0}")]
    UnknownCalculator(String),

    #[error(transparent)]
    Input(#[from] InputError),
}
