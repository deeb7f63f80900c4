use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::InputError;

/// A value collected from one input control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[serde(untagged)]
#[ts(export)]
pub enum Value {
    Number(f64),
    Bool(bool),
    Text(String),
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// The flat field-id → value record a calculator evaluates.
///
/// Built by the host form layer, passed wholesale into `evaluate`, and
/// discarded afterwards. The typed accessors below perform all required-field
/// and domain validation, so scoring code past the accessor calls cannot fail.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct Inputs(BTreeMap<String, Value>);

impl Inputs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, id: &str, value: impl Into<Value>) -> Self {
        self.0.insert(id.to_string(), value.into());
        self
    }

    pub fn insert(&mut self, id: &str, value: impl Into<Value>) {
        self.0.insert(id.to_string(), value.into());
    }

    pub fn raw(&self, id: &str) -> Option<&Value> {
        self.0.get(id)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Required categorical value (radio/select).
    pub fn text(&self, id: &str) -> Result<&str, InputError> {
        match self.0.get(id) {
            Some(Value::Text(s)) if !s.is_empty() => Ok(s),
            Some(Value::Text(_)) | None => Err(InputError::MissingField(id.to_string())),
            Some(_) => Err(InputError::InvalidValue {
                field: id.to_string(),
                message: "expected a categorical value".to_string(),
            }),
        }
    }

    /// Optional categorical value; absent or empty reads as `None`.
    pub fn opt_text(&self, id: &str) -> Option<&str> {
        match self.0.get(id) {
            Some(Value::Text(s)) if !s.is_empty() => Some(s),
            _ => None,
        }
    }

    /// Checkbox state. An absent checkbox reads as unchecked.
    pub fn flag(&self, id: &str) -> Result<bool, InputError> {
        match self.0.get(id) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::Text(s)) if s == "true" => Ok(true),
            Some(Value::Text(s)) if s == "false" => Ok(false),
            None => Ok(false),
            Some(_) => Err(InputError::InvalidValue {
                field: id.to_string(),
                message: "expected a checkbox value".to_string(),
            }),
        }
    }

    /// Required numeric value. Number entries arrive either as numbers or as
    /// the raw text of the control; both are accepted, non-finite values are
    /// not.
    pub fn number(&self, id: &str) -> Result<f64, InputError> {
        let n = match self.0.get(id) {
            Some(Value::Number(n)) => *n,
            Some(Value::Text(s)) if !s.is_empty() => {
                s.trim().parse::<f64>().map_err(|_| InputError::InvalidValue {
                    field: id.to_string(),
                    message: format!("'{s}' is not a number"),
                })?
            }
            Some(Value::Text(_)) | None => {
                return Err(InputError::MissingField(id.to_string()));
            }
            Some(Value::Bool(_)) => {
                return Err(InputError::InvalidValue {
                    field: id.to_string(),
                    message: "expected a numeric value".to_string(),
                });
            }
        };
        if !n.is_finite() {
            return Err(InputError::InvalidValue {
                field: id.to_string(),
                message: "value is not finite".to_string(),
            });
        }
        Ok(n)
    }

    /// Required numeric value constrained to the closed range [min, max].
    pub fn number_in(&self, id: &str, min: f64, max: f64) -> Result<f64, InputError> {
        let n = self.number(id)?;
        if n < min || n > max {
            return Err(InputError::OutOfRange {
                field: id.to_string(),
                value: n,
                min,
                max,
            });
        }
        Ok(n)
    }

    /// Optional numeric value; absent reads as `None`, invalid still errors.
    pub fn opt_number(&self, id: &str) -> Result<Option<f64>, InputError> {
        match self.0.get(id) {
            None => Ok(None),
            Some(Value::Text(s)) if s.is_empty() => Ok(None),
            _ => self.number(id).map(Some),
        }
    }

    /// Optional numeric value constrained to the closed range [min, max].
    /// Absent reads as `None`; a supplied value outside the range errors.
    pub fn opt_number_in(
        &self,
        id: &str,
        min: f64,
        max: f64,
    ) -> Result<Option<f64>, InputError> {
        match self.opt_number(id)? {
            Some(n) if n < min || n > max => Err(InputError::OutOfRange {
                field: id.to_string(),
                value: n,
                min,
                max,
            }),
            other => Ok(other),
        }
    }

    /// Numeric value that is required only under `condition` (which the
    /// caller has already established holds). Missing yields the
    /// conditional-input error naming the condition.
    pub fn number_when(
        &self,
        id: &str,
        condition: &str,
        min: f64,
        max: f64,
    ) -> Result<f64, InputError> {
        match self.number_in(id, min, max) {
            Err(InputError::MissingField(field)) => Err(InputError::MissingConditional {
                field,
                condition: condition.to_string(),
            }),
            other => other,
        }
    }

    /// Required ISO calendar date (`YYYY-MM-DD`).
    pub fn date(&self, id: &str) -> Result<jiff::civil::Date, InputError> {
        let s = self.text(id)?;
        s.parse::<jiff::civil::Date>()
            .map_err(|e| InputError::InvalidDate {
                field: id.to_string(),
                message: e.to_string(),
            })
    }
}

/// Whole years elapsed from `dob` to `on`.
///
/// This is the one documented wall-clock-adjacent transform in the system,
/// and it is explicit: the reference date is an input, never `now()`.
pub fn age_years(dob: jiff::civil::Date, on: jiff::civil::Date) -> i16 {
    let mut years = on.year() - dob.year();
    if (on.month(), on.day()) < (dob.month(), dob.day()) {
        years -= 1;
    }
    years
}
