use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::input::{Inputs, Value};

/// The kind of control a field renders as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum FieldType {
    Radio,
    Checkbox,
    Number,
    Select,
    Date,
}

/// One enumerated choice for a radio or select field.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldOption {
    pub value: String,
    pub label: String,
}

/// Declarative visibility condition, evaluated by the rendering layer only.
///
/// Scoring never consults visibility — it sees whichever values were
/// actually supplied. The field is shown when the referenced field's
/// current value is one of `any_of`.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ShowIf {
    pub field: String,
    pub any_of: Vec<String>,
}

impl ShowIf {
    pub fn matches(&self, inputs: &Inputs) -> bool {
        match inputs.raw(&self.field) {
            Some(Value::Text(s)) => self.any_of.iter().any(|v| v == s),
            Some(Value::Bool(b)) => {
                let s = if *b { "true" } else { "false" };
                self.any_of.iter().any(|v| v == s)
            }
            Some(Value::Number(n)) => self.any_of.iter().any(|v| {
                v.parse::<f64>().map(|p| p == *n).unwrap_or(false)
            }),
            None => false,
        }
    }
}

/// A named input slot in a calculator's form schema.
///
/// Defined statically per calculator and never mutated at runtime.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FieldDescriptor {
    pub id: String,
    pub label: String,
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<FieldOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_if: Option<ShowIf>,
}

impl FieldDescriptor {
    fn new(id: &str, label: &str, field_type: FieldType) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            field_type,
            options: Vec::new(),
            unit: None,
            min: None,
            max: None,
            show_if: None,
        }
    }

    pub fn radio(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let mut f = Self::new(id, label, FieldType::Radio);
        f.options = options
            .iter()
            .map(|(value, label)| FieldOption {
                value: value.to_string(),
                label: label.to_string(),
            })
            .collect();
        f
    }

    pub fn select(id: &str, label: &str, options: &[(&str, &str)]) -> Self {
        let mut f = Self::radio(id, label, options);
        f.field_type = FieldType::Select;
        f
    }

    pub fn checkbox(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldType::Checkbox)
    }

    pub fn number(id: &str, label: &str, unit: &str, min: f64, max: f64) -> Self {
        let mut f = Self::new(id, label, FieldType::Number);
        f.unit = Some(unit.to_string());
        f.min = Some(min);
        f.max = Some(max);
        f
    }

    pub fn date(id: &str, label: &str) -> Self {
        Self::new(id, label, FieldType::Date)
    }

    pub fn show_if(mut self, field: &str, any_of: &[&str]) -> Self {
        self.show_if = Some(ShowIf {
            field: field.to_string(),
            any_of: any_of.iter().map(|v| v.to_string()).collect(),
        });
        self
    }
}
