use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Presentation weight the host attaches to a result (or one row of it).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Severity {
    Success,
    Info,
    Warning,
    Danger,
}

/// What a result row is, structurally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ItemKind {
    /// A label/value pair.
    Value,
    /// A section heading; the value is empty.
    Header,
    /// Interpretive or contextual text.
    Note,
    /// A clinical caution the host should make prominent.
    Warning,
}

/// One row of a calculator result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct OutputItem {
    pub label: String,
    pub value: String,
    pub kind: ItemKind,
}

/// The complete, ordered result of one evaluation.
///
/// Immutable once returned; a fresh value is produced on every evaluation.
/// Structure lives in `ItemKind` and `Severity`, not in label conventions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Output {
    pub items: Vec<OutputItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub severity: Option<Severity>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(OutputItem {
            label: label.into(),
            value: value.into(),
            kind: ItemKind::Value,
        });
        self
    }

    pub fn header(mut self, label: impl Into<String>) -> Self {
        self.items.push(OutputItem {
            label: label.into(),
            value: String::new(),
            kind: ItemKind::Header,
        });
        self
    }

    pub fn note(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(OutputItem {
            label: label.into(),
            value: value.into(),
            kind: ItemKind::Note,
        });
        self
    }

    pub fn warning(mut self, label: impl Into<String>, value: impl Into<String>) -> Self {
        self.items.push(OutputItem {
            label: label.into(),
            value: value.into(),
            kind: ItemKind::Warning,
        });
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    /// First value carried under `label`, if any. Mostly a test convenience.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.items
            .iter()
            .find(|i| i.label == label)
            .map(|i| i.value.as_str())
    }
}
