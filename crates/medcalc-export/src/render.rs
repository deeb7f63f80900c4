use csv::Writer;
use tracing::info;

use medcalc_core::{ItemKind, Output, Severity};

use crate::error::ExportError;

fn kind_tag(kind: ItemKind) -> &'static str {
    match kind {
        ItemKind::Value => "value",
        ItemKind::Header => "header",
        ItemKind::Note => "note",
        ItemKind::Warning => "warning",
    }
}

fn severity_tag(severity: Severity) -> &'static str {
    match severity {
        Severity::Success => "success",
        Severity::Info => "info",
        Severity::Warning => "warning",
        Severity::Danger => "danger",
    }
}

/// Render a calculator result as a CSV worksheet.
///
/// One row per result item, preserving order, with the item kind in the
/// third column so spreadsheet users can tell section markers and warnings
/// from plain values. Values containing commas or quotes are escaped by the
/// writer. Returns the payload; persistence is the host's concern.
pub fn to_csv(calculator_name: &str, output: &Output) -> Result<String, ExportError> {
    let mut writer = Writer::from_writer(Vec::new());

    writer.write_record(["Calculator", calculator_name, ""])?;
    writer.write_record(["Label", "Value", "Kind"])?;
    for item in &output.items {
        writer.write_record([item.label.as_str(), item.value.as_str(), kind_tag(item.kind)])?;
    }
    if let Some(severity) = output.severity {
        writer.write_record(["Overall severity", severity_tag(severity), "note"])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Buffer(e.to_string()))?;
    let payload = String::from_utf8(bytes)?;

    info!(
        calculator = calculator_name,
        rows = output.items.len(),
        "rendered csv export"
    );
    Ok(payload)
}
