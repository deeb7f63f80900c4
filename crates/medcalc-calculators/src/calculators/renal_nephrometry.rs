use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// RENAL nephrometry score for renal mass complexity.
///
/// Four components score 1-3 points each (radius, exophytic extent,
/// nearness to the collecting system, polar location); hilar tumors
/// carry the "h" suffix without changing the sum. Totals 4-6 are low,
/// 7-9 moderate, 10-12 high complexity.
pub struct RenalNephrometry;

fn radius_points(r: f64) -> u32 {
    if r <= 4.0 {
        1
    } else if r < 7.0 {
        2
    } else {
        3
    }
}

fn exophytic_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "ge50" => 1,
        "lt50" => 2,
        "endophytic" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "exophytic".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn nearness_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "ge7" => 1,
        "4to7" => 2,
        "le4" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "nearness".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn location_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "polar" => 1,
        "crosses" => 2,
        "central" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "location".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

impl Calculator for RenalNephrometry {
    fn id(&self) -> &str {
        "renal_nephrometry"
    }

    fn name(&self) -> &str {
        "RENAL Nephrometry Score"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number("radius", "Maximal tumor diameter", "cm", 0.1, 30.0),
                FieldDescriptor::radio(
                    "exophytic",
                    "Exophytic extent",
                    &[
                        ("ge50", ">=50% exophytic"),
                        ("lt50", "<50% exophytic"),
                        ("endophytic", "Entirely endophytic"),
                    ],
                ),
                FieldDescriptor::radio(
                    "nearness",
                    "Nearness to collecting system or sinus",
                    &[
                        ("ge7", ">=7 mm"),
                        ("4to7", "4-7 mm"),
                        ("le4", "<=4 mm"),
                    ],
                ),
                FieldDescriptor::radio(
                    "location",
                    "Location relative to the polar lines",
                    &[
                        ("polar", "Entirely above or below a polar line"),
                        ("crosses", "Crosses a polar line"),
                        ("central", ">50% across the midline or entirely central"),
                    ],
                ),
                FieldDescriptor::checkbox("hilar", "Hilar tumor (abuts main renal artery or vein)"),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Kutikov A, Uzzo RG. The R.E.N.A.L. nephrometry score: a comprehensive standardized system for quantitating renal tumor size, location and depth. J Urol. 2009;182(3):844-853.",
                "https://doi.org/10.1016/j.juro.2009.05.035",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let radius = radius_points(inputs.number_in("radius", 0.1, 30.0)?);
        let exophytic = exophytic_points(inputs.text("exophytic")?)?;
        let nearness = nearness_points(inputs.text("nearness")?)?;
        let location = location_points(inputs.text("location")?)?;
        let hilar = inputs.flag("hilar")?;

        let total = radius + exophytic + nearness + location;
        let suffix = if hilar { "h" } else { "" };
        let (complexity, severity) = match total {
            4..=6 => ("Low", Severity::Success),
            7..=9 => ("Moderate", Severity::Warning),
            _ => ("High", Severity::Danger),
        };

        Ok(Output::new()
            .push("R (radius) points", radius.to_string())
            .push("E (exophytic) points", exophytic.to_string())
            .push("N (nearness) points", nearness.to_string())
            .push("L (location) points", location.to_string())
            .push("Total score", format!("{total}{suffix}"))
            .push("Complexity", complexity)
            .with_severity(severity))
    }
}
