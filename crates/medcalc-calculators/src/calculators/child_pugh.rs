use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Child-Pugh score for cirrhosis severity.
///
/// Five components score 1-3 points each and the total (5-15) maps to
/// class A/B/C. Boundary comparisons are kept exactly as documented:
/// bilirubin <2.0 / 2.0-3.0 / >3.0, albumin >3.5 / 2.8-3.5 / <2.8,
/// INR <1.7 / 1.7-2.2 / >2.2.
pub struct ChildPugh;

fn bilirubin_points(b: f64) -> u32 {
    if b < 2.0 {
        1
    } else if b <= 3.0 {
        2
    } else {
        3
    }
}

fn albumin_points(a: f64) -> u32 {
    if a > 3.5 {
        1
    } else if a >= 2.8 {
        2
    } else {
        3
    }
}

fn inr_points(i: f64) -> u32 {
    if i < 1.7 {
        1
    } else if i <= 2.2 {
        2
    } else {
        3
    }
}

fn ascites_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "none" => 1,
        "slight" => 2,
        "moderate" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "ascites".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn encephalopathy_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "none" => 1,
        "grade_1_2" => 2,
        "grade_3_4" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "encephalopathy".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

impl Calculator for ChildPugh {
    fn id(&self) -> &str {
        "child_pugh"
    }

    fn name(&self) -> &str {
        "Child-Pugh Score"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number("bilirubin", "Total bilirubin", "mg/dL", 0.0, 50.0),
                FieldDescriptor::number("albumin", "Serum albumin", "g/dL", 0.5, 7.0),
                FieldDescriptor::number("inr", "INR", "", 0.5, 20.0),
                FieldDescriptor::radio(
                    "ascites",
                    "Ascites",
                    &[
                        ("none", "None"),
                        ("slight", "Slight (diuretic-responsive)"),
                        ("moderate", "Moderate or refractory"),
                    ],
                ),
                FieldDescriptor::radio(
                    "encephalopathy",
                    "Hepatic encephalopathy",
                    &[
                        ("none", "None"),
                        ("grade_1_2", "Grade 1-2 (or suppressed with medication)"),
                        ("grade_3_4", "Grade 3-4 (or refractory)"),
                    ],
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Pugh RN, Murray-Lyon IM, Dawson JL, Pietroni MC, Williams R. Transection of the oesophagus for bleeding oesophageal varices. Br J Surg. 1973;60(8):646-649.",
                "https://doi.org/10.1002/bjs.1800600817",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let bilirubin = bilirubin_points(inputs.number_in("bilirubin", 0.0, 50.0)?);
        let albumin = albumin_points(inputs.number_in("albumin", 0.5, 7.0)?);
        let inr = inr_points(inputs.number_in("inr", 0.5, 20.0)?);
        let ascites = ascites_points(inputs.text("ascites")?)?;
        let encephalopathy = encephalopathy_points(inputs.text("encephalopathy")?)?;

        let total = bilirubin + albumin + inr + ascites + encephalopathy;
        let (class, interpretation, mortality, severity) = match total {
            5..=6 => ("A", "Well-compensated disease", "5-10%", Severity::Success),
            7..=9 => (
                "B",
                "Significant functional compromise",
                "15-20%",
                Severity::Warning,
            ),
            _ => ("C", "Decompensated disease", "45-55%", Severity::Danger),
        };

        Ok(Output::new()
            .push("Bilirubin points", bilirubin.to_string())
            .push("Albumin points", albumin.to_string())
            .push("INR points", inr.to_string())
            .push("Ascites points", ascites.to_string())
            .push("Encephalopathy points", encephalopathy.to_string())
            .push("Total score", total.to_string())
            .push("Class", class)
            .note("Interpretation", interpretation)
            .push("1-year mortality", mortality)
            .with_severity(severity))
    }
}
