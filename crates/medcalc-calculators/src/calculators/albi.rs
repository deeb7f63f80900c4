use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// ALBI (albumin-bilirubin) grade of liver function.
///
/// Score = log10(bilirubin [umol/L]) x 0.66 + albumin [g/L] x -0.0852.
/// Grade 1 <= -2.60, grade 2 <= -1.39, grade 3 above. US-unit entries
/// (mg/dL, g/dL) are converted before scoring.
pub struct Albi;

const BILI_MGDL_TO_UMOLL: f64 = 17.104;
const ALB_GDL_TO_GL: f64 = 10.0;
const GRADE1_MAX: f64 = -2.60;
const GRADE2_MAX: f64 = -1.39;

impl Calculator for Albi {
    fn id(&self) -> &str {
        "albi"
    }

    fn name(&self) -> &str {
        "ALBI Grade"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "units",
                    "Laboratory units",
                    &[
                        ("si", "SI (g/L, umol/L)"),
                        ("us", "US (g/dL, mg/dL)"),
                    ],
                ),
                FieldDescriptor::number("albumin", "Serum albumin", "g/L or g/dL", 0.5, 100.0),
                FieldDescriptor::number(
                    "bilirubin",
                    "Total bilirubin",
                    "umol/L or mg/dL",
                    0.05,
                    1000.0,
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Johnson PJ, Berhane S, Kagebayashi C, et al. Assessment of liver function in patients with hepatocellular carcinoma: a new evidence-based approach - the ALBI grade. J Clin Oncol. 2015;33(6):550-558.",
                "https://doi.org/10.1200/JCO.2014.57.9151",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let units = inputs.text("units")?;
        let albumin = inputs.number_in("albumin", 0.5, 100.0)?;
        let bilirubin = inputs.number_in("bilirubin", 0.05, 1000.0)?;

        let (alb_gl, bili_umoll) = match units {
            "si" => (albumin, bilirubin),
            "us" => (albumin * ALB_GDL_TO_GL, bilirubin * BILI_MGDL_TO_UMOLL),
            other => {
                return Err(InputError::InvalidValue {
                    field: "units".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        };

        let score = bili_umoll.log10() * 0.66 + alb_gl * -0.0852;
        let (grade, interpretation, severity) = if score <= GRADE1_MAX {
            (1, "Best liver function - well-compensated", Severity::Success)
        } else if score <= GRADE2_MAX {
            (
                2,
                "Intermediate liver function - moderately compensated",
                Severity::Warning,
            )
        } else {
            (3, "Worst liver function - poorly compensated", Severity::Danger)
        };

        Ok(Output::new()
            .push("ALBI score", format!("{score:.2}"))
            .push("ALBI grade", grade.to_string())
            .note("Interpretation", interpretation)
            .with_severity(severity))
    }
}
