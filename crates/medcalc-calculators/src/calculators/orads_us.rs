use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// O-RADS US ovarian-adnexal lesion risk stratification.
///
/// The lesion's morphologic category drives the score; size and color
/// Doppler score refine it, and peritoneal findings can override to OR-5.
/// Color score is required only for the categories whose rules branch on it.
pub struct OradsUs;

const COLOR_CATEGORIES: &[&str] = &["multilocular_smooth", "multilocular_solid", "solid_smooth"];

impl Calculator for OradsUs {
    fn id(&self) -> &str {
        "orads_us"
    }

    fn name(&self) -> &str {
        "O-RADS US"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "menopausal_status",
                    "Menopausal status",
                    &[
                        ("premenopausal", "Premenopausal"),
                        ("postmenopausal", "Postmenopausal"),
                    ],
                ),
                FieldDescriptor::radio(
                    "lesion_category",
                    "Lesion category",
                    &[
                        ("follicle", "Simple follicle"),
                        ("corpus_luteum", "Corpus luteum"),
                        ("simple_cyst", "Unilocular simple cyst"),
                        ("unilocular_smooth", "Unilocular non-simple cyst, smooth inner margin"),
                        ("unilocular_irregular", "Unilocular cyst, irregular inner wall"),
                        ("multilocular_smooth", "Multilocular cyst, smooth, no solid component"),
                        ("multilocular_irregular", "Multilocular cyst, irregular wall or septation"),
                        ("unilocular_solid", "Unilocular cyst with solid component"),
                        ("multilocular_solid", "Multilocular cyst with solid component"),
                        ("solid_smooth", "Solid lesion, smooth outer contour"),
                        ("solid_irregular", "Solid lesion, irregular outer contour"),
                    ],
                ),
                FieldDescriptor::number("lesion_size", "Maximum lesion diameter", "cm", 0.1, 30.0),
                FieldDescriptor::select(
                    "color_score",
                    "Color Doppler score",
                    &[
                        ("1", "1 - no flow"),
                        ("2", "2 - minimal flow"),
                        ("3", "3 - moderate flow"),
                        ("4", "4 - very strong flow"),
                    ],
                )
                .show_if("lesion_category", COLOR_CATEGORIES),
                FieldDescriptor::checkbox("ascites", "Ascites"),
                FieldDescriptor::checkbox("peritoneal_nodules", "Peritoneal nodules"),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Andreotti RF, Timmerman D, Strachowski LM, et al. O-RADS US Risk Stratification and Management System. Radiology. 2020;294(1):168-185.",
                "https://doi.org/10.1148/radiol.2019191150",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let premenopausal = match inputs.text("menopausal_status")? {
            "premenopausal" => true,
            "postmenopausal" => false,
            other => {
                return Err(InputError::InvalidValue {
                    field: "menopausal_status".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        };
        let category = inputs.text("lesion_category")?;
        let size = inputs.number_in("lesion_size", 0.1, 30.0)?;
        let color_score = if COLOR_CATEGORIES.contains(&category) {
            let cs = inputs.number_when(
                "color_score",
                "the lesion category branches on color Doppler score",
                1.0,
                4.0,
            )?;
            Some(cs as u32)
        } else {
            None
        };
        let ascites = inputs.flag("ascites")?;
        let peritoneal_nodules = inputs.flag("peritoneal_nodules")?;

        let mut category_score: u32 = match category {
            // Physiologic only when premenopausal and <=3 cm; larger follows
            // the cyst rules.
            "follicle" | "corpus_luteum" => {
                if premenopausal && size <= 3.0 {
                    1
                } else if size < 10.0 {
                    2
                } else {
                    3
                }
            }
            "simple_cyst" | "unilocular_smooth" => {
                if size < 10.0 {
                    2
                } else {
                    3
                }
            }
            "unilocular_irregular" => 4,
            "multilocular_smooth" => match color_score {
                Some(4) => 4,
                _ if size < 10.0 => 3,
                _ => 4,
            },
            "multilocular_irregular" => 4,
            "unilocular_solid" => 4,
            "multilocular_solid" => match color_score {
                Some(1) | Some(2) => 4,
                _ => 5,
            },
            "solid_smooth" => match color_score {
                Some(1) => 3,
                Some(4) => 5,
                _ => 4,
            },
            "solid_irregular" => 5,
            other => {
                return Err(InputError::InvalidValue {
                    field: "lesion_category".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        };

        // Peritoneal findings override upward, never downward.
        let mut overridden = false;
        if peritoneal_nodules || (ascites && category_score >= 3) {
            if category_score < 5 {
                overridden = true;
            }
            category_score = 5;
        }

        let (label, risk, management, severity) = match category_score {
            1 => (
                "O-RADS 1",
                "Normal ovary / physiologic",
                "No follow-up needed",
                Severity::Success,
            ),
            2 => (
                "O-RADS 2",
                "Almost certainly benign (<1% malignancy)",
                "No follow-up, or follow-up per descriptor in select cases",
                Severity::Success,
            ),
            3 => (
                "O-RADS 3",
                "Low risk (1 to <10% malignancy)",
                "Follow-up ultrasound in 8-12 weeks to 1 year, or US specialist",
                Severity::Info,
            ),
            4 => (
                "O-RADS 4",
                "Intermediate risk (10 to <50% malignancy)",
                "MRI or gynecologic-oncology referral",
                Severity::Warning,
            ),
            _ => (
                "O-RADS 5",
                "High risk (\u{2265}50% malignancy)",
                "Gynecologic-oncology referral",
                Severity::Danger,
            ),
        };

        let mut out = Output::new()
            .push("O-RADS category", label)
            .push("Malignancy risk", risk)
            .note("Management", management);
        if let Some(cs) = color_score {
            out = out.push("Color score", cs.to_string());
        }
        if overridden {
            out = out.warning(
                "Peritoneal findings",
                "Category raised to O-RADS 5 for ascites/peritoneal nodules",
            );
        } else if ascites && category_score <= 2 {
            out = out.note(
                "Ascites",
                "Ascites with a benign-appearing lesion: evaluate for non-ovarian causes",
            );
        }
        Ok(out.with_severity(severity))
    }
}
