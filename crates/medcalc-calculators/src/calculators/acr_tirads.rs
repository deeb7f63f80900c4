use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// ACR TI-RADS thyroid nodule risk stratification.
///
/// Points sum across five ultrasound categories (echogenic foci are
/// multi-select and additive). Totals map to TR1-TR5 with size-based FNA and
/// follow-up thresholds per level.
pub struct AcrTirads;

fn composition_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "cystic" | "spongiform" => 0,
        "mixed" => 1,
        "solid" => 2,
        other => {
            return Err(InputError::InvalidValue {
                field: "composition".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn echogenicity_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "anechoic" => 0,
        "hyper_iso" => 1,
        "hypoechoic" => 2,
        "very_hypoechoic" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "echogenicity".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn shape_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "wider_than_tall" => 0,
        "taller_than_wide" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "shape".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn margin_points(value: &str) -> Result<u32, InputError> {
    Ok(match value {
        "smooth" | "ill_defined" => 0,
        "lobulated_irregular" => 2,
        "extrathyroidal_extension" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "margin".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

// Echogenic foci are checkboxes; points are additive.
const FOCI: &[(&str, &str, u32)] = &[
    ("macrocalcifications", "Macrocalcifications", 1),
    ("peripheral_rim", "Peripheral (rim) calcifications", 2),
    ("punctate_foci", "Punctate echogenic foci", 3),
];

impl Calculator for AcrTirads {
    fn id(&self) -> &str {
        "acr_tirads"
    }

    fn name(&self) -> &str {
        "ACR TI-RADS"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            let mut fields = vec![
                FieldDescriptor::radio(
                    "composition",
                    "Composition",
                    &[
                        ("cystic", "Cystic or almost completely cystic"),
                        ("spongiform", "Spongiform"),
                        ("mixed", "Mixed cystic and solid"),
                        ("solid", "Solid or almost completely solid"),
                    ],
                ),
                FieldDescriptor::radio(
                    "echogenicity",
                    "Echogenicity",
                    &[
                        ("anechoic", "Anechoic"),
                        ("hyper_iso", "Hyperechoic or isoechoic"),
                        ("hypoechoic", "Hypoechoic"),
                        ("very_hypoechoic", "Very hypoechoic"),
                    ],
                ),
                FieldDescriptor::radio(
                    "shape",
                    "Shape",
                    &[
                        ("wider_than_tall", "Wider-than-tall"),
                        ("taller_than_wide", "Taller-than-wide"),
                    ],
                ),
                FieldDescriptor::radio(
                    "margin",
                    "Margin",
                    &[
                        ("smooth", "Smooth"),
                        ("ill_defined", "Ill-defined"),
                        ("lobulated_irregular", "Lobulated or irregular"),
                        ("extrathyroidal_extension", "Extra-thyroidal extension"),
                    ],
                ),
            ];
            for (id, label, _) in FOCI {
                fields.push(FieldDescriptor::checkbox(id, label));
            }
            fields.push(FieldDescriptor::number(
                "nodule_size",
                "Maximum nodule diameter (optional)",
                "cm",
                0.1,
                15.0,
            ));
            fields
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Tessler FN, Middleton WD, Grant EG, et al. ACR Thyroid Imaging, Reporting and Data System (TI-RADS): White Paper of the ACR TI-RADS Committee. J Am Coll Radiol. 2017;14(5):587-595.",
                "https://doi.org/10.1016/j.jacr.2017.01.046",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let composition = composition_points(inputs.text("composition")?)?;
        let echogenicity = echogenicity_points(inputs.text("echogenicity")?)?;
        let shape = shape_points(inputs.text("shape")?)?;
        let margin = margin_points(inputs.text("margin")?)?;
        let mut foci = 0;
        for (id, _, points) in FOCI {
            if inputs.flag(id)? {
                foci += points;
            }
        }
        let size = inputs.opt_number("nodule_size")?;
        if let Some(s) = size
            && !(0.1..=15.0).contains(&s)
        {
            return Err(InputError::OutOfRange {
                field: "nodule_size".to_string(),
                value: s,
                min: 0.1,
                max: 15.0,
            });
        }

        let total = composition + echogenicity + shape + margin + foci;

        // TR level and size thresholds (cm): (FNA, follow-up).
        let (level, descriptor, thresholds, severity) = match total {
            0 => ("TR1", "Benign", None, Severity::Success),
            1 | 2 => ("TR2", "Not suspicious", None, Severity::Success),
            3 => ("TR3", "Mildly suspicious", Some((2.5, 1.5)), Severity::Info),
            4..=6 => ("TR4", "Moderately suspicious", Some((1.5, 1.0)), Severity::Warning),
            _ => ("TR5", "Highly suspicious", Some((1.0, 0.5)), Severity::Danger),
        };

        let mut out = Output::new()
            .push("Composition points", composition.to_string())
            .push("Echogenicity points", echogenicity.to_string())
            .push("Shape points", shape.to_string())
            .push("Margin points", margin.to_string())
            .push("Echogenic foci points", foci.to_string())
            .push("Total points", total.to_string())
            .push("TI-RADS level", level)
            .note("Descriptor", descriptor);

        out = match (thresholds, size) {
            (None, _) => out.note("Recommendation", "No FNA or follow-up required"),
            (Some((fna, follow)), Some(s)) => {
                let rec = if s >= fna {
                    "FNA recommended"
                } else if s >= follow {
                    "Follow-up ultrasound recommended"
                } else {
                    "No FNA or follow-up at this size"
                };
                out.note("Recommendation", rec)
            }
            (Some((fna, follow)), None) => out.note(
                "Recommendation",
                format!("FNA if \u{2265}{fna} cm; follow-up ultrasound if \u{2265}{follow} cm"),
            ),
        };

        Ok(out.with_severity(severity))
    }
}
