use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;
use crate::calculators::grade_roman;

/// AAST spleen injury scale, 2018 revision.
///
/// Same max-across-findings policy as the liver scale: hematoma, laceration,
/// and vascular findings grade independently; multiple injuries advance one
/// grade, up to grade III.
pub struct AastSpleen;

fn hematoma_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Subcapsular, <10% surface area
        "subcapsular_lt10" => 1,
        // Subcapsular 10-50%; intraparenchymal <5 cm
        "subcapsular_10_50" | "intraparenchymal_lt5cm" => 2,
        // Subcapsular >50% or ruptured; intraparenchymal >=5 cm
        "subcapsular_gt50" | "ruptured" | "intraparenchymal_gte5cm" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "spleen_hematoma".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn laceration_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Capsular tear, <1 cm parenchymal depth
        "capsular_lt1cm" => 1,
        // 1-3 cm parenchymal depth
        "depth_1_3cm" => 2,
        // >3 cm parenchymal depth
        "depth_gt3cm" => 3,
        // Involving segmental or hilar vessels with >25% devascularization
        "segmental_devascularization" => 4,
        // Shattered spleen
        "shattered" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "spleen_laceration".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn vascular_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Pseudoaneurysm or AV fistula, or active bleeding confined within
        // the splenic capsule
        "contained_vascular" => 4,
        // Active bleeding extending beyond the spleen into the peritoneum
        "peritoneal_bleeding" => 5,
        // Hilar vascular injury that devascularizes the spleen
        "hilar_devascularized" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "spleen_vascular".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

impl Calculator for AastSpleen {
    fn id(&self) -> &str {
        "aast_spleen"
    }

    fn name(&self) -> &str {
        "AAST Spleen Injury Grade (2018)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "spleen_hematoma",
                    "Hematoma",
                    &[
                        ("none", "None"),
                        ("subcapsular_lt10", "Subcapsular, <10% surface area"),
                        ("subcapsular_10_50", "Subcapsular, 10-50% surface area"),
                        ("intraparenchymal_lt5cm", "Intraparenchymal, <5 cm"),
                        ("subcapsular_gt50", "Subcapsular, >50% surface area"),
                        ("ruptured", "Ruptured subcapsular or parenchymal hematoma"),
                        ("intraparenchymal_gte5cm", "Intraparenchymal, \u{2265}5 cm"),
                    ],
                ),
                FieldDescriptor::radio(
                    "spleen_laceration",
                    "Laceration",
                    &[
                        ("none", "None"),
                        ("capsular_lt1cm", "Capsular tear, <1 cm parenchymal depth"),
                        ("depth_1_3cm", "1-3 cm parenchymal depth"),
                        ("depth_gt3cm", ">3 cm parenchymal depth"),
                        (
                            "segmental_devascularization",
                            "Involving segmental/hilar vessels, >25% devascularization",
                        ),
                        ("shattered", "Shattered spleen"),
                    ],
                ),
                FieldDescriptor::radio(
                    "spleen_vascular",
                    "Vascular injury",
                    &[
                        ("none", "None"),
                        (
                            "contained_vascular",
                            "Pseudoaneurysm/AV fistula or bleeding within splenic capsule",
                        ),
                        ("peritoneal_bleeding", "Active bleeding into the peritoneum"),
                        ("hilar_devascularized", "Hilar injury with devascularized spleen"),
                    ],
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Kozar RA, Crandall M, Shanmuganathan K, et al. Organ injury scaling 2018 update: spleen, liver, and kidney. J Trauma Acute Care Surg. 2018;85(6):1119-1122.",
                "https://doi.org/10.1097/TA.0000000000002058",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let hematoma = hematoma_grade(inputs.opt_text("spleen_hematoma").unwrap_or("none"))?;
        let laceration = laceration_grade(inputs.opt_text("spleen_laceration").unwrap_or("none"))?;
        let vascular = vascular_grade(inputs.opt_text("spleen_vascular").unwrap_or("none"))?;

        let findings = [hematoma, laceration, vascular];
        let selected = findings.iter().filter(|&&g| g > 0).count();
        if selected == 0 {
            return Err(InputError::InvalidValue {
                field: "spleen_hematoma".to_string(),
                message: "select at least one injury finding".to_string(),
            });
        }

        let max = *findings.iter().max().unwrap_or(&0);
        // Advance one grade for multiple injuries, up to grade III.
        let advanced = selected >= 2 && max < 3;
        let grade = if advanced { max + 1 } else { max };

        let mut out = Output::new().push("AAST grade", grade_roman(grade));
        if hematoma > 0 {
            out = out.push("Hematoma grade", grade_roman(hematoma));
        }
        if laceration > 0 {
            out = out.push("Laceration grade", grade_roman(laceration));
        }
        if vascular > 0 {
            out = out.push("Vascular grade", grade_roman(vascular));
        }
        if advanced {
            out = out.note(
                "Multiple injuries",
                "Grade advanced by one for multiple injuries (rule applies up to grade III)",
            );
        }
        out = match grade {
            1 | 2 => out.note(
                "Management",
                "Nonoperative management is typical for hemodynamically stable patients",
            ),
            3 => out.note(
                "Management",
                "Consider splenic artery angiography; nonoperative management if stable",
            ),
            _ => out.warning(
                "Management",
                "High-grade injury: angioembolization or splenectomy is often required",
            ),
        };
        let severity = match grade {
            1 | 2 => Severity::Info,
            3 => Severity::Warning,
            _ => Severity::Danger,
        };
        Ok(out.with_severity(severity))
    }
}
