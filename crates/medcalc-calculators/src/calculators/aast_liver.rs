use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;
use crate::calculators::grade_roman;

/// AAST liver injury scale, 2018 revision.
///
/// Hematoma, laceration, and vascular findings are graded independently and
/// the reported grade is the maximum across them. Multiple injuries advance
/// the grade by one, up to grade III.
pub struct AastLiver;

fn hematoma_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Subcapsular, <10% surface area
        "subcapsular_lt10" => 1,
        // Subcapsular 10-50% surface area; intraparenchymal <10 cm diameter
        "subcapsular_10_50" | "intraparenchymal_lt10cm" => 2,
        // Subcapsular >50% or ruptured; intraparenchymal >10 cm
        "subcapsular_gt50" | "ruptured" | "intraparenchymal_gt10cm" => 3,
        other => {
            return Err(InputError::InvalidValue {
                field: "liver_hematoma".to_string(),
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
        // 1-3 cm parenchymal depth, <=10 cm length
        "depth_1_3cm" => 2,
        // >3 cm parenchymal depth
        "depth_gt3cm" => 3,
        // Parenchymal disruption of 25-75% of a hepatic lobe
        "disruption_25_75" => 4,
        // Parenchymal disruption of >75% of a hepatic lobe
        "disruption_gt75" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "liver_laceration".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn vascular_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Active bleeding contained within liver parenchyma
        "contained_bleeding" => 3,
        // Active bleeding extending beyond the liver into the peritoneum
        "peritoneal_bleeding" => 4,
        // Juxtahepatic venous injury (retrohepatic cava, central hepatic veins)
        "juxtahepatic_venous" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "liver_vascular".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

impl Calculator for AastLiver {
    fn id(&self) -> &str {
        "aast_liver"
    }

    fn name(&self) -> &str {
        "AAST Liver Injury Grade (2018)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "liver_hematoma",
                    "Hematoma",
                    &[
                        ("none", "None"),
                        ("subcapsular_lt10", "Subcapsular, <10% surface area"),
                        ("subcapsular_10_50", "Subcapsular, 10-50% surface area"),
                        ("intraparenchymal_lt10cm", "Intraparenchymal, <10 cm diameter"),
                        ("subcapsular_gt50", "Subcapsular, >50% surface area"),
                        ("ruptured", "Ruptured subcapsular or parenchymal hematoma"),
                        ("intraparenchymal_gt10cm", "Intraparenchymal, >10 cm"),
                    ],
                ),
                FieldDescriptor::radio(
                    "liver_laceration",
                    "Laceration",
                    &[
                        ("none", "None"),
                        ("capsular_lt1cm", "Capsular tear, <1 cm parenchymal depth"),
                        ("depth_1_3cm", "1-3 cm parenchymal depth, \u{2264}10 cm length"),
                        ("depth_gt3cm", ">3 cm parenchymal depth"),
                        ("disruption_25_75", "Parenchymal disruption, 25-75% of hepatic lobe"),
                        ("disruption_gt75", "Parenchymal disruption, >75% of hepatic lobe"),
                    ],
                ),
                FieldDescriptor::radio(
                    "liver_vascular",
                    "Vascular injury",
                    &[
                        ("none", "None"),
                        ("contained_bleeding", "Active bleeding contained within parenchyma"),
                        ("peritoneal_bleeding", "Active bleeding into the peritoneum"),
                        ("juxtahepatic_venous", "Juxtahepatic venous injury"),
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
        let hematoma = hematoma_grade(inputs.opt_text("liver_hematoma").unwrap_or("none"))?;
        let laceration = laceration_grade(inputs.opt_text("liver_laceration").unwrap_or("none"))?;
        let vascular = vascular_grade(inputs.opt_text("liver_vascular").unwrap_or("none"))?;

        let findings = [hematoma, laceration, vascular];
        let selected = findings.iter().filter(|&&g| g > 0).count();
        if selected == 0 {
            return Err(InputError::InvalidValue {
                field: "liver_hematoma".to_string(),
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
                "Consider angiography for active extravasation; nonoperative management if stable",
            ),
            _ => out.warning(
                "Management",
                "High-grade injury: angioembolization or operative management is often required",
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
