use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;
use crate::calculators::grade_roman;

/// AAST kidney injury scale, 2018 revision.
///
/// Contusion/hematoma, laceration, and vascular findings grade independently;
/// the reported grade is the maximum. Multiple injuries advance one grade, up
/// to grade III.
pub struct AastKidney;

fn hematoma_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Contusion or nonexpanding subcapsular hematoma, no laceration
        "contusion" | "subcapsular" => 1,
        // Perirenal hematoma confined to Gerota fascia
        "perirenal" => 2,
        other => {
            return Err(InputError::InvalidValue {
                field: "kidney_hematoma".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn laceration_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // <=1 cm parenchymal depth, no urinary extravasation
        "depth_lte1cm" => 2,
        // >1 cm depth, no collecting-system rupture or urinary extravasation
        "depth_gt1cm" => 3,
        // Extending into the collecting system with urinary extravasation
        "collecting_system" => 4,
        // Renal pelvis laceration or complete ureteropelvic disruption
        "ureteropelvic_disruption" => 4,
        // Shattered kidney with loss of identifiable anatomy
        "shattered" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "kidney_laceration".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

fn vascular_grade(value: &str) -> Result<u8, InputError> {
    Ok(match value {
        "none" => 0,
        // Segmental renal artery or vein injury
        "segmental" => 4,
        // Renal infarction without active bleeding
        "infarction" => 4,
        // Main renal artery or vein laceration or avulsion
        "main_vessel" => 5,
        // Devascularized kidney with active bleeding
        "devascularized_bleeding" => 5,
        other => {
            return Err(InputError::InvalidValue {
                field: "kidney_vascular".to_string(),
                message: format!("unknown option '{other}'"),
            });
        }
    })
}

impl Calculator for AastKidney {
    fn id(&self) -> &str {
        "aast_kidney"
    }

    fn name(&self) -> &str {
        "AAST Kidney Injury Grade (2018)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "kidney_hematoma",
                    "Contusion / hematoma",
                    &[
                        ("none", "None"),
                        ("contusion", "Renal contusion"),
                        ("subcapsular", "Nonexpanding subcapsular hematoma"),
                        ("perirenal", "Perirenal hematoma confined to Gerota fascia"),
                    ],
                ),
                FieldDescriptor::radio(
                    "kidney_laceration",
                    "Laceration",
                    &[
                        ("none", "None"),
                        ("depth_lte1cm", "\u{2264}1 cm depth, no urinary extravasation"),
                        ("depth_gt1cm", ">1 cm depth, no collecting-system rupture"),
                        (
                            "collecting_system",
                            "Into collecting system with urinary extravasation",
                        ),
                        (
                            "ureteropelvic_disruption",
                            "Renal pelvis laceration / ureteropelvic disruption",
                        ),
                        ("shattered", "Shattered kidney"),
                    ],
                ),
                FieldDescriptor::radio(
                    "kidney_vascular",
                    "Vascular injury",
                    &[
                        ("none", "None"),
                        ("segmental", "Segmental renal artery or vein injury"),
                        ("infarction", "Renal infarction without active bleeding"),
                        ("main_vessel", "Main renal artery/vein laceration or avulsion"),
                        (
                            "devascularized_bleeding",
                            "Devascularized kidney with active bleeding",
                        ),
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
        let hematoma = hematoma_grade(inputs.opt_text("kidney_hematoma").unwrap_or("none"))?;
        let laceration = laceration_grade(inputs.opt_text("kidney_laceration").unwrap_or("none"))?;
        let vascular = vascular_grade(inputs.opt_text("kidney_vascular").unwrap_or("none"))?;

        let findings = [hematoma, laceration, vascular];
        let selected = findings.iter().filter(|&&g| g > 0).count();
        if selected == 0 {
            return Err(InputError::InvalidValue {
                field: "kidney_hematoma".to_string(),
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
                "Nonoperative management with observation is typical",
            ),
            3 => out.note(
                "Management",
                "Nonoperative management if stable; consider angiography for extravasation",
            ),
            _ => out.warning(
                "Management",
                "High-grade injury: angioembolization, urinary diversion, or surgery may be required",
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
