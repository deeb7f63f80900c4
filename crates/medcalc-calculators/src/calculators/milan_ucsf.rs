use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Milan and UCSF criteria for liver transplant eligibility in HCC.
///
/// Milan: single tumor <=5 cm, or 2-3 tumors each <=3 cm.
/// UCSF: single tumor <=6.5 cm, or 2-3 tumors each <=4.5 cm with
/// total diameter <=8 cm. Both require no macrovascular invasion and no
/// extrahepatic disease. Tumor diameters beyond the first become required as
/// the tumor count rises.
pub struct MilanUcsf;

fn yes_no(inputs: &Inputs, id: &str) -> Result<bool, InputError> {
    match inputs.text(id)? {
        "yes" => Ok(true),
        "no" => Ok(false),
        other => Err(InputError::InvalidValue {
            field: id.to_string(),
            message: format!("unknown option '{other}'"),
        }),
    }
}

impl Calculator for MilanUcsf {
    fn id(&self) -> &str {
        "milan_ucsf"
    }

    fn name(&self) -> &str {
        "Milan / UCSF Transplant Criteria"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "tumor_count",
                    "Number of tumors",
                    &[("1", "1"), ("2", "2"), ("3", "3 or more")],
                ),
                FieldDescriptor::number("tumor1_size", "Tumor 1 diameter", "cm", 0.1, 20.0),
                FieldDescriptor::number("tumor2_size", "Tumor 2 diameter", "cm", 0.1, 20.0)
                    .show_if("tumor_count", &["2", "3"]),
                FieldDescriptor::number("tumor3_size", "Tumor 3 diameter", "cm", 0.1, 20.0)
                    .show_if("tumor_count", &["3"]),
                FieldDescriptor::radio(
                    "macrovascular_invasion",
                    "Macrovascular invasion",
                    &[("no", "No"), ("yes", "Yes")],
                ),
                FieldDescriptor::radio(
                    "extrahepatic_disease",
                    "Extrahepatic disease",
                    &[("no", "No"), ("yes", "Yes")],
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![
                Reference::new(
                    "Mazzaferro V, Regalia E, Doci R, et al. Liver transplantation for the treatment of small hepatocellular carcinomas in patients with cirrhosis. N Engl J Med. 1996;334(11):693-699.",
                    "https://doi.org/10.1056/NEJM199603143341104",
                ),
                Reference::new(
                    "Yao FY, Ferrell L, Bass NM, et al. Liver transplantation for hepatocellular carcinoma: expansion of the tumor size limits does not adversely impact survival. Hepatology. 2001;33(6):1394-1403.",
                    "https://doi.org/10.1053/jhep.2001.24563",
                ),
            ]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let count: u32 = match inputs.text("tumor_count")? {
            "1" => 1,
            "2" => 2,
            "3" => 3,
            other => {
                return Err(InputError::InvalidValue {
                    field: "tumor_count".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        };

        let mut sizes = vec![inputs.number_in("tumor1_size", 0.1, 20.0)?];
        if count >= 2 {
            sizes.push(inputs.number_when(
                "tumor2_size",
                "tumor count is 2 or more",
                0.1,
                20.0,
            )?);
        }
        if count >= 3 {
            sizes.push(inputs.number_when("tumor3_size", "tumor count is 3", 0.1, 20.0)?);
        }

        let invasion = yes_no(inputs, "macrovascular_invasion")?;
        let extrahepatic = yes_no(inputs, "extrahepatic_disease")?;

        let largest = sizes.iter().cloned().fold(f64::MIN, f64::max);
        let total: f64 = sizes.iter().sum();
        let clean = !invasion && !extrahepatic;

        let milan = clean
            && match count {
                1 => largest <= 5.0,
                _ => sizes.iter().all(|&s| s <= 3.0),
            };
        let ucsf = clean
            && match count {
                1 => largest <= 6.5,
                _ => sizes.iter().all(|&s| s <= 4.5) && total <= 8.0,
            };

        let (eligibility, severity) = if milan {
            ("ELIGIBLE - Meets Milan Criteria (standard)", Severity::Success)
        } else if ucsf {
            ("ELIGIBLE - Meets UCSF Criteria (extended)", Severity::Info)
        } else {
            ("NOT ELIGIBLE - Outside Milan and UCSF criteria", Severity::Danger)
        };

        let within = |ok: bool| if ok { "WITHIN CRITERIA" } else { "OUTSIDE CRITERIA" };
        let mut out = Output::new()
            .push("Milan criteria", within(milan))
            .push("UCSF criteria", within(ucsf))
            .push("Eligibility", eligibility);
        if count > 1 {
            out = out.push("Total tumor diameter", format!("{total:.1} cm"));
        }
        if invasion {
            out = out.warning("Macrovascular invasion", "Excludes transplant eligibility");
        }
        if extrahepatic {
            out = out.warning("Extrahepatic disease", "Excludes transplant eligibility");
        }
        if !milan && !ucsf && clean {
            out = out.note(
                "Downstaging",
                "Consider locoregional therapy and reassessment of criteria",
            );
        }
        Ok(out.with_severity(severity))
    }
}
