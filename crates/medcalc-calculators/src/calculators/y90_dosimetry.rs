use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Y-90 radioembolization activity planning.
///
/// MIRD single-compartment: activity (GBq) = [target dose (Gy) x
/// perfused mass (kg) x (1 - lung shunt fraction)] / 49.67, with mass
/// from volume at 1.0 g/mL. The partition model additionally takes the
/// tumor volume and tumor-to-normal uptake ratio and reports the tumor
/// dose alongside the same prescribed activity. Lung dose assumes a
/// 1 kg lung mass; >20 Gy in a single session warrants caution and
/// >30 Gy is contraindicated.
pub struct Y90Dosimetry;

const GY_KG_PER_GBQ: f64 = 49.67;
const LUNG_MASS_KG: f64 = 1.0;
const MCI_PER_GBQ: f64 = 27.027;

impl Calculator for Y90Dosimetry {
    fn id(&self) -> &str {
        "y90_dosimetry"
    }

    fn name(&self) -> &str {
        "Y-90 Dosimetry"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "model",
                    "Dosimetry model",
                    &[("mird", "MIRD (single compartment)"), ("partition", "Partition")],
                ),
                FieldDescriptor::number("target_dose", "Desired absorbed dose", "Gy", 1.0, 1000.0),
                FieldDescriptor::number(
                    "liver_volume",
                    "Target liver volume",
                    "mL",
                    10.0,
                    5000.0,
                ),
                FieldDescriptor::number(
                    "lung_shunt_fraction",
                    "Lung shunt fraction",
                    "%",
                    0.0,
                    50.0,
                ),
                FieldDescriptor::number("tumor_volume", "Tumor volume", "mL", 1.0, 5000.0)
                    .show_if("model", &["partition"]),
                FieldDescriptor::number(
                    "tn_ratio",
                    "Tumor-to-normal uptake ratio",
                    "",
                    0.1,
                    100.0,
                )
                .show_if("model", &["partition"]),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![
                Reference::new(
                    "Salem R, Thurston KG. Radioembolization with 90-yttrium microspheres: a state-of-the-art brachytherapy treatment for primary and secondary liver malignancies. J Vasc Interv Radiol. 2006;17(8):1251-1278.",
                    "https://doi.org/10.1097/01.RVI.0000233785.75257.9A",
                ),
                Reference::new(
                    "TheraSphere Yttrium-90 Glass Microspheres package insert. Boston Scientific.",
                    "https://www.bostonscientific.com/en-US/products/cancer-therapies/therasphere-y90-glass-microspheres.html",
                ),
            ]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let model = inputs.text("model")?;
        let target_dose = inputs.number_in("target_dose", 1.0, 1000.0)?;
        let liver_volume = inputs.number_in("liver_volume", 10.0, 5000.0)?;
        let shunt_pct = inputs.number_in("lung_shunt_fraction", 0.0, 50.0)?;

        // Tissue density taken as 1.0 g/mL.
        let liver_mass_kg = liver_volume / 1000.0;
        let lsf = shunt_pct / 100.0;
        let activity_gbq = target_dose * liver_mass_kg * (1.0 - lsf) / GY_KG_PER_GBQ;
        let activity_mci = activity_gbq * MCI_PER_GBQ;
        let lung_dose_gy = GY_KG_PER_GBQ * activity_gbq * lsf / LUNG_MASS_KG;

        let mut out = Output::new();
        match model {
            "mird" => {
                out = out.push("Model", "MIRD");
            }
            "partition" => {
                let condition = "the partition model is selected";
                let tumor_volume = inputs.number_when("tumor_volume", condition, 1.0, 5000.0)?;
                let tn_ratio = inputs.number_when("tn_ratio", condition, 0.1, 100.0)?;
                out = out
                    .push("Model", "Partition")
                    .push("Tumor volume", format!("{tumor_volume:.0} mL"))
                    .push("Tumor-to-normal ratio", format!("{tn_ratio:.1}"))
                    .push("Tumor dose", format!("{target_dose:.0} Gy"));
            }
            other => {
                return Err(InputError::InvalidValue {
                    field: "model".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        }

        out = out
            .push("Liver mass", format!("{liver_mass_kg:.2} kg"))
            .push("Prescribed activity", format!("{activity_gbq:.2} GBq"))
            .push("Prescribed activity (mCi)", format!("{activity_mci:.1} mCi"))
            .push("Estimated lung dose", format!("{lung_dose_gy:.1} Gy"));

        let severity = if lung_dose_gy > 30.0 {
            out = out.warning(
                "Lung dose",
                "Exceeds 30 Gy single-session limit: treatment contraindicated at this activity",
            );
            Severity::Danger
        } else if lung_dose_gy > 20.0 {
            out = out.warning(
                "Lung dose",
                "Exceeds 20 Gy: consider dose reduction or shunt-reduction techniques",
            );
            Severity::Warning
        } else {
            Severity::Success
        };
        if shunt_pct > 20.0 {
            out = out.note(
                "Lung shunt fraction",
                "High shunt fraction; verify with repeat MAA imaging",
            );
        }
        Ok(out.with_severity(severity))
    }
}
