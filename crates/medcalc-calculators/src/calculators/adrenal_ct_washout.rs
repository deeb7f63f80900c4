use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Adrenal CT washout from triphasic attenuation measurements.
///
/// Absolute washout = (portal - delayed) / (portal - unenhanced) x 100;
/// relative washout = (portal - delayed) / portal x 100. Absolute >=60%
/// with relative >=40% suggests a benign adenoma.
pub struct AdrenalCtWashout;

const HU_MIN: f64 = -100.0;
const HU_MAX: f64 = 300.0;

impl Calculator for AdrenalCtWashout {
    fn id(&self) -> &str {
        "adrenal_ct_washout"
    }

    fn name(&self) -> &str {
        "Adrenal CT Washout"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number(
                    "unenhanced_hu",
                    "Unenhanced attenuation",
                    "HU",
                    HU_MIN,
                    HU_MAX,
                ),
                FieldDescriptor::number(
                    "portal_hu",
                    "Portal venous attenuation",
                    "HU",
                    HU_MIN,
                    HU_MAX,
                ),
                FieldDescriptor::number(
                    "delayed_hu",
                    "15-minute delayed attenuation",
                    "HU",
                    HU_MIN,
                    HU_MAX,
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Caoili EM, Korobkin M, Francis IR, et al. Adrenal masses: characterization with combined unenhanced and delayed enhanced CT. Radiology. 2002;222(3):629-633.",
                "https://doi.org/10.1148/radiol.2223010766",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let unenhanced = inputs.number_in("unenhanced_hu", HU_MIN, HU_MAX)?;
        let portal = inputs.number_in("portal_hu", HU_MIN, HU_MAX)?;
        let delayed = inputs.number_in("delayed_hu", HU_MIN, HU_MAX)?;

        if portal <= unenhanced {
            return Err(InputError::InvalidValue {
                field: "portal_hu".to_string(),
                message: "portal venous attenuation must exceed the unenhanced value".to_string(),
            });
        }
        if portal == 0.0 {
            return Err(InputError::InvalidValue {
                field: "portal_hu".to_string(),
                message: "portal venous attenuation must be nonzero".to_string(),
            });
        }

        let absolute = (portal - delayed) / (portal - unenhanced) * 100.0;
        let relative = (portal - delayed) / portal * 100.0;
        let adenoma = absolute >= 60.0 && relative >= 40.0;

        let (interpretation, severity) = if adenoma {
            ("Suggests benign adenoma", Severity::Success)
        } else {
            ("Does not meet criteria for adenoma", Severity::Info)
        };

        Ok(Output::new()
            .push("Absolute washout", format!("{absolute:.1}%"))
            .push("Relative washout", format!("{relative:.1}%"))
            .push("Interpretation", interpretation)
            .with_severity(severity))
    }
}
