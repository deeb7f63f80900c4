use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Prostate volume by the ellipsoid formula, with PSA density.
///
/// Volume (mL) = length x height x width x 0.52; PSA density = PSA /
/// volume. A density >=0.15 ng/mL/mL raises concern for clinically
/// significant cancer.
pub struct ProstateVolume;

const ELLIPSOID_FACTOR: f64 = 0.52;
const PSAD_ELEVATED: f64 = 0.15;
const DIM_MIN_CM: f64 = 0.5;
const DIM_MAX_CM: f64 = 15.0;

impl Calculator for ProstateVolume {
    fn id(&self) -> &str {
        "prostate_volume"
    }

    fn name(&self) -> &str {
        "Prostate Volume & PSA Density"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number("length", "Length (craniocaudal)", "cm", DIM_MIN_CM, DIM_MAX_CM),
                FieldDescriptor::number("height", "Height (anteroposterior)", "cm", DIM_MIN_CM, DIM_MAX_CM),
                FieldDescriptor::number("width", "Width (transverse)", "cm", DIM_MIN_CM, DIM_MAX_CM),
                FieldDescriptor::number("psa", "Serum PSA", "ng/mL", 0.0, 500.0),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Benson MC, Whang IS, Pantuck A, et al. Prostate specific antigen density: a means of distinguishing benign prostatic hypertrophy and prostate cancer. J Urol. 1992;147(3 Pt 2):815-816.",
                "https://doi.org/10.1016/s0022-5347(17)37393-7",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let length = inputs.number_in("length", DIM_MIN_CM, DIM_MAX_CM)?;
        let height = inputs.number_in("height", DIM_MIN_CM, DIM_MAX_CM)?;
        let width = inputs.number_in("width", DIM_MIN_CM, DIM_MAX_CM)?;
        let psa = inputs.number_in("psa", 0.0, 500.0)?;

        let volume = length * height * width * ELLIPSOID_FACTOR;
        let density = psa / volume;

        let (interpretation, severity) = if density < PSAD_ELEVATED {
            ("Normal PSA density", Severity::Success)
        } else {
            ("Elevated PSA density", Severity::Warning)
        };

        Ok(Output::new()
            .push("Prostate volume", format!("{volume:.2} mL"))
            .push("PSA density", format!("{density:.3} ng/mL/mL"))
            .push("Interpretation", interpretation)
            .with_severity(severity))
    }
}
