use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Adrenal vein sampling interpretation for primary aldosteronism.
///
/// Staged: the selectivity index (adrenal / peripheral cortisol) must confirm
/// cannulation of both adrenal veins before the lateralization index is
/// computed. A failed gate names the failed side and stops — lateralization
/// is never reported from invalid intermediates.
pub struct Avs;

// Selectivity index cutoffs.
const SI_STIMULATED: f64 = 5.0;
const SI_UNSTIMULATED: f64 = 2.0;

// Lateralization index cutoffs: >=4 unilateral, <3 bilateral.
const LI_UNILATERAL: f64 = 4.0;
const LI_BILATERAL: f64 = 3.0;

impl Calculator for Avs {
    fn id(&self) -> &str {
        "avs"
    }

    fn name(&self) -> &str {
        "Adrenal Vein Sampling (AVS)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::radio(
                    "stimulation",
                    "Cosyntropin stimulation",
                    &[
                        ("cosyntropin", "Cosyntropin-stimulated"),
                        ("unstimulated", "Unstimulated"),
                    ],
                ),
                FieldDescriptor::number(
                    "peripheral_aldosterone",
                    "Peripheral aldosterone",
                    "ng/dL",
                    0.1,
                    100000.0,
                ),
                FieldDescriptor::number(
                    "peripheral_cortisol",
                    "Peripheral cortisol",
                    "\u{b5}g/dL",
                    0.1,
                    10000.0,
                ),
                FieldDescriptor::number(
                    "left_aldosterone",
                    "Left adrenal vein aldosterone",
                    "ng/dL",
                    0.1,
                    100000.0,
                ),
                FieldDescriptor::number(
                    "left_cortisol",
                    "Left adrenal vein cortisol",
                    "\u{b5}g/dL",
                    0.1,
                    10000.0,
                ),
                FieldDescriptor::number(
                    "right_aldosterone",
                    "Right adrenal vein aldosterone",
                    "ng/dL",
                    0.1,
                    100000.0,
                ),
                FieldDescriptor::number(
                    "right_cortisol",
                    "Right adrenal vein cortisol",
                    "\u{b5}g/dL",
                    0.1,
                    10000.0,
                ),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Funder JW, Carey RM, Mantero F, et al. The management of primary aldosteronism: case detection, diagnosis, and treatment: an Endocrine Society clinical practice guideline. J Clin Endocrinol Metab. 2016;101(5):1889-1916.",
                "https://doi.org/10.1210/jc.2015-4061",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let stimulated = match inputs.text("stimulation")? {
            "cosyntropin" => true,
            "unstimulated" => false,
            other => {
                return Err(InputError::InvalidValue {
                    field: "stimulation".to_string(),
                    message: format!("unknown option '{other}'"),
                });
            }
        };
        let p_aldo = inputs.number_in("peripheral_aldosterone", 0.1, 100000.0)?;
        let p_cort = inputs.number_in("peripheral_cortisol", 0.1, 10000.0)?;
        let l_aldo = inputs.number_in("left_aldosterone", 0.1, 100000.0)?;
        let l_cort = inputs.number_in("left_cortisol", 0.1, 10000.0)?;
        let r_aldo = inputs.number_in("right_aldosterone", 0.1, 100000.0)?;
        let r_cort = inputs.number_in("right_cortisol", 0.1, 10000.0)?;

        // Stage 1: cannulation gate.
        let si_cutoff = if stimulated { SI_STIMULATED } else { SI_UNSTIMULATED };
        let si_left = l_cort / p_cort;
        let si_right = r_cort / p_cort;
        let left_ok = si_left >= si_cutoff;
        let right_ok = si_right >= si_cutoff;

        let mut out = Output::new()
            .push("Selectivity index (left)", format!("{si_left:.1}"))
            .push("Selectivity index (right)", format!("{si_right:.1}"))
            .push(
                "Selectivity cutoff",
                format!(
                    "\u{2265}{si_cutoff} ({})",
                    if stimulated { "stimulated" } else { "unstimulated" }
                ),
            );

        if !left_ok || !right_ok {
            let failed = match (left_ok, right_ok) {
                (false, false) => "both adrenal veins",
                (false, true) => "left adrenal vein",
                _ => "right adrenal vein",
            };
            return Ok(out
                .push("Cannulation", format!("FAILED - {failed}"))
                .warning(
                    "Lateralization",
                    "Not interpretable: selectivity gate failed; consider repeat sampling",
                )
                .with_severity(Severity::Warning));
        }
        out = out.push("Cannulation", "Successful bilaterally");

        // Stage 2: lateralization from cortisol-corrected aldosterone.
        let ac_left = l_aldo / l_cort;
        let ac_right = r_aldo / r_cort;
        let ac_peripheral = p_aldo / p_cort;
        let (dominant, dominant_ac, nondominant_ac) = if ac_left >= ac_right {
            ("left", ac_left, ac_right)
        } else {
            ("right", ac_right, ac_left)
        };
        let li = dominant_ac / nondominant_ac;

        let (interpretation, severity) = if li >= LI_UNILATERAL {
            (
                format!("Unilateral aldosterone excess, lateralizing to the {dominant}"),
                Severity::Info,
            )
        } else if li < LI_BILATERAL {
            (
                "Bilateral aldosterone secretion".to_string(),
                Severity::Success,
            )
        } else {
            (
                "Indeterminate (lateralization index 3-4)".to_string(),
                Severity::Warning,
            )
        };

        out = out
            .push("A/C ratio (left)", format!("{ac_left:.2}"))
            .push("A/C ratio (right)", format!("{ac_right:.2}"))
            .push("A/C ratio (peripheral)", format!("{ac_peripheral:.2}"))
            .push("Lateralization index", format!("{li:.1}"))
            .push("Interpretation", interpretation);
        if li >= LI_UNILATERAL && nondominant_ac < ac_peripheral {
            out = out.note(
                "Contralateral suppression",
                "Present (nondominant A/C below peripheral A/C)",
            );
        }
        Ok(out.with_severity(severity))
    }
}
