use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// MELD-Na score for end-stage liver disease mortality risk.
///
/// MELD = 10 x (0.957 ln(Cr) + 0.378 ln(bili) + 1.12 ln(INR)) + 6.43, with
/// each lab floored at 1.0 and creatinine capped at 4.0 (set to 4.0 on
/// dialysis). The sodium correction applies only when MELD > 11, with Na
/// clamped to 125-137. Both scores are rounded and bounded to [6, 40].
pub struct MeldNa;

fn bounded_round(score: f64) -> u32 {
    (score.round().clamp(6.0, 40.0)) as u32
}

impl Calculator for MeldNa {
    fn id(&self) -> &str {
        "meld_na"
    }

    fn name(&self) -> &str {
        "MELD-Na Score"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number("creatinine", "Serum creatinine", "mg/dL", 0.1, 15.0),
                FieldDescriptor::checkbox(
                    "dialysis",
                    "Dialysis at least twice in the past week (or 24h CVVHD)",
                ),
                FieldDescriptor::number("bilirubin", "Total bilirubin", "mg/dL", 0.1, 50.0),
                FieldDescriptor::number("inr", "INR", "", 0.5, 20.0),
                FieldDescriptor::number("sodium", "Serum sodium", "mEq/L", 100.0, 160.0),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![
                Reference::new(
                    "Kamath PS, Wiesner RH, Malinchoc M, et al. A model to predict survival in patients with end-stage liver disease. Hepatology. 2001;33(2):464-470.",
                    "https://doi.org/10.1053/jhep.2001.22172",
                ),
                Reference::new(
                    "Kim WR, Biggins SW, Kremers WK, et al. Hyponatremia and mortality among patients on the liver-transplant waiting list. N Engl J Med. 2008;359(10):1018-1026.",
                    "https://doi.org/10.1056/NEJMoa0801209",
                ),
            ]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let creatinine = inputs.number_in("creatinine", 0.1, 15.0)?;
        let bilirubin = inputs.number_in("bilirubin", 0.1, 50.0)?;
        let inr = inputs.number_in("inr", 0.5, 20.0)?;
        let sodium = inputs.number_in("sodium", 100.0, 160.0)?;
        let dialysis = inputs.flag("dialysis")?;

        let cr = if dialysis {
            4.0
        } else {
            creatinine.clamp(1.0, 4.0)
        };
        let bili = bilirubin.max(1.0);
        let inr = inr.max(1.0);

        let meld_raw = 10.0 * (0.957 * cr.ln() + 0.378 * bili.ln() + 1.12 * inr.ln()) + 6.43;
        let meld = bounded_round(meld_raw);

        // Sodium correction applies only above MELD 11.
        let meld_na = if meld > 11 {
            let na = sodium.clamp(125.0, 137.0);
            let m = meld as f64;
            bounded_round(m + 1.32 * (137.0 - na) - 0.033 * m * (137.0 - na))
        } else {
            meld
        };

        let (mortality, severity) = match meld_na {
            0..=9 => ("1.9%", Severity::Success),
            10..=19 => ("6.0%", Severity::Info),
            20..=29 => ("19.6%", Severity::Warning),
            30..=39 => ("52.6%", Severity::Danger),
            _ => ("71.3%", Severity::Danger),
        };

        let mut out = Output::new()
            .push("MELD score", meld.to_string())
            .push("MELD-Na score", meld_na.to_string())
            .push("90-day mortality", mortality);
        if dialysis {
            out = out.note("Creatinine", "Set to 4.0 mg/dL for dialysis");
        }
        if meld <= 11 {
            out = out.note(
                "Sodium correction",
                "Not applied (MELD \u{2264} 11); MELD-Na equals MELD",
            );
        }
        Ok(out.with_severity(severity))
    }
}
