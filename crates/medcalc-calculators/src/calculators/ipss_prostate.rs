use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;
use crate::calculators::scale_points;

/// International Prostate Symptom Score (I-PSS).
///
/// Seven symptom items scored 0-5, total 0-35: mild <=7, moderate 8-19,
/// severe >=20. The quality-of-life item (0-6) is reported separately
/// and never enters the total.
pub struct IpssProstate;

const QUESTIONS: [(&str, &str); 7] = [
    ("incomplete_emptying", "Incomplete emptying"),
    ("frequency", "Frequency (voiding within 2 hours)"),
    ("intermittency", "Intermittency"),
    ("urgency", "Urgency"),
    ("weak_stream", "Weak stream"),
    ("straining", "Straining to begin urination"),
    ("nocturia", "Nocturia (times per night)"),
];

const SCALE: [(&str, &str); 6] = [
    ("0", "0 (not at all)"),
    ("1", "1 (less than 1 in 5 times)"),
    ("2", "2 (less than half the time)"),
    ("3", "3 (about half the time)"),
    ("4", "4 (more than half the time)"),
    ("5", "5 (almost always)"),
];

const QOL_SCALE: [(&str, &str); 7] = [
    ("0", "0 (delighted)"),
    ("1", "1 (pleased)"),
    ("2", "2 (mostly satisfied)"),
    ("3", "3 (mixed)"),
    ("4", "4 (mostly dissatisfied)"),
    ("5", "5 (unhappy)"),
    ("6", "6 (terrible)"),
];

impl Calculator for IpssProstate {
    fn id(&self) -> &str {
        "ipss_prostate"
    }

    fn name(&self) -> &str {
        "International Prostate Symptom Score (I-PSS)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            QUESTIONS
                .iter()
                .map(|(id, label)| FieldDescriptor::select(id, label, &SCALE))
                .chain(std::iter::once(FieldDescriptor::select(
                    "quality_of_life",
                    "Quality of life with current urinary symptoms (optional)",
                    &QOL_SCALE,
                )))
                .collect()
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Barry MJ, Fowler FJ Jr, O'Leary MP, et al. The American Urological Association symptom index for benign prostatic hyperplasia. J Urol. 1992;148(5):1549-1557.",
                "https://doi.org/10.1016/s0022-5347(17)36966-5",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let mut total = 0;
        for (id, _) in QUESTIONS {
            total += scale_points(inputs, id, 0, 5)?;
        }

        let (severity_band, management, severity) = match total {
            0..=7 => ("Mild", "Watchful waiting", Severity::Success),
            8..=19 => ("Moderate", "Medical therapy recommended", Severity::Warning),
            _ => ("Severe", "Medical/surgical intervention", Severity::Danger),
        };

        let mut out = Output::new()
            .push("Total score", format!("{total}/35"))
            .push("Symptom severity", severity_band)
            .note("Management", management);
        if inputs.opt_text("quality_of_life").is_some() {
            let qol = scale_points(inputs, "quality_of_life", 0, 6)?;
            out = out.push("Quality of life", format!("{qol}/6"));
        }
        Ok(out.with_severity(severity))
    }
}
