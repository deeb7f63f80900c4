use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;
use crate::calculators::scale_points;

/// SHIM (IIEF-5) erectile function questionnaire.
///
/// Five items scored 1-5, total 5-25, banded from no dysfunction (>=22)
/// down to severe (<=7).
pub struct Shim;

const QUESTIONS: [(&str, &str); 5] = [
    (
        "confidence",
        "Confidence in getting and keeping an erection",
    ),
    (
        "firmness",
        "Erections hard enough for penetration",
    ),
    (
        "maintenance",
        "Ability to maintain erection after penetration",
    ),
    (
        "completion",
        "Ability to maintain erection to completion of intercourse",
    ),
    (
        "satisfaction",
        "Intercourse was satisfactory",
    ),
];

const SCALE: [(&str, &str); 5] = [
    ("1", "1 (very low / almost never)"),
    ("2", "2"),
    ("3", "3 (moderate / sometimes)"),
    ("4", "4"),
    ("5", "5 (very high / almost always)"),
];

impl Calculator for Shim {
    fn id(&self) -> &str {
        "shim"
    }

    fn name(&self) -> &str {
        "SHIM (IIEF-5)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            QUESTIONS
                .iter()
                .map(|(id, label)| FieldDescriptor::select(id, label, &SCALE))
                .collect()
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Rosen RC, Cappelleri JC, Smith MD, Lipsky J, Pena BM. Development and evaluation of an abridged, 5-item version of the International Index of Erectile Function (IIEF-5) as a diagnostic tool for erectile dysfunction. Int J Impot Res. 1999;11(6):319-326.",
                "https://doi.org/10.1038/sj.ijir.3900472",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let mut total = 0;
        for (id, _) in QUESTIONS {
            total += scale_points(inputs, id, 1, 5)?;
        }

        let (interpretation, severity) = match total {
            22..=25 => ("No erectile dysfunction", Severity::Success),
            17..=21 => ("Mild erectile dysfunction", Severity::Info),
            12..=16 => ("Mild to moderate erectile dysfunction", Severity::Warning),
            8..=11 => ("Moderate erectile dysfunction", Severity::Warning),
            _ => ("Severe erectile dysfunction", Severity::Danger),
        };

        Ok(Output::new()
            .push("Total score", format!("{total}/25"))
            .push("Interpretation", interpretation)
            .with_severity(severity))
    }
}
