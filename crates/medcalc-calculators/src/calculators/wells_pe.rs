use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Wells criteria for pretest probability of pulmonary embolism.
///
/// Weighted checklist: findings carry 3, 1.5, or 1 points. Reported with the
/// 2-tier (>4 likely) and 3-tier (<2 / 2-6 / >6) stratifications.
pub struct WellsPe;

const ITEMS: &[(&str, &str, f64)] = &[
    ("dvt_signs", "Clinical signs and symptoms of DVT", 3.0),
    ("pe_most_likely", "PE is the most likely diagnosis (or equally likely)", 3.0),
    ("heart_rate_gt100", "Heart rate >100 bpm", 1.5),
    ("immobilization_or_surgery", "Immobilization \u{2265}3 days, or surgery within 4 weeks", 1.5),
    ("previous_pe_dvt", "Previous objectively diagnosed PE or DVT", 1.5),
    ("hemoptysis", "Hemoptysis", 1.0),
    ("malignancy", "Malignancy (treatment within 6 months, or palliative)", 1.0),
];

impl Calculator for WellsPe {
    fn id(&self) -> &str {
        "wells_pe"
    }

    fn name(&self) -> &str {
        "Wells Criteria for PE"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            ITEMS
                .iter()
                .map(|(id, label, _)| FieldDescriptor::checkbox(id, label))
                .collect()
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Wells PS, Anderson DR, Rodger M, et al. Derivation of a simple clinical model to categorize patients probability of pulmonary embolism. Thromb Haemost. 2000;83(3):416-420.",
                "https://doi.org/10.1055/s-0037-1613830",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let mut score: f64 = 0.0;
        for (id, _, points) in ITEMS {
            if inputs.flag(id)? {
                score += points;
            }
        }

        let (two_tier, severity) = if score > 4.0 {
            ("PE Likely", Severity::Warning)
        } else {
            ("PE Unlikely", Severity::Success)
        };
        let three_tier = if score < 2.0 {
            "Low"
        } else if score <= 6.0 {
            "Moderate"
        } else {
            "High"
        };

        Ok(Output::new()
            .push("Score", format!("{score} points"))
            .push("Risk (2-tier)", two_tier)
            .push("Risk (3-tier)", three_tier)
            .note(
                "Next step",
                if score > 4.0 {
                    "CT pulmonary angiography"
                } else {
                    "D-dimer testing; imaging if positive"
                },
            )
            .with_severity(severity))
    }
}
