use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// Wells criteria for pretest probability of deep vein thrombosis.
///
/// Nine findings score +1 each; a plausible alternative diagnosis scores -2.
/// Reported with both the 2-tier (likely/unlikely) and the original 3-tier
/// stratification. Unchecked boxes simply contribute nothing.
pub struct WellsDvt;

const ITEMS: &[(&str, &str)] = &[
    ("active_cancer", "Active cancer (treatment within 6 months, or palliative)"),
    ("paralysis_or_cast", "Paralysis, paresis, or recent plaster immobilization of a leg"),
    ("bedridden_or_surgery", "Recently bedridden \u{2265}3 days, or major surgery within 12 weeks"),
    ("localized_tenderness", "Localized tenderness along the deep venous system"),
    ("entire_leg_swollen", "Entire leg swollen"),
    ("calf_swelling", "Calf swelling >3 cm compared to the asymptomatic leg"),
    ("pitting_edema", "Pitting edema confined to the symptomatic leg"),
    ("collateral_veins", "Collateral superficial (nonvaricose) veins"),
    ("previous_dvt", "Previously documented DVT"),
];

impl Calculator for WellsDvt {
    fn id(&self) -> &str {
        "wells_dvt"
    }

    fn name(&self) -> &str {
        "Wells Criteria for DVT"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            let mut fields: Vec<FieldDescriptor> = ITEMS
                .iter()
                .map(|(id, label)| FieldDescriptor::checkbox(id, label))
                .collect();
            fields.push(FieldDescriptor::checkbox(
                "alternative_diagnosis",
                "Alternative diagnosis at least as likely as DVT (-2)",
            ));
            fields
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![Reference::new(
                "Wells PS, Anderson DR, Rodger M, et al. Evaluation of D-dimer in the diagnosis of suspected deep-vein thrombosis. N Engl J Med. 2003;349(13):1227-1235.",
                "https://doi.org/10.1056/NEJMoa023153",
            )]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let mut score: i32 = 0;
        for (id, _) in ITEMS {
            if inputs.flag(id)? {
                score += 1;
            }
        }
        if inputs.flag("alternative_diagnosis")? {
            score -= 2;
        }

        let (two_tier, two_prevalence, severity) = if score <= 1 {
            ("DVT Unlikely", "~6%", Severity::Success)
        } else {
            ("DVT Likely", "~28%", Severity::Warning)
        };
        let (three_tier, three_prevalence) = if score <= 0 {
            ("Low", "~5%")
        } else if score <= 2 {
            ("Moderate", "~17%")
        } else {
            ("High", "~53%")
        };

        Ok(Output::new()
            .push("Score", format!("{score} points"))
            .push("Risk (2-tier)", two_tier)
            .push("Prevalence (2-tier)", two_prevalence)
            .push("Risk (3-tier)", three_tier)
            .push("Prevalence (3-tier)", three_prevalence)
            .note(
                "Next step",
                if score <= 1 {
                    "D-dimer testing; ultrasound if positive"
                } else {
                    "Proceed to compression ultrasound"
                },
            )
            .with_severity(severity))
    }
}
