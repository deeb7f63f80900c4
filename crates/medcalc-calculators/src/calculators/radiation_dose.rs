use medcalc_core::input::age_years;
use medcalc_core::{FieldDescriptor, InputError, Inputs, Output, Reference, Severity};

use crate::Calculator;

/// CT effective dose from dose-length product.
///
/// Effective dose (mSv) = DLP (mGy-cm) x k, where k depends on the body
/// region and the patient's age group. Age is derived from date of birth and
/// exam date — the one documented date transform in the system; no clock is
/// ever read.
pub struct RadiationDose;

/// k-coefficients (mSv per mGy·cm) by age band: <1y, 1-4y, 5-9y, 10-14y, adult.
/// From AAPM Report 96.
const K_TABLE: &[(&str, [f64; 5])] = &[
    ("head", [0.011, 0.0067, 0.0040, 0.0032, 0.0021]),
    ("neck", [0.017, 0.012, 0.011, 0.0079, 0.0059]),
    ("chest", [0.039, 0.026, 0.018, 0.013, 0.014]),
    ("abdomen_pelvis", [0.049, 0.030, 0.020, 0.015, 0.015]),
];

const AGE_BANDS: [&str; 5] = ["<1 year", "1-4 years", "5-9 years", "10-14 years", "adult"];

// US average annual background dose, mSv.
const ANNUAL_BACKGROUND_MSV: f64 = 3.1;

fn age_band(age: i16) -> usize {
    match age {
        ..=0 => 0,
        1..=4 => 1,
        5..=9 => 2,
        10..=14 => 3,
        _ => 4,
    }
}

impl Calculator for RadiationDose {
    fn id(&self) -> &str {
        "radiation_dose"
    }

    fn name(&self) -> &str {
        "CT Effective Dose (DLP)"
    }

    fn fields(&self) -> &[FieldDescriptor] {
        static FIELDS: std::sync::LazyLock<Vec<FieldDescriptor>> = std::sync::LazyLock::new(|| {
            vec![
                FieldDescriptor::number(
                    "dlp",
                    "Dose-length product",
                    "mGy\u{b7}cm",
                    0.1,
                    20000.0,
                ),
                FieldDescriptor::select(
                    "body_region",
                    "Body region",
                    &[
                        ("head", "Head"),
                        ("neck", "Neck"),
                        ("chest", "Chest"),
                        ("abdomen_pelvis", "Abdomen and pelvis"),
                    ],
                ),
                FieldDescriptor::date("date_of_birth", "Date of birth"),
                FieldDescriptor::date("exam_date", "Exam date"),
            ]
        });
        &FIELDS
    }

    fn references(&self) -> &[Reference] {
        static REFS: std::sync::LazyLock<Vec<Reference>> = std::sync::LazyLock::new(|| {
            vec![
                Reference::new(
                    "AAPM Report 96. The measurement, reporting, and management of radiation dose in CT. American Association of Physicists in Medicine; 2008.",
                    "https://www.aapm.org/pubs/reports/RPT_96.pdf",
                ),
                Reference::new(
                    "Deak PD, Smal Y, Kalender WA. Multisection CT protocols: sex- and age-specific conversion factors used to determine effective dose from dose-length product. Radiology. 2010;257(1):158-166.",
                    "https://doi.org/10.1148/radiol.10100047",
                ),
            ]
        });
        &REFS
    }

    fn evaluate(&self, inputs: &Inputs) -> Result<Output, InputError> {
        let dlp = inputs.number_in("dlp", 0.1, 20000.0)?;
        let region = inputs.text("body_region")?;
        let dob = inputs.date("date_of_birth")?;
        let exam = inputs.date("exam_date")?;

        if exam < dob {
            return Err(InputError::InvalidValue {
                field: "exam_date".to_string(),
                message: "exam date precedes date of birth".to_string(),
            });
        }

        let coefficients = K_TABLE
            .iter()
            .find(|(r, _)| *r == region)
            .map(|(_, k)| k)
            .ok_or_else(|| InputError::InvalidValue {
                field: "body_region".to_string(),
                message: format!("unknown option '{region}'"),
            })?;

        let age = age_years(dob, exam);
        let band = age_band(age);
        let k = coefficients[band];
        let dose_msv = dlp * k;
        let background_years = dose_msv / ANNUAL_BACKGROUND_MSV;

        Ok(Output::new()
            .push("Age group", AGE_BANDS[band])
            .push("Conversion coefficient", format!("{k} mSv per mGy\u{b7}cm"))
            .push("Effective dose", format!("{dose_msv:.2} mSv"))
            .note(
                "Context",
                format!(
                    "Roughly {background_years:.1} years of average background radiation ({ANNUAL_BACKGROUND_MSV} mSv/year)"
                ),
            )
            .with_severity(Severity::Info))
    }
}
