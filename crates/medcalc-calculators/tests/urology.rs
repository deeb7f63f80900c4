use medcalc_calculators::get_calculator;
use medcalc_core::{InputError, Inputs, Severity};

#[test]
fn ellipsoid_volume_and_psa_density() {
    let c = get_calculator("prostate_volume").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("length", 4.0)
                .with("height", 3.0)
                .with("width", 3.5)
                .with("psa", 2.0),
        )
        .unwrap();
    // 4 x 3 x 3.5 x 0.52 = 21.84 mL; 2 / 21.84 = 0.092
    assert_eq!(out.get("Prostate volume"), Some("21.84 mL"));
    assert_eq!(out.get("PSA density"), Some("0.092 ng/mL/mL"));
    assert_eq!(out.get("Interpretation"), Some("Normal PSA density"));
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn high_psa_density_is_flagged() {
    let c = get_calculator("prostate_volume").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("length", 4.0)
                .with("height", 3.0)
                .with("width", 3.5)
                .with("psa", 4.0),
        )
        .unwrap();
    assert_eq!(out.get("PSA density"), Some("0.183 ng/mL/mL"));
    assert_eq!(out.get("Interpretation"), Some("Elevated PSA density"));
    assert_eq!(out.severity, Some(Severity::Warning));
}

fn renal_inputs(radius: f64, exophytic: &str, nearness: &str, location: &str) -> Inputs {
    Inputs::new()
        .with("radius", radius)
        .with("exophytic", exophytic)
        .with("nearness", nearness)
        .with("location", location)
}

#[test]
fn simple_polar_mass_is_low_complexity() {
    let c = get_calculator("renal_nephrometry").unwrap();
    let out = c
        .evaluate(&renal_inputs(4.0, "ge50", "ge7", "polar"))
        .unwrap();
    assert_eq!(out.get("R (radius) points"), Some("1"));
    assert_eq!(out.get("Total score"), Some("4"));
    assert_eq!(out.get("Complexity"), Some("Low"));
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn radius_bands_split_at_four_and_seven() {
    let c = get_calculator("renal_nephrometry").unwrap();
    for (radius, points) in [(4.0, "1"), (4.1, "2"), (6.9, "2"), (7.0, "3")] {
        let out = c
            .evaluate(&renal_inputs(radius, "ge50", "ge7", "polar"))
            .unwrap();
        assert_eq!(out.get("R (radius) points"), Some(points), "radius={radius}");
    }
}

#[test]
fn hilar_tumor_carries_the_suffix() {
    let c = get_calculator("renal_nephrometry").unwrap();
    let out = c
        .evaluate(&renal_inputs(5.0, "lt50", "4to7", "crosses").with("hilar", true))
        .unwrap();
    assert_eq!(out.get("Total score"), Some("8h"));
    assert_eq!(out.get("Complexity"), Some("Moderate"));
    assert_eq!(out.severity, Some(Severity::Warning));
}

#[test]
fn central_endophytic_mass_is_high_complexity() {
    let c = get_calculator("renal_nephrometry").unwrap();
    let out = c
        .evaluate(&renal_inputs(8.0, "endophytic", "le4", "central"))
        .unwrap();
    assert_eq!(out.get("Total score"), Some("12"));
    assert_eq!(out.get("Complexity"), Some("High"));
    assert_eq!(out.severity, Some(Severity::Danger));
}

fn symptom_inputs(answers: [&str; 7]) -> Inputs {
    let ids = [
        "incomplete_emptying",
        "frequency",
        "intermittency",
        "urgency",
        "weak_stream",
        "straining",
        "nocturia",
    ];
    let mut inputs = Inputs::new();
    for (id, answer) in ids.iter().zip(answers) {
        inputs.insert(id, answer);
    }
    inputs
}

#[test]
fn asymptomatic_questionnaire_is_mild() {
    let c = get_calculator("ipss_prostate").unwrap();
    let out = c.evaluate(&symptom_inputs(["0"; 7])).unwrap();
    assert_eq!(out.get("Total score"), Some("0/35"));
    assert_eq!(out.get("Symptom severity"), Some("Mild"));
    assert_eq!(out.get("Management"), Some("Watchful waiting"));
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn severity_bands_split_at_seven_and_nineteen() {
    let c = get_calculator("ipss_prostate").unwrap();
    // All ones totals 7, still mild.
    let out = c.evaluate(&symptom_inputs(["1"; 7])).unwrap();
    assert_eq!(out.get("Total score"), Some("7/35"));
    assert_eq!(out.get("Symptom severity"), Some("Mild"));

    let out = c
        .evaluate(&symptom_inputs(["1", "1", "1", "1", "1", "1", "2"]))
        .unwrap();
    assert_eq!(out.get("Total score"), Some("8/35"));
    assert_eq!(out.get("Symptom severity"), Some("Moderate"));

    let out = c.evaluate(&symptom_inputs(["5"; 7])).unwrap();
    assert_eq!(out.get("Total score"), Some("35/35"));
    assert_eq!(out.get("Symptom severity"), Some("Severe"));
    assert_eq!(out.get("Management"), Some("Medical/surgical intervention"));
    assert_eq!(out.severity, Some(Severity::Danger));
}

#[test]
fn quality_of_life_is_reported_separately_when_given() {
    let c = get_calculator("ipss_prostate").unwrap();
    let out = c
        .evaluate(&symptom_inputs(["2"; 7]).with("quality_of_life", "3"))
        .unwrap();
    assert_eq!(out.get("Total score"), Some("14/35"));
    assert_eq!(out.get("Quality of life"), Some("3/6"));

    let out = c.evaluate(&symptom_inputs(["2"; 7])).unwrap();
    assert!(out.get("Quality of life").is_none());
}

#[test]
fn out_of_scale_answer_is_invalid() {
    let c = get_calculator("ipss_prostate").unwrap();
    assert!(matches!(
        c.evaluate(&symptom_inputs(["0", "0", "0", "0", "0", "0", "7"])),
        Err(InputError::InvalidValue { field, .. }) if field == "nocturia"
    ));
}

fn shim_inputs(answers: [&str; 5]) -> Inputs {
    let ids = [
        "confidence",
        "firmness",
        "maintenance",
        "completion",
        "satisfaction",
    ];
    let mut inputs = Inputs::new();
    for (id, answer) in ids.iter().zip(answers) {
        inputs.insert(id, answer);
    }
    inputs
}

#[test]
fn full_shim_score_means_no_dysfunction() {
    let c = get_calculator("shim").unwrap();
    let out = c.evaluate(&shim_inputs(["5"; 5])).unwrap();
    assert_eq!(out.get("Total score"), Some("25/25"));
    assert_eq!(out.get("Interpretation"), Some("No erectile dysfunction"));
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn shim_band_boundary_at_twenty_two() {
    let c = get_calculator("shim").unwrap();
    let out = c.evaluate(&shim_inputs(["5", "5", "5", "5", "2"])).unwrap();
    assert_eq!(out.get("Total score"), Some("22/25"));
    assert_eq!(out.get("Interpretation"), Some("No erectile dysfunction"));

    let out = c.evaluate(&shim_inputs(["5", "5", "5", "5", "1"])).unwrap();
    assert_eq!(out.get("Total score"), Some("21/25"));
    assert_eq!(out.get("Interpretation"), Some("Mild erectile dysfunction"));
}

#[test]
fn minimum_shim_score_is_severe() {
    let c = get_calculator("shim").unwrap();
    let out = c.evaluate(&shim_inputs(["1"; 5])).unwrap();
    assert_eq!(out.get("Total score"), Some("5/25"));
    assert_eq!(out.get("Interpretation"), Some("Severe erectile dysfunction"));
    assert_eq!(out.severity, Some(Severity::Danger));
}

#[test]
fn missing_shim_answer_is_rejected() {
    let c = get_calculator("shim").unwrap();
    let mut inputs = shim_inputs(["3"; 5]);
    inputs.insert("satisfaction", "");
    assert!(matches!(
        c.evaluate(&inputs),
        Err(InputError::MissingField(f)) if f == "satisfaction"
    ));
}
