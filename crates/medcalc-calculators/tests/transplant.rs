use medcalc_calculators::get_calculator;
use medcalc_core::{InputError, Inputs, Severity};

fn single_tumor(size: f64) -> Inputs {
    Inputs::new()
        .with("tumor_count", "1")
        .with("tumor1_size", size)
        .with("macrovascular_invasion", "no")
        .with("extrahepatic_disease", "no")
}

#[test]
fn single_tumor_within_milan() {
    let c = get_calculator("milan_ucsf").unwrap();
    let out = c.evaluate(&single_tumor(4.5)).unwrap();
    assert_eq!(out.get("Milan criteria"), Some("WITHIN CRITERIA"));
    assert_eq!(
        out.get("Eligibility"),
        Some("ELIGIBLE - Meets Milan Criteria (standard)")
    );
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn single_tumor_boundaries() {
    let c = get_calculator("milan_ucsf").unwrap();
    // Exactly 5 cm is still within Milan.
    let out = c.evaluate(&single_tumor(5.0)).unwrap();
    assert_eq!(out.get("Milan criteria"), Some("WITHIN CRITERIA"));

    // 6.5 cm is outside Milan but exactly at the UCSF limit.
    let out = c.evaluate(&single_tumor(6.5)).unwrap();
    assert_eq!(out.get("Milan criteria"), Some("OUTSIDE CRITERIA"));
    assert_eq!(out.get("UCSF criteria"), Some("WITHIN CRITERIA"));
    assert_eq!(
        out.get("Eligibility"),
        Some("ELIGIBLE - Meets UCSF Criteria (extended)")
    );

    // Beyond UCSF.
    let out = c.evaluate(&single_tumor(6.6)).unwrap();
    assert_eq!(
        out.get("Eligibility"),
        Some("NOT ELIGIBLE - Outside Milan and UCSF criteria")
    );
    assert_eq!(out.severity, Some(Severity::Danger));
}

#[test]
fn multifocal_rules_use_every_diameter() {
    let c = get_calculator("milan_ucsf").unwrap();
    let inputs = Inputs::new()
        .with("tumor_count", "3")
        .with("tumor1_size", 3.0)
        .with("tumor2_size", 2.5)
        .with("tumor3_size", 2.0)
        .with("macrovascular_invasion", "no")
        .with("extrahepatic_disease", "no");
    let out = c.evaluate(&inputs).unwrap();
    assert_eq!(out.get("Milan criteria"), Some("WITHIN CRITERIA"));
    assert_eq!(out.get("Total tumor diameter"), Some("7.5 cm"));

    // One lesion over 3 cm drops Milan but can stay within UCSF as long
    // as the total diameter holds at the 8 cm cap.
    let out = c
        .evaluate(&inputs.clone().with("tumor2_size", 4.0).with("tumor3_size", 1.0))
        .unwrap();
    assert_eq!(out.get("Milan criteria"), Some("OUTSIDE CRITERIA"));
    assert_eq!(out.get("Total tumor diameter"), Some("8.0 cm"));
    assert_eq!(out.get("UCSF criteria"), Some("WITHIN CRITERIA"));

    // The same lesions with a total over 8 cm exceed UCSF too.
    let out = c.evaluate(&inputs.with("tumor2_size", 4.0)).unwrap();
    assert_eq!(out.get("Milan criteria"), Some("OUTSIDE CRITERIA"));
    assert_eq!(out.get("UCSF criteria"), Some("OUTSIDE CRITERIA"));
}

#[test]
fn ucsf_total_diameter_cap_is_eight() {
    let c = get_calculator("milan_ucsf").unwrap();
    let inputs = Inputs::new()
        .with("tumor_count", "2")
        .with("tumor1_size", 4.5)
        .with("tumor2_size", 4.0)
        .with("macrovascular_invasion", "no")
        .with("extrahepatic_disease", "no");
    // 8.5 cm total exceeds the UCSF cap.
    let out = c.evaluate(&inputs).unwrap();
    assert_eq!(out.get("UCSF criteria"), Some("OUTSIDE CRITERIA"));

    let out = c.evaluate(&inputs.with("tumor2_size", 3.5)).unwrap();
    assert_eq!(out.get("UCSF criteria"), Some("WITHIN CRITERIA"));
}

#[test]
fn second_diameter_becomes_required_with_two_tumors() {
    let c = get_calculator("milan_ucsf").unwrap();
    let inputs = Inputs::new()
        .with("tumor_count", "2")
        .with("tumor1_size", 2.0)
        .with("macrovascular_invasion", "no")
        .with("extrahepatic_disease", "no");
    match c.evaluate(&inputs) {
        Err(InputError::MissingConditional { field, .. }) => assert_eq!(field, "tumor2_size"),
        other => panic!("expected MissingConditional, got {other:?}"),
    }
}

#[test]
fn invasion_or_spread_excludes_eligibility() {
    let c = get_calculator("milan_ucsf").unwrap();
    let out = c
        .evaluate(&single_tumor(2.0).with("macrovascular_invasion", "yes"))
        .unwrap();
    assert_eq!(out.get("Milan criteria"), Some("OUTSIDE CRITERIA"));
    assert_eq!(out.get("UCSF criteria"), Some("OUTSIDE CRITERIA"));
    assert_eq!(out.severity, Some(Severity::Danger));
}
