use medcalc_calculators::get_calculator;
use medcalc_core::{InputError, Inputs, Severity};

#[test]
fn liver_lobe_disruption_is_grade_five_regardless_of_lesser_findings() {
    let c = get_calculator("aast_liver").unwrap();

    let out = c
        .evaluate(&Inputs::new().with("liver_laceration", "disruption_gt75"))
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("V"));

    // Adding a lower-grade hematoma never lowers the reported grade.
    let out = c
        .evaluate(
            &Inputs::new()
                .with("liver_laceration", "disruption_gt75")
                .with("liver_hematoma", "subcapsular_lt10"),
        )
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("V"));
    assert_eq!(out.severity, Some(Severity::Danger));
}

#[test]
fn grade_is_maximum_across_independent_findings() {
    let c = get_calculator("aast_liver").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("liver_hematoma", "subcapsular_gt50")
                .with("liver_vascular", "peritoneal_bleeding"),
        )
        .unwrap();
    // max(hematoma III, vascular IV) = IV; advancement only applies below III.
    assert_eq!(out.get("AAST grade"), Some("IV"));
    assert_eq!(out.get("Hematoma grade"), Some("III"));
    assert_eq!(out.get("Vascular grade"), Some("IV"));
}

#[test]
fn multiple_low_grade_injuries_advance_one_grade_up_to_three() {
    let c = get_calculator("aast_liver").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("liver_hematoma", "subcapsular_lt10")
                .with("liver_laceration", "depth_1_3cm"),
        )
        .unwrap();
    // max(I, II) = II, advanced to III for multiple injuries.
    assert_eq!(out.get("AAST grade"), Some("III"));

    // A single finding is never advanced.
    let out = c
        .evaluate(&Inputs::new().with("liver_laceration", "depth_1_3cm"))
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("II"));
}

#[test]
fn no_findings_is_an_error_not_a_grade() {
    for id in ["aast_liver", "aast_spleen", "aast_kidney"] {
        let c = get_calculator(id).unwrap();
        assert!(
            matches!(
                c.evaluate(&Inputs::new()),
                Err(InputError::InvalidValue { .. })
            ),
            "{id} should reject empty findings"
        );
    }
}

#[test]
fn unknown_finding_option_is_rejected() {
    let c = get_calculator("aast_spleen").unwrap();
    match c.evaluate(&Inputs::new().with("spleen_laceration", "gigantic")) {
        Err(InputError::InvalidValue { field, .. }) => assert_eq!(field, "spleen_laceration"),
        other => panic!("expected InvalidValue, got {other:?}"),
    }
}

#[test]
fn spleen_shattered_and_kidney_main_vessel_are_grade_five() {
    let spleen = get_calculator("aast_spleen").unwrap();
    let out = spleen
        .evaluate(&Inputs::new().with("spleen_laceration", "shattered"))
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("V"));

    let kidney = get_calculator("aast_kidney").unwrap();
    let out = kidney
        .evaluate(&Inputs::new().with("kidney_vascular", "main_vessel"))
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("V"));
}

#[test]
fn kidney_collecting_system_laceration_is_grade_four() {
    let c = get_calculator("aast_kidney").unwrap();
    let out = c
        .evaluate(&Inputs::new().with("kidney_laceration", "collecting_system"))
        .unwrap();
    assert_eq!(out.get("AAST grade"), Some("IV"));
    assert_eq!(out.severity, Some(Severity::Danger));
}
