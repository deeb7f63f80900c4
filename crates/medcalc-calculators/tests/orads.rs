use medcalc_calculators::get_calculator;
use medcalc_core::{InputError, Inputs, Severity};

fn lesion(status: &str, category: &str, size: f64) -> Inputs {
    Inputs::new()
        .with("menopausal_status", status)
        .with("lesion_category", category)
        .with("lesion_size", size)
}

#[test]
fn small_follicle_is_physiologic() {
    let c = get_calculator("orads_us").unwrap();
    let out = c
        .evaluate(&lesion("premenopausal", "follicle", 2.0))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 1"));
    assert_eq!(out.severity, Some(Severity::Success));
}

#[test]
fn simple_cyst_size_boundary_at_ten() {
    let c = get_calculator("orads_us").unwrap();
    let out = c
        .evaluate(&lesion("postmenopausal", "simple_cyst", 9.9))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 2"));

    let out = c
        .evaluate(&lesion("postmenopausal", "simple_cyst", 10.0))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 3"));
}

#[test]
fn color_score_is_required_where_the_rules_branch_on_it() {
    let c = get_calculator("orads_us").unwrap();
    match c.evaluate(&lesion("premenopausal", "multilocular_solid", 6.0)) {
        Err(InputError::MissingConditional { field, .. }) => assert_eq!(field, "color_score"),
        other => panic!("expected MissingConditional, got {other:?}"),
    }
}

#[test]
fn multilocular_solid_splits_on_color_score() {
    let c = get_calculator("orads_us").unwrap();
    let out = c
        .evaluate(&lesion("premenopausal", "multilocular_solid", 6.0).with("color_score", "2"))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 4"));

    let out = c
        .evaluate(&lesion("premenopausal", "multilocular_solid", 6.0).with("color_score", "3"))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 5"));
    assert_eq!(out.severity, Some(Severity::Danger));
}

#[test]
fn solid_smooth_spans_three_levels() {
    let c = get_calculator("orads_us").unwrap();
    for (cs, level) in [("1", "O-RADS 3"), ("2", "O-RADS 4"), ("4", "O-RADS 5")] {
        let out = c
            .evaluate(&lesion("postmenopausal", "solid_smooth", 4.0).with("color_score", cs))
            .unwrap();
        assert_eq!(out.get("O-RADS category"), Some(level), "color score {cs}");
    }
}

#[test]
fn peritoneal_nodules_override_to_or5() {
    let c = get_calculator("orads_us").unwrap();
    let out = c
        .evaluate(&lesion("postmenopausal", "simple_cyst", 3.0).with("peritoneal_nodules", true))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 5"));
    assert!(
        out.items
            .iter()
            .any(|i| i.label == "Peritoneal findings"),
        "override should be called out"
    );
}

#[test]
fn ascites_only_raises_suspicious_lesions() {
    let c = get_calculator("orads_us").unwrap();
    // OR2 lesion with ascites keeps its category, with a note.
    let out = c
        .evaluate(&lesion("premenopausal", "simple_cyst", 4.0).with("ascites", true))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 2"));

    // OR3+ lesion with ascites goes to OR5.
    let out = c
        .evaluate(&lesion("postmenopausal", "simple_cyst", 10.0).with("ascites", true))
        .unwrap();
    assert_eq!(out.get("O-RADS category"), Some("O-RADS 5"));
}
