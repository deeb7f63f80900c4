use medcalc_core::input::age_years;
use medcalc_core::{InputError, Inputs};

#[test]
fn missing_required_number_is_rejected() {
    let inputs = Inputs::new();
    match inputs.number("bilirubin") {
        Err(InputError::MissingField(f)) => assert_eq!(f, "bilirubin"),
        other => panic!("expected MissingField, got {other:?}"),
    }
}

#[test]
fn number_accepts_raw_control_text() {
    let inputs = Inputs::new().with("inr", "1.2");
    assert_eq!(inputs.number("inr").unwrap(), 1.2);
}

#[test]
fn non_numeric_text_is_invalid_not_missing() {
    let inputs = Inputs::new().with("inr", "abc");
    assert!(matches!(
        inputs.number("inr"),
        Err(InputError::InvalidValue { .. })
    ));
}

#[test]
fn range_check_is_closed_on_both_ends() {
    let inputs = Inputs::new().with("shunt", 50.0);
    assert_eq!(inputs.number_in("shunt", 0.0, 50.0).unwrap(), 50.0);

    let inputs = Inputs::new().with("shunt", 50.001);
    match inputs.number_in("shunt", 0.0, 50.0) {
        Err(InputError::OutOfRange { value, min, max, .. }) => {
            assert_eq!(value, 50.001);
            assert_eq!(min, 0.0);
            assert_eq!(max, 50.0);
        }
        other => panic!("expected OutOfRange, got {other:?}"),
    }
}

#[test]
fn optional_number_is_still_range_checked_when_present() {
    let inputs = Inputs::new();
    assert_eq!(inputs.opt_number_in("prolactin", 0.1, 100.0).unwrap(), None);

    let inputs = Inputs::new().with("prolactin", 20.0);
    assert_eq!(
        inputs.opt_number_in("prolactin", 0.1, 100.0).unwrap(),
        Some(20.0)
    );

    let inputs = Inputs::new().with("prolactin", 0.0);
    assert!(matches!(
        inputs.opt_number_in("prolactin", 0.1, 100.0),
        Err(InputError::OutOfRange { .. })
    ));
}

#[test]
fn absent_checkbox_reads_as_unchecked() {
    let inputs = Inputs::new();
    assert!(!inputs.flag("hemoptysis").unwrap());

    let inputs = Inputs::new().with("hemoptysis", true);
    assert!(inputs.flag("hemoptysis").unwrap());
}

#[test]
fn conditional_number_names_the_condition() {
    let inputs = Inputs::new();
    match inputs.number_when("tumor2_size", "tumor count is 2 or more", 0.1, 20.0) {
        Err(InputError::MissingConditional { field, condition }) => {
            assert_eq!(field, "tumor2_size");
            assert_eq!(condition, "tumor count is 2 or more");
        }
        other => panic!("expected MissingConditional, got {other:?}"),
    }
}

#[test]
fn date_parses_iso_and_rejects_garbage() {
    let inputs = Inputs::new().with("dob", "1980-02-29");
    assert_eq!(
        inputs.date("dob").unwrap(),
        jiff::civil::date(1980, 2, 29)
    );

    let inputs = Inputs::new().with("dob", "29/02/1980");
    assert!(matches!(
        inputs.date("dob"),
        Err(InputError::InvalidDate { .. })
    ));
}

#[test]
fn age_counts_whole_years_only() {
    let dob = jiff::civil::date(2010, 6, 15);
    assert_eq!(age_years(dob, jiff::civil::date(2020, 6, 14)), 9);
    assert_eq!(age_years(dob, jiff::civil::date(2020, 6, 15)), 10);
    assert_eq!(age_years(dob, jiff::civil::date(2020, 6, 16)), 10);
}

#[test]
fn inputs_deserialize_from_host_json() {
    let json = r#"{"bilirubin": 1.5, "ascites": "none", "dialysis": true}"#;
    let inputs: Inputs = serde_json::from_str(json).unwrap();
    assert_eq!(inputs.number("bilirubin").unwrap(), 1.5);
    assert_eq!(inputs.text("ascites").unwrap(), "none");
    assert!(inputs.flag("dialysis").unwrap());
}
