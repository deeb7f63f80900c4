use medcalc_core::{FieldDescriptor, FieldType, Inputs};

#[test]
fn radio_builder_carries_options() {
    let f = FieldDescriptor::radio(
        "ascites",
        "Ascites",
        &[("none", "None"), ("slight", "Slight"), ("moderate", "Moderate")],
    );
    assert_eq!(f.field_type, FieldType::Radio);
    assert_eq!(f.options.len(), 3);
    assert_eq!(f.options[1].value, "slight");
    assert!(f.show_if.is_none());
}

#[test]
fn number_builder_carries_domain() {
    let f = FieldDescriptor::number("sodium", "Serum sodium", "mEq/L", 100.0, 160.0);
    assert_eq!(f.unit.as_deref(), Some("mEq/L"));
    assert_eq!(f.min, Some(100.0));
    assert_eq!(f.max, Some(160.0));
}

#[test]
fn show_if_matches_text_and_bool_values() {
    let f = FieldDescriptor::number("tumor2_size", "Tumor 2 diameter", "cm", 0.1, 20.0)
        .show_if("tumor_count", &["2", "3"]);
    let cond = f.show_if.unwrap();

    assert!(cond.matches(&Inputs::new().with("tumor_count", "2")));
    assert!(!cond.matches(&Inputs::new().with("tumor_count", "1")));
    assert!(!cond.matches(&Inputs::new()));

    let f = FieldDescriptor::number("post_crh_acth", "Post-CRH ACTH", "pg/mL", 0.0, 10000.0)
        .show_if("crh_administered", &["true"]);
    let cond = f.show_if.unwrap();
    assert!(cond.matches(&Inputs::new().with("crh_administered", true)));
    assert!(!cond.matches(&Inputs::new().with("crh_administered", false)));
}

#[test]
fn descriptor_serializes_without_empty_optionals() {
    let f = FieldDescriptor::checkbox("hemoptysis", "Hemoptysis");
    let v = serde_json::to_value(&f).unwrap();
    assert_eq!(v["field_type"], serde_json::json!("checkbox"));
    assert!(v.get("options").is_none());
    assert!(v.get("unit").is_none());
    assert!(v.get("show_if").is_none());
}
