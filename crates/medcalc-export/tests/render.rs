use medcalc_calculators::get_calculator;
use medcalc_core::{Inputs, Output, Severity};
use medcalc_export::to_csv;

#[test]
fn rows_follow_result_order() {
    let output = Output::new()
        .push("Total score", "5")
        .push("Class", "A")
        .note("Interpretation", "Well-compensated disease")
        .with_severity(Severity::Success);

    let csv = to_csv("Child-Pugh Score", &output).unwrap();
    let lines: Vec<_> = csv.lines().collect();
    assert_eq!(lines[0], "Calculator,Child-Pugh Score,");
    assert_eq!(lines[1], "Label,Value,Kind");
    assert_eq!(lines[2], "Total score,5,value");
    assert_eq!(lines[3], "Class,A,value");
    assert_eq!(lines[4], "Interpretation,Well-compensated disease,note");
    assert_eq!(lines[5], "Overall severity,success,note");
}

#[test]
fn values_with_commas_are_quoted() {
    let output = Output::new().warning("Caution", "High shunt; verify, then re-plan");
    let csv = to_csv("Y-90 Dosimetry", &output).unwrap();
    assert!(csv.contains("\"High shunt; verify, then re-plan\""));
    assert!(csv.contains("warning"));
}

#[test]
fn y90_worksheet_exports_end_to_end() {
    let c = get_calculator("y90_dosimetry").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("model", "mird")
                .with("target_dose", 120.0)
                .with("liver_volume", 1000.0)
                .with("lung_shunt_fraction", 10.0),
        )
        .unwrap();
    let csv = to_csv(c.name(), &out).unwrap();
    assert!(csv.contains("Prescribed activity,2.17 GBq,value"));
    assert!(csv.contains("Estimated lung dose,10.8 Gy,value"));
}

#[test]
fn avs_worksheet_exports_end_to_end() {
    let c = get_calculator("avs").unwrap();
    let out = c
        .evaluate(
            &Inputs::new()
                .with("stimulation", "cosyntropin")
                .with("peripheral_aldosterone", 20.0)
                .with("peripheral_cortisol", 20.0)
                .with("left_aldosterone", 2000.0)
                .with("left_cortisol", 400.0)
                .with("right_aldosterone", 40.0)
                .with("right_cortisol", 200.0),
        )
        .unwrap();
    let csv = to_csv(c.name(), &out).unwrap();
    assert!(csv.contains("Lateralization index,25.0,value"));
    assert!(csv.contains("Overall severity,info,note"));
}
