use remote_starter::test_harness::{run_scenario, ScenarioConfig};
use remote_starter::VehicleKind;

#[test]
fn test_default_scenario_passes() {
    let report = run_scenario(ScenarioConfig::default());

    assert_eq!(report.owner, "Janet");
    assert_eq!(report.vehicle.as_deref(), Some("car"));
    assert_eq!(report.presses, 1);
    assert_eq!(report.starts, 1);
    assert!(report.passed());
}

#[test]
fn test_unbound_scenario_passes_with_zero_starts() {
    let report = run_scenario(ScenarioConfig {
        vehicle: None,
        presses: 3,
        ..Default::default()
    });

    assert_eq!(report.vehicle, None);
    assert_eq!(report.starts, 0);
    assert!(report.passed());
}

#[test]
fn test_every_press_reaches_the_recorder() {
    let report = run_scenario(ScenarioConfig {
        vehicle: Some(VehicleKind::Rocketship),
        presses: 10,
        ..Default::default()
    });

    assert_eq!(report.starts, 10);
    assert!(report.passed());
}

#[test]
fn test_report_text_carries_the_outcome() {
    let report = run_scenario(ScenarioConfig::default());
    let text = report.generate_text();

    assert!(text.contains("Owner: Janet"));
    assert!(text.contains("Vehicle: car"));
    assert!(text.contains("Result: PASS"));
}

#[test]
fn test_report_serializes_to_json() {
    let report = run_scenario(ScenarioConfig::default());
    let json = serde_json::to_string(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["owner"], "Janet");
    assert_eq!(value["vehicle"], "car");
    assert_eq!(value["starts"], 1);
}
