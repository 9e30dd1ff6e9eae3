//! 스크립트 입력으로 대화형 메뉴를 구동하는 시나리오 테스트.
use std::io::Cursor;

use energy_cost_calculator::config::{Config, ReportConfig};
use energy_cost_calculator::preferences::UserPreferences;
use energy_cost_calculator::tariff::TariffTable;
use energy_cost_calculator::ui_cli::{is_cancel, Console, MenuChoice};
use energy_cost_calculator::units::{PowerUnit, TimeUnit};
use tempfile::TempDir;

fn test_config(dir: &TempDir) -> Config {
    Config {
        currency_symbol: "₱".to_string(),
        preferences_path: dir.path().join("preferences.txt"),
        report: ReportConfig {
            csv_path: dir.path().join("energy_report.csv"),
            text_path: dir.path().join("energy_report.txt"),
        },
    }
}

fn run_script(config: &Config, prefs: UserPreferences, script: &str) -> String {
    let mut console = Console::new(
        Cursor::new(script.as_bytes().to_vec()),
        Vec::new(),
        config,
        prefs,
        TariffTable::builtin(),
    );
    console.run().expect("interactive run");
    String::from_utf8(console.into_output()).expect("utf8 output")
}

#[test]
fn manual_entry_can_be_cancelled() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "1\n0\n3\n");
    assert!(out.contains("Enter the appliance name"));
    assert!(out.contains("Returning to main menu..."));
    assert!(out.contains("Exiting program. Goodbye!"));
}

#[test]
fn free_text_menu_input_is_rejected() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "Use promo code AKSRAFFLE\n3\n");
    assert!(out.contains("Invalid selection"));
    assert!(out.ends_with("Exiting program. Goodbye!\n"));
}

#[test]
fn appliance_from_catalog_with_default_time_unit() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "2\n1\n2\n\nMERALCO\n3\n");
    assert!(out.contains("10. Water Heater"));
    assert!(out.contains("Appliance: Air Conditioner"));
    assert!(out.contains("Energy Consumed: 3.00 kWh"));
    assert!(out.contains("Estimated Cost: ₱36.08"));
    assert!(out.contains("Report saved as"));
    let csv = std::fs::read_to_string(&cfg.report.csv_path).expect("csv report");
    assert!(csv.contains("Air Conditioner,3.00 kWh,MERALCO,36.08"));
    assert!(cfg.report.text_path.exists());
}

#[test]
fn manual_entry_in_watts_and_minutes() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let script = "1\nHeater\n1500\nW\n90\nminutes\nbatelec\n3\n";
    let out = run_script(&cfg, UserPreferences::default(), script);
    assert!(out.contains("Energy Consumed: 2.25 kWh"));
    assert!(out.contains("Estimated Cost: ₱26.68"));
    let text = std::fs::read_to_string(&cfg.report.text_path).expect("text report");
    assert!(text.contains("Company: batelec\n"));
}

#[test]
fn preferred_units_fill_empty_answers() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let prefs = UserPreferences::new(PowerUnit::Horsepower, TimeUnit::Hours);
    let out = run_script(&cfg, prefs, "1\nPump\n2\n\n1\n\nMERALCO\n3\n");
    assert!(out.contains("[HP]"));
    assert!(out.contains("Energy Consumed: 1.49 kWh"));
}

#[test]
fn unknown_provider_is_zero_rated() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "2\n2\n5\nhours\nACME\n3\n");
    assert!(out.contains("Energy Consumed: 1.00 kWh"));
    assert!(out.contains("Estimated Cost: ₱0.00"));
    assert!(out.contains("no tariff for provider 'ACME'"));
}

#[test]
fn invalid_answers_return_to_menu() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "2\n99\n1\nFan\nabc\n1\nFan\n1\nMW\n3\n");
    assert_eq!(out.matches("Invalid selection. Try again.").count(), 1);
    assert_eq!(out.matches("Invalid input. Try again.").count(), 2);

    let out = run_script(&cfg, UserPreferences::default(), "2\n3\nxyz\n2\n3\n1\ndays\n3\n");
    assert_eq!(out.matches("Invalid time input. Try again.").count(), 2);
    assert!(!cfg.report.csv_path.exists());
}

#[test]
fn appliance_number_must_be_plain_digits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "2\n+1\n2\n1.0\n3\n");
    assert_eq!(out.matches("Invalid selection. Try again.").count(), 2);
    assert!(!out.contains("Appliance: Air Conditioner"));
}

#[test]
fn unknown_provider_note_is_printed_once() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "2\n1\n1\nhours\nACME\n3\n");
    assert_eq!(out.matches("no tariff for provider 'ACME'").count(), 1);
}

#[test]
fn closed_input_exits() {
    let dir = tempfile::tempdir().expect("tempdir");
    let cfg = test_config(&dir);
    let out = run_script(&cfg, UserPreferences::default(), "");
    assert!(out.contains("Exiting program. Goodbye!"));
}

#[test]
fn menu_and_cancel_tokens() {
    assert_eq!(MenuChoice::from_input(Some("1")), MenuChoice::ManualPower);
    assert_eq!(MenuChoice::from_input(Some("2")), MenuChoice::ChooseAppliance);
    assert_eq!(MenuChoice::from_input(Some("3")), MenuChoice::Exit);
    assert_eq!(MenuChoice::from_input(None), MenuChoice::Exit);
    assert_eq!(MenuChoice::from_input(Some("")), MenuChoice::Invalid);
    assert!(is_cancel("CANCEL"));
    assert!(is_cancel("0"));
    assert!(!is_cancel("0.0"));
}
