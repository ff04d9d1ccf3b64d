//! CLI tests for the `regform` binary.
//!
//! Spawns the binary against snapshots in a scratch directory and checks exit
//! codes and stdout.

use std::process::{Command, Output};

use regform::FormState;
use regform::exit_codes;
use regform::test_support::{Workspace, valid_form};

fn regform(workspace: &Workspace, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_regform"))
        .current_dir(workspace.root())
        .env_remove("RUST_LOG")
        .args(args)
        .output()
        .expect("run regform")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn validate_valid_form_exits_ok() {
    let ws = Workspace::new().expect("workspace");
    ws.write_form("form.json", &valid_form()).expect("write form");

    let output = regform(&ws, &["validate", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert!(stdout(&output).lines().all(|line| line.ends_with(": ok")));
}

#[test]
fn validate_invalid_form_lists_failures() {
    let ws = Workspace::new().expect("workspace");
    let form = FormState {
        last_name: String::new(),
        ..valid_form()
    };
    ws.write_form("form.json", &form).expect("write form");

    let output = regform(&ws, &["validate", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    let out = stdout(&output);
    assert!(out.contains("lastName: Last Name is required"));
    assert!(out.contains("Please fix the following fields: Last Name"));
}

#[test]
fn malformed_snapshot_exits_error() {
    let ws = Workspace::new().expect("workspace");
    ws.write_file("form.json", r#"{"terms":"yes"}"#)
        .expect("write form");

    let output = regform(&ws, &["validate", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::ERROR));
    assert!(String::from_utf8_lossy(&output.stderr).contains("schema validation failed"));
}

#[test]
fn states_and_cities_print_options() {
    let ws = Workspace::new().expect("workspace");

    let states = regform(&ws, &["states", "usa"]);
    assert_eq!(states.status.code(), Some(exit_codes::OK));
    assert_eq!(
        stdout(&states),
        "california\tLos Angeles\nnewyork\tNew York City\ntexas\tHouston\n"
    );

    let cities = regform(&ws, &["cities", "usa", "california"]);
    assert_eq!(
        stdout(&cities),
        "losangeles\tLos Angeles\nsanfrancisco\tSan Francisco\nsandiego\tSan Diego\n"
    );
}

#[test]
fn unknown_country_has_no_states() {
    let ws = Workspace::new().expect("workspace");
    let output = regform(&ws, &["states", "unknownland"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).is_empty());
}

#[test]
fn strength_prints_tier_and_score() {
    let ws = Workspace::new().expect("workspace");
    let output = regform(&ws, &["strength", "Password123"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "medium 4\n");
}

#[test]
fn strength_ignores_broken_config() {
    let ws = Workspace::new().expect("workspace");
    ws.write_file("regform.toml", "submit_delay_ms = \"soon\"\n")
        .expect("write config");

    let output = regform(&ws, &["strength", "StrongPassword123!@#"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "strong 6\n");

    let countries = regform(&ws, &["countries"]);
    assert_eq!(countries.status.code(), Some(exit_codes::ERROR));
}

#[test]
fn submit_uses_configured_delay() {
    let ws = Workspace::new().expect("workspace");
    ws.write_file("regform.toml", "submit_delay_ms = 0\n")
        .expect("write config");
    ws.write_form("form.json", &valid_form()).expect("write form");

    let output = regform(&ws, &["submit", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "submitted: submission=1\n");
}

#[test]
fn submit_invalid_form_prints_fix_message() {
    let ws = Workspace::new().expect("workspace");
    ws.write_file("regform.toml", "submit_delay_ms = 0\n")
        .expect("write config");
    ws.write_form("form.json", &FormState::default())
        .expect("write form");

    let output = regform(&ws, &["submit", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::INVALID));
    assert!(stdout(&output).starts_with("Please fix the following fields: First Name, Last Name"));
}

#[test]
fn reference_override_changes_cascade() {
    let ws = Workspace::new().expect("workspace");
    ws.write_file(
        "tables.json",
        r#"{
            "disposable_domains": ["burner.test"],
            "dial_codes": [{"country": "narnia", "code": "+999"}],
            "locations": [{
                "country": "narnia",
                "name": "Narnia",
                "states": [{"key": "archenland", "cities": ["Anvard"]}]
            }]
        }"#,
    )
    .expect("write tables");
    ws.write_file("regform.toml", "reference_data = \"tables.json\"\n")
        .expect("write config");

    let output = regform(&ws, &["countries"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    assert_eq!(stdout(&output), "narnia\tNarnia\n");
}

#[test]
fn derive_prints_json() {
    let ws = Workspace::new().expect("workspace");
    ws.write_form("form.json", &valid_form()).expect("write form");

    let output = regform(&ws, &["derive", "form.json"]);
    assert_eq!(output.status.code(), Some(exit_codes::OK));
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("json");
    assert_eq!(value["can_submit"], serde_json::Value::Bool(true));
    assert_eq!(value["strength"], serde_json::Value::String("strong".to_string()));
}
