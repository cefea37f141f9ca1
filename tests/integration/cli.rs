//! Binary-level tests for the `linkfill` CLI.

use assert_cmd::Command;
use predicates::prelude::*;

fn linkfill() -> Command {
    Command::cargo_bin("linkfill").expect("binary builds")
}

#[test]
fn resolve_prints_concrete_uri_to_stdout() {
    linkfill()
        .args(["resolve", "app://user/{id#}/name/{label}", "7", "alice"])
        .assert()
        .success()
        .stdout("app://user/7/name/alice\n");
}

#[test]
fn resolve_passes_through_placeholder_free_template() {
    linkfill()
        .args(["resolve", "app://settings"])
        .assert()
        .success()
        .stdout("app://settings\n");
}

#[test]
fn resolve_rejects_invalid_numeric_value() {
    linkfill()
        .args(["resolve", "app://user/{id#}/name/{label}", "7a", "alice"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("field 'id'"))
        .stderr(predicate::str::contains("digits only"));
}

#[test]
fn resolve_rejects_blank_text_value() {
    linkfill()
        .args(["resolve", "{label}", "   "])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("must not be blank"));
}

#[test]
fn resolve_rejects_wrong_value_count() {
    linkfill()
        .args(["resolve", "{a}/{b}", "only-one"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("2 placeholder(s)"))
        .stderr(predicate::str::contains("1 value(s)"));
}

#[test]
fn resolve_treats_duplicate_names_positionally() {
    linkfill()
        .args(["resolve", "{id}/{id}", "1", "2"])
        .assert()
        .success()
        .stdout("1/2\n");
}

#[test]
fn interactive_resolve_reads_values_from_stdin() {
    linkfill()
        .args(["resolve", "app://user/{id#}/name/{label}", "--interactive"])
        .write_stdin("7\nalice\n")
        .assert()
        .success()
        .stdout("app://user/7/name/alice\n");
}

#[test]
fn interactive_resolve_reprompts_on_invalid_input() {
    linkfill()
        .args(["resolve", "app://user/{id#}", "--interactive"])
        .write_stdin("7a\n042\n")
        .assert()
        .success()
        .stdout("app://user/042\n")
        .stderr(predicate::str::contains("digits only"));
}

#[test]
fn interactive_resolve_cancels_on_eof() {
    linkfill()
        .args(["resolve", "{id#}/{label}", "--interactive"])
        .write_stdin("7\n")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("cancelled"));
}

#[test]
fn interactive_conflicts_with_positional_values() {
    linkfill()
        .args(["resolve", "{id#}", "7", "--interactive"])
        .assert()
        .failure();
}

#[test]
fn scan_lists_fields_in_order() {
    linkfill()
        .args(["scan", "app://user/{id#}/name/{label}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("id"))
        .stdout(predicate::str::contains("label"))
        .stdout(predicate::str::contains("numeric"))
        .stdout(predicate::str::contains("text"));
}

#[test]
fn scan_reports_placeholder_free_template() {
    linkfill()
        .args(["scan", "app://settings"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No placeholders"));
}

#[test]
fn scan_json_is_machine_readable() {
    let output = linkfill()
        .args(["scan", "app://user/{id#}/name/{label}", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let fields: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let fields = fields.as_array().expect("JSON array");
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["position"], 0);
    assert_eq!(fields[0]["label"], "id");
    assert_eq!(fields[0]["kind"], "numeric");
    assert_eq!(fields[1]["label"], "label");
    assert_eq!(fields[1]["kind"], "text");
}

#[test]
fn scan_rejects_unknown_format() {
    linkfill()
        .args(["scan", "{a}", "--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}
