use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_validate_ok() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["validate", "двадцать", "две", "тысячи"]);

    cmd.assert().success().stdout("OK\n");
}

#[test]
fn test_cli_validate_reports_every_issue() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["validate", "абв", "два", "тысячи"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Слово 'абв' не является числительным"))
        .stderr(predicate::str::contains("Род не согласован"));
}

#[test]
fn test_cli_validate_empty_phrase() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["validate", " "]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Входная строка пустая"));
}

#[test]
fn test_cli_validate_json() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["validate", "--json", "о", "пять"]);

    let output = cmd.assert().failure().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["issues"][0]["kind"], serde_json::json!("case_agreement"));
}
