use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_convert_integer() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.arg("convert").arg("сто").arg("двадцать").arg("три");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("123"))
        .stdout(predicate::str::contains("сто двадцать три"));
}

#[test]
fn test_cli_convert_quoted_phrase() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.arg("convert").arg("две целых пять десятых").arg("--raw");

    cmd.assert().success().stdout("2.5\n");
}

#[test]
fn test_cli_convert_negative_raw() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["convert", "-r", "минус", "пять"]);

    cmd.assert().success().stdout("-5\n");
}

#[test]
fn test_cli_convert_json() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["convert", "--json", "минус", "две", "целых", "пять", "десятых"]);

    let output = cmd.assert().success().get_output().stdout.clone();
    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["numeric_value"], serde_json::json!(-2.5));
    assert_eq!(value["is_negative"], serde_json::json!(true));
    assert_eq!(value["has_fractional_part"], serde_json::json!(true));
}

#[test]
fn test_cli_convert_invalid_phrase_fails() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["convert", "пять", "тысяча"]);

    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("Ошибки"))
        .stdout(predicate::str::contains("тысяч"));
}

#[test]
fn test_cli_convert_raw_errors_go_to_stderr() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["convert", "--raw", "миллион", "тысяча"]);

    cmd.assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Неправильный порядок"));
}

#[test]
fn test_cli_convert_respects_limits() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["--max-tokens", "2", "convert", "--raw", "сто", "двадцать", "три"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("max_tokens"));
}

#[test]
fn test_cli_convert_requires_words() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.arg("convert");

    cmd.assert().failure();
}
