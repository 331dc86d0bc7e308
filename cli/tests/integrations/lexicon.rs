use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_lexicon_lists_entries() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.arg("lexicon");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("девятнадцать"))
        .stdout(predicate::str::contains("миллиард"))
        .stdout(predicate::str::contains("1000000000"));
}

#[test]
fn test_cli_lexicon_shows_readings() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["lexicon", "двух"]);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("два"))
        .stdout(predicate::str::contains("две"))
        .stdout(predicate::str::contains("родительный"))
        .stdout(predicate::str::contains("предложный"));
}

#[test]
fn test_cli_lexicon_case_forms() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["lexicon", "три", "--case", "genitive"]);

    cmd.assert().success().stdout("трёх, трех\n");
}

#[test]
fn test_cli_lexicon_russian_case_name() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["lexicon", "тысяча", "-c", "творительный"]);

    cmd.assert().success().stdout("тысячей, тысячами\n");
}

#[test]
fn test_cli_lexicon_unknown_word() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["lexicon", "абв"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("не найдено"));
}

#[test]
fn test_cli_lexicon_unknown_case() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["lexicon", "три", "--case", "ablative"]);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unknown case 'ablative'"));
}
