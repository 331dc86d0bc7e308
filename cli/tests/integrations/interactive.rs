use assert_cmd::Command;

#[test]
fn test_repl_help() {
    // The loop itself needs a terminal; check that the command is wired up
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.args(["repl", "--help"]);

    let output = cmd.assert().success();
    output.stdout(predicates::str::contains("exit"));
}

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("numeral").unwrap();
    cmd.arg("--help");

    let output = cmd.assert().success();
    output.stdout(predicates::str::contains("numeral"));
}
