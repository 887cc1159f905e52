use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("wbflat").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("wbflat"));
}

#[test]
fn cli_lists_preset_subcommands() {
    let mut cmd = Command::cargo_bin("wbflat").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("imports"))
        .stdout(predicate::str::contains("exports"))
        .stdout(predicate::str::contains("gdp"));
}

#[test]
fn get_requires_an_indicator() {
    let mut cmd = Command::cargo_bin("wbflat").unwrap();
    cmd.args(["get", "--country", "FR", "--date", "2021:2022"]);
    cmd.assert().failure();
}

// Live test (opt-in): cargo test --features online
#[cfg(feature = "online")]
#[test]
fn fetch_online_gdp() {
    let mut cmd = Command::cargo_bin("wbflat").unwrap();
    cmd.args(["gdp", "--country", "FR", "--date", "2021:2022", "--csv"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("NY.GDP.MKTP.CD"));
}
