use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::new(assert_cmd::cargo_bin!("datis"))
}

#[test]
fn top_level_help() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "View Japanese D-ATIS broadcasts from the terminal",
        ))
        .stdout(predicate::str::contains("view"))
        .stdout(predicate::str::contains("airports"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("datis view RJAA"))
        .stdout(predicate::str::contains("atis.guru"));
}

#[test]
fn top_level_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("datis"));
}

#[test]
fn view_help_shows_flags() {
    cmd()
        .args(["view", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[ICAO]"))
        .stdout(predicate::str::contains("--json"))
        .stdout(predicate::str::contains("--pretty"))
        .stdout(predicate::str::contains("--decoded"))
        .stdout(predicate::str::contains("--base-url <URL>"))
        .stdout(predicate::str::contains("--proxy <URL>"))
        .stdout(predicate::str::contains("--timeout <SECS>"))
        .stdout(predicate::str::contains("[default: 30]"))
        .stdout(predicate::str::contains("Run `datis airports` for the full list"));
}

#[test]
fn airports_lists_all_supported_codes() {
    let output = cmd().arg("airports").assert().success();
    let stdout = String::from_utf8_lossy(&output.get_output().stdout);

    for (code, name) in [
        ("RJTT", "Tokyo Haneda"),
        ("RJAA", "Tokyo Narita"),
        ("RJBB", "Osaka Kansai"),
        ("RJSS", "Sendai"),
        ("RJOO", "Osaka Itami"),
        ("RJFF", "Fukuoka"),
        ("RJFK", "Kagoshima"),
    ] {
        assert!(stdout.contains(code), "missing {code}");
        assert!(stdout.contains(name), "missing {name}");
    }
}

#[test]
fn airports_json_output() {
    cmd()
        .args(["airports", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"RJTT\":\"Tokyo Haneda\""));
}

#[test]
fn view_rejects_unknown_airport() {
    cmd()
        .args(["view", "XXXX"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("unsupported airport code \"XXXX\""));
}

#[test]
fn view_rejects_unknown_airport_before_any_request() {
    // an unreachable base URL must not matter for allow-list rejection
    cmd()
        .args(["view", "ZZZZ", "--base-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(2);
}

#[test]
fn view_json_error_object_on_transport_failure() {
    cmd()
        .args(["view", "RJTT", "--json", "--base-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(3)
        .stdout(predicate::str::contains("\"error\""))
        .stdout(predicate::str::contains("\"kind\""));
}

#[test]
fn view_transport_failure_plain_error() {
    cmd()
        .args(["view", "RJAA", "--base-url", "http://127.0.0.1:1"])
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("error:"));
}
