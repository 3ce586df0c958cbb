//! Black-box tests for the `brevity` binary's JSON envelopes and exit codes.

use std::process::Command;

use assert_cmd::cargo;

fn brevity_cmd() -> Command {
    Command::new(cargo::cargo_bin!("brevity"))
}

fn json_stdout(output: &std::process::Output) -> serde_json::Value {
    let stdout = String::from_utf8_lossy(&output.stdout);
    serde_json::from_str(&stdout).expect("valid json envelope")
}

#[test]
fn parse_interpreted_transmission_exits_zero() {
    let output = brevity_cmd()
        .args([
            "parse",
            "--callsign",
            "magic",
            "--output",
            "json",
            "ANYFACE, EAGLE 1 SPIKED 2-7-0",
        ])
        .output()
        .expect("run parse command");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["ok"], true);
    assert_eq!(json["request"]["kind"], "spiked");
    assert_eq!(json["request"]["callsign"], "eagle 1");
    assert_eq!(json["request"]["bearing"], 270);
}

#[test]
fn parse_unaddressed_transmission_exits_one_with_reason() {
    let output = brevity_cmd()
        .args([
            "parse",
            "--callsign",
            "magic",
            "--output",
            "json",
            "Overlord, Eagle 1, radio check",
        ])
        .output()
        .expect("run parse command");

    assert_eq!(output.status.code(), Some(1));
    let json = json_stdout(&output);
    assert_eq!(json["ok"], false);
    assert!(
        json["reason"]
            .as_str()
            .is_some_and(|r| r.contains("not addressed")),
        "unexpected reason: {}",
        json["reason"]
    );
}

#[test]
fn parse_reads_transmission_from_stdin() {
    use std::io::Write;
    use std::process::Stdio;
    let mut child = brevity_cmd()
        .args(["parse", "--callsign", "magic", "--output", "json", "-"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn parse command");
    child
        .stdin
        .take()
        .expect("stdin handle")
        .write_all(b"anyface raven 1 4 spike 0 2 0\n")
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait for parse command");

    assert!(output.status.success());
    let json = json_stdout(&output);
    assert_eq!(json["request"]["kind"], "spiked");
    assert_eq!(json["request"]["callsign"], "raven 1 4");
    assert_eq!(json["request"]["bearing"], 20);
}

#[test]
fn stacks_clusters_altitudes() {
    let output = brevity_cmd()
        .args(["stacks", "--output", "json", "25000", "24000", "10000"])
        .output()
        .expect("run stacks command");

    assert!(output.status.success());
    let json = json_stdout(&output);
    let stacks = json["stacks"].as_array().expect("stacks array");
    assert_eq!(stacks.len(), 2);
    assert_eq!(stacks[0]["altitude_ft"], 25000.0);
    assert_eq!(stacks[0]["count"], 2);
    assert_eq!(stacks[1]["altitude_ft"], 10000.0);
    assert_eq!(stacks[1]["count"], 1);
}
