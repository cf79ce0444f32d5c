//! Integration tests for the `tenzies` binary.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use predicates::prelude::*;

fn tenzies() -> Command {
    Command::cargo_bin("tenzies").unwrap()
}

// ---------------------------------------------------------------------------
// state
// ---------------------------------------------------------------------------

#[test]
fn state_prints_fresh_round() {
    let output = tenzies().args(["state", "--seed", "7"]).output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let dice = json["dice"].as_array().unwrap();
    assert_eq!(dice.len(), 10);
    for (i, die) in dice.iter().enumerate() {
        assert_eq!(die["index"], i);
        assert_eq!(die["frozen"], false);
        let v = die["value"].as_u64().unwrap();
        assert!((1..=6).contains(&v));
    }
    assert_eq!(json["roll_count"], 0);
    assert_eq!(json["elapsed_seconds"], 0);
    assert_eq!(json["won"], false);
}

#[test]
fn state_is_deterministic_for_seed() {
    let a = tenzies().args(["state", "-s", "99"]).output().unwrap();
    let b = tenzies().args(["state", "-s", "99"]).output().unwrap();
    assert_eq!(a.stdout, b.stdout);
}

// ---------------------------------------------------------------------------
// simulate
// ---------------------------------------------------------------------------

#[test]
fn simulate_table_output() {
    tenzies()
        .args(["simulate", "--games", "3", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Simulation"))
        .stdout(predicate::str::contains("3 rounds"))
        .stdout(predicate::str::contains("Mean rolls"))
        .stdout(predicate::str::contains("Best score"));
}

#[test]
fn simulate_json_output() {
    let output = tenzies()
        .args(["simulate", "-g", "5", "-s", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["games"], 5);
    let rounds = json["rounds"].as_array().unwrap();
    assert_eq!(rounds.len(), 5);
    for r in rounds {
        let rolls = r["rolls"].as_u64().unwrap();
        assert_eq!(r["score"].as_u64().unwrap(), rolls * 100);
        assert_eq!(r["seconds"].as_u64().unwrap(), rolls);
    }
}

#[test]
fn simulate_seconds_per_roll_scales_time() {
    let output = tenzies()
        .args(["simulate", "-g", "2", "--seconds-per-roll", "3", "--json"])
        .output()
        .unwrap();
    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    for r in json["rounds"].as_array().unwrap() {
        assert_eq!(
            r["seconds"].as_u64().unwrap(),
            r["rolls"].as_u64().unwrap() * 3
        );
    }
}

#[test]
fn simulate_zero_games_fails() {
    tenzies()
        .args(["simulate", "--games", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: --games must be at least 1"));
}

#[test]
fn simulate_roll_limit_fails() {
    tenzies()
        .args(["simulate", "--games", "1", "--max-rolls", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("round not won after 0 rolls"));
}

// ---------------------------------------------------------------------------
// misc
// ---------------------------------------------------------------------------

#[test]
fn help_lists_commands() {
    tenzies()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("play"))
        .stdout(predicate::str::contains("simulate"))
        .stdout(predicate::str::contains("state"));
}

#[test]
fn unknown_command_fails() {
    tenzies().arg("bogus").assert().failure();
}
