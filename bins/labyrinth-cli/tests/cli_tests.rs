// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
//! End-to-end checks of the `labyrinth` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn labyrinth(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("labyrinth").unwrap();
    cmd.arg("--config-dir").arg(dir.path());
    cmd
}

#[test]
fn show_prints_one_line_per_row_plus_summary() {
    let dir = TempDir::new().unwrap();
    let output = labyrinth(&dir)
        .args(["--width", "12", "--height", "7", "--seed", "9", "show"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<_> = text.lines().collect();
    assert_eq!(lines.len(), 8);
    assert!(lines[..7].iter().all(|l| l.chars().count() == 24));
    assert!(lines[7].starts_with("12x7 seed=9"));
}

#[test]
fn show_is_deterministic_for_a_seed() {
    let dir = TempDir::new().unwrap();
    let run = || labyrinth(&dir).args(["--seed", "31", "show"]).output().unwrap().stdout;
    assert_eq!(run(), run());
}

#[test]
fn layout_json_ends_with_boundary_and_floor() {
    let dir = TempDir::new().unwrap();
    let output = labyrinth(&dir)
        .args(["--width", "8", "--height", "8", "--obstacles", "0", "layout", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let rows: Vec<serde_json::Value> = serde_json::from_slice(&output.stdout).unwrap();
    let kinds: Vec<_> = rows.iter().map(|r| r["kind"].as_str().unwrap().to_owned()).collect();
    assert_eq!(kinds[kinds.len() - 2..], ["boundary", "floor"]);
}

#[test]
fn walk_emits_one_json_row_per_step() {
    let dir = TempDir::new().unwrap();
    let output = labyrinth(&dir)
        .args(["--triggers", "2", "walk", "--steps", "15", "--turn", "-20", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    let rows: Vec<serde_json::Value> =
        text.lines().map(|l| serde_json::from_str(l).unwrap()).collect();
    assert_eq!(rows.len(), 15);
    assert_eq!(rows[14]["step"], 15);
    assert!(rows.iter().all(|r| r["position"][1] == 0.0));
}

#[test]
fn config_save_round_trips_overrides() {
    let dir = TempDir::new().unwrap();
    labyrinth(&dir)
        .args(["--width", "21", "--policy", "clear", "config", "save"])
        .assert()
        .success()
        .stdout(predicate::str::contains("maze.json"));

    labyrinth(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 21"))
        .stdout(predicate::str::contains("clear_on_separation"));

    labyrinth(&dir)
        .args(["--no-config", "config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"width\": 16"));
}

#[test]
fn zero_width_is_rejected() {
    let dir = TempDir::new().unwrap();
    labyrinth(&dir)
        .args(["--width", "0", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid settings"));
}
