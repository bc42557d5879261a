// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

mod common;
use common::*;

#[test]
fn creates_work_dir() {
    let temp = TempDir::new().unwrap();

    cleave()
        .args(["init", "--project", "Shop", "--team", "Shop Team"])
        .current_dir(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Initialized cleave"));

    assert!(temp.path().join(".cleave/config.toml").exists());
    assert!(temp.path().join(".cleave/tracker.json").exists());
}

#[test]
fn fails_if_already_initialized() {
    let temp = init_temp();

    cleave()
        .args(["init", "--project", "Shop", "--team", "Shop Team"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("already initialized"));
}

#[test]
fn requires_a_team() {
    let temp = TempDir::new().unwrap();

    cleave()
        .args(["init", "--project", "Shop"])
        .current_dir(temp.path())
        .assert()
        .failure();
    assert!(!temp.path().join(".cleave").exists());
}

#[test]
fn commands_need_init() {
    let temp = TempDir::new().unwrap();

    cleave()
        .args(["children", "100"])
        .current_dir(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("run 'cleave init' first"));
}

#[test]
fn directory_flag_finds_the_project() {
    let temp = init_temp();

    cleave()
        .args(["-C"])
        .arg(temp.path())
        .args(["next-iteration", "100"])
        .assert()
        .success()
        .stdout("Shop\\Sprint 2\n");
}

#[test]
fn finds_work_dir_from_subdirectory() {
    let temp = init_temp();
    let nested = temp.path().join("a/b");
    std::fs::create_dir_all(&nested).unwrap();

    cleave()
        .args(["next-iteration", "100"])
        .current_dir(&nested)
        .assert()
        .success()
        .stdout("Shop\\Sprint 2\n");
}
