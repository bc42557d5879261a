// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

pub const FIXTURE: &str = include_str!("fixtures/shop.json");

pub fn cleave() -> Command {
    cargo_bin_cmd!("cleave")
}

/// Helper to create a temp directory initialized against the fixture snapshot
pub fn init_temp() -> TempDir {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("shop.json"), FIXTURE).unwrap();
    cleave()
        .arg("init")
        .arg("--project")
        .arg("Shop")
        .arg("--team")
        .arg("Shop Team")
        .arg("--collection-uri")
        .arg("https://dev.azure.com/contoso/")
        .arg("--store")
        .arg("shop.json")
        .current_dir(temp.path())
        .assert()
        .success();
    temp
}

/// Reads the snapshot back as JSON
pub fn snapshot(temp: &TempDir) -> serde_json::Value {
    let content = std::fs::read_to_string(temp.path().join("shop.json")).unwrap();
    serde_json::from_str(&content).unwrap()
}

/// Finds a work item in a snapshot
pub fn work_item(snapshot: &serde_json::Value, id: u64) -> serde_json::Value {
    snapshot["work_items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|item| item["id"] == id)
        .cloned()
        .unwrap()
}

/// Ids linked from a work item with the given relation name
pub fn linked_ids(item: &serde_json::Value, rel: &str) -> Vec<u64> {
    item["relations"]
        .as_array()
        .map(|relations| {
            relations
                .iter()
                .filter(|relation| relation["rel"] == rel)
                .filter_map(|relation| relation["url"].as_str())
                .filter_map(|url| url.rsplit('/').next()?.parse().ok())
                .collect()
        })
        .unwrap_or_default()
}
