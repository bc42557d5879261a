// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::TrackerSnapshot;
use std::fs;
use std::path::Path;

use crate::config::{get_store_path, init_work_dir, Config};
use crate::error::Result;

pub fn run(
    project: String,
    team: String,
    collection_uri: Option<String>,
    store: Option<String>,
) -> Result<()> {
    let target_path = std::env::current_dir()?;
    run_impl(&target_path, project, team, collection_uri, store)
}

/// Internal implementation that accepts the target path for testing.
pub(crate) fn run_impl(
    target_path: &Path,
    project: String,
    team: String,
    collection_uri: Option<String>,
    store: Option<String>,
) -> Result<()> {
    let mut config = Config::new(project, team)?;
    if let Some(uri) = collection_uri {
        config.collection_uri = uri;
    }
    config.store = store;

    let work_dir = init_work_dir(target_path, &config)?;

    // An existing snapshot is adopted as is.
    let store_path = get_store_path(&work_dir, &config);
    if !store_path.exists() {
        if let Some(parent) = store_path.parent() {
            fs::create_dir_all(parent)?;
        }
        TrackerSnapshot::new(&config.project).save(&store_path)?;
    }

    println!("Initialized cleave at {}", work_dir.display());
    println!("Project: {} (team {})", config.project, config.team);
    println!("Store: {}", store_path.display());
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
