// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod children;
pub mod init;
pub mod next_iteration;
pub mod split;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use cleave_core::MemoryTracker;
use std::path::{Path, PathBuf};

use crate::config::{find_work_dir, get_store_path, Config};
use crate::error::Result;

/// Helper to open the tracker snapshot from the current context.
pub fn open_tracker() -> Result<(MemoryTracker, Config, PathBuf)> {
    let work_dir = find_work_dir()?;
    let config = Config::load(&work_dir)?;
    let store_path = get_store_path(&work_dir, &config);
    let tracker = MemoryTracker::open(&store_path)?;
    tracing::debug!(store = %store_path.display(), "opened tracker");
    Ok((tracker, config, store_path))
}

/// Write the tracker's current state back to its snapshot file.
pub async fn save_tracker(tracker: &MemoryTracker, store_path: &Path) -> Result<()> {
    tracker.snapshot().await.save(store_path)?;
    Ok(())
}
