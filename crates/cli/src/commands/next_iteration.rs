// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::{
    next_iteration_path, Expand, MemoryTracker, ProjectContext, WorkItemId, WorkItemStore,
};

use crate::error::Result;

use super::open_tracker;

pub async fn run(id: WorkItemId) -> Result<()> {
    let (tracker, config, _) = open_tracker()?;
    println!("{}", run_impl(&tracker, &config.context(), id).await?);
    Ok(())
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) async fn run_impl(
    tracker: &MemoryTracker,
    context: &ProjectContext,
    id: WorkItemId,
) -> Result<String> {
    let item = tracker.work_item(id, Expand::None).await?;
    Ok(next_iteration_path(tracker, context, item.iteration_path()).await?)
}

#[cfg(test)]
#[path = "next_iteration_tests.rs"]
mod tests;
