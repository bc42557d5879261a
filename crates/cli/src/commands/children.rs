// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::{DialogSession, MemoryTracker, ProjectContext, WorkItemId};

use crate::cli::OutputFormat;
use crate::display::format_children;
use crate::error::Result;

use super::open_tracker;

pub async fn run(id: WorkItemId, output: OutputFormat) -> Result<()> {
    let (tracker, config, _) = open_tracker()?;
    println!(
        "{}",
        run_impl(&tracker, &config.context(), id, output).await?
    );
    Ok(())
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) async fn run_impl(
    tracker: &MemoryTracker,
    context: &ProjectContext,
    id: WorkItemId,
    output: OutputFormat,
) -> Result<String> {
    let session = DialogSession::load(tracker, context, id).await?;
    match output {
        OutputFormat::Text => Ok(format_children(session.state())),
        OutputFormat::Json => Ok(serde_json::to_string(session.state())?),
    }
}

#[cfg(test)]
#[path = "children_tests.rs"]
mod tests;
