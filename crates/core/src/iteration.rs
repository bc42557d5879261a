// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Advancing a work item to the team's next iteration.
//!
//! "Next" is positional in the schedule the team service returns; dates are
//! not consulted and the schedule is not re-sorted.

use tracing::{debug, warn};

use crate::context::ProjectContext;
use crate::error::Result;
use crate::process::Iteration;
use crate::tracker::IterationSchedule;

/// Where the current iteration sits in a schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance<'a> {
    /// The iteration after the current one.
    Next(&'a str),
    /// The current iteration is the last one scheduled.
    Last(&'a str),
    /// The current iteration is not in the schedule at all.
    Unscheduled(&'a str),
}

impl<'a> Advance<'a> {
    /// The iteration path a split should move work to.
    pub fn path(&self) -> &'a str {
        match *self {
            Advance::Next(path) | Advance::Last(path) | Advance::Unscheduled(path) => path,
        }
    }
}

/// Finds the iteration following `current` in `schedule`.
///
/// Falls back to `current` when it is last or missing.
pub fn advance<'a>(current: &'a str, schedule: &'a [Iteration]) -> Advance<'a> {
    match schedule.iter().position(|iteration| iteration.path == current) {
        Some(index) => match schedule.get(index + 1) {
            Some(next) => Advance::Next(&next.path),
            None => Advance::Last(current),
        },
        None => Advance::Unscheduled(current),
    }
}

/// Fetches the team schedule and returns the path after `current`.
pub async fn next_iteration_path<S: IterationSchedule + ?Sized>(
    schedule: &S,
    context: &ProjectContext,
    current: &str,
) -> Result<String> {
    let iterations = schedule
        .team_iterations(&context.project, &context.team)
        .await?;
    let advance = advance(current, &iterations);
    match advance {
        Advance::Next(next) => debug!(current, next, "advancing iteration"),
        Advance::Last(_) => debug!(current, "already in the last scheduled iteration"),
        // Usually a path mismatch between the work item and the team settings.
        Advance::Unscheduled(_) => warn!(
            current,
            team = %context.team,
            "iteration not in team schedule, keeping it"
        ),
    }
    Ok(advance.path().to_string())
}

#[cfg(test)]
#[path = "iteration_tests.rs"]
mod tests;
