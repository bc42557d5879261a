// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::WorkItemId;
use thiserror::Error;

/// All possible errors that can occur in the cleave command line.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not initialized: run 'cleave init' first")]
    NotInitialized,

    #[error("already initialized at {0}")]
    AlreadyInitialized(String),

    #[error("{field} cannot be empty")]
    FieldEmpty { field: &'static str },

    #[error("work item #{child} is not an open child of #{parent}\n  hint: run 'cleave children {parent}' to list the children that can be moved")]
    ChildNotOffered {
        parent: WorkItemId,
        child: WorkItemId,
    },

    #[error("split into #{target} finished, but {failed} of {moved} children kept their old iteration")]
    IncompleteSplit {
        target: WorkItemId,
        moved: usize,
        failed: usize,
    },

    #[error(transparent)]
    Core(#[from] cleave_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for cleave operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
