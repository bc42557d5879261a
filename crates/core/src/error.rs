// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for cleave-core operations.

use thiserror::Error;

use crate::migrate::MigrationStage;
use crate::work_item::WorkItemId;

/// All possible errors that can occur while reading or splitting work items.
#[derive(Debug, Error)]
pub enum Error {
    #[error("work item not found: #{0}")]
    WorkItemNotFound(WorkItemId),

    #[error("work item type not found: '{name}' in project '{project}'")]
    TypeNotFound { project: String, name: String },

    #[error("team not found: '{team}' in project '{project}'")]
    TeamNotFound { project: String, team: String },

    #[error("schema unavailable for work item type '{type_name}': {reason}")]
    SchemaUnavailable { type_name: String, reason: String },

    #[error("work item #{child} is not a child of #{parent}\n  hint: only open children of the split work item can be moved")]
    NotAChild {
        parent: WorkItemId,
        child: WorkItemId,
    },

    #[error("nothing to split from work item #{0}\n  hint: select at least one child work item")]
    NothingToSplit(WorkItemId),

    #[error("invalid patch: {0}")]
    InvalidPatch(String),

    #[error("store error: {0}")]
    Store(String),

    #[error("relation migration from #{source_id} to #{target_id} failed while {stage}: {cause}\n  hint: work item #{target_id} was created; reconcile its links manually")]
    PartialMigration {
        source_id: WorkItemId,
        target_id: WorkItemId,
        stage: MigrationStage,
        #[source]
        cause: Box<Error>,
    },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Returns true for lookups that found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Error::WorkItemNotFound(_) | Error::TypeNotFound { .. } | Error::TeamNotFound { .. }
        )
    }
}

/// A specialized Result type for cleave-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
