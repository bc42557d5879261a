// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Collaborator interfaces the engine drives.
//!
//! The store, the process catalog and the team schedule are black boxes:
//! each call may suspend on the network, and each patch document is assumed
//! to be applied atomically to a single work item.

use async_trait::async_trait;

use crate::error::Result;
use crate::patch::PatchDocument;
use crate::process::{Iteration, StateDescriptor, WorkItemTypeSchema};
use crate::work_item::{WorkItem, WorkItemId};

/// Whether a fetch should include the relation list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Expand {
    #[default]
    None,
    Relations,
}

/// Reads and writes work items.
#[async_trait]
pub trait WorkItemStore: Send + Sync {
    /// Fetches one work item.
    async fn work_item(&self, id: WorkItemId, expand: Expand) -> Result<WorkItem>;

    /// Fetches several work items (without relations), in the order requested.
    async fn work_items(&self, ids: &[WorkItemId]) -> Result<Vec<WorkItem>>;

    /// Applies a patch document to one work item and returns the result.
    async fn update_work_item(&self, id: WorkItemId, patch: &PatchDocument) -> Result<WorkItem>;

    /// Creates a work item of `work_item_type` from a patch of initial values.
    async fn create_work_item(
        &self,
        project: &str,
        work_item_type: &str,
        patch: &PatchDocument,
    ) -> Result<WorkItem>;
}

/// Reads work item type metadata.
#[async_trait]
pub trait ProcessCatalog: Send + Sync {
    async fn work_item_type(&self, project: &str, type_name: &str) -> Result<WorkItemTypeSchema>;

    async fn work_item_type_states(
        &self,
        project: &str,
        type_name: &str,
    ) -> Result<Vec<StateDescriptor>>;
}

/// Reads a team's iteration schedule.
#[async_trait]
pub trait IterationSchedule: Send + Sync {
    /// The team's iterations in the order the service defines.
    async fn team_iterations(&self, project: &str, team: &str) -> Result<Vec<Iteration>>;
}

/// Everything a split needs from the outside world.
pub trait Tracker: WorkItemStore + ProcessCatalog + IterationSchedule {}

impl<T: WorkItemStore + ProcessCatalog + IterationSchedule + ?Sized> Tracker for T {}
