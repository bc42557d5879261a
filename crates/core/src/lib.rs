// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cleave-core: the work item split engine
//!
//! This crate provides the work item model, the collaborator traits the
//! engine drives, an in-memory collaborator, and the components that decide
//! and execute a split: completion classification, child resolution,
//! iteration advancement, field copying, relation migration and the
//! orchestrator that composes them.

pub mod cache;
pub mod children;
pub mod classifier;
pub mod context;
pub mod copy_policy;
pub mod error;
pub mod field;
pub mod iteration;
pub mod memory;
pub mod migrate;
pub mod patch;
pub mod process;
pub mod relation;
pub mod session;
pub mod split;
pub mod tracker;
pub mod work_item;

#[cfg(test)]
mod testing;

pub use cache::ProcessCache;
pub use children::{resolve_eligible_children, ChildSelection};
pub use classifier::{excluded_states, is_eligible, ExclusionSet, DEFAULT_EXCLUDED_STATES};
pub use context::ProjectContext;
pub use copy_policy::{FieldCopyPolicy, FieldOverrides};
pub use error::{Error, Result};
pub use field::Fields;
pub use iteration::{advance, next_iteration_path, Advance};
pub use memory::{MemoryTracker, TrackerSnapshot};
pub use migrate::{migrate_relations, MigrationReport, MigrationStage};
pub use patch::{PatchDocument, PatchOp, PatchOperation};
pub use process::{FieldDescriptor, Iteration, StateCategory, StateDescriptor, WorkItemTypeSchema};
pub use relation::{Relation, RelationKind, RelationTarget};
pub use session::{ChildSummary, DialogAction, DialogSession, DialogState, SplitDraft};
pub use split::{ChildUpdateFailure, SplitOutcome, SplitPhase, SplitRequest, Splitter};
pub use tracker::{Expand, IterationSchedule, ProcessCatalog, Tracker, WorkItemStore};
pub use work_item::{WorkItem, WorkItemId};
