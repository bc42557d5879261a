// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! End-to-end split of a work item.
//!
//! A split runs through a fixed sequence of phases:
//!
//! ```text
//! Idle -> FetchingSource -> ResolvingIteration -> CreatingTarget
//!      -> MigratingRelations -> ReassigningIterations -> Done
//! ```
//!
//! Everything before `CreatingTarget` is read-only, so an abort there leaves
//! the tracker untouched. Child iteration updates run concurrently and fail
//! independently of each other.

use futures_util::future::join_all;
use std::fmt;
use tracing::{debug, info, warn};

use crate::cache::ProcessCache;
use crate::context::ProjectContext;
use crate::copy_policy::{create_continuation, FieldCopyPolicy, FieldOverrides};
use crate::error::{Error, Result};
use crate::field;
use crate::iteration::next_iteration_path;
use crate::migrate::migrate_relations;
use crate::patch::{PatchDocument, PatchOperation};
use crate::tracker::{Expand, Tracker};
use crate::work_item::{WorkItem, WorkItemId};

/// What to split and how.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitRequest {
    pub source_id: WorkItemId,
    /// Children to move to the new work item.
    pub child_ids: Vec<WorkItemId>,
    pub copy_tags: bool,
    /// Title of the new work item; the source title when `None` or empty.
    pub title: Option<String>,
}

impl SplitRequest {
    pub fn new(source_id: WorkItemId, child_ids: impl Into<Vec<WorkItemId>>) -> Self {
        SplitRequest {
            source_id,
            child_ids: child_ids.into(),
            copy_tags: true,
            title: None,
        }
    }

    pub fn with_copy_tags(mut self, copy_tags: bool) -> Self {
        self.copy_tags = copy_tags;
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitPhase {
    Idle,
    FetchingSource,
    ResolvingIteration,
    CreatingTarget,
    MigratingRelations,
    ReassigningIterations,
    Done,
}

impl SplitPhase {
    pub fn next(self) -> Option<SplitPhase> {
        match self {
            SplitPhase::Idle => Some(SplitPhase::FetchingSource),
            SplitPhase::FetchingSource => Some(SplitPhase::ResolvingIteration),
            SplitPhase::ResolvingIteration => Some(SplitPhase::CreatingTarget),
            SplitPhase::CreatingTarget => Some(SplitPhase::MigratingRelations),
            SplitPhase::MigratingRelations => Some(SplitPhase::ReassigningIterations),
            SplitPhase::ReassigningIterations => Some(SplitPhase::Done),
            SplitPhase::Done => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SplitPhase::Idle => "idle",
            SplitPhase::FetchingSource => "fetching source",
            SplitPhase::ResolvingIteration => "resolving iteration",
            SplitPhase::CreatingTarget => "creating target",
            SplitPhase::MigratingRelations => "migrating relations",
            SplitPhase::ReassigningIterations => "reassigning iterations",
            SplitPhase::Done => "done",
        }
    }

    /// True once the tracker may have been modified.
    pub fn has_mutated(&self) -> bool {
        !matches!(
            self,
            SplitPhase::Idle | SplitPhase::FetchingSource | SplitPhase::ResolvingIteration
        )
    }
}

impl fmt::Display for SplitPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A moved child whose iteration could not be updated.
#[derive(Debug)]
pub struct ChildUpdateFailure {
    pub id: WorkItemId,
    pub error: Error,
}

/// Result of a split that got as far as moving relations.
#[derive(Debug)]
pub struct SplitOutcome {
    /// The new work item as created.
    pub target: WorkItem,
    pub iteration_path: String,
    /// Children moved to the target, in request order.
    pub moved: Vec<WorkItemId>,
    pub failed_updates: Vec<ChildUpdateFailure>,
}

impl SplitOutcome {
    /// True if every moved child reached the new iteration.
    pub fn is_complete(&self) -> bool {
        self.failed_updates.is_empty()
    }
}

/// Runs splits against one tracker and project.
pub struct Splitter<'a, T: Tracker + ?Sized> {
    tracker: &'a T,
    context: &'a ProjectContext,
    policy: FieldCopyPolicy,
}

impl<'a, T: Tracker + ?Sized> Splitter<'a, T> {
    pub fn new(tracker: &'a T, context: &'a ProjectContext) -> Self {
        Splitter {
            tracker,
            context,
            policy: FieldCopyPolicy::default(),
        }
    }

    pub fn with_policy(mut self, policy: FieldCopyPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Splits `request.source_id`, moving `request.child_ids` to a new work
    /// item in the next iteration.
    ///
    /// Fails before any mutation if the source is missing, the team schedule
    /// cannot be read, or a requested id is not a child of the source.
    pub async fn split(
        &self,
        request: &SplitRequest,
        cache: &mut ProcessCache,
    ) -> Result<SplitOutcome> {
        let mut phase = SplitPhase::Idle;
        let result = self.run(request, cache, &mut phase).await;
        match &result {
            Ok(outcome) => info!(
                source = request.source_id,
                target = outcome.target.id,
                iteration = %outcome.iteration_path,
                moved = outcome.moved.len(),
                failed = outcome.failed_updates.len(),
                "split complete"
            ),
            Err(e) => warn!(
                source = request.source_id,
                %phase,
                mutated = phase.has_mutated(),
                error = %e,
                "split aborted"
            ),
        }
        result
    }

    async fn run(
        &self,
        request: &SplitRequest,
        cache: &mut ProcessCache,
        phase: &mut SplitPhase,
    ) -> Result<SplitOutcome> {
        enter(phase);
        let source = self
            .tracker
            .work_item(request.source_id, Expand::Relations)
            .await?;
        let move_set = move_set(&source, &request.child_ids)?;

        enter(phase);
        let iteration_path =
            next_iteration_path(self.tracker, self.context, source.iteration_path()).await?;

        enter(phase);
        let overrides = FieldOverrides {
            title: request.title.clone(),
            iteration_path: Some(iteration_path.clone()),
        };
        let target = create_continuation(
            self.tracker,
            self.context,
            &self.policy,
            &source,
            request.copy_tags,
            &overrides,
            cache,
        )
        .await?;

        enter(phase);
        migrate_relations(self.tracker, self.context, &source, &target, &move_set).await?;

        enter(phase);
        let failed_updates = self.reassign(&move_set, &iteration_path).await;

        enter(phase);
        Ok(SplitOutcome {
            target,
            iteration_path,
            moved: move_set,
            failed_updates,
        })
    }

    /// Moves every child to `iteration_path` concurrently.
    async fn reassign(
        &self,
        children: &[WorkItemId],
        iteration_path: &str,
    ) -> Vec<ChildUpdateFailure> {
        let patch: PatchDocument =
            std::iter::once(PatchOperation::add_field(field::ITERATION_PATH, iteration_path))
                .collect();
        let updates = children.iter().map(|&id| {
            let patch = &patch;
            async move { (id, self.tracker.update_work_item(id, patch).await) }
        });

        join_all(updates)
            .await
            .into_iter()
            .filter_map(|(id, result)| match result {
                Ok(_) => None,
                Err(error) => {
                    warn!(child = id, error = %error, "failed to move child to new iteration");
                    Some(ChildUpdateFailure { id, error })
                }
            })
            .collect()
    }
}

fn enter(phase: &mut SplitPhase) {
    if let Some(next) = phase.next() {
        debug!(from = %phase, to = %next, "split phase");
        *phase = next;
    }
}

/// Deduplicates `requested`, keeping first occurrences, and checks each id
/// is a child of `source`.
fn move_set(source: &WorkItem, requested: &[WorkItemId]) -> Result<Vec<WorkItemId>> {
    if requested.is_empty() {
        return Err(Error::NothingToSplit(source.id));
    }
    let children = source.child_ids();
    let mut move_set = Vec::with_capacity(requested.len());
    for &id in requested {
        if !children.contains(&id) {
            return Err(Error::NotAChild {
                parent: source.id,
                child: id,
            });
        }
        if !move_set.contains(&id) {
            move_set.push(id);
        }
    }
    Ok(move_set)
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
