// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Moving relations from a split work item to its continuation.
//!
//! Moved child links are removed from the source first, then the parent
//! link, the moved child links and the attachments are appended to the
//! target. A failure between the two steps leaves links missing from both
//! items, never duplicated.

use std::fmt;
use tracing::debug;

use crate::context::{split_reference_link, ProjectContext};
use crate::error::{Error, Result};
use crate::field;
use crate::patch::{PatchDocument, PatchOperation};
use crate::relation::{Relation, RelationKind};
use crate::tracker::WorkItemStore;
use crate::work_item::{WorkItem, WorkItemId};

/// The half of a migration that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MigrationStage {
    RemoveFromSource,
    AddToTarget,
}

impl fmt::Display for MigrationStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MigrationStage::RemoveFromSource => write!(f, "removing links from the source"),
            MigrationStage::AddToTarget => write!(f, "adding links to the target"),
        }
    }
}

/// Indices of the child links to any id in `move_set`, highest first.
pub fn removal_indices(relations: &[Relation], move_set: &[WorkItemId]) -> Vec<usize> {
    let mut indices: Vec<usize> = relations
        .iter()
        .enumerate()
        .filter(|(_, relation)| move_set.iter().any(|id| relation.is_child_link_to(*id)))
        .map(|(index, _)| index)
        .collect();
    indices.sort_unstable_by(|a, b| b.cmp(a));
    indices
}

/// The relations of a source partitioned for one move.
#[derive(Debug, Clone, PartialEq)]
pub struct RelationPlan {
    pub parent_links: Vec<Relation>,
    pub child_links: Vec<Relation>,
    /// Attachments with their attributes already reduced.
    pub attachments: Vec<Relation>,
    pub removal_indices: Vec<usize>,
    /// Moved ids in request order.
    pub moved: Vec<WorkItemId>,
}

impl RelationPlan {
    pub fn for_move(source: &WorkItem, move_set: &[WorkItemId]) -> Self {
        let mut plan = RelationPlan {
            parent_links: Vec::new(),
            child_links: Vec::new(),
            attachments: Vec::new(),
            removal_indices: removal_indices(&source.relations, move_set),
            moved: move_set
                .iter()
                .copied()
                .filter(|id| source.relations.iter().any(|r| r.is_child_link_to(*id)))
                .collect(),
        };
        for relation in &source.relations {
            match relation.kind {
                RelationKind::ParentLink => plan.parent_links.push(relation.clone()),
                RelationKind::ChildLink => {
                    if move_set.iter().any(|id| relation.is_child_link_to(*id)) {
                        plan.child_links.push(relation.clone());
                    }
                }
                RelationKind::Attachment => {
                    plan.attachments.push(relation.with_copied_attributes())
                }
                RelationKind::Other(_) => {}
            }
        }
        plan
    }

    /// Parent links, then moved children, then attachments.
    pub fn relations_to_add(&self) -> impl Iterator<Item = &Relation> {
        self.parent_links
            .iter()
            .chain(&self.child_links)
            .chain(&self.attachments)
    }

    /// Removal of the moved child links from the source, with an audit
    /// comment. Empty when nothing is moved.
    pub fn removal_patch(&self, context: &ProjectContext, target_id: WorkItemId) -> PatchDocument {
        if self.removal_indices.is_empty() {
            return PatchDocument::new();
        }
        let mut patch: PatchDocument = self
            .removal_indices
            .iter()
            .map(|index| PatchOperation::remove_relation(*index))
            .collect();
        let moved = self
            .moved
            .iter()
            .map(|id| context.work_item_link(*id))
            .collect::<Vec<_>>()
            .join(", ");
        patch.push(PatchOperation::add_field(
            field::HISTORY,
            format!(
                "The following items were {} to work item {}:<br>&nbsp;&nbsp;{}",
                split_reference_link(),
                context.work_item_link(target_id),
                moved
            ),
        ));
        patch
    }

    pub fn addition_patch(&self) -> PatchDocument {
        self.relations_to_add()
            .map(PatchOperation::add_relation)
            .collect()
    }
}

/// Number of relations taken off the source and put on the target.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MigrationReport {
    pub removed: usize,
    pub added: usize,
}

/// Moves the child links in `move_set` from `source` to `target`, along
/// with copies of the source's parent link and attachments.
///
/// `source` must have been fetched with relations expanded. An empty move
/// set changes nothing. Failures are reported as [`Error::PartialMigration`].
pub async fn migrate_relations<S: WorkItemStore + ?Sized>(
    store: &S,
    context: &ProjectContext,
    source: &WorkItem,
    target: &WorkItem,
    move_set: &[WorkItemId],
) -> Result<MigrationReport> {
    if move_set.is_empty() {
        debug!(source = source.id, "empty move set, relations untouched");
        return Ok(MigrationReport::default());
    }

    let plan = RelationPlan::for_move(source, move_set);
    let partial = |stage, cause| Error::PartialMigration {
        source_id: source.id,
        target_id: target.id,
        stage,
        cause: Box::new(cause),
    };

    let removal = plan.removal_patch(context, target.id);
    if !removal.is_empty() {
        store
            .update_work_item(source.id, &removal)
            .await
            .map_err(|e| partial(MigrationStage::RemoveFromSource, e))?;
    }

    let addition = plan.addition_patch();
    if !addition.is_empty() {
        store
            .update_work_item(target.id, &addition)
            .await
            .map_err(|e| partial(MigrationStage::AddToTarget, e))?;
    }

    let report = MigrationReport {
        removed: plan.removal_indices.len(),
        added: addition.len(),
    };
    debug!(
        source = source.id,
        target = target.id,
        removed = report.removed,
        added = report.added,
        "migrated relations"
    );
    Ok(report)
}

#[cfg(test)]
#[path = "migrate_tests.rs"]
mod tests;
