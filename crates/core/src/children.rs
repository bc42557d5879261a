// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolution of the children that are still open and may be moved.

use tracing::debug;

use crate::cache::ProcessCache;
use crate::classifier::{excluded_states, is_eligible};
use crate::error::Result;
use crate::tracker::{ProcessCatalog, WorkItemStore};
use crate::work_item::{WorkItem, WorkItemId};

/// The children of a parent, split by eligibility.
#[derive(Debug, Clone, PartialEq)]
pub enum ChildSelection {
    /// The parent has no child links at all.
    NoChildren,
    Children {
        /// Open children, in fetch order.
        eligible: Vec<WorkItem>,
        /// Every child fetched, eligible or not.
        fetched: Vec<WorkItemId>,
    },
}

impl ChildSelection {
    pub fn eligible(&self) -> &[WorkItem] {
        match self {
            ChildSelection::NoChildren => &[],
            ChildSelection::Children { eligible, .. } => eligible,
        }
    }

    pub fn eligible_ids(&self) -> Vec<WorkItemId> {
        self.eligible().iter().map(|item| item.id).collect()
    }
}

/// Fetches the children of `parent` and keeps the ones not in a done state.
///
/// `parent` must have been fetched with its relations expanded.
pub async fn resolve_eligible_children<T>(
    tracker: &T,
    project: &str,
    parent: &WorkItem,
    cache: &mut ProcessCache,
) -> Result<ChildSelection>
where
    T: WorkItemStore + ProcessCatalog + ?Sized,
{
    let child_ids = parent.child_ids();
    if child_ids.is_empty() {
        debug!(parent = parent.id, "no children");
        return Ok(ChildSelection::NoChildren);
    }

    let children = tracker.work_items(&child_ids).await?;
    let fetched = children.iter().map(|child| child.id).collect();

    let mut eligible = Vec::new();
    for child in children {
        let excluded = excluded_states(tracker, project, child.work_item_type(), cache).await;
        if is_eligible(child.state(), &excluded) {
            eligible.push(child);
        }
    }
    debug!(
        parent = parent.id,
        eligible = eligible.len(),
        "resolved eligible children"
    );

    Ok(ChildSelection::Children { eligible, fetched })
}

#[cfg(test)]
#[path = "children_tests.rs"]
mod tests;
