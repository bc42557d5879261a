// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Dialog state for choosing what to split.
//!
//! The state is an immutable snapshot; every user action goes through
//! [`reduce`], which returns the next snapshot. [`DialogSession`] holds the
//! current snapshot together with the process cache of one dialog.

use serde::Serialize;
use tracing::debug;

use crate::cache::ProcessCache;
use crate::children::{resolve_eligible_children, ChildSelection};
use crate::context::ProjectContext;
use crate::copy_policy::FieldCopyPolicy;
use crate::error::{Error, Result};
use crate::split::{SplitOutcome, SplitRequest, Splitter};
use crate::tracker::{Expand, Tracker};
use crate::work_item::{WorkItem, WorkItemId};

/// A child offered for moving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    pub id: WorkItemId,
    pub title: String,
    pub state: String,
}

impl From<&WorkItem> for ChildSummary {
    fn from(item: &WorkItem) -> Self {
        ChildSummary {
            id: item.id,
            title: item.title().to_string(),
            state: item.state().to_string(),
        }
    }
}

/// The editable contents of a ready dialog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SplitDraft {
    pub source_id: WorkItemId,
    pub source_type: String,
    pub source_title: String,
    /// Eligible children in fetch order.
    pub children: Vec<ChildSummary>,
    /// Selected child ids, kept in the order of `children`.
    pub selected: Vec<WorkItemId>,
    pub title: String,
    pub open_new_work_item: bool,
    pub copy_tags: bool,
}

impl SplitDraft {
    /// A draft with every eligible child selected.
    pub fn new(source: &WorkItem, children: Vec<ChildSummary>) -> Self {
        SplitDraft {
            source_id: source.id,
            source_type: source.work_item_type().to_string(),
            source_title: source.title().to_string(),
            selected: children.iter().map(|child| child.id).collect(),
            children,
            title: source.title().to_string(),
            open_new_work_item: true,
            copy_tags: true,
        }
    }

    pub fn is_selected(&self, id: WorkItemId) -> bool {
        self.selected.contains(&id)
    }

    fn offers(&self, id: WorkItemId) -> bool {
        self.children.iter().any(|child| child.id == id)
    }

    pub fn request(&self) -> SplitRequest {
        let request =
            SplitRequest::new(self.source_id, self.selected.clone()).with_copy_tags(self.copy_tags);
        if self.title.is_empty() {
            request
        } else {
            request.with_title(self.title.clone())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum DialogState {
    Loading,
    /// The source has no child links.
    NoChildren { source_id: WorkItemId },
    Ready(SplitDraft),
}

impl DialogState {
    pub fn draft(&self) -> Option<&SplitDraft> {
        match self {
            DialogState::Ready(draft) => Some(draft),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DialogAction {
    Select(WorkItemId),
    Deselect(WorkItemId),
    EditTitle(String),
    SetOpenNewWorkItem(bool),
    SetCopyTags(bool),
}

/// Applies `action` to `state`.
///
/// Actions on a dialog that is not ready, and selections of ids the dialog
/// does not offer, leave the state unchanged.
pub fn reduce(state: &DialogState, action: DialogAction) -> DialogState {
    let DialogState::Ready(draft) = state else {
        return state.clone();
    };
    let mut next = draft.clone();
    match action {
        DialogAction::Select(id) => {
            if !next.offers(id) || next.is_selected(id) {
                return state.clone();
            }
            next.selected = next
                .children
                .iter()
                .map(|child| child.id)
                .filter(|child| *child == id || draft.is_selected(*child))
                .collect();
        }
        DialogAction::Deselect(id) => next.selected.retain(|selected| *selected != id),
        DialogAction::EditTitle(title) => next.title = title,
        DialogAction::SetOpenNewWorkItem(open) => next.open_new_work_item = open,
        DialogAction::SetCopyTags(copy_tags) => next.copy_tags = copy_tags,
    }
    DialogState::Ready(next)
}

/// One open split dialog.
pub struct DialogSession<'a, T: Tracker + ?Sized> {
    tracker: &'a T,
    context: &'a ProjectContext,
    policy: FieldCopyPolicy,
    cache: ProcessCache,
    source_id: WorkItemId,
    state: DialogState,
}

impl<'a, T: Tracker + ?Sized> DialogSession<'a, T> {
    /// Opens a dialog for `source_id`, pre-selecting its open children.
    pub async fn load(
        tracker: &'a T,
        context: &'a ProjectContext,
        source_id: WorkItemId,
    ) -> Result<Self> {
        let mut cache = ProcessCache::new();
        let source = tracker.work_item(source_id, Expand::Relations).await?;
        let selection =
            resolve_eligible_children(tracker, &context.project, &source, &mut cache).await?;

        let state = match selection {
            ChildSelection::NoChildren => DialogState::NoChildren { source_id },
            ChildSelection::Children { eligible, .. } => DialogState::Ready(SplitDraft::new(
                &source,
                eligible.iter().map(ChildSummary::from).collect(),
            )),
        };
        debug!(source = source_id, ?state, "dialog loaded");

        Ok(DialogSession {
            tracker,
            context,
            policy: FieldCopyPolicy::default(),
            cache,
            source_id,
            state,
        })
    }

    pub fn with_policy(mut self, policy: FieldCopyPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn state(&self) -> &DialogState {
        &self.state
    }

    pub fn dispatch(&mut self, action: DialogAction) -> &DialogState {
        self.state = reduce(&self.state, action);
        &self.state
    }

    /// True when the dialog is ready and at least one child is selected.
    pub fn can_split(&self) -> bool {
        self.state
            .draft()
            .is_some_and(|draft| !draft.selected.is_empty())
    }

    pub fn request(&self) -> Result<SplitRequest> {
        match self.state.draft() {
            Some(draft) if !draft.selected.is_empty() => Ok(draft.request()),
            _ => Err(Error::NothingToSplit(self.source_id)),
        }
    }

    /// Splits with the current selection.
    pub async fn split(&mut self) -> Result<SplitOutcome> {
        let request = self.request()?;
        Splitter::new(self.tracker, self.context)
            .with_policy(self.policy.clone())
            .split(&request, &mut self.cache)
            .await
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
