// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::{ChildUpdateFailure, DialogState, ProjectContext, SplitOutcome, WorkItemId};

pub const NO_CHILDREN: &str = "no children to split";

fn id_list(ids: &[WorkItemId]) -> String {
    ids.iter()
        .map(|id| format!("#{id}"))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Format the children a dialog offers, selected ones marked.
pub fn format_children(state: &DialogState) -> String {
    let draft = match state {
        DialogState::Loading => return "loading".to_string(),
        DialogState::NoChildren { .. } => return NO_CHILDREN.to_string(),
        DialogState::Ready(draft) => draft,
    };

    let mut out = format!(
        "#{} {} ({})",
        draft.source_id, draft.source_title, draft.source_type
    );
    if draft.children.is_empty() {
        out.push_str("\n  no open children");
    }
    for child in &draft.children {
        let mark = if draft.is_selected(child.id) { 'x' } else { ' ' };
        out.push_str(&format!(
            "\n  [{}] #{} [{}] {}",
            mark, child.id, child.state, child.title
        ));
    }
    out
}

/// Format a finished split; the web link is included when `open` is set.
pub fn format_outcome(outcome: &SplitOutcome, context: &ProjectContext, open: bool) -> String {
    let mut out = format!(
        "Created #{}: {}\nIteration: {}\nMoved: {}",
        outcome.target.id,
        outcome.target.title(),
        outcome.iteration_path,
        id_list(&outcome.moved)
    );
    if open {
        out.push_str(&format!(
            "\nOpen: {}",
            context.work_item_web_url(outcome.target.id)
        ));
    }
    out
}

pub fn format_failure(failure: &ChildUpdateFailure, iteration_path: &str) -> String {
    format!(
        "failed to move #{} to {}: {}",
        failure.id, iteration_path, failure.error
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
