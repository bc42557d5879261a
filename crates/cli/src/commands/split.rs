// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use cleave_core::{
    DialogAction, DialogSession, DialogState, MemoryTracker, SplitOutcome, WorkItemId,
};
use serde::Serialize;

use crate::cli::OutputFormat;
use crate::config::Config;
use crate::display::{format_failure, format_outcome};
use crate::error::{Error, Result};

use super::{open_tracker, save_tracker};

/// Flags of `cleave split`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitArgs {
    pub id: WorkItemId,
    /// Children to move; every open child when empty.
    pub children: Vec<WorkItemId>,
    pub title: Option<String>,
    pub copy_tags: bool,
    pub open: bool,
    pub output: OutputFormat,
}

#[derive(Serialize)]
struct SplitReport<'a> {
    id: WorkItemId,
    title: &'a str,
    iteration_path: &'a str,
    moved: &'a [WorkItemId],
    #[serde(skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    failed: Vec<FailedUpdate>,
}

#[derive(Serialize)]
struct FailedUpdate {
    id: WorkItemId,
    error: String,
}

pub async fn run(args: SplitArgs) -> Result<()> {
    let (tracker, config, store_path) = open_tracker()?;
    let result = run_impl(&tracker, &config, &args).await;
    // A failed split may still have created the new work item.
    if !tracker.mutations().await.is_empty() {
        save_tracker(&tracker, &store_path).await?;
    }
    result
}

/// Internal implementation that accepts the tracker for testing.
pub(crate) async fn run_impl(
    tracker: &MemoryTracker,
    config: &Config,
    args: &SplitArgs,
) -> Result<()> {
    let context = config.context();
    let mut session = DialogSession::load(tracker, &context, args.id)
        .await?
        .with_policy(config.policy());
    for action in actions(session.state(), args)? {
        session.dispatch(action);
    }

    let outcome = session.split().await?;
    let open = session
        .state()
        .draft()
        .is_some_and(|draft| draft.open_new_work_item);

    match args.output {
        OutputFormat::Text => println!("{}", format_outcome(&outcome, &context, open)),
        OutputFormat::Json => {
            let report = SplitReport {
                id: outcome.target.id,
                title: outcome.target.title(),
                iteration_path: &outcome.iteration_path,
                moved: &outcome.moved,
                url: open.then(|| context.work_item_web_url(outcome.target.id)),
                failed: outcome
                    .failed_updates
                    .iter()
                    .map(|failure| FailedUpdate {
                        id: failure.id,
                        error: failure.error.to_string(),
                    })
                    .collect(),
            };
            println!("{}", serde_json::to_string(&report)?);
        }
    }
    for failure in &outcome.failed_updates {
        eprintln!(
            "warning: {}",
            format_failure(failure, &outcome.iteration_path)
        );
    }

    check_complete(&outcome)
}

fn check_complete(outcome: &SplitOutcome) -> Result<()> {
    if outcome.is_complete() {
        Ok(())
    } else {
        Err(Error::IncompleteSplit {
            target: outcome.target.id,
            moved: outcome.moved.len(),
            failed: outcome.failed_updates.len(),
        })
    }
}

/// Dialog actions equivalent to the command line flags.
fn actions(state: &DialogState, args: &SplitArgs) -> Result<Vec<DialogAction>> {
    let mut actions = Vec::new();
    let Some(draft) = state.draft() else {
        return Ok(actions);
    };

    if !args.children.is_empty() {
        if let Some(&child) = args
            .children
            .iter()
            .find(|id| !draft.children.iter().any(|offered| offered.id == **id))
        {
            return Err(Error::ChildNotOffered {
                parent: draft.source_id,
                child,
            });
        }
        actions.extend(
            draft
                .selected
                .iter()
                .filter(|id| !args.children.contains(id))
                .map(|id| DialogAction::Deselect(*id)),
        );
        actions.extend(args.children.iter().map(|id| DialogAction::Select(*id)));
    }
    if let Some(title) = &args.title {
        actions.push(DialogAction::EditTitle(title.clone()));
    }
    actions.push(DialogAction::SetCopyTags(args.copy_tags));
    actions.push(DialogAction::SetOpenNewWorkItem(args.open));
    Ok(actions)
}

#[cfg(test)]
#[path = "split_tests.rs"]
mod tests;
