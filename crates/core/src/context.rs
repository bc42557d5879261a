// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project context and the hyperlinks written into audit comments.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

use crate::work_item::WorkItemId;

/// Reference page linked from every split audit comment.
pub const SPLIT_REFERENCE_URL: &str = "http://aka.ms/split";

/// The collection, project and team a split runs against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectContext {
    /// Web root of the collection (e.g. `https://dev.azure.com/contoso/`).
    pub collection_uri: String,
    pub project: String,
    pub team: String,
}

impl ProjectContext {
    pub fn new(
        collection_uri: impl Into<String>,
        project: impl Into<String>,
        team: impl Into<String>,
    ) -> Self {
        ProjectContext {
            collection_uri: collection_uri.into(),
            project: project.into(),
            team: team.into(),
        }
    }

    /// Web address of a work item's edit form.
    pub fn work_item_web_url(&self, id: WorkItemId) -> String {
        format!(
            "{}/{}/_workitems/edit/{}",
            self.collection_uri.trim_end_matches('/'),
            self.project,
            id
        )
    }

    /// Hyperlink to a work item, labelled with its id.
    pub fn work_item_link(&self, id: WorkItemId) -> String {
        html_link(&self.work_item_web_url(id), id)
    }
}

/// An anchor opening in a new tab.
pub fn html_link(href: &str, text: impl Display) -> String {
    format!("<a href=\"{href}\" target=\"_blank\">{text}</a>")
}

/// The "split" anchor pointing at [`SPLIT_REFERENCE_URL`].
pub fn split_reference_link() -> String {
    html_link(SPLIT_REFERENCE_URL, "split")
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
