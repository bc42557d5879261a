// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Process metadata: work item type schemas, state taxonomy, iterations.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A field declared by a work item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldDescriptor {
    pub reference_name: String,
    #[serde(default)]
    pub always_required: bool,
}

impl FieldDescriptor {
    pub fn new(reference_name: impl Into<String>, always_required: bool) -> Self {
        FieldDescriptor {
            reference_name: reference_name.into(),
            always_required,
        }
    }
}

/// The field schema of one work item type in one project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemTypeSchema {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
}

impl WorkItemTypeSchema {
    /// Fields that must always carry a value, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &FieldDescriptor> {
        self.fields.iter().filter(|field| field.always_required)
    }
}

/// Meta-state a workflow state belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StateCategory {
    Proposed,
    InProgress,
    Resolved,
    /// Work finished.
    Completed,
    /// Work discarded.
    Removed,
    #[serde(other)]
    Other,
}

impl StateCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StateCategory::Proposed => "Proposed",
            StateCategory::InProgress => "InProgress",
            StateCategory::Resolved => "Resolved",
            StateCategory::Completed => "Completed",
            StateCategory::Removed => "Removed",
            StateCategory::Other => "Other",
        }
    }

    /// Returns true for the categories that mark an item as done.
    pub fn is_done(&self) -> bool {
        matches!(self, StateCategory::Completed | StateCategory::Removed)
    }
}

impl fmt::Display for StateCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A workflow state of a work item type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDescriptor {
    pub name: String,
    pub category: StateCategory,
}

impl StateDescriptor {
    pub fn new(name: impl Into<String>, category: StateCategory) -> Self {
        StateDescriptor {
            name: name.into(),
            category,
        }
    }
}

/// A scheduling period. Order comes from the team schedule that holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Iteration {
    pub path: String,
}

impl Iteration {
    pub fn new(path: impl Into<String>) -> Self {
        Iteration { path: path.into() }
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
