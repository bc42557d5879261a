// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The work item entity as fetched from the store.
//!
//! Work items are transient copies: they are fetched fresh for every
//! operation and never cached by the engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::field::{self, Fields};
use crate::relation::{Relation, RelationKind};

/// Store-assigned work item identifier.
pub type WorkItemId = u32;

/// A tracked work item: its fields and, when expanded, its relations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkItem {
    pub id: WorkItemId,
    /// Revision counter, bumped by every applied patch.
    #[serde(default)]
    pub rev: u32,
    #[serde(default)]
    pub fields: Fields,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub relations: Vec<Relation>,
}

impl WorkItem {
    pub fn new(id: WorkItemId) -> Self {
        WorkItem {
            id,
            rev: 1,
            fields: Fields::new(),
            relations: Vec::new(),
        }
    }

    /// Sets a field (builder pattern).
    pub fn with_field(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.fields.set(name, value);
        self
    }

    /// Appends a relation (builder pattern).
    pub fn with_relation(mut self, relation: Relation) -> Self {
        self.relations.push(relation);
        self
    }

    pub fn work_item_type(&self) -> &str {
        self.fields.get_str(field::WORK_ITEM_TYPE).unwrap_or_default()
    }

    pub fn title(&self) -> &str {
        self.fields.get_str(field::TITLE).unwrap_or_default()
    }

    pub fn state(&self) -> &str {
        self.fields.get_str(field::STATE).unwrap_or_default()
    }

    pub fn iteration_path(&self) -> &str {
        self.fields.get_str(field::ITERATION_PATH).unwrap_or_default()
    }

    /// Ids of child work items, in relation order.
    pub fn child_ids(&self) -> Vec<WorkItemId> {
        self.relations
            .iter()
            .filter(|relation| relation.kind == RelationKind::ChildLink)
            .filter_map(Relation::target_id)
            .collect()
    }

    /// Id of the parent work item, if linked.
    pub fn parent_id(&self) -> Option<WorkItemId> {
        self.relations
            .iter()
            .find(|relation| relation.kind == RelationKind::ParentLink)
            .and_then(Relation::target_id)
    }
}

#[cfg(test)]
#[path = "work_item_tests.rs"]
mod tests;
