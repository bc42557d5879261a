// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Patch documents: the wire shape of every mutation the engine submits.
//!
//! A [`PatchDocument`] is an ordered list of add/remove operations applied
//! to exactly one work item.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::relation::Relation;

const FIELDS_PREFIX: &str = "/fields/";
const RELATIONS_PREFIX: &str = "/relations/";
const APPEND_RELATION_PATH: &str = "/relations/-";

/// The operation of a single patch entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatchOp {
    Add,
    Remove,
}

/// A single entry of a patch document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatchOperation {
    pub op: PatchOp,
    pub path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

/// What a patch path addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatchPath<'a> {
    /// `/fields/<reference name>`
    Field(&'a str),
    /// `/relations/-`
    AppendRelation,
    /// `/relations/<index>`
    Relation(usize),
    Unknown,
}

impl PatchOperation {
    /// Sets a field to `value`.
    pub fn add_field(name: &str, value: impl Into<Value>) -> Self {
        PatchOperation {
            op: PatchOp::Add,
            path: format!("{FIELDS_PREFIX}{name}"),
            value: Some(value.into()),
        }
    }

    /// Appends a relation to the end of the relation list.
    pub fn add_relation(relation: &Relation) -> Self {
        PatchOperation {
            op: PatchOp::Add,
            path: APPEND_RELATION_PATH.to_string(),
            value: Some(relation.wire_value()),
        }
    }

    /// Removes the relation at `index`.
    pub fn remove_relation(index: usize) -> Self {
        PatchOperation {
            op: PatchOp::Remove,
            path: format!("{RELATIONS_PREFIX}{index}"),
            value: None,
        }
    }

    /// Parses the path of this operation.
    pub fn target(&self) -> PatchPath<'_> {
        if let Some(name) = self.path.strip_prefix(FIELDS_PREFIX) {
            if name.is_empty() {
                return PatchPath::Unknown;
            }
            return PatchPath::Field(name);
        }
        if self.path == APPEND_RELATION_PATH {
            return PatchPath::AppendRelation;
        }
        match self.path.strip_prefix(RELATIONS_PREFIX).map(str::parse::<usize>) {
            Some(Ok(index)) => PatchPath::Relation(index),
            _ => PatchPath::Unknown,
        }
    }
}

/// An ordered sequence of operations against one work item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PatchDocument(Vec<PatchOperation>);

impl PatchDocument {
    pub fn new() -> Self {
        PatchDocument(Vec::new())
    }

    pub fn push(&mut self, operation: PatchOperation) {
        self.0.push(operation);
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PatchOperation> {
        self.0.iter()
    }

    pub fn operations(&self) -> &[PatchOperation] {
        &self.0
    }
}

impl FromIterator<PatchOperation> for PatchDocument {
    fn from_iter<I: IntoIterator<Item = PatchOperation>>(iter: I) -> Self {
        PatchDocument(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a PatchDocument {
    type Item = &'a PatchOperation;
    type IntoIter = std::slice::Iter<'a, PatchOperation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
#[path = "patch_tests.rs"]
mod tests;
