// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! In-memory tracker backed by a serializable snapshot.
//!
//! Implements every collaborator trait so the engine can run without a live
//! service: the CLI loads a snapshot from disk, tests build one in code.
//! Patch documents are validated against a copy of the work item and only
//! committed when every operation applies.

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tokio::sync::Mutex;

use crate::error::{Error, Result};
use crate::field;
use crate::patch::{PatchDocument, PatchOp, PatchPath};
use crate::process::{FieldDescriptor, Iteration, StateDescriptor, WorkItemTypeSchema};
use crate::relation::Relation;
use crate::tracker::{Expand, IterationSchedule, ProcessCatalog, WorkItemStore};
use crate::work_item::{WorkItem, WorkItemId};

const DEFAULT_INITIAL_STATE: &str = "New";

/// A work item type with its fields and states.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkItemTypeRecord {
    pub name: String,
    #[serde(default)]
    pub fields: Vec<FieldDescriptor>,
    #[serde(default)]
    pub states: Vec<StateDescriptor>,
}

/// A team and its ordered iteration schedule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    pub name: String,
    #[serde(default)]
    pub iterations: Vec<Iteration>,
}

/// Everything the in-memory tracker knows about one project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerSnapshot {
    pub project: String,
    #[serde(default)]
    pub work_items: Vec<WorkItem>,
    #[serde(default)]
    pub work_item_types: Vec<WorkItemTypeRecord>,
    #[serde(default)]
    pub teams: Vec<TeamRecord>,
}

impl TrackerSnapshot {
    pub fn new(project: impl Into<String>) -> Self {
        TrackerSnapshot {
            project: project.into(),
            ..Default::default()
        }
    }

    /// Reads a snapshot from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Writes the snapshot as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    fn find(&self, id: WorkItemId) -> Result<&WorkItem> {
        self.work_items
            .iter()
            .find(|item| item.id == id)
            .ok_or(Error::WorkItemNotFound(id))
    }

    fn find_type(&self, project: &str, type_name: &str) -> Result<&WorkItemTypeRecord> {
        if project == self.project {
            if let Some(record) = self
                .work_item_types
                .iter()
                .find(|record| field::same_field(&record.name, type_name))
            {
                return Ok(record);
            }
        }
        Err(Error::TypeNotFound {
            project: project.to_string(),
            name: type_name.to_string(),
        })
    }
}

/// A mutating call recorded by [`MemoryTracker`].
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub id: WorkItemId,
    pub patch: PatchDocument,
    pub created: bool,
}

/// Tracker that keeps its state in memory.
pub struct MemoryTracker {
    inner: Mutex<Inner>,
}

struct Inner {
    snapshot: TrackerSnapshot,
    mutations: Vec<Mutation>,
    failing_updates: HashSet<WorkItemId>,
    catalog_unavailable: bool,
    catalog_calls: usize,
}

impl MemoryTracker {
    pub fn new(snapshot: TrackerSnapshot) -> Self {
        MemoryTracker {
            inner: Mutex::new(Inner {
                snapshot,
                mutations: Vec::new(),
                failing_updates: HashSet::new(),
                catalog_unavailable: false,
                catalog_calls: 0,
            }),
        }
    }

    /// Opens a tracker from a snapshot file.
    pub fn open(path: &Path) -> Result<Self> {
        Ok(MemoryTracker::new(TrackerSnapshot::load(path)?))
    }

    /// A copy of the current state.
    pub async fn snapshot(&self) -> TrackerSnapshot {
        self.inner.lock().await.snapshot.clone()
    }

    /// Every update and create applied so far, in order.
    pub async fn mutations(&self) -> Vec<Mutation> {
        self.inner.lock().await.mutations.clone()
    }

    /// Number of type schema and state lookups served.
    pub async fn catalog_calls(&self) -> usize {
        self.inner.lock().await.catalog_calls
    }

    /// Makes every later update of `id` fail.
    pub async fn fail_updates_for(&self, id: WorkItemId) {
        self.inner.lock().await.failing_updates.insert(id);
    }

    /// Makes every later type schema and state lookup fail.
    pub async fn set_catalog_unavailable(&self, unavailable: bool) {
        self.inner.lock().await.catalog_unavailable = unavailable;
    }
}

#[async_trait]
impl WorkItemStore for MemoryTracker {
    async fn work_item(&self, id: WorkItemId, expand: Expand) -> Result<WorkItem> {
        let inner = self.inner.lock().await;
        let mut item = inner.snapshot.find(id)?.clone();
        if expand == Expand::None {
            item.relations.clear();
        }
        Ok(item)
    }

    async fn work_items(&self, ids: &[WorkItemId]) -> Result<Vec<WorkItem>> {
        let inner = self.inner.lock().await;
        ids.iter()
            .map(|id| {
                let mut item = inner.snapshot.find(*id)?.clone();
                item.relations.clear();
                Ok(item)
            })
            .collect()
    }

    async fn update_work_item(&self, id: WorkItemId, patch: &PatchDocument) -> Result<WorkItem> {
        let mut inner = self.inner.lock().await;
        if inner.failing_updates.contains(&id) {
            return Err(Error::Store(format!("update of #{id} rejected")));
        }
        let current = inner.snapshot.find(id)?;
        let updated = apply_patch(current, patch)?;
        if let Some(slot) = inner.snapshot.work_items.iter_mut().find(|item| item.id == id) {
            *slot = updated.clone();
        }
        inner.mutations.push(Mutation {
            id,
            patch: patch.clone(),
            created: false,
        });
        Ok(updated)
    }

    async fn create_work_item(
        &self,
        project: &str,
        work_item_type: &str,
        patch: &PatchDocument,
    ) -> Result<WorkItem> {
        let mut inner = self.inner.lock().await;
        let record = inner.snapshot.find_type(project, work_item_type)?;
        let initial_state = record
            .states
            .first()
            .map_or(DEFAULT_INITIAL_STATE, |state| state.name.as_str())
            .to_string();
        let type_name = record.name.clone();

        let id = inner
            .snapshot
            .work_items
            .iter()
            .map(|item| item.id)
            .max()
            .unwrap_or(0)
            + 1;
        let now = Utc::now().to_rfc3339();
        let mut blank = WorkItem::new(id)
            .with_field(field::WORK_ITEM_TYPE, type_name)
            .with_field(field::STATE, initial_state)
            .with_field(field::CREATED_DATE, now);
        blank.rev = 0;

        let created = apply_patch(&blank, patch)?;
        inner.snapshot.work_items.push(created.clone());
        inner.mutations.push(Mutation {
            id,
            patch: patch.clone(),
            created: true,
        });
        Ok(created)
    }
}

#[async_trait]
impl ProcessCatalog for MemoryTracker {
    async fn work_item_type(&self, project: &str, type_name: &str) -> Result<WorkItemTypeSchema> {
        let mut inner = self.inner.lock().await;
        inner.catalog_calls += 1;
        if inner.catalog_unavailable {
            return Err(Error::Store("process catalog unavailable".into()));
        }
        let record = inner.snapshot.find_type(project, type_name)?;
        Ok(WorkItemTypeSchema {
            name: record.name.clone(),
            fields: record.fields.clone(),
        })
    }

    async fn work_item_type_states(
        &self,
        project: &str,
        type_name: &str,
    ) -> Result<Vec<StateDescriptor>> {
        let mut inner = self.inner.lock().await;
        inner.catalog_calls += 1;
        if inner.catalog_unavailable {
            return Err(Error::Store("process catalog unavailable".into()));
        }
        Ok(inner.snapshot.find_type(project, type_name)?.states.clone())
    }
}

#[async_trait]
impl IterationSchedule for MemoryTracker {
    async fn team_iterations(&self, project: &str, team: &str) -> Result<Vec<Iteration>> {
        let inner = self.inner.lock().await;
        inner
            .snapshot
            .teams
            .iter()
            .find(|record| project == inner.snapshot.project && record.name == team)
            .map(|record| record.iterations.clone())
            .ok_or_else(|| Error::TeamNotFound {
                project: project.to_string(),
                team: team.to_string(),
            })
    }
}

/// Applies every operation of `patch` to a copy of `item`.
fn apply_patch(item: &WorkItem, patch: &PatchDocument) -> Result<WorkItem> {
    let mut next = item.clone();
    for operation in patch {
        match (operation.op, operation.target()) {
            (PatchOp::Add, PatchPath::Field(name)) => {
                next.fields
                    .set(name, operation.value.clone().unwrap_or(Value::Null));
            }
            (PatchOp::Remove, PatchPath::Field(name)) => {
                next.fields.remove(name);
            }
            (PatchOp::Add, PatchPath::AppendRelation) => {
                let value = operation.value.clone().ok_or_else(|| {
                    Error::InvalidPatch("relation add without a value".to_string())
                })?;
                let relation: Relation = serde_json::from_value(value)?;
                if next.relations.iter().any(|r| r.url == relation.url) {
                    return Err(Error::InvalidPatch(format!(
                        "#{} already links {}",
                        item.id, relation.url
                    )));
                }
                next.relations.push(relation);
            }
            (PatchOp::Remove, PatchPath::Relation(index)) => {
                if index >= next.relations.len() {
                    return Err(Error::InvalidPatch(format!(
                        "#{} has no relation at index {}",
                        item.id, index
                    )));
                }
                next.relations.remove(index);
            }
            _ => {
                return Err(Error::InvalidPatch(format!(
                    "unsupported operation {:?} on {}",
                    operation.op, operation.path
                )));
            }
        }
    }
    next.rev += 1;
    next.fields.set(field::CHANGED_DATE, Utc::now().to_rfc3339());
    Ok(next)
}

#[cfg(test)]
#[path = "memory_tests.rs"]
mod tests;
