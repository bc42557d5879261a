// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Fixtures shared by the engine tests.

use crate::context::ProjectContext;
use crate::field;
use crate::memory::{MemoryTracker, TeamRecord, TrackerSnapshot, WorkItemTypeRecord};
use crate::process::{FieldDescriptor, Iteration, StateCategory, StateDescriptor};
use crate::relation::{work_item_api_url, Relation};
use crate::work_item::{WorkItem, WorkItemId};

pub const ORG: &str = "https://dev.azure.com/contoso/";
pub const PROJECT: &str = "Shop";
pub const TEAM: &str = "Shop Team";
pub const ATTACHMENT_URL: &str = "https://dev.azure.com/contoso/_apis/wit/attachments/5d1c-77e0";

pub fn context() -> ProjectContext {
    ProjectContext::new(ORG, PROJECT, TEAM)
}

pub fn api_url(id: WorkItemId) -> String {
    work_item_api_url(ORG, id)
}

pub fn story_states() -> Vec<StateDescriptor> {
    vec![
        StateDescriptor::new("New", StateCategory::Proposed),
        StateDescriptor::new("Active", StateCategory::InProgress),
        StateDescriptor::new("Resolved", StateCategory::Resolved),
        StateDescriptor::new("Closed", StateCategory::Completed),
        StateDescriptor::new("Removed", StateCategory::Removed),
    ]
}

pub fn work_item_types() -> Vec<WorkItemTypeRecord> {
    vec![
        WorkItemTypeRecord {
            name: "Feature".into(),
            fields: vec![
                FieldDescriptor::new(field::TITLE, true),
                FieldDescriptor::new(field::STATE, true),
                FieldDescriptor::new(field::ITERATION_ID, true),
                FieldDescriptor::new("system.areapath", true),
                FieldDescriptor::new("Custom.Risk", true),
                FieldDescriptor::new("Custom.Notes", false),
            ],
            states: story_states(),
        },
        WorkItemTypeRecord {
            name: "User Story".into(),
            fields: vec![FieldDescriptor::new(field::TITLE, true)],
            states: story_states(),
        },
        WorkItemTypeRecord {
            name: "Task".into(),
            fields: vec![FieldDescriptor::new(field::TITLE, true)],
            states: vec![
                StateDescriptor::new("To Do", StateCategory::Proposed),
                StateDescriptor::new("Doing", StateCategory::InProgress),
                StateDescriptor::new("Finished", StateCategory::Completed),
            ],
        },
    ]
}

pub fn child(id: WorkItemId, work_item_type: &str, state: &str) -> WorkItem {
    WorkItem::new(id)
        .with_field(field::WORK_ITEM_TYPE, work_item_type)
        .with_field(field::TITLE, format!("Child {id}"))
        .with_field(field::STATE, state)
        .with_field(field::ITERATION_PATH, "Sprint 1")
        .with_relation(Relation::parent(api_url(100)))
}

/// Feature #100 in "Sprint 1" with children #101 (New), #102 (Closed) and
/// #103 (Active), a parent epic #10 and one attachment.
pub fn source() -> WorkItem {
    WorkItem::new(100)
        .with_field(field::WORK_ITEM_TYPE, "Feature")
        .with_field(field::TITLE, "Checkout")
        .with_field(field::STATE, "Active")
        .with_field(field::ITERATION_PATH, "Sprint 1")
        .with_field(field::ITERATION_ID, 4711)
        .with_field(field::AREA_PATH, "Shop\\Payments")
        .with_field(field::ASSIGNED_TO, "Dana")
        .with_field(field::DESCRIPTION, "Pay for the cart")
        .with_field(field::TAGS, "payments")
        .with_field("Custom.Risk", "High")
        .with_relation(Relation::parent(api_url(10)))
        .with_relation(Relation::child(api_url(101)))
        .with_relation(Relation::child(api_url(102)))
        .with_relation(
            Relation::attachment(ATTACHMENT_URL)
                .with_attribute("name", "flow.png")
                .with_attribute("resourceSize", 1024)
                .with_attribute("resourceCreatedDate", "2026-03-01T10:00:00Z")
                .with_attribute("resourceModifiedDate", "2026-03-02T10:00:00Z")
                .with_attribute("comment", "whiteboard"),
        )
        .with_relation(Relation::child(api_url(103)))
}

pub fn snapshot() -> TrackerSnapshot {
    TrackerSnapshot {
        project: PROJECT.into(),
        work_items: vec![
            WorkItem::new(10)
                .with_field(field::WORK_ITEM_TYPE, "Epic")
                .with_field(field::TITLE, "Storefront")
                .with_relation(Relation::child(api_url(100))),
            source(),
            child(101, "User Story", "New"),
            child(102, "User Story", "Closed"),
            child(103, "User Story", "Active"),
        ],
        work_item_types: work_item_types(),
        teams: vec![TeamRecord {
            name: TEAM.into(),
            iterations: vec![Iteration::new("Sprint 1"), Iteration::new("Sprint 2")],
        }],
    }
}

pub fn tracker() -> MemoryTracker {
    MemoryTracker::new(snapshot())
}
