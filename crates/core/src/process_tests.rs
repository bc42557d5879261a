// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    proposed = { StateCategory::Proposed, false },
    in_progress = { StateCategory::InProgress, false },
    resolved = { StateCategory::Resolved, false },
    completed = { StateCategory::Completed, true },
    removed = { StateCategory::Removed, true },
    other = { StateCategory::Other, false },
)]
fn done_categories(category: StateCategory, expected: bool) {
    assert_eq!(category.is_done(), expected);
}

#[test]
fn unknown_category_deserializes_as_other() {
    let state: StateDescriptor =
        serde_json::from_str(r#"{ "name": "Parked", "category": "Frozen" }"#).unwrap();
    assert_eq!(state.category, StateCategory::Other);
}

#[test]
fn field_descriptor_uses_camel_case() {
    let field: FieldDescriptor =
        serde_json::from_str(r#"{ "referenceName": "Custom.Risk", "alwaysRequired": true }"#)
            .unwrap();
    assert_eq!(field, FieldDescriptor::new("Custom.Risk", true));
}

#[test]
fn required_fields_keep_declaration_order() {
    let schema = WorkItemTypeSchema {
        name: "Bug".into(),
        fields: vec![
            FieldDescriptor::new("System.Title", true),
            FieldDescriptor::new("System.Tags", false),
            FieldDescriptor::new("Custom.Severity", true),
        ],
    };
    let names: Vec<&str> = schema
        .required_fields()
        .map(|f| f.reference_name.as_str())
        .collect();
    assert_eq!(names, vec!["System.Title", "Custom.Severity"]);
}
