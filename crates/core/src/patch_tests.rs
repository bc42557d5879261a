// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::relation::work_item_api_url;
use serde_json::json;
use yare::parameterized;

#[parameterized(
    field = { "/fields/System.Title", PatchPath::Field("System.Title") },
    append = { "/relations/-", PatchPath::AppendRelation },
    index = { "/relations/3", PatchPath::Relation(3) },
    bad_index = { "/relations/x", PatchPath::Unknown },
    empty_field = { "/fields/", PatchPath::Unknown },
    other = { "/rev", PatchPath::Unknown },
)]
fn parses_paths(path: &str, expected: PatchPath<'static>) {
    let op = PatchOperation {
        op: PatchOp::Add,
        path: path.to_string(),
        value: None,
    };
    assert_eq!(op.target(), expected);
}

#[test]
fn field_operation_wire_shape() {
    let op = PatchOperation::add_field("System.Title", "Card form");
    assert_eq!(
        serde_json::to_value(&op).unwrap(),
        json!({ "op": "add", "path": "/fields/System.Title", "value": "Card form" })
    );
}

#[test]
fn remove_operation_has_no_value() {
    let op = PatchOperation::remove_relation(2);
    assert_eq!(
        serde_json::to_value(&op).unwrap(),
        json!({ "op": "remove", "path": "/relations/2" })
    );
}

#[test]
fn relation_operation_appends_wire_relation() {
    let relation = crate::relation::Relation::child(work_item_api_url("https://x", 5));
    let op = PatchOperation::add_relation(&relation);
    assert_eq!(op.target(), PatchPath::AppendRelation);
    assert_eq!(op.value.unwrap()["url"], "https://x/_apis/wit/workItems/5");
}

#[test]
fn document_serializes_as_array_in_order() {
    let doc: PatchDocument = vec![
        PatchOperation::remove_relation(4),
        PatchOperation::remove_relation(1),
        PatchOperation::add_field("System.History", "moved"),
    ]
    .into_iter()
    .collect();

    let value = serde_json::to_value(&doc).unwrap();
    let paths: Vec<&str> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|op| op["path"].as_str().unwrap())
        .collect();
    assert_eq!(paths, vec!["/relations/4", "/relations/1", "/fields/System.History"]);
}
