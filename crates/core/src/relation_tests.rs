// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

const ORG: &str = "https://dev.azure.com/contoso/";

#[parameterized(
    parent = { PARENT_LINK_REL, RelationKind::ParentLink },
    child = { CHILD_LINK_REL, RelationKind::ChildLink },
    attachment = { ATTACHMENT_REL, RelationKind::Attachment },
    related = {
        "System.LinkTypes.Related",
        RelationKind::Other("System.LinkTypes.Related".into()),
    },
)]
fn kind_round_trips_wire_name(rel: &str, expected: RelationKind) {
    let kind = RelationKind::parse(rel);
    assert_eq!(kind, expected);
    assert_eq!(kind.as_str(), rel);
}

#[parameterized(
    plain = { "https://dev.azure.com/contoso/_apis/wit/workItems/101", Some(101) },
    trailing_slash = { "https://dev.azure.com/contoso/_apis/wit/workItems/7/", Some(7) },
    guid = { "https://dev.azure.com/contoso/_apis/wit/attachments/0f1e-22aa", None },
    empty = { "", None },
)]
fn parses_id_from_locator(url: &str, expected: Option<WorkItemId>) {
    assert_eq!(parse_work_item_id(url), expected);
}

#[test]
fn work_item_link_carries_target_id() {
    let relation = Relation::child(work_item_api_url(ORG, 101));
    assert_eq!(relation.target, RelationTarget::WorkItem(101));
    assert!(relation.is_child_link_to(101));
    assert!(!relation.is_child_link_to(102));
}

#[test]
fn attachment_target_is_opaque_even_with_numeric_tail() {
    let relation = Relation::attachment("https://files.example/attachments/12345");
    assert_eq!(relation.target, RelationTarget::Opaque);
    assert_eq!(relation.target_id(), None);
}

#[test]
fn parent_link_is_not_a_child_link() {
    let relation = Relation::parent(work_item_api_url(ORG, 50));
    assert_eq!(relation.target_id(), Some(50));
    assert!(!relation.is_child_link_to(50));
}

#[test]
fn deserializes_wire_form_once() {
    let json = r#"{
        "rel": "System.LinkTypes.Hierarchy-Forward",
        "url": "https://dev.azure.com/contoso/_apis/wit/workItems/103",
        "attributes": { "isLocked": false }
    }"#;
    let relation: Relation = serde_json::from_str(json).unwrap();
    assert_eq!(relation.kind, RelationKind::ChildLink);
    assert_eq!(relation.target_id(), Some(103));
    assert_eq!(relation.attributes.len(), 1);
}

#[test]
fn serializes_back_to_wire_form() {
    let relation = Relation::parent(work_item_api_url(ORG, 9));
    let value = serde_json::to_value(&relation).unwrap();
    assert_eq!(value, relation.wire_value());
    assert_eq!(value["rel"], PARENT_LINK_REL);
    assert!(value.get("attributes").is_none());
}

#[test]
fn copied_attachment_keeps_only_known_attributes() {
    let relation = Relation::attachment("https://files.example/a/1")
        .with_attribute("name", "trace.log")
        .with_attribute("resourceSize", 2048)
        .with_attribute("resourceCreatedDate", "2026-01-02T03:04:05Z")
        .with_attribute("resourceModifiedDate", "2026-01-03T03:04:05Z")
        .with_attribute("comment", "from the crash on staging")
        .with_attribute("id", 77);

    let copied = relation.with_copied_attributes();
    let mut names: Vec<&str> = copied.attributes.keys().map(String::as_str).collect();
    names.sort_unstable();
    assert_eq!(
        names,
        vec!["name", "resourceCreatedDate", "resourceModifiedDate", "resourceSize"]
    );
    assert_eq!(copied.url, relation.url);
    assert_eq!(copied.kind, RelationKind::Attachment);
}

#[test]
fn api_url_normalizes_trailing_slash() {
    assert_eq!(
        work_item_api_url("https://dev.azure.com/contoso/", 5),
        "https://dev.azure.com/contoso/_apis/wit/workItems/5"
    );
    assert_eq!(
        work_item_api_url("https://dev.azure.com/contoso", 5),
        "https://dev.azure.com/contoso/_apis/wit/workItems/5"
    );
}
