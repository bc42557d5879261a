// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed relations between work items and attachments.
//!
//! Relations arrive from the store as `{rel, url, attributes}`. They are
//! parsed once, on deserialization, into a [`Relation`] that carries its
//! [`RelationKind`] and, for work item links, the target id extracted from
//! the locator. Serialization restores the wire form.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};
use std::fmt;

use crate::work_item::WorkItemId;

/// Wire name of a link from a child to its parent.
pub const PARENT_LINK_REL: &str = "System.LinkTypes.Hierarchy-Reverse";
/// Wire name of a link from a parent to one of its children.
pub const CHILD_LINK_REL: &str = "System.LinkTypes.Hierarchy-Forward";
/// Wire name of an attached file.
pub const ATTACHMENT_REL: &str = "AttachedFile";

/// Attachment attributes carried over when an attachment is copied.
pub const COPIED_ATTACHMENT_ATTRIBUTES: [&str; 4] = [
    "name",
    "resourceCreatedDate",
    "resourceModifiedDate",
    "resourceSize",
];

/// Classification of a relation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RelationKind {
    /// Reverse hierarchy: the target is this item's parent.
    ParentLink,
    /// Forward hierarchy: the target is one of this item's children.
    ChildLink,
    /// A file attached to this item.
    Attachment,
    /// Any other link type, kept verbatim.
    Other(String),
}

impl RelationKind {
    /// Parses a wire `rel` name. Unknown names become [`RelationKind::Other`].
    pub fn parse(rel: &str) -> Self {
        match rel {
            PARENT_LINK_REL => RelationKind::ParentLink,
            CHILD_LINK_REL => RelationKind::ChildLink,
            ATTACHMENT_REL => RelationKind::Attachment,
            other => RelationKind::Other(other.to_string()),
        }
    }

    /// Returns the wire `rel` name.
    pub fn as_str(&self) -> &str {
        match self {
            RelationKind::ParentLink => PARENT_LINK_REL,
            RelationKind::ChildLink => CHILD_LINK_REL,
            RelationKind::Attachment => ATTACHMENT_REL,
            RelationKind::Other(rel) => rel,
        }
    }

    /// Returns true for kinds whose locator names another work item.
    pub fn links_work_item(&self) -> bool {
        !matches!(self, RelationKind::Attachment)
    }
}

impl fmt::Display for RelationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// What a relation points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RelationTarget {
    /// Another work item, identified by the id at the end of its locator.
    WorkItem(WorkItemId),
    /// An attachment or a locator with no recognizable work item id.
    Opaque,
}

/// A typed link from a work item to another work item or an attachment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "WireRelation", into = "WireRelation")]
pub struct Relation {
    pub kind: RelationKind,
    pub target: RelationTarget,
    /// The locator exactly as the store reported it. Identifies the target.
    pub url: String,
    /// Attributes; only meaningful for attachments.
    pub attributes: Map<String, Value>,
}

impl Relation {
    /// Creates a relation, extracting the target id from `url` when `kind`
    /// links a work item.
    pub fn new(kind: RelationKind, url: impl Into<String>) -> Self {
        let url = url.into();
        let target = if kind.links_work_item() {
            parse_work_item_id(&url).map_or(RelationTarget::Opaque, RelationTarget::WorkItem)
        } else {
            RelationTarget::Opaque
        };
        Relation {
            kind,
            target,
            url,
            attributes: Map::new(),
        }
    }

    pub fn parent(url: impl Into<String>) -> Self {
        Relation::new(RelationKind::ParentLink, url)
    }

    pub fn child(url: impl Into<String>) -> Self {
        Relation::new(RelationKind::ChildLink, url)
    }

    pub fn attachment(url: impl Into<String>) -> Self {
        Relation::new(RelationKind::Attachment, url)
    }

    /// Sets an attribute (builder pattern).
    pub fn with_attribute(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.attributes.insert(name.to_string(), value.into());
        self
    }

    /// Returns the linked work item id, if any.
    pub fn target_id(&self) -> Option<WorkItemId> {
        match self.target {
            RelationTarget::WorkItem(id) => Some(id),
            RelationTarget::Opaque => None,
        }
    }

    /// Returns true if this is a child link to `id`.
    pub fn is_child_link_to(&self, id: WorkItemId) -> bool {
        self.kind == RelationKind::ChildLink && self.target_id() == Some(id)
    }

    /// Copy of this relation keeping only the attachment attributes that
    /// survive a split.
    pub fn with_copied_attributes(&self) -> Relation {
        let attributes = COPIED_ATTACHMENT_ATTRIBUTES
            .iter()
            .filter_map(|name| {
                self.attributes
                    .get(*name)
                    .map(|value| (name.to_string(), value.clone()))
            })
            .collect();
        Relation {
            attributes,
            ..self.clone()
        }
    }

    /// The wire form as a JSON value, for use in patch documents.
    pub fn wire_value(&self) -> Value {
        if self.attributes.is_empty() {
            json!({ "rel": self.kind.as_str(), "url": self.url })
        } else {
            json!({
                "rel": self.kind.as_str(),
                "url": self.url,
                "attributes": Value::Object(self.attributes.clone()),
            })
        }
    }
}

/// Extracts the work item id from the last path segment of a locator.
pub fn parse_work_item_id(url: &str) -> Option<WorkItemId> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Builds the REST locator of a work item under a collection.
pub fn work_item_api_url(collection_uri: &str, id: WorkItemId) -> String {
    format!(
        "{}/_apis/wit/workItems/{}",
        collection_uri.trim_end_matches('/'),
        id
    )
}

#[derive(Serialize, Deserialize)]
struct WireRelation {
    rel: String,
    url: String,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    attributes: Map<String, Value>,
}

impl From<WireRelation> for Relation {
    fn from(wire: WireRelation) -> Self {
        Relation {
            attributes: wire.attributes,
            ..Relation::new(RelationKind::parse(&wire.rel), wire.url)
        }
    }
}

impl From<Relation> for WireRelation {
    fn from(relation: Relation) -> Self {
        WireRelation {
            rel: relation.kind.as_str().to_string(),
            url: relation.url,
            attributes: relation.attributes,
        }
    }
}

#[cfg(test)]
#[path = "relation_tests.rs"]
mod tests;
