// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Which fields a continuation work item inherits from its source.

use serde_json::Value;
use tracing::{debug, warn};

use crate::cache::ProcessCache;
use crate::context::{split_reference_link, ProjectContext};
use crate::error::{Error, Result};
use crate::field::{self, same_field};
use crate::patch::{PatchDocument, PatchOperation};
use crate::process::WorkItemTypeSchema;
use crate::tracker::{ProcessCatalog, WorkItemStore};
use crate::work_item::WorkItem;

/// Fields copied onto every continuation, whatever its type declares.
pub const BASELINE_FIELDS: [&str; 8] = [
    field::TITLE,
    field::ASSIGNED_TO,
    field::ITERATION_PATH,
    field::AREA_PATH,
    field::DESCRIPTION,
    field::ACCEPTANCE_CRITERIA,
    field::REPRO_STEPS,
    field::SYSTEM_INFO,
];

/// Fields never inherited, even when the schema marks them required.
pub const NEVER_COPIED: [&str; 2] = [field::ITERATION_ID, field::STATE];

/// Values that replace the source's on the new work item.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldOverrides {
    /// Ignored when empty.
    pub title: Option<String>,
    pub iteration_path: Option<String>,
}

impl FieldOverrides {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_iteration_path(mut self, path: impl Into<String>) -> Self {
        self.iteration_path = Some(path.into());
        self
    }

    fn value_for(&self, name: &str) -> Option<&str> {
        if same_field(name, field::TITLE) {
            self.title.as_deref().filter(|title| !title.is_empty())
        } else if same_field(name, field::ITERATION_PATH) {
            self.iteration_path.as_deref()
        } else {
            None
        }
    }
}

/// Decides the field list of a continuation and renders its creation patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldCopyPolicy {
    baseline: Vec<String>,
}

impl Default for FieldCopyPolicy {
    fn default() -> Self {
        FieldCopyPolicy {
            baseline: BASELINE_FIELDS.iter().map(|name| name.to_string()).collect(),
        }
    }
}

impl FieldCopyPolicy {
    /// Adds fields to the baseline, skipping ones already present and the
    /// ones never copied.
    pub fn with_extra_fields<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !is_never_copied(&name) {
                push_unique(&mut self.baseline, name);
            }
        }
        self
    }

    pub fn baseline(&self) -> &[String] {
        &self.baseline
    }

    /// The ordered, duplicate-free list of fields to copy.
    ///
    /// Without a schema only the baseline (and tags) are copied.
    pub fn fields_to_copy(
        &self,
        schema: Option<&WorkItemTypeSchema>,
        copy_tags: bool,
    ) -> Vec<String> {
        let mut fields = self.baseline.clone();
        if let Some(schema) = schema {
            for descriptor in schema.required_fields() {
                let name = &descriptor.reference_name;
                if is_never_copied(name) {
                    continue;
                }
                push_unique(&mut fields, name.clone());
            }
        }
        if copy_tags {
            push_unique(&mut fields, field::TAGS.to_string());
        }
        fields
    }

    /// One `add` per field, then the audit comment on the history field.
    pub fn build_patch(
        &self,
        context: &ProjectContext,
        source: &WorkItem,
        fields: &[String],
        overrides: &FieldOverrides,
    ) -> PatchDocument {
        let mut patch: PatchDocument = fields
            .iter()
            .map(|name| {
                let value = match overrides.value_for(name) {
                    Some(value) => Value::from(value),
                    None => match source.fields.get(name) {
                        Some(Value::Null) | None => Value::from(""),
                        Some(value) => value.clone(),
                    },
                };
                PatchOperation::add_field(name, value)
            })
            .collect();
        patch.push(PatchOperation::add_field(
            field::HISTORY,
            continuation_comment(context, source),
        ));
        patch
    }
}

/// Audit comment written on the new work item.
pub fn continuation_comment(context: &ProjectContext, source: &WorkItem) -> String {
    format!(
        "This work item was {} from work item {}: {}",
        split_reference_link(),
        context.work_item_link(source.id),
        source.title()
    )
}

fn is_never_copied(name: &str) -> bool {
    NEVER_COPIED.iter().any(|never| same_field(never, name))
}

fn push_unique(fields: &mut Vec<String>, name: String) {
    if !fields.iter().any(|existing| same_field(existing, &name)) {
        fields.push(name);
    }
}

/// Looks up the schema of `type_name`, once per cache.
///
/// A failed lookup is remembered as `None`.
async fn schema_for<'c, C: ProcessCatalog + ?Sized>(
    catalog: &C,
    project: &str,
    type_name: &str,
    cache: &'c mut ProcessCache,
) -> Result<Option<&'c WorkItemTypeSchema>> {
    if cache.schema(type_name).is_none() {
        let schema = match catalog.work_item_type(project, type_name).await {
            Ok(schema) => Some(schema),
            Err(e) if e.is_not_found() => return Err(e),
            Err(e) => {
                let e = Error::SchemaUnavailable {
                    type_name: type_name.to_string(),
                    reason: e.to_string(),
                };
                warn!(error = %e, "copying baseline fields only");
                None
            }
        };
        cache.store_schema(type_name, schema);
    }
    Ok(cache.schema(type_name).flatten())
}

/// Creates the continuation of `source` in the context's project.
pub async fn create_continuation<T>(
    tracker: &T,
    context: &ProjectContext,
    policy: &FieldCopyPolicy,
    source: &WorkItem,
    copy_tags: bool,
    overrides: &FieldOverrides,
    cache: &mut ProcessCache,
) -> Result<WorkItem>
where
    T: WorkItemStore + ProcessCatalog + ?Sized,
{
    let type_name = source.work_item_type();
    let schema = schema_for(tracker, &context.project, type_name, cache).await?;
    let fields = policy.fields_to_copy(schema, copy_tags);
    debug!(source = source.id, fields = fields.len(), "creating continuation");

    let patch = policy.build_patch(context, source, &fields, overrides);
    tracker
        .create_work_item(&context.project, type_name, &patch)
        .await
}

#[cfg(test)]
#[path = "copy_policy_tests.rs"]
mod tests;
