// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Per-session memo of process metadata lookups.
//!
//! A [`ProcessCache`] belongs to one dialog session or one split invocation
//! and is handed to the components that consult the process catalog. It is
//! not shared between concurrent sessions.

use std::collections::HashMap;

use crate::classifier::ExclusionSet;
use crate::process::WorkItemTypeSchema;

#[derive(Debug, Default)]
pub struct ProcessCache {
    exclusions: HashMap<String, ExclusionSet>,
    /// `None` records a schema lookup that failed.
    schemas: HashMap<String, Option<WorkItemTypeSchema>>,
}

impl ProcessCache {
    pub fn new() -> Self {
        ProcessCache::default()
    }

    pub fn exclusion(&self, type_name: &str) -> Option<&ExclusionSet> {
        self.exclusions.get(type_name)
    }

    pub fn store_exclusion(&mut self, type_name: &str, set: ExclusionSet) {
        self.exclusions.insert(type_name.to_string(), set);
    }

    /// The memoized schema lookup: `Some(None)` if it was tried and failed.
    pub fn schema(&self, type_name: &str) -> Option<Option<&WorkItemTypeSchema>> {
        self.schemas.get(type_name).map(Option::as_ref)
    }

    pub fn store_schema(&mut self, type_name: &str, schema: Option<WorkItemTypeSchema>) {
        self.schemas.insert(type_name.to_string(), schema);
    }
}
