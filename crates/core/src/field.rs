// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Field reference names and the case-insensitive field map.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

pub const TITLE: &str = "System.Title";
pub const ASSIGNED_TO: &str = "System.AssignedTo";
pub const ITERATION_PATH: &str = "System.IterationPath";
pub const ITERATION_ID: &str = "System.IterationId";
pub const AREA_PATH: &str = "System.AreaPath";
pub const DESCRIPTION: &str = "System.Description";
pub const STATE: &str = "System.State";
pub const TAGS: &str = "System.Tags";
pub const HISTORY: &str = "System.History";
pub const WORK_ITEM_TYPE: &str = "System.WorkItemType";
pub const CREATED_DATE: &str = "System.CreatedDate";
pub const CHANGED_DATE: &str = "System.ChangedDate";
pub const ACCEPTANCE_CRITERIA: &str = "Microsoft.VSTS.Common.AcceptanceCriteria";
pub const REPRO_STEPS: &str = "Microsoft.VSTS.TCM.ReproSteps";
pub const SYSTEM_INFO: &str = "Microsoft.VSTS.TCM.SystemInfo";

/// Compares two field reference names the way the store does (ignoring case).
pub fn same_field(a: &str, b: &str) -> bool {
    a.eq_ignore_ascii_case(b)
}

/// Field values of a work item keyed by reference name.
///
/// Keys keep the casing they were first stored with; lookups ignore case.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fields(BTreeMap<String, Value>);

impl Fields {
    pub fn new() -> Self {
        Fields(BTreeMap::new())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.0.get(name).or_else(|| {
            self.0
                .iter()
                .find(|(key, _)| same_field(key, name))
                .map(|(_, value)| value)
        })
    }

    /// Returns the value as a string slice when it is a JSON string.
    pub fn get_str(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Sets a field, replacing any existing key that differs only in case.
    pub fn set(&mut self, name: &str, value: impl Into<Value>) {
        let key = self.existing_key(name).unwrap_or_else(|| name.to_string());
        self.0.insert(key, value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<Value> {
        let key = self.existing_key(name)?;
        self.0.remove(&key)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.existing_key(name).is_some()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(key, value)| (key.as_str(), value))
    }

    fn existing_key(&self, name: &str) -> Option<String> {
        if self.0.contains_key(name) {
            return Some(name.to_string());
        }
        self.0.keys().find(|key| same_field(key, name)).cloned()
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Fields::new();
        for (name, value) in iter {
            let name: String = name.into();
            fields.set(&name, value);
        }
        fields
    }
}

#[cfg(test)]
#[path = "field_tests.rs"]
mod tests;
