// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completion classification of work item states.
//!
//! A child is eligible to move unless its state is in the exclusion set of
//! its type: the states whose category is Completed or Removed.

use std::collections::BTreeSet;
use tracing::{debug, warn};

use crate::cache::ProcessCache;
use crate::process::StateDescriptor;
use crate::tracker::ProcessCatalog;

/// States treated as done when a type's states cannot be resolved.
pub const DEFAULT_EXCLUDED_STATES: [&str; 5] = ["Closed", "Removed", "Cut", "Done", "Completed"];

/// State names considered done for one work item type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<String>);

impl ExclusionSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        ExclusionSet(names.into_iter().map(Into::into).collect())
    }

    /// The fixed set used when a type's states are unavailable.
    pub fn fallback() -> Self {
        ExclusionSet::new(DEFAULT_EXCLUDED_STATES)
    }

    /// Names of every state in a done category, or `None` if there are none.
    pub fn from_states(states: &[StateDescriptor]) -> Option<Self> {
        let names: BTreeSet<String> = states
            .iter()
            .filter(|state| state.category.is_done())
            .map(|state| state.name.clone())
            .collect();
        if names.is_empty() {
            None
        } else {
            Some(ExclusionSet(names))
        }
    }

    pub fn contains(&self, state: &str) -> bool {
        self.0.contains(state)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// Returns true if a work item in `state` may be moved.
pub fn is_eligible(state: &str, excluded: &ExclusionSet) -> bool {
    !excluded.contains(state)
}

/// Resolves the exclusion set of `type_name`, consulting the catalog at most
/// once per type for the lifetime of `cache`.
///
/// Never fails: a failed or empty lookup yields [`ExclusionSet::fallback`].
pub async fn excluded_states<C: ProcessCatalog + ?Sized>(
    catalog: &C,
    project: &str,
    type_name: &str,
    cache: &mut ProcessCache,
) -> ExclusionSet {
    if let Some(set) = cache.exclusion(type_name) {
        return set.clone();
    }

    let set = match catalog.work_item_type_states(project, type_name).await {
        Ok(states) => ExclusionSet::from_states(&states).unwrap_or_else(|| {
            debug!(type_name, "no done states declared, using default exclusions");
            ExclusionSet::fallback()
        }),
        Err(e) => {
            warn!(type_name, error = %e, "state lookup failed, using default exclusions");
            ExclusionSet::fallback()
        }
    };
    cache.store_exclusion(type_name, set.clone());
    set
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
