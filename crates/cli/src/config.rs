// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `.cleave/config.toml` and includes:
//! - `collection_uri`: web root of the collection, used in audit comment links
//! - `project` and `team`: whose work items and iteration schedule to use
//! - `store`: optional path of the tracker snapshot
//! - `copy_fields`: extra fields every continuation inherits

use cleave_core::{FieldCopyPolicy, ProjectContext};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

const WORK_DIR_NAME: &str = ".cleave";
const CONFIG_FILE_NAME: &str = "config.toml";
const STORE_FILE_NAME: &str = "tracker.json";

pub const DEFAULT_COLLECTION_URI: &str = "http://localhost:8080/tfs/DefaultCollection/";

/// Project configuration stored in `.cleave/config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_collection_uri")]
    pub collection_uri: String,
    pub project: String,
    pub team: String,
    /// Optional path for the tracker snapshot (relative to project root or absolute).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store: Option<String>,
    /// Reference names appended to the baseline of copied fields.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub copy_fields: Vec<String>,
}

fn default_collection_uri() -> String {
    DEFAULT_COLLECTION_URI.to_string()
}

impl Config {
    /// Creates a config for `project` and `team`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::FieldEmpty`] if either is blank.
    pub fn new(project: String, team: String) -> Result<Self> {
        let config = Config {
            collection_uri: default_collection_uri(),
            project,
            team,
            store: None,
            copy_fields: Vec::new(),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.project.trim().is_empty() {
            return Err(Error::FieldEmpty { field: "project" });
        }
        if self.team.trim().is_empty() {
            return Err(Error::FieldEmpty { field: "team" });
        }
        Ok(())
    }

    /// Loads configuration from the given `.cleave/` directory.
    pub fn load(work_dir: &Path) -> Result<Self> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = fs::read_to_string(&config_path)
            .map_err(|e| Error::Config(format!("failed to read config: {}", e)))?;
        let config: Config = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to the given `.cleave/` directory.
    pub fn save(&self, work_dir: &Path) -> Result<()> {
        let config_path = work_dir.join(CONFIG_FILE_NAME);
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("failed to serialize config: {}", e)))?;
        fs::write(&config_path, content)?;
        Ok(())
    }

    pub fn context(&self) -> ProjectContext {
        ProjectContext::new(&self.collection_uri, &self.project, &self.team)
    }

    pub fn policy(&self) -> FieldCopyPolicy {
        FieldCopyPolicy::default().with_extra_fields(self.copy_fields.iter().cloned())
    }
}

/// Find the .cleave directory by walking up from the current directory
pub fn find_work_dir() -> Result<PathBuf> {
    let mut current = std::env::current_dir()?;
    loop {
        let work_dir = current.join(WORK_DIR_NAME);
        if work_dir.is_dir() {
            return Ok(work_dir);
        }
        if !current.pop() {
            return Err(Error::NotInitialized);
        }
    }
}

/// Get the tracker snapshot path from config
pub fn get_store_path(work_dir: &Path, config: &Config) -> PathBuf {
    match &config.store {
        Some(store) => {
            let store_path = Path::new(store);
            if store_path.is_absolute() {
                store_path.to_path_buf()
            } else {
                // Relative to work_dir's parent (the project root)
                work_dir.parent().unwrap_or(work_dir).join(store)
            }
        }
        None => work_dir.join(STORE_FILE_NAME),
    }
}

/// Initialize a new .cleave directory at the given path
pub fn init_work_dir(path: &Path, config: &Config) -> Result<PathBuf> {
    let work_dir = path.join(WORK_DIR_NAME);

    if work_dir.join(CONFIG_FILE_NAME).exists() {
        return Err(Error::AlreadyInitialized(work_dir.display().to_string()));
    }

    fs::create_dir_all(&work_dir)?;
    config.save(&work_dir)?;

    Ok(work_dir)
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
