// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! cleave - split work items from the command line.
//!
//! This crate provides the `cleave` command, which drives the split engine
//! in `cleave_core` against a tracker snapshot stored as JSON.
//!
//! # Main Components
//!
//! - [`Cli`] - Command line definition
//! - [`Config`] - Project configuration (collection, project, team, store)
//! - [`Error`] - Error types for all operations
//!
//! # Initialization
//!
//! ```rust,ignore
//! use cleave::{find_work_dir, get_store_path, Config};
//! use cleave_core::MemoryTracker;
//!
//! let work_dir = find_work_dir()?;
//! let config = Config::load(&work_dir)?;
//! let tracker = MemoryTracker::open(&get_store_path(&work_dir, &config))?;
//! ```

mod cli;
mod commands;
mod display;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, OutputFormat};
pub use config::{find_work_dir, get_store_path, init_work_dir, Config};
pub use error::{Error, Result};

use commands::split::SplitArgs;

/// Run a parsed command line.
pub async fn run(cli: Cli) -> Result<()> {
    if let Some(directory) = &cli.directory {
        std::env::set_current_dir(directory)?;
    }

    match cli.command {
        Command::Init {
            project,
            team,
            collection_uri,
            store,
        } => commands::init::run(project, team, collection_uri, store),
        Command::Children { id, output } => commands::children::run(id, output).await,
        Command::NextIteration { id } => commands::next_iteration::run(id).await,
        Command::Split {
            id,
            children,
            title,
            no_copy_tags,
            no_open,
            output,
        } => {
            commands::split::run(SplitArgs {
                id,
                children,
                title,
                copy_tags: !no_copy_tags,
                open: !no_open,
                output,
            })
            .await
        }
    }
}
