// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "cleave")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Split a work item, moving its open children to a continuation")]
#[command(
    long_about = "Split a work item, moving its open children to a continuation.\n\n\
    The continuation inherits the required fields, parent link and attachments of the\n\
    original and is scheduled in the team's next iteration."
)]
pub struct Cli {
    /// Run as if cleave was started in <path>
    #[arg(short = 'C', long = "directory", global = true, value_name = "path")]
    pub directory: Option<String>,

    /// Log engine decisions to stderr
    #[arg(long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Initialize cleave in the current directory
    Init {
        /// Project that owns the work items
        #[arg(long, value_parser = non_empty_string)]
        project: String,

        /// Team whose iteration schedule is used
        #[arg(long, value_parser = non_empty_string)]
        team: String,

        /// Web root of the collection, used in audit comment links
        #[arg(long, value_name = "URI")]
        collection_uri: Option<String>,

        /// Tracker snapshot to read and write (relative to the project root or absolute)
        #[arg(long, value_name = "PATH")]
        store: Option<String>,
    },

    /// List the open children a split would move
    Children {
        /// Work item to split
        id: u32,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Print the iteration a split of this work item would move to
    #[command(name = "next-iteration")]
    NextIteration {
        id: u32,
    },

    /// Split a work item
    Split {
        /// Work item to split
        id: u32,

        /// Child to move (repeatable; defaults to every open child)
        #[arg(long = "child", value_name = "ID")]
        children: Vec<u32>,

        /// Title of the new work item (defaults to the original title)
        #[arg(long)]
        title: Option<String>,

        /// Do not copy tags to the new work item
        #[arg(long)]
        no_copy_tags: bool,

        /// Do not print a link to open the new work item
        #[arg(long)]
        no_open: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
