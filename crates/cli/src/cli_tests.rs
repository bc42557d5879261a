// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    short = { &["cleave", "-C", "/tmp", "next-iteration", "1"] },
    equals = { &["cleave", "-C=/tmp", "next-iteration", "1"] },
    long = { &["cleave", "--directory", "/tmp", "next-iteration", "1"] },
    after_subcommand = { &["cleave", "next-iteration", "1", "-C", "/tmp"] },
)]
fn parse_directory(args: &[&str]) {
    let cli = Cli::try_parse_from(args).unwrap();
    assert_eq!(cli.directory, Some("/tmp".to_string()));
}

#[test]
fn parse_split_flags() {
    let cli = Cli::try_parse_from([
        "cleave",
        "split",
        "100",
        "--child",
        "101",
        "--child",
        "103",
        "--title",
        "Checkout, part 2",
        "--no-copy-tags",
        "--no-open",
        "-o",
        "json",
    ])
    .unwrap();

    let Command::Split {
        id,
        children,
        title,
        no_copy_tags,
        no_open,
        output,
    } = cli.command
    else {
        unreachable!("parsed a split command");
    };
    assert_eq!(id, 100);
    assert_eq!(children, vec![101, 103]);
    assert_eq!(title.as_deref(), Some("Checkout, part 2"));
    assert!(no_copy_tags);
    assert!(no_open);
    assert_eq!(output, OutputFormat::Json);
}

#[test]
fn split_defaults() {
    let cli = Cli::try_parse_from(["cleave", "split", "100"]).unwrap();
    assert!(matches!(
        cli.command,
        Command::Split {
            ref children,
            title: None,
            no_copy_tags: false,
            no_open: false,
            output: OutputFormat::Text,
            ..
        } if children.is_empty()
    ));
    assert!(!cli.verbose);
}

#[parameterized(
    empty_project = { &["cleave", "init", "--project", "", "--team", "T"] },
    blank_team = { &["cleave", "init", "--project", "P", "--team", "  "] },
    missing_team = { &["cleave", "init", "--project", "P"] },
    bad_id = { &["cleave", "split", "abc"] },
    bad_format = { &["cleave", "children", "1", "-o", "yaml"] },
)]
fn rejects(args: &[&str]) {
    assert!(Cli::try_parse_from(args).is_err());
}
