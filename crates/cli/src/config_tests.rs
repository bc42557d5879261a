// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use tempfile::TempDir;
use yare::parameterized;

fn config() -> Config {
    Config::new("Shop".to_string(), "Shop Team".to_string()).unwrap()
}

#[test]
fn init_and_load_config() {
    let temp = TempDir::new().unwrap();
    let work_dir = init_work_dir(temp.path(), &config()).unwrap();

    let loaded = Config::load(&work_dir).unwrap();
    assert_eq!(loaded, config());
    assert_eq!(loaded.collection_uri, DEFAULT_COLLECTION_URI);
}

#[test]
fn already_initialized() {
    let temp = TempDir::new().unwrap();
    init_work_dir(temp.path(), &config()).unwrap();

    let err = init_work_dir(temp.path(), &config()).unwrap_err();
    assert!(err.to_string().contains("already initialized"));
}

#[test]
fn init_succeeds_with_empty_work_dir() {
    let temp = TempDir::new().unwrap();
    let work_dir = temp.path().join(".cleave");
    std::fs::create_dir_all(&work_dir).unwrap();

    init_work_dir(temp.path(), &config()).unwrap();
    assert!(work_dir.join("config.toml").exists());
}

#[parameterized(
    empty_project = { "", "Shop Team", "project" },
    blank_team = { "Shop", "   ", "team" },
)]
fn blank_names_are_rejected(project: &str, team: &str, field: &str) {
    let err = Config::new(project.to_string(), team.to_string()).unwrap_err();
    assert_eq!(err.to_string(), format!("{field} cannot be empty"));
}

#[test]
fn load_rejects_blank_team() {
    let temp = TempDir::new().unwrap();
    std::fs::write(
        temp.path().join("config.toml"),
        "project = \"Shop\"\nteam = \"\"\n",
    )
    .unwrap();
    assert!(matches!(
        Config::load(temp.path()),
        Err(Error::FieldEmpty { field: "team" })
    ));
}

#[test]
fn load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read config"));
}

#[test]
fn load_invalid_toml() {
    let temp = TempDir::new().unwrap();
    std::fs::write(temp.path().join("config.toml"), "project = [").unwrap();
    let err = Config::load(temp.path()).unwrap_err();
    assert!(err.to_string().contains("failed to parse config"));
}

#[test]
fn optional_keys_round_trip() {
    let temp = TempDir::new().unwrap();
    let mut config = config();
    config.collection_uri = "https://dev.azure.com/contoso/".into();
    config.store = Some("data/shop.json".into());
    config.copy_fields = vec!["Custom.Team".into()];
    config.save(temp.path()).unwrap();

    let content = std::fs::read_to_string(temp.path().join("config.toml")).unwrap();
    assert!(content.contains("copy_fields"));
    assert_eq!(Config::load(temp.path()).unwrap(), config);
}

#[test]
fn unset_optional_keys_are_not_written() {
    let toml = toml::to_string(&config()).unwrap();
    assert!(!toml.contains("store"));
    assert!(!toml.contains("copy_fields"));
}

#[parameterized(
    default_store = { None, "/project/.cleave/tracker.json" },
    relative_store = { Some("data/shop.json"), "/project/data/shop.json" },
    absolute_store = { Some("/srv/shop.json"), "/srv/shop.json" },
)]
fn store_path(store: Option<&str>, expected: &str) {
    let mut config = config();
    config.store = store.map(String::from);
    let path = get_store_path(Path::new("/project/.cleave"), &config);
    assert_eq!(path, PathBuf::from(expected));
}

#[test]
fn context_and_policy_follow_config() {
    let mut config = config();
    config.copy_fields = vec!["Custom.Team".into()];

    let context = config.context();
    assert_eq!(context.project, "Shop");
    assert_eq!(context.team, "Shop Team");
    assert_eq!(
        config.policy().baseline().last().map(String::as_str),
        Some("Custom.Team")
    );
}
