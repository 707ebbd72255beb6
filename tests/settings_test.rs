//! Integration tests for Settings config loading

use std::fs;

use tempfile::TempDir;

use treeboard::application::ApplicationError;
use treeboard::config::Settings;
use treeboard::infrastructure::di::ServiceContainer;

fn write_config(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).expect("write config");
    path
}

#[test]
fn given_explicit_config_when_loading_then_overrides_defaults() {
    // Arrange
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "treeboard.toml",
        r#"
seed = false

[provider]
delay_ms = 0
timeout_ms = 250
"#,
    );

    // Act
    let settings = Settings::load_from(None, Some(&path)).expect("load settings");

    // Assert
    assert!(!settings.seed);
    assert_eq!(settings.provider.delay_ms, 0);
    assert_eq!(settings.provider.timeout_ms, Some(250));
    assert_eq!(settings.board.columns.len(), 3, "unspecified sections keep defaults");
}

#[test]
fn given_explicit_over_global_when_loading_then_explicit_wins() {
    let dir = TempDir::new().unwrap();
    let global = write_config(&dir, "global.toml", "[provider]\ndelay_ms = 100\ntimeout_ms = 900\n");
    let explicit = write_config(&dir, "explicit.toml", "[provider]\ndelay_ms = 5\n");

    let settings = Settings::load_from(Some(&global), Some(&explicit)).unwrap();

    assert_eq!(settings.provider.delay_ms, 5);
    assert_eq!(settings.provider.timeout_ms, Some(900), "global value survives when not overridden");
}

#[test]
fn given_custom_columns_when_building_board_then_seed_cards_follow_columns() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "columns.toml",
        r#"
[[board.columns]]
id = "todo"
title = "Backlog"

[[board.columns]]
id = "done"
title = "Shipped"
"#,
    );
    let settings = Settings::load_from(None, Some(&path)).unwrap();

    let container = ServiceContainer::new(settings);
    let service = container.board_service(true).unwrap();

    let titles: Vec<_> = service.board().columns().iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, vec!["Backlog", "Shipped"]);
    assert_eq!(service.board().cards().len(), 3);
}

#[test]
fn given_repeated_column_ids_when_building_board_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "columns.toml",
        r#"
[[board.columns]]
id = "todo"
title = "A"

[[board.columns]]
id = "todo"
title = "B"
"#,
    );
    let settings = Settings::load_from(None, Some(&path)).unwrap();
    let container = ServiceContainer::new(settings);

    for seed in [true, false] {
        let err = container.board_service(seed).unwrap_err();
        assert!(
            matches!(err, ApplicationError::Config { ref message } if message.contains("duplicate column id: todo")),
            "unexpected error: {err}"
        );
    }
}

#[test]
fn given_malformed_config_when_loading_then_config_error() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "bad.toml", "[provider\ndelay_ms = ");

    let err = Settings::load_from(None, Some(&path)).unwrap_err();

    assert!(err.to_string().starts_with("config error"));
}

#[test]
fn given_settings_when_building_tree_service_then_seed_flag_is_honored() {
    let container = ServiceContainer::new(Settings::default());

    let seeded = container.tree_service(true).unwrap();
    let empty = container.tree_service(false).unwrap();

    assert_eq!(seeded.forest().roots().len(), 3);
    assert!(empty.forest().is_empty());
}
