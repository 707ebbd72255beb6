//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/treeboard/treeboard.toml`
//! 3. Explicit config file passed with `--config`
//! 4. Environment variables: `TREEBOARD_*` prefix, `__` between sections

use std::path::{Path, PathBuf};
use std::time::Duration;

use config::{Config, ConfigError, Environment, File};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::Column;
use crate::infrastructure::fixtures;

/// Lazy child provider settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct ProviderConfig {
    /// Simulated latency of every fetch, in milliseconds
    pub delay_ms: u64,
    /// Abort a fetch after this many milliseconds (unset: wait forever)
    pub timeout_ms: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            delay_ms: 800,
            timeout_ms: None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ColumnConfig {
    pub id: String,
    pub title: String,
}

/// Kanban board settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BoardConfig {
    /// Fixed column set, left to right
    pub columns: Vec<ColumnConfig>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            columns: fixtures::default_columns()
                .into_iter()
                .map(|c| ColumnConfig {
                    id: c.id.to_string(),
                    title: c.title,
                })
                .collect(),
        }
    }
}

/// Unified configuration for treeboard.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Start from the sample tree and board instead of empty state
    pub seed: bool,
    pub provider: ProviderConfig,
    pub board: BoardConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: true,
            provider: ProviderConfig::default(),
            board: BoardConfig::default(),
        }
    }
}

/// Get the XDG config directory for treeboard.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "treeboard").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("treeboard.toml"))
}

/// Expand `~` and `$VAR` in a user-supplied path.
fn expand_path(path: &Path) -> Result<PathBuf, ApplicationError> {
    let raw = path.to_string_lossy();
    shellexpand::full(&raw)
        .map(|expanded| PathBuf::from(expanded.into_owned()))
        .map_err(|e| ApplicationError::Config {
            message: format!("expand {}: {}", raw, e),
        })
}

impl Settings {
    pub fn provider_delay(&self) -> Duration {
        Duration::from_millis(self.provider.delay_ms)
    }

    pub fn fetch_timeout(&self) -> Option<Duration> {
        self.provider.timeout_ms.map(Duration::from_millis)
    }

    pub fn columns(&self) -> Vec<Column> {
        self.board
            .columns
            .iter()
            .map(|c| Column::new(c.id.as_str(), c.title.as_str()))
            .collect()
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `explicit` - Optional config file; must exist when given
    pub fn load(explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        let global = global_config_path().filter(|p| p.exists());
        let explicit = explicit.map(expand_path).transpose()?;
        Self::load_from(global.as_deref(), explicit.as_deref())
    }

    /// Layer the given files over the defaults, then apply env overrides.
    pub fn load_from(global: Option<&Path>, explicit: Option<&Path>) -> Result<Self, ApplicationError> {
        // 1. Start with defaults
        let defaults = Config::try_from(&Settings::default()).map_err(config_err)?;
        let mut builder = Config::builder().add_source(defaults);

        // 2. Global config
        if let Some(path) = global {
            builder = builder.add_source(File::from(path).required(false));
        }

        // 3. Explicit config
        if let Some(path) = explicit {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            builder = builder.add_source(File::from(path).required(true));
        }

        // 4. Environment variables (explicit override)
        builder = builder.add_source(
            Environment::with_prefix("TREEBOARD")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        config.try_deserialize().map_err(config_err)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# treeboard configuration
#
# Locations (by precedence, lowest to highest):
#   Global:   ~/.config/treeboard/treeboard.toml
#   Explicit: treeboard --config <file>
#   Env:      TREEBOARD_* environment variables, e.g. TREEBOARD_PROVIDER__DELAY_MS=0

# Start from the sample tree and board
# seed = true

[provider]
# Simulated latency of the lazy child provider
# delay_ms = 800

# Give up on a fetch after this many milliseconds (unset: wait forever)
# timeout_ms = 5000

# Board columns, left to right
# [[board.columns]]
# id = "todo"
# title = "Todo"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_no_config_when_loading_then_uses_defaults() {
        let settings = Settings::load_from(None, None).expect("load defaults");
        assert!(settings.seed);
        assert_eq!(settings.provider.timeout_ms, None);
        assert_eq!(settings.board.columns.len(), 3);
    }

    #[test]
    fn given_default_settings_then_durations_match_fields() {
        let settings = Settings::default();
        assert_eq!(settings.provider_delay(), Duration::from_millis(800));
        assert_eq!(settings.fetch_timeout(), None);
    }

    #[test]
    fn given_default_settings_when_serializing_then_roundtrips_through_toml() {
        let settings = Settings::default();
        let text = settings.to_toml().unwrap();
        let parsed: Settings = toml::from_str(&text).unwrap();
        assert_eq!(parsed, settings);
    }

    #[test]
    fn given_template_when_parsing_then_all_defaults_apply() {
        let parsed: Settings = toml::from_str(&Settings::template()).unwrap();
        assert_eq!(parsed, Settings::default());
    }

    #[test]
    fn given_missing_explicit_file_when_loading_then_config_error() {
        let err = Settings::load_from(None, Some(Path::new("/nonexistent/treeboard.toml"))).unwrap_err();
        assert!(matches!(err, ApplicationError::Config { .. }));
    }
}
