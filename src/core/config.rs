//! # Configuration
//!
//! The whole document a user can edit: API credential, subscribed channel
//! ids, and one column set per list type. Lives at `~/.tube/config.toml`.
//!
//! First run (no file): the built-in defaults are written out verbatim, so
//! the user has something concrete to edit and a reload returns the same
//! values without rewriting. A file that exists but does not parse is a
//! startup-fatal error — better to abort with a diagnostic than to
//! silently clobber someone's hand-edited config.

use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::columns::{ColumnSpec, FieldId, Pad};

// ============================================================================
// Config Document
// ============================================================================

#[derive(Clone, Debug, Deserialize, Serialize, PartialEq)]
pub struct TubeConfig {
    /// YouTube Data API v3 key. `TUBE_API_KEY` in the environment wins.
    pub api_key: String,
    /// Channel ids to list on the subscriptions screen.
    pub subscriptions: Vec<String>,
    pub video_columns: Vec<ColumnSpec>,
    pub channel_columns: Vec<ColumnSpec>,
    /// Carried in the document for forward compatibility; no playlist
    /// view exists yet.
    #[serde(default)]
    pub playlist_columns: Vec<ColumnSpec>,
}

// ============================================================================
// Built-in Defaults
// ============================================================================

impl Default for TubeConfig {
    fn default() -> Self {
        Self {
            api_key: String::from("put your google API key here"),
            subscriptions: vec![
                String::from("UC3XTzVzaHQEd30rQbuvCtTQ"),
                String::from("UC-lHJZR3Gqxm24_Vd_AJ5Yw"),
            ],
            video_columns: vec![
                ColumnSpec::new("Published", FieldId::PublishedAt, Pad::None, 8),
                ColumnSpec::new("Views", FieldId::ViewCount, Pad::None, 6),
                ColumnSpec::new("Like%", FieldId::LikePercentage, Pad::None, 4),
                ColumnSpec::new("Duration", FieldId::Duration, Pad::None, 10),
                ColumnSpec::new("Title", FieldId::Title, Pad::Right, 10),
                ColumnSpec::new("User", FieldId::ChannelTitle, Pad::Left, 2),
            ],
            channel_columns: vec![
                ColumnSpec::new("Subscribers", FieldId::SubscriberCount, Pad::None, 4),
                ColumnSpec::new("Views", FieldId::ViewCount, Pad::None, 6),
                ColumnSpec::new("Videos", FieldId::VideoCount, Pad::None, 8),
                ColumnSpec::new("Title", FieldId::Title, Pad::Right, 10),
            ],
            playlist_columns: Vec::new(),
        }
    }
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    /// Home directory could not be determined.
    NoHome,
    Io(std::io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::NoHome => write!(f, "could not determine home directory"),
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
            ConfigError::Serialize(e) => write!(f, "config serialize error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading / Saving
// ============================================================================

/// Returns the path to `~/.tube/config.toml`.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    dirs::home_dir()
        .map(|home| home.join(".tube").join("config.toml"))
        .ok_or(ConfigError::NoHome)
}

/// Loads the config from `path`, materializing and persisting the
/// built-in defaults when the file does not exist.
pub fn load_config(path: &Path) -> Result<TubeConfig, ConfigError> {
    if !path.exists() {
        info!("no config at {}, writing built-in defaults", path.display());
        let defaults = TubeConfig::default();
        save_config(path, &defaults)?;
        return Ok(defaults);
    }
    let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
    let config: TubeConfig = toml::from_str(&contents).map_err(ConfigError::Parse)?;
    info!("loaded config from {}", path.display());
    debug!("config: {config:?}");
    Ok(config)
}

/// Writes `config` to `path`, creating parent directories as needed.
pub fn save_config(path: &Path, config: &TubeConfig) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(ConfigError::Io)?;
    }
    let doc = toml::to_string_pretty(config).map_err(ConfigError::Serialize)?;
    fs::write(path, doc).map_err(ConfigError::Io)
}

/// Final credential: the `TUBE_API_KEY` environment variable wins over
/// the config file.
pub fn resolve_api_key(config: &TubeConfig) -> String {
    std::env::var("TUBE_API_KEY")
        .ok()
        .unwrap_or_else(|| config.api_key.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Unique scratch directory per test; removed on drop.
    struct Scratch(PathBuf);

    impl Scratch {
        fn new(name: &str) -> Self {
            let dir = std::env::temp_dir().join(format!(
                "tube-config-test-{}-{name}",
                std::process::id()
            ));
            let _ = fs::remove_dir_all(&dir);
            fs::create_dir_all(&dir).unwrap();
            Scratch(dir)
        }

        fn path(&self) -> PathBuf {
            self.0.join("config.toml")
        }
    }

    impl Drop for Scratch {
        fn drop(&mut self) {
            let _ = fs::remove_dir_all(&self.0);
        }
    }

    #[test]
    fn test_missing_config_materializes_defaults() {
        let scratch = Scratch::new("materialize");
        let path = scratch.path();
        let loaded = load_config(&path).unwrap();
        assert_eq!(loaded, TubeConfig::default());
        assert!(path.exists());
    }

    #[test]
    fn test_default_materialization_is_idempotent() {
        let scratch = Scratch::new("idempotent");
        let path = scratch.path();
        let first = load_config(&path).unwrap();
        let written = fs::read_to_string(&path).unwrap();
        let second = load_config(&path).unwrap();
        assert_eq!(first, second);
        // Loading again did not rewrite the file.
        assert_eq!(fs::read_to_string(&path).unwrap(), written);
    }

    #[test]
    fn test_corrupt_config_is_a_parse_error() {
        let scratch = Scratch::new("corrupt");
        let path = scratch.path();
        fs::write(&path, "api_key = [this is not toml").unwrap();
        match load_config(&path) {
            Err(ConfigError::Parse(_)) => {}
            other => panic!("expected parse error, got {other:?}"),
        }
    }

    #[test]
    fn test_round_trip_preserves_column_specs() {
        let scratch = Scratch::new("roundtrip");
        let path = scratch.path();
        let mut config = TubeConfig::default();
        config.api_key = String::from("AIza-test");
        config.channel_columns[0].priority = 9;
        save_config(&path, &config).unwrap();
        assert_eq!(load_config(&path).unwrap(), config);
    }

    #[test]
    fn test_sparse_document_gets_default_playlist_columns() {
        let doc = r#"
api_key = "k"
subscriptions = ["UC1"]

[[video_columns]]
label = "Title"
field = "Title"
pad = "right"
priority = 10

[[channel_columns]]
label = "Title"
field = "Title"
pad = "right"
priority = 10
"#;
        let config: TubeConfig = toml::from_str(doc).unwrap();
        assert!(config.playlist_columns.is_empty());
        assert_eq!(config.video_columns.len(), 1);
    }

    #[test]
    fn test_default_columns_mirror_expected_priorities() {
        let config = TubeConfig::default();
        assert_eq!(config.video_columns.len(), 6);
        assert_eq!(config.channel_columns.len(), 4);
        let title = config
            .channel_columns
            .iter()
            .find(|c| c.field == FieldId::Title)
            .unwrap();
        assert_eq!(title.priority, 10);
        assert_eq!(title.pad, Pad::Right);
    }
}
