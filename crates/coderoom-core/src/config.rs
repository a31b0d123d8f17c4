//! Client configuration.
//!
//! ## Learning: Serde for Serialization
//!
//! Serde is Rust's standard for serialization/deserialization.
//! The `#[derive(Serialize, Deserialize)]` macro generates
//! code to convert structs to/from JSON, TOML, etc.
//!
//! `#[serde(default)]` uses Default::default() for missing fields,
//! making configs backward-compatible.

use crate::language::Language;
use crate::session::ThemePreset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main client configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Backend endpoints
    pub server: ServerConfig,

    /// User settings
    pub user: UserConfig,

    /// Editor defaults
    pub editor: EditorConfig,
}

impl Config {
    /// Loads config from the default location, falling back to defaults.
    pub fn load() -> Self {
        match Self::load_from_default_path() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Could not load config, using defaults: {err}");
                Self::default()
            }
        }
    }

    /// Loads config from a file.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = toml::from_str(&content)?;
        Ok(config)
    }

    /// Loads from the default config path.
    fn load_from_default_path() -> Result<Self, ConfigError> {
        let path = Self::default_path()?;
        if path.exists() {
            Self::load_from(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Returns the default config file path.
    pub fn default_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("coderoom").join("config.toml"))
    }

    /// Saves the config to the default location.
    pub fn save(&self) -> Result<(), ConfigError> {
        let path = Self::default_path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            user: UserConfig::default(),
            editor: EditorConfig::default(),
        }
    }
}

/// Backend endpoint configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base URL for the run/debug HTTP endpoints
    pub http_base: String,

    /// Base URL for the realtime WebSocket endpoint
    pub ws_base: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_base: "http://localhost:5000".to_string(),
            ws_base: "ws://localhost:5000".to_string(),
        }
    }
}

/// User settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UserConfig {
    /// Display name shown to peers (None = Anonymous)
    pub name: Option<String>,
}

/// Editor defaults applied to new sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Language selected when a session opens
    pub language: Language,

    /// Theme preset selected when a session opens
    pub theme: ThemePreset,
}

/// Errors that can occur loading or saving configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No config directory available")]
    NoConfigDir,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_point_at_localhost() {
        let config = Config::default();
        assert_eq!(config.server.http_base, "http://localhost:5000");
        assert_eq!(config.server.ws_base, "ws://localhost:5000");
        assert!(config.user.name.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            r#"
[server]
http_base = "https://rooms.example.com"
ws_base = "wss://rooms.example.com"

[user]
name = "Alice"

[editor]
language = "java"
theme = "light"
"#,
        )
        .unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.server.http_base, "https://rooms.example.com");
        assert_eq!(config.user.name.as_deref(), Some("Alice"));
        assert_eq!(config.editor.language, Language::Java);
        assert_eq!(config.editor.theme, ThemePreset::Light);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[user]\nname = \"Bob\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.user.name.as_deref(), Some("Bob"));
        assert_eq!(config.server.http_base, "http://localhost:5000");
        assert_eq!(config.editor.language, Language::Python);
    }

    #[test]
    fn test_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not toml at all [[[").unwrap();
        assert!(Config::load_from(&path).is_err());
    }
}
