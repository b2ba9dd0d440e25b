//! TOML-based configuration persistence for the client binary.
//!
//! Reads and writes `AppConfig` to the platform-appropriate config file:
//! - Windows:  `%APPDATA%\NexStarRs\config.toml`
//! - Linux:    `~/.config/nexstar-rs/config.toml`
//! - macOS:    `~/Library/Application Support/NexStarRs/config.toml`
//!
//! Every field carries a serde default so the binary works on first run
//! (before a config file exists) and keeps working when an older file is
//! missing newer fields.  The built-in defaults match the hand controller's
//! fixed link parameters, so most installations never need a config file at
//! all — it exists for nonstandard port names and debugging timeouts.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::transport::SerialLinkConfig;

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform config directory could not be determined.
    #[error("could not determine platform config directory")]
    NoPlatformConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level application configuration stored on disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    pub connection: ConnectionConfig,
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Serial connection settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConnectionConfig {
    /// Serial port device name (e.g. `"/dev/ttyUSB0"` or `"COM3"`).
    #[serde(default = "default_port")]
    pub port: String,
    /// Baud rate.  The hand controller only speaks 9600.
    #[serde(default = "default_baud_rate")]
    pub baud_rate: u32,
    /// Read deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub read_timeout_ms: u64,
    /// Write deadline in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub write_timeout_ms: u64,
}

impl ConnectionConfig {
    /// Converts the persisted millisecond fields into link parameters.
    pub fn link_config(&self) -> SerialLinkConfig {
        SerialLinkConfig {
            baud_rate: self.baud_rate,
            read_timeout: Duration::from_millis(self.read_timeout_ms),
            write_timeout: Duration::from_millis(self.write_timeout_ms),
        }
    }
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_port() -> String {
    if cfg!(target_os = "windows") {
        "COM1".to_string()
    } else {
        "/dev/ttyUSB0".to_string()
    }
}
fn default_baud_rate() -> u32 {
    9600
}
fn default_timeout_ms() -> u64 {
    3500
}
fn default_log_level() -> String {
    "info".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            connection: ConnectionConfig::default(),
            log_level: default_log_level(),
        }
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            baud_rate: default_baud_rate(),
            read_timeout_ms: default_timeout_ms(),
            write_timeout_ms: default_timeout_ms(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Determines the platform-appropriate directory for the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] when the platform config base
/// directory cannot be determined from the environment.
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    platform_config_dir().ok_or(ConfigError::NoPlatformConfigDir)
}

/// Resolves the full path to the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoPlatformConfigDir`] if the base directory cannot be
/// determined.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Loads `AppConfig` from disk, returning `AppConfig::default()` if the file
/// does not yet exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config() -> Result<AppConfig, ConfigError> {
    let path = config_file_path()?;

    match std::fs::read_to_string(&path) {
        Ok(content) => {
            let cfg: AppConfig = toml::from_str(&content)?;
            Ok(cfg)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Persists `config` to disk.
///
/// Creates the config directory and file if they do not exist.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig) -> Result<(), ConfigError> {
    let path = config_file_path()?;

    // Ensure directory exists before writing.
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(&path, content).map_err(|source| ConfigError::Io {
        path: path.clone(),
        source,
    })?;
    Ok(())
}

/// Resolves the platform config base directory including the app subdirectory.
fn platform_config_dir() -> Option<PathBuf> {
    #[cfg(target_os = "windows")]
    {
        // %APPDATA% e.g. C:\Users\<user>\AppData\Roaming
        std::env::var_os("APPDATA").map(|p| PathBuf::from(p).join("NexStarRs"))
    }

    #[cfg(target_os = "linux")]
    {
        // XDG_CONFIG_HOME or ~/.config
        let base = std::env::var_os("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
        Some(base.join("nexstar-rs"))
    }

    #[cfg(target_os = "macos")]
    {
        std::env::var_os("HOME").map(|h| {
            PathBuf::from(h)
                .join("Library")
                .join("Application Support")
                .join("NexStarRs")
        })
    }

    #[cfg(not(any(target_os = "windows", target_os = "linux", target_os = "macos")))]
    {
        None
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    // ── Defaults ──────────────────────────────────────────────────────────────

    #[test]
    fn test_default_connection_matches_hand_controller_link() {
        // Arrange / Act
        let cfg = AppConfig::default();

        // Assert
        assert_eq!(cfg.connection.baud_rate, 9600);
        assert_eq!(cfg.connection.read_timeout_ms, 3500);
        assert_eq!(cfg.connection.write_timeout_ms, 3500);
    }

    #[test]
    fn test_default_log_level_is_info() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_link_config_converts_millis_to_durations() {
        // Arrange
        let mut conn = ConnectionConfig::default();
        conn.read_timeout_ms = 1000;
        conn.write_timeout_ms = 250;

        // Act
        let link = conn.link_config();

        // Assert
        assert_eq!(link.read_timeout, Duration::from_millis(1000));
        assert_eq!(link.write_timeout, Duration::from_millis(250));
        assert_eq!(link.baud_rate, 9600);
    }

    // ── TOML round-trip ───────────────────────────────────────────────────────

    #[test]
    fn test_app_config_serializes_and_deserializes_round_trip() {
        // Arrange
        let mut cfg = AppConfig::default();
        cfg.connection.port = "/dev/ttyS4".to_string();
        cfg.log_level = "debug".to_string();

        // Act
        let toml_str = toml::to_string_pretty(&cfg).expect("serialize");
        let restored: AppConfig = toml::from_str(&toml_str).expect("deserialize");

        // Assert
        assert_eq!(cfg, restored);
    }

    #[test]
    fn test_deserialize_minimal_toml_uses_defaults() {
        // Arrange: only the required section header
        let toml_str = r#"
[connection]
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize minimal");

        // Assert
        assert_eq!(cfg.connection.baud_rate, 9600);
        assert_eq!(cfg.connection.read_timeout_ms, 3500);
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn test_deserialize_partial_connection_overrides_defaults() {
        // Arrange
        let toml_str = r#"
[connection]
port = "COM7"
read_timeout_ms = 500
"#;

        // Act
        let cfg: AppConfig = toml::from_str(toml_str).expect("deserialize partial");

        // Assert
        assert_eq!(cfg.connection.port, "COM7");
        assert_eq!(cfg.connection.read_timeout_ms, 500);
        // Unspecified fields keep their defaults
        assert_eq!(cfg.connection.write_timeout_ms, 3500);
    }

    #[test]
    fn test_deserialize_invalid_toml_returns_parse_error() {
        // Arrange
        let bad_toml = "[[[ not valid toml";

        // Act
        let result: Result<AppConfig, toml::de::Error> = toml::from_str(bad_toml);

        // Assert
        assert!(result.is_err());
    }

    // ── Paths ─────────────────────────────────────────────────────────────────

    #[test]
    fn test_config_file_path_ends_with_config_toml() {
        let path_result = config_file_path();
        if let Ok(path) = path_result {
            assert!(
                path.ends_with("config.toml"),
                "config file must be named config.toml, got {path:?}"
            );
        }
        // NoPlatformConfigDir in a stripped CI env is also acceptable.
    }
}
