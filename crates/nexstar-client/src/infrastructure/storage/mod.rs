//! Persistence: the on-disk TOML configuration.

pub mod config;

pub use config::{AppConfig, ConfigError, ConnectionConfig};
