//! Storage module for configuration.

pub mod config;

pub use config::{AppConfig, ChartSettings, ConfigError, FormSettings, Theme, UiSettings};
