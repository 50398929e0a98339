//! Configuration system for railres.
//!
//! This module provides layered configuration with support for:
//! - A YAML configuration file (`~/.railres/config.yaml` by default)
//! - Environment variable overrides (`RAILRES_*`)
//! - Programmatic configuration via builder pattern
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables
//! 3. The configuration file
//! 4. Built-in defaults
//!
//! # Examples
//!
//! ```
//! use railres::config::{ConfigBuilder, ListFormat};
//!
//! let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
//! assert_eq!(config.list_format_or_default(), ListFormat::Table);
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{default_config_dir, ConfigLoader, ConfigSource, CONFIG_FILE_NAME};
pub use merger::ConfigMerger;
pub use schema::{Config, ListFormat};
