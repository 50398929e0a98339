//! Utility functions for CLI operations.
//!
//! This module provides the global options shared by the entry point and
//! the configuration loading that turns them into a resolved [`Config`].

use crate::error::CliError;
use railres::{Config, ConfigBuilder, ListFormat};
use std::path::PathBuf;

/// Global CLI options.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the configuration directory location.
    pub config_dir: Option<PathBuf>,

    /// Override the listing format.
    pub format: Option<ListFormat>,

    /// Disable the special (perk-granting) desk.
    pub plain: bool,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The configuration file
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref dir) = global.config_dir {
        builder = builder.with_config_dir(dir);
    }

    let overrides = Config {
        special_bookings: global.plain.then_some(false),
        list_format: global.format,
        ..Config::default()
    };

    builder
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}
