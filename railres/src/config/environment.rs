//! Environment variable handling for configuration overrides.

use std::env;

use crate::config::schema::{Config, ListFormat};
use crate::error::{Error, Result};

/// Handles `RAILRES_*` environment variable overrides.
///
/// # Examples
///
/// ```no_run
/// use railres::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any recognized variable holds an invalid value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Ok(val) = env::var("RAILRES_SPECIAL_BOOKINGS") {
            config.special_bookings = Some(Self::parse_bool("RAILRES_SPECIAL_BOOKINGS", &val)?);
        }

        if let Ok(val) = env::var("RAILRES_LIST_FORMAT") {
            config.list_format =
                Some(ListFormat::parse(&val).map_err(|message| Error::Validation {
                    field: "RAILRES_LIST_FORMAT".into(),
                    message,
                })?);
        }

        if let Ok(val) = env::var("RAILRES_SHOW_COUNT") {
            config.show_count = Some(Self::parse_bool("RAILRES_SHOW_COUNT", &val)?);
        }

        Ok(())
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }
}
