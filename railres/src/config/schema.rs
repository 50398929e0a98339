//! Configuration schema definitions.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Complete configuration structure.
///
/// Every field is optional so that partial configurations from different
/// sources can be merged; the `*_or_default` accessors resolve the final
/// values.
///
/// # Examples
///
/// ```
/// use railres::config::{Config, ListFormat};
///
/// let config = Config {
///     list_format: Some(ListFormat::Json),
///     ..Default::default()
/// };
/// assert_eq!(config.list_format_or_default(), ListFormat::Json);
/// assert!(config.special_bookings_or_default());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Grant a perk on every successful booking.
    pub special_bookings: Option<bool>,

    /// Output format for the reservation listing.
    pub list_format: Option<ListFormat>,

    /// Print the reservation count below table listings.
    pub show_count: Option<bool>,
}

impl Config {
    /// Whether bookings go through the special (perk-granting) desk.
    /// Defaults to `true`.
    #[must_use]
    pub fn special_bookings_or_default(&self) -> bool {
        self.special_bookings.unwrap_or(true)
    }

    /// The listing format. Defaults to [`ListFormat::Table`].
    #[must_use]
    pub fn list_format_or_default(&self) -> ListFormat {
        self.list_format.unwrap_or_default()
    }

    /// Whether table listings end with a count line. Defaults to `true`.
    #[must_use]
    pub fn show_count_or_default(&self) -> bool {
        self.show_count.unwrap_or(true)
    }
}

/// Output format for reservation listings.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
#[value(rename_all = "lowercase")]
pub enum ListFormat {
    /// One line per reservation (human-readable).
    #[default]
    Table,
    /// A JSON document with the reservations and their count.
    Json,
}

impl ListFormat {
    /// Parses a format name (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns an error if the name is not recognized.
    ///
    /// # Examples
    ///
    /// ```
    /// use railres::config::ListFormat;
    ///
    /// assert_eq!(ListFormat::parse("JSON").unwrap(), ListFormat::Json);
    /// assert!(ListFormat::parse("xml").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.trim().to_lowercase().as_str() {
            "table" => Ok(Self::Table),
            "json" => Ok(Self::Json),
            _ => Err(format!("unknown list format '{s}' (expected table or json)")),
        }
    }
}

impl fmt::Display for ListFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Table => write!(f, "table"),
            Self::Json => write!(f, "json"),
        }
    }
}
