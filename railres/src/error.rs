//! Error types for the railres library.
//!
//! Registry operations never fail with these errors: they report their
//! outcome through discriminated enums (see [`crate::desk`]). The types here
//! cover configuration loading and listing output.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a railres error.
///
/// # Examples
///
/// ```
/// use railres::{Error, Result};
///
/// fn example_operation() -> Result<u16> {
///     Ok(101)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the railres library.
#[derive(Debug, Error)]
pub enum Error {
    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A configuration file could not be read.
    #[error("cannot read configuration file {}: {source}", path.display())]
    ConfigRead {
        /// The configuration file path.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A listing could not be serialized.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
