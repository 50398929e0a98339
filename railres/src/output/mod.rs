//! Output formatting for reservation listings.
//!
//! A listing can be rendered as human-readable lines or as JSON.

mod formatters;

use crate::config::ListFormat;
use crate::desk::Listing;
use crate::Result;

pub use formatters::{JsonFormatter, TableFormatter};

/// Trait for rendering a listing into a string.
pub trait ListingFormatter {
    /// Format the given listing.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    fn format(&self, listing: &Listing) -> Result<String>;
}

impl ListFormat {
    /// Create a formatter for this format.
    ///
    /// `show_count` only affects table output.
    ///
    /// # Examples
    ///
    /// ```
    /// use railres::config::ListFormat;
    /// use railres::{Listing, ListingFormatter};
    ///
    /// let formatter = ListFormat::Table.create_formatter(true);
    /// assert_eq!(formatter.format(&Listing::Empty).unwrap(), "No current reservations.\n");
    /// ```
    #[must_use]
    pub fn create_formatter(self, show_count: bool) -> Box<dyn ListingFormatter> {
        match self {
            Self::Table => Box::new(TableFormatter::new(show_count)),
            Self::Json => Box::new(JsonFormatter),
        }
    }
}
