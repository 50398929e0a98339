//! Listing formatter implementations.

use std::fmt::Write;

use serde::Serialize;

use super::ListingFormatter;
use crate::desk::Listing;
use crate::reservation::Reservation;
use crate::Result;

/// Human-readable listing, one reservation per line.
#[derive(Debug, Clone, Copy)]
pub struct TableFormatter {
    show_count: bool,
}

impl TableFormatter {
    /// Creates a table formatter. With `show_count`, the listing ends with a
    /// `Total Reservations` line.
    #[must_use]
    pub const fn new(show_count: bool) -> Self {
        Self { show_count }
    }
}

impl ListingFormatter for TableFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        let (reservations, count) = match listing {
            Listing::Empty => return Ok("No current reservations.\n".to_string()),
            Listing::Populated {
                reservations,
                count,
            } => (reservations, count),
        };

        let mut output = String::from("=== Current Reservations ===\n");
        for reservation in reservations {
            // Writing to a String cannot fail
            let _ = writeln!(output, "{reservation}");
        }
        if self.show_count {
            let _ = writeln!(output, "Total Reservations: {count}");
        }
        Ok(output)
    }
}

/// JSON listing: `{"count": N, "reservations": [...]}`.
#[derive(Debug, Clone, Copy)]
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonListing<'a> {
    count: usize,
    reservations: &'a [Reservation],
}

impl ListingFormatter for JsonFormatter {
    fn format(&self, listing: &Listing) -> Result<String> {
        let document = JsonListing {
            count: listing.count(),
            reservations: listing.reservations(),
        };
        let mut output = serde_json::to_string_pretty(&document)?;
        output.push('\n');
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::desk::ReservationDesk;
    use crate::registry::ReservationRegistry;

    fn sample_listing() -> Listing {
        let mut registry = ReservationRegistry::new();
        registry.add_reservation("Alice", 101, "Delhi");
        registry.add_reservation("Bob", 102, "Pune");
        registry.list_reservations()
    }

    #[test]
    fn test_table_empty() {
        let output = TableFormatter::new(true).format(&Listing::Empty).unwrap();
        assert_eq!(output, "No current reservations.\n");
    }

    #[test]
    fn test_table_populated() {
        let output = TableFormatter::new(true).format(&sample_listing()).unwrap();
        assert_eq!(
            output,
            "=== Current Reservations ===\n\
             Reservation ID: 1, Passenger: Alice, Train No: 101, Destination: Delhi\n\
             Reservation ID: 2, Passenger: Bob, Train No: 102, Destination: Pune\n\
             Total Reservations: 2\n"
        );
    }

    #[test]
    fn test_table_without_count() {
        let output = TableFormatter::new(false).format(&sample_listing()).unwrap();
        assert!(!output.contains("Total Reservations"));
        assert_eq!(output.lines().count(), 3);
    }

    #[test]
    fn test_json_populated() {
        let output = JsonFormatter.format(&sample_listing()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["count"], 2);
        assert_eq!(value["reservations"][1]["passenger_name"], "Bob");
        assert_eq!(value["reservations"][1]["train_number"], 102);
    }

    #[test]
    fn test_json_empty() {
        let output = JsonFormatter.format(&Listing::Empty).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value, serde_json::json!({"count": 0, "reservations": []}));
    }
}
