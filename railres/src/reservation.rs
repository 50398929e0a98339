//! Reservation types and field validation.
//!
//! This module provides the reservation record, its identifier, the key used
//! to detect duplicate bookings, and the validation rules every stored
//! reservation satisfies.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::train::TrainNumber;

/// Letters and ASCII whitespace only. `(?-u)` keeps `\s` to the ASCII set.
static PLACE_NAME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?-u:[A-Za-z\s])+$").expect("invalid place name regex"));

/// Identifier of a reservation.
///
/// Identifiers are assigned by a registry in creation order, starting at 1,
/// and are never reused.
///
/// # Examples
///
/// ```
/// use railres::ReservationId;
///
/// let id = ReservationId::new(7);
/// assert_eq!(id.value(), 7);
/// assert_eq!(format!("{id}"), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ReservationId(u64);

impl ReservationId {
    /// The first identifier a fresh registry hands out.
    pub const FIRST: Self = Self(1);

    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }

    pub(crate) const fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u64> for ReservationId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for ReservationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The key under which two bookings count as the same booking.
///
/// The passenger name is compared case-insensitively; the destination is not
/// part of the key.
///
/// # Examples
///
/// ```
/// use railres::{DuplicateKey, TrainNumber};
///
/// let train = TrainNumber::try_from(101).unwrap();
/// assert_eq!(DuplicateKey::new("Alice", train), DuplicateKey::new("aLiCe", train));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DuplicateKey {
    passenger_name: String,
    train_number: TrainNumber,
}

impl DuplicateKey {
    /// Builds the key for a passenger and train.
    #[must_use]
    pub fn new(passenger_name: &str, train_number: TrainNumber) -> Self {
        Self {
            passenger_name: passenger_name.to_lowercase(),
            train_number,
        }
    }
}

impl fmt::Display for DuplicateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on train {}", self.passenger_name, self.train_number)
    }
}

/// An active travel reservation.
///
/// Reservations are only created by a registry after validation, and are
/// never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Reservation {
    id: ReservationId,
    passenger_name: String,
    train_number: TrainNumber,
    destination: String,
}

impl Reservation {
    pub(crate) fn new(
        id: ReservationId,
        passenger_name: &str,
        train_number: TrainNumber,
        destination: &str,
    ) -> Self {
        Self {
            id,
            passenger_name: passenger_name.to_string(),
            train_number,
            destination: destination.to_string(),
        }
    }

    /// Returns the reservation identifier.
    #[must_use]
    pub const fn id(&self) -> ReservationId {
        self.id
    }

    /// Returns the passenger name as booked.
    #[must_use]
    pub fn passenger_name(&self) -> &str {
        &self.passenger_name
    }

    /// Returns the train number.
    #[must_use]
    pub const fn train_number(&self) -> TrainNumber {
        self.train_number
    }

    /// Returns the destination.
    #[must_use]
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// Returns the key used for duplicate detection.
    #[must_use]
    pub fn duplicate_key(&self) -> DuplicateKey {
        DuplicateKey::new(&self.passenger_name, self.train_number)
    }
}

impl fmt::Display for Reservation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Reservation ID: {}, Passenger: {}, Train No: {}, Destination: {}",
            self.id, self.passenger_name, self.train_number, self.destination
        )
    }
}

/// Error type for validation failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// A description of the validation failure.
    pub message: String,
}

impl ValidationError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "validation error for '{}': {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Checks a passenger name or destination.
///
/// Accepts non-empty strings made only of ASCII letters and whitespace.
///
/// # Errors
///
/// Returns an error naming `field` if the value is empty or contains any
/// other character.
///
/// # Examples
///
/// ```
/// use railres::reservation::validate_place_name;
///
/// assert!(validate_place_name("destination", "New Delhi").is_ok());
/// assert!(validate_place_name("destination", "").is_err());
/// assert!(validate_place_name("destination", "Route 66").is_err());
/// ```
pub fn validate_place_name(field: &str, value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::new(field, "must be non-empty"));
    }
    if !PLACE_NAME_RE.is_match(value) {
        return Err(ValidationError::new(
            field,
            "must contain only letters and whitespace",
        ));
    }
    Ok(())
}

/// Validates the raw fields of a booking request.
///
/// Fields are checked in order: passenger name, destination, train number.
/// The first failure is reported.
///
/// # Errors
///
/// Returns the first failing field's validation error.
///
/// # Examples
///
/// ```
/// use railres::reservation::validate_request;
///
/// let train = validate_request("Alice", 101, "Delhi").unwrap();
/// assert_eq!(train.value(), 101);
///
/// let err = validate_request("Alice", 0, "Delh1").unwrap_err();
/// assert_eq!(err.field, "destination");
/// ```
pub fn validate_request(
    passenger_name: &str,
    train_number: i64,
    destination: &str,
) -> Result<TrainNumber, ValidationError> {
    validate_place_name("passenger_name", passenger_name)?;
    validate_place_name("destination", destination)?;
    TrainNumber::try_from(train_number)
        .map_err(|err| ValidationError::new("train_number", err.reason))
}
