//! The reservation desk capability and its outcome types.
//!
//! A desk answers the three requests an operator can make: book, cancel and
//! list. Every request returns a discriminated outcome; nothing here fails
//! with an `Err` or panics.

use serde::Serialize;

use crate::reservation::{Reservation, ReservationId, ValidationError};

/// Outcome of a booking attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddOutcome {
    /// The reservation was stored under the given id.
    Created(ReservationId),
    /// A field failed validation. Nothing was stored.
    InvalidInput(ValidationError),
    /// An active reservation already holds the same passenger and train.
    Duplicate {
        /// The id of the reservation that blocked this one.
        existing: ReservationId,
    },
}

impl AddOutcome {
    /// Returns the new id if the booking was created.
    #[must_use]
    pub const fn created_id(&self) -> Option<ReservationId> {
        match self {
            Self::Created(id) => Some(*id),
            _ => None,
        }
    }

    /// Returns `true` if the booking was created.
    #[must_use]
    pub const fn is_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// A perk attached to a successful booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Perk {
    /// A complimentary meal on board.
    ComplimentaryMeal,
}

impl Perk {
    /// Returns a short human-readable description.
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::ComplimentaryMeal => "complimentary meal",
        }
    }
}

/// The answer a desk gives to a booking request.
///
/// # Examples
///
/// ```
/// use railres::{Booking, ReservationDesk, ReservationRegistry};
///
/// let mut registry = ReservationRegistry::new();
/// let booking: Booking = registry.add_reservation("Alice", 101, "Delhi");
/// assert!(booking.outcome.is_created());
/// assert!(booking.perk.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Booking {
    /// What happened to the request.
    pub outcome: AddOutcome,
    /// A perk granted alongside a created booking, if any.
    pub perk: Option<Perk>,
}

impl Booking {
    /// A booking with no perk attached.
    #[must_use]
    pub const fn plain(outcome: AddOutcome) -> Self {
        Self {
            outcome,
            perk: None,
        }
    }
}

/// Outcome of a cancellation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CancelOutcome {
    /// The reservation was removed.
    Cancelled,
    /// No active reservation has that id.
    NotFound,
}

/// The active reservations at the time of the request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Listing {
    /// There are no active reservations.
    Empty,
    /// At least one reservation is active.
    Populated {
        /// The reservations, ordered by id ascending.
        reservations: Vec<Reservation>,
        /// The number of reservations.
        count: usize,
    },
}

impl Listing {
    /// Builds a listing from reservations already sorted by id.
    #[must_use]
    pub fn from_sorted(reservations: Vec<Reservation>) -> Self {
        if reservations.is_empty() {
            Self::Empty
        } else {
            let count = reservations.len();
            Self::Populated {
                reservations,
                count,
            }
        }
    }

    /// Returns the number of reservations listed.
    #[must_use]
    pub fn count(&self) -> usize {
        match self {
            Self::Empty => 0,
            Self::Populated { count, .. } => *count,
        }
    }

    /// Returns the listed reservations (empty slice for [`Listing::Empty`]).
    #[must_use]
    pub fn reservations(&self) -> &[Reservation] {
        match self {
            Self::Empty => &[],
            Self::Populated { reservations, .. } => reservations.as_slice(),
        }
    }

    /// Returns `true` for [`Listing::Empty`].
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The operations a reservation desk offers.
///
/// Implemented by [`crate::ReservationRegistry`] and by decorators such as
/// [`crate::SpecialReservationRegistry`], which wrap another desk.
pub trait ReservationDesk {
    /// Books a passenger on a train to a destination.
    ///
    /// `train_number` is the raw operator input; values outside 1-9999 are
    /// reported as [`AddOutcome::InvalidInput`].
    fn add_reservation(
        &mut self,
        passenger_name: &str,
        train_number: i64,
        destination: &str,
    ) -> Booking;

    /// Cancels the reservation with the given id.
    fn cancel_reservation(&mut self, id: ReservationId) -> CancelOutcome;

    /// Lists active reservations ordered by id.
    fn list_reservations(&self) -> Listing;
}
