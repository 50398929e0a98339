//! The in-memory reservation registry.

use std::collections::{BTreeMap, HashMap};

use crate::desk::{AddOutcome, Booking, CancelOutcome, Listing, ReservationDesk};
use crate::reservation::{validate_request, DuplicateKey, Reservation, ReservationId};

#[cfg(test)]
mod proptests;

/// Owns the active reservations and enforces the booking rules.
///
/// Each registry has its own id sequence starting at 1. An id is consumed
/// only by a successful booking and is never handed out again, even after the
/// reservation is cancelled.
///
/// # Examples
///
/// ```
/// use railres::{AddOutcome, CancelOutcome, ReservationDesk, ReservationId, ReservationRegistry};
///
/// let mut registry = ReservationRegistry::new();
///
/// let alice = registry.add_reservation("Alice", 101, "Delhi");
/// assert_eq!(alice.outcome, AddOutcome::Created(ReservationId::new(1)));
///
/// let again = registry.add_reservation("alice", 101, "Mumbai");
/// assert!(matches!(again.outcome, AddOutcome::Duplicate { .. }));
///
/// let bob = registry.add_reservation("Bob", 102, "Pune");
/// assert_eq!(bob.outcome, AddOutcome::Created(ReservationId::new(2)));
///
/// assert_eq!(registry.cancel_reservation(ReservationId::new(1)), CancelOutcome::Cancelled);
/// assert_eq!(registry.cancel_reservation(ReservationId::new(1)), CancelOutcome::NotFound);
///
/// let listing = registry.list_reservations();
/// assert_eq!(listing.count(), 1);
/// assert_eq!(listing.reservations()[0].passenger_name(), "Bob");
/// ```
#[derive(Debug)]
pub struct ReservationRegistry {
    reservations: BTreeMap<ReservationId, Reservation>,
    // Mirrors `reservations`, keyed for duplicate detection.
    booked: HashMap<DuplicateKey, ReservationId>,
    next_id: ReservationId,
}

impl ReservationRegistry {
    /// Creates an empty registry whose first booking gets id 1.
    #[must_use]
    pub fn new() -> Self {
        Self {
            reservations: BTreeMap::new(),
            booked: HashMap::new(),
            next_id: ReservationId::FIRST,
        }
    }

    /// Returns the number of active reservations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.reservations.len()
    }

    /// Returns `true` if there are no active reservations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.reservations.is_empty()
    }

    /// Looks up an active reservation.
    #[must_use]
    pub fn get(&self, id: ReservationId) -> Option<&Reservation> {
        self.reservations.get(&id)
    }

    /// Validates and stores a booking.
    ///
    /// See [`ReservationDesk::add_reservation`].
    pub fn add(&mut self, passenger_name: &str, train_number: i64, destination: &str) -> AddOutcome {
        let train = match validate_request(passenger_name, train_number, destination) {
            Ok(train) => train,
            Err(err) => {
                log::debug!("Rejected booking for {passenger_name:?}: {err}");
                return AddOutcome::InvalidInput(err);
            }
        };

        let key = DuplicateKey::new(passenger_name, train);
        if let Some(&existing) = self.booked.get(&key) {
            log::debug!("Rejected duplicate booking for {key} (held by {existing})");
            return AddOutcome::Duplicate { existing };
        }

        let id = self.next_id;
        self.next_id = id.next();

        self.reservations
            .insert(id, Reservation::new(id, passenger_name, train, destination));
        self.booked.insert(key, id);

        log::debug!("Created reservation {id} for {passenger_name} on train {train}");
        AddOutcome::Created(id)
    }

    /// Removes an active reservation.
    ///
    /// See [`ReservationDesk::cancel_reservation`].
    pub fn cancel(&mut self, id: ReservationId) -> CancelOutcome {
        match self.reservations.remove(&id) {
            Some(reservation) => {
                self.booked.remove(&reservation.duplicate_key());
                log::debug!("Cancelled reservation {id}");
                CancelOutcome::Cancelled
            }
            None => {
                log::debug!("No reservation with id {id} to cancel");
                CancelOutcome::NotFound
            }
        }
    }
}

impl Default for ReservationRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ReservationDesk for ReservationRegistry {
    fn add_reservation(
        &mut self,
        passenger_name: &str,
        train_number: i64,
        destination: &str,
    ) -> Booking {
        Booking::plain(self.add(passenger_name, train_number, destination))
    }

    fn cancel_reservation(&mut self, id: ReservationId) -> CancelOutcome {
        self.cancel(id)
    }

    fn list_reservations(&self) -> Listing {
        // BTreeMap iterates in id order.
        Listing::from_sorted(self.reservations.values().cloned().collect())
    }
}
