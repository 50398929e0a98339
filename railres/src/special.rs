//! A desk decorator that grants a perk on every successful booking.

use crate::desk::{Booking, CancelOutcome, Listing, Perk, ReservationDesk};
use crate::registry::ReservationRegistry;
use crate::reservation::ReservationId;

/// Wraps another desk and attaches [`Perk::ComplimentaryMeal`] to created
/// bookings.
///
/// Validation, storage and duplicate detection are entirely those of the
/// wrapped desk. Rejected bookings pass through untouched.
///
/// # Examples
///
/// ```
/// use railres::{Perk, ReservationDesk, SpecialReservationRegistry};
///
/// let mut desk: SpecialReservationRegistry = SpecialReservationRegistry::default();
///
/// let booking = desk.add_reservation("Alice", 101, "Delhi");
/// assert_eq!(booking.perk, Some(Perk::ComplimentaryMeal));
///
/// let rejected = desk.add_reservation("Alice", 0, "Delhi");
/// assert_eq!(rejected.perk, None);
/// ```
#[derive(Debug, Default)]
pub struct SpecialReservationRegistry<D = ReservationRegistry> {
    inner: D,
}

impl<D: ReservationDesk> SpecialReservationRegistry<D> {
    /// Wraps `inner`.
    #[must_use]
    pub const fn new(inner: D) -> Self {
        Self { inner }
    }

    /// Returns the wrapped desk.
    #[must_use]
    pub const fn inner(&self) -> &D {
        &self.inner
    }

    /// Unwraps the decorator.
    #[must_use]
    pub fn into_inner(self) -> D {
        self.inner
    }
}

impl<D: ReservationDesk> ReservationDesk for SpecialReservationRegistry<D> {
    fn add_reservation(
        &mut self,
        passenger_name: &str,
        train_number: i64,
        destination: &str,
    ) -> Booking {
        let mut booking = self
            .inner
            .add_reservation(passenger_name, train_number, destination);
        if let Some(id) = booking.outcome.created_id() {
            log::debug!("Granting {} for reservation {id}", Perk::ComplimentaryMeal.description());
            booking.perk = Some(Perk::ComplimentaryMeal);
        }
        booking
    }

    fn cancel_reservation(&mut self, id: ReservationId) -> CancelOutcome {
        self.inner.cancel_reservation(id)
    }

    fn list_reservations(&self) -> Listing {
        self.inner.list_reservations()
    }
}
