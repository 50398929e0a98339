//! Shared helpers for library integration tests.

use railres::{ReservationDesk, ReservationRegistry};

/// Books through any desk and returns the new id, or `None` if the booking
/// was rejected.
pub fn book<D: ReservationDesk>(
    desk: &mut D,
    name: &str,
    train: i64,
    destination: &str,
) -> Option<u64> {
    desk.add_reservation(name, train, destination)
        .outcome
        .created_id()
        .map(|id| id.value())
}

/// Ids currently held by `registry`, in ascending order.
pub fn ids(registry: &ReservationRegistry) -> Vec<u64> {
    registry
        .list_reservations()
        .reservations()
        .iter()
        .map(|r| r.id().value())
        .collect()
}
