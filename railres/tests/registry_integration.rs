//! Integration tests for the reservation desks.
//!
//! These exercise the public API only: plain and special desks driven
//! through the [`ReservationDesk`] trait, the way a front end would.

mod common;

use common::{book, ids};
use railres::{
    AddOutcome, CancelOutcome, Listing, Perk, ReservationDesk, ReservationId,
    ReservationRegistry, SpecialReservationRegistry,
};

#[test]
fn test_walkthrough_plain_desk() {
    let mut desk = ReservationRegistry::new();

    assert_eq!(book(&mut desk, "Alice", 101, "Delhi"), Some(1));
    assert_eq!(book(&mut desk, "Bob", 102, "Pune"), Some(2));

    let dup = desk.add_reservation("alice", 101, "Mumbai");
    assert_eq!(
        dup.outcome,
        AddOutcome::Duplicate {
            existing: ReservationId::new(1)
        }
    );

    assert_eq!(
        desk.cancel_reservation(ReservationId::new(1)),
        CancelOutcome::Cancelled
    );
    assert_eq!(
        desk.cancel_reservation(ReservationId::new(1)),
        CancelOutcome::NotFound
    );

    let listing = desk.list_reservations();
    assert_eq!(listing.count(), 1);
    assert_eq!(
        listing.reservations()[0].to_string(),
        "Reservation ID: 2, Passenger: Bob, Train No: 102, Destination: Pune"
    );
}

#[test]
fn test_ids_never_reused_after_cancel() {
    let mut desk = ReservationRegistry::new();
    book(&mut desk, "Alice", 101, "Delhi");
    book(&mut desk, "Bob", 102, "Pune");
    desk.cancel_reservation(ReservationId::new(2));

    assert_eq!(book(&mut desk, "Carol", 103, "Goa"), Some(3));
    assert_eq!(ids(&desk), vec![1, 3]);
}

#[test]
fn test_failed_adds_do_not_consume_ids() {
    let mut desk = ReservationRegistry::new();
    assert_eq!(book(&mut desk, "Alice", 101, "Delhi"), Some(1));

    assert_eq!(book(&mut desk, "", 101, "Delhi"), None);
    assert_eq!(book(&mut desk, "Bob", 0, "Delhi"), None);
    assert_eq!(book(&mut desk, "Bob", 10_000, "Delhi"), None);
    assert_eq!(book(&mut desk, "Bob", 102, "Pune-2"), None);
    assert_eq!(book(&mut desk, "ALICE", 101, "Goa"), None);

    assert_eq!(book(&mut desk, "Bob", 102, "Pune"), Some(2));
}

#[test]
fn test_cancel_frees_duplicate_key() {
    let mut desk = ReservationRegistry::new();
    book(&mut desk, "Alice", 101, "Delhi");
    desk.cancel_reservation(ReservationId::new(1));

    assert_eq!(book(&mut desk, "ALICE", 101, "Delhi"), Some(2));
}

#[test]
fn test_same_name_different_train_is_allowed() {
    let mut desk = ReservationRegistry::new();
    assert_eq!(book(&mut desk, "Alice", 101, "Delhi"), Some(1));
    assert_eq!(book(&mut desk, "Alice", 102, "Delhi"), Some(2));
}

#[test]
fn test_boundary_train_numbers() {
    let mut desk = ReservationRegistry::new();
    assert_eq!(book(&mut desk, "Alice", 1, "Delhi"), Some(1));
    assert_eq!(book(&mut desk, "Bob", 9999, "Delhi"), Some(2));
    assert_eq!(book(&mut desk, "Carol", -5, "Delhi"), None);
}

#[test]
fn test_invalid_input_names_the_field() {
    let mut desk = ReservationRegistry::new();

    let booking = desk.add_reservation("Alice", 101, "D3lhi");
    match booking.outcome {
        AddOutcome::InvalidInput(err) => assert_eq!(err.field, "destination"),
        other => panic!("expected invalid input, got {other:?}"),
    }
}

#[test]
fn test_empty_listing() {
    let mut desk = ReservationRegistry::new();
    assert_eq!(desk.list_reservations(), Listing::Empty);

    book(&mut desk, "Alice", 101, "Delhi");
    desk.cancel_reservation(ReservationId::new(1));
    assert!(desk.list_reservations().is_empty());
}

#[test]
fn test_special_desk_perk_only_on_created() {
    let mut desk: SpecialReservationRegistry = SpecialReservationRegistry::default();

    let created = desk.add_reservation("Alice", 101, "Delhi");
    assert_eq!(created.perk, Some(Perk::ComplimentaryMeal));

    let duplicate = desk.add_reservation("alice", 101, "Delhi");
    assert!(matches!(duplicate.outcome, AddOutcome::Duplicate { .. }));
    assert_eq!(duplicate.perk, None);

    let invalid = desk.add_reservation("Bob", 0, "Delhi");
    assert!(matches!(invalid.outcome, AddOutcome::InvalidInput(_)));
    assert_eq!(invalid.perk, None);
}

#[test]
fn test_special_desk_shares_semantics_with_plain() {
    let script: &[(&str, i64, &str)] = &[
        ("Alice", 101, "Delhi"),
        ("Bob", 102, "Pune"),
        ("alice", 101, "Goa"),
        ("Carol", 0, "Goa"),
        ("Dave", 9999, "Agra"),
    ];

    let mut plain = ReservationRegistry::new();
    let mut special: SpecialReservationRegistry = SpecialReservationRegistry::default();

    for &(name, train, destination) in script {
        let a = plain.add_reservation(name, train, destination);
        let b = special.add_reservation(name, train, destination);
        assert_eq!(a.outcome, b.outcome);
    }

    assert_eq!(
        plain.cancel_reservation(ReservationId::new(2)),
        special.cancel_reservation(ReservationId::new(2))
    );
    assert_eq!(plain.list_reservations(), special.list_reservations());
    assert_eq!(ids(&plain), ids(special.inner()));
}
