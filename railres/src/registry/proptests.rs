//! Property-based tests for `ReservationRegistry`.

use std::collections::BTreeSet;

use proptest::prelude::*;

use super::ReservationRegistry;
use crate::desk::{AddOutcome, CancelOutcome, ReservationDesk};
use crate::reservation::ReservationId;

// Names drawn from a small pool so duplicates actually occur.
fn name_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec!["Alice", "Bob", "Carol", "Dave"]).prop_map(String::from)
}

fn destination_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}( [A-Za-z]{1,8})?"
}

fn case_variant(name: &str, mask: u32) -> String {
    name.chars()
        .enumerate()
        .map(|(i, c)| {
            if mask & (1 << (i % 32)) == 0 {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}

#[derive(Debug, Clone)]
enum Op {
    Add(String, i64, String),
    Cancel(u64),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => (name_strategy(), 1i64..=5, destination_strategy())
            .prop_map(|(n, t, d)| Op::Add(n, t, d)),
        1 => (0u64..12).prop_map(Op::Cancel),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Successful adds return fresh ids in strictly increasing order, and the
    // id sequence advances only on success.
    #[test]
    fn created_ids_are_dense_and_increasing(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut registry = ReservationRegistry::new();
        let mut issued: Vec<u64> = Vec::new();

        for op in ops {
            match op {
                Op::Add(name, train, dest) => {
                    if let AddOutcome::Created(id) = registry.add(&name, train, &dest) {
                        issued.push(id.value());
                    }
                }
                Op::Cancel(raw) => {
                    registry.cancel(ReservationId::new(raw));
                }
            }
        }

        let expected: Vec<u64> = (1..=issued.len() as u64).collect();
        prop_assert_eq!(issued, expected);
    }

    // After N successful adds and M successful cancels the listing has N - M
    // entries, and no two entries share a duplicate key.
    #[test]
    fn listing_count_tracks_adds_and_cancels(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut registry = ReservationRegistry::new();
        let mut added = 0usize;
        let mut cancelled = 0usize;

        for op in ops {
            match op {
                Op::Add(name, train, dest) => {
                    if registry.add_reservation(&name, train, &dest).outcome.is_created() {
                        added += 1;
                    }
                }
                Op::Cancel(raw) => {
                    if registry.cancel_reservation(ReservationId::new(raw)) == CancelOutcome::Cancelled {
                        cancelled += 1;
                    }
                }
            }
        }

        let listing = registry.list_reservations();
        prop_assert_eq!(listing.count(), added - cancelled);
        prop_assert_eq!(listing.is_empty(), added == cancelled);

        let keys: BTreeSet<String> = listing
            .reservations()
            .iter()
            .map(|r| r.duplicate_key().to_string())
            .collect();
        prop_assert_eq!(keys.len(), listing.count());
    }

    // Rebooking the same passenger and train under any capitalization and
    // destination is rejected without changing the registry size.
    #[test]
    fn duplicate_rejected_under_case_changes(
        name in name_strategy(),
        mask in any::<u32>(),
        train in 1i64..=9999,
        first_dest in destination_strategy(),
        second_dest in destination_strategy(),
    ) {
        let mut registry = ReservationRegistry::new();
        prop_assert!(registry.add(&name, train, &first_dest).is_created());

        let variant = case_variant(&name, mask);
        let outcome = registry.add(&variant, train, &second_dest);
        prop_assert_eq!(outcome, AddOutcome::Duplicate { existing: ReservationId::new(1) });
        prop_assert_eq!(registry.len(), 1);
    }

    // Train numbers outside 1-9999 are always rejected.
    #[test]
    fn out_of_range_train_rejected(
        name in name_strategy(),
        train in prop_oneof![i64::MIN..=0, 10_000i64..=i64::MAX],
    ) {
        let mut registry = ReservationRegistry::new();
        let outcome = registry.add(&name, train, "Delhi");
        prop_assert!(matches!(outcome, AddOutcome::InvalidInput(_)));
        prop_assert!(registry.is_empty());
    }
}
