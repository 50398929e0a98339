//! Operator-facing messages for desk outcomes.

use railres::{AddOutcome, Booking, CancelOutcome, Perk};

/// Lines to print after a booking request.
pub fn booking_messages(booking: &Booking) -> Vec<String> {
    let mut lines = vec![match &booking.outcome {
        AddOutcome::Created(id) => format!("Reservation confirmed! Your Reservation ID: {id}"),
        AddOutcome::InvalidInput(_) => "Invalid input! Please enter valid details.".to_string(),
        AddOutcome::Duplicate { .. } => "Duplicate reservation detected!".to_string(),
    }];

    if let Some(perk) = booking.perk {
        lines.push(perk_message(perk));
    }
    lines
}

/// The line announcing a perk.
pub fn perk_message(perk: Perk) -> String {
    format!("Special reservation confirmed with {}!", perk.description())
}

/// The line to print after a cancellation request for the id the operator
/// typed.
pub fn cancel_message(requested: i64, outcome: CancelOutcome) -> String {
    match outcome {
        CancelOutcome::Cancelled => format!("Reservation ID {requested} cancelled successfully!"),
        CancelOutcome::NotFound => format!("No reservation found with ID {requested}"),
    }
}
