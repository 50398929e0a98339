//! The interactive menu.
//!
//! The shell reads operator choices and field values, calls the desk, and
//! prints the outcome. Malformed numeric input is handled here and never
//! reaches the desk.

use std::io::{BufRead, Write};

use railres::{CancelOutcome, ListingFormatter, ReservationDesk, ReservationId};

use crate::error::CliError;
use crate::render::{booking_messages, cancel_message};

const MENU: &str = "\n=== Railway Reservation System ===\n\
                    1. Add Reservation\n\
                    2. Cancel Reservation\n\
                    3. Display Reservations\n\
                    4. Exit";

/// Whether the menu loop should keep going.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Menu loop over a desk, an input and an output.
pub struct MenuShell<D, R, W> {
    desk: D,
    input: R,
    output: W,
    formatter: Box<dyn ListingFormatter>,
}

impl<D: ReservationDesk, R: BufRead, W: Write> MenuShell<D, R, W> {
    /// Creates a shell that renders listings with `formatter`.
    pub fn new(desk: D, input: R, output: W, formatter: Box<dyn ListingFormatter>) -> Self {
        Self {
            desk,
            input,
            output,
            formatter,
        }
    }

    /// Runs the menu until the operator exits or input ends.
    ///
    /// # Errors
    ///
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<(), CliError> {
        loop {
            writeln!(self.output, "{MENU}")?;
            let Some(line) = self.prompt("Enter your choice: ")? else {
                log::debug!("Input closed, leaving menu");
                return Ok(());
            };

            let Ok(choice) = line.trim().parse::<i64>() else {
                writeln!(self.output, "Please enter a valid number.")?;
                continue;
            };

            let flow = match choice {
                1 => self.add()?,
                2 => self.cancel()?,
                3 => self.display()?,
                4 => {
                    writeln!(self.output, "Exiting system. Thank you!")?;
                    Flow::Exit
                }
                _ => {
                    writeln!(self.output, "Invalid choice. Try again.")?;
                    Flow::Continue
                }
            };

            if flow == Flow::Exit {
                return Ok(());
            }
        }
    }

    /// Consumes the shell and returns the desk.
    pub fn into_desk(self) -> D {
        self.desk
    }

    fn add(&mut self) -> Result<Flow, CliError> {
        let Some(name) = self.prompt("Enter passenger name: ")? else {
            return Ok(Flow::Exit);
        };
        let Some(train) = self.prompt("Enter train number: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(train_number) = train.trim().parse::<i64>() else {
            writeln!(self.output, "Invalid train number!")?;
            return Ok(Flow::Continue);
        };
        let Some(destination) = self.prompt("Enter destination: ")? else {
            return Ok(Flow::Exit);
        };

        let booking = self
            .desk
            .add_reservation(name.trim(), train_number, destination.trim());
        for message in booking_messages(&booking) {
            writeln!(self.output, "{message}")?;
        }
        Ok(Flow::Continue)
    }

    fn cancel(&mut self) -> Result<Flow, CliError> {
        let Some(raw) = self.prompt("Enter Reservation ID to cancel: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(requested) = raw.trim().parse::<i64>() else {
            writeln!(self.output, "Invalid reservation ID!")?;
            return Ok(Flow::Continue);
        };

        // Ids are never negative, so no reservation can match one.
        let outcome = match u64::try_from(requested) {
            Ok(id) => self.desk.cancel_reservation(ReservationId::new(id)),
            Err(_) => CancelOutcome::NotFound,
        };
        writeln!(self.output, "{}", cancel_message(requested, outcome))?;
        Ok(Flow::Continue)
    }

    fn display(&mut self) -> Result<Flow, CliError> {
        let listing = self.desk.list_reservations();
        let rendered = self.formatter.format(&listing)?;
        write!(self.output, "{rendered}")?;
        Ok(Flow::Continue)
    }

    /// Prints `label` and reads one line. `None` means end of input.
    fn prompt(&mut self, label: &str) -> Result<Option<String>, CliError> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
