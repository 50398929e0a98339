#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # railres
//!
//! A library for managing in-memory railway reservations.
//!
//! A [`ReservationRegistry`] assigns identifiers, validates booking fields,
//! rejects duplicate bookings, and answers add/cancel/list requests. The
//! [`SpecialReservationRegistry`] decorator grants a perk on every
//! successful booking without changing any of those rules.
//!
//! ## Core Types
//!
//! - [`ReservationDesk`]: the add/cancel/list capability
//! - [`ReservationRegistry`] and [`SpecialReservationRegistry`]: desk implementations
//! - [`Reservation`], [`ReservationId`] and [`TrainNumber`]: the stored record
//! - [`AddOutcome`], [`CancelOutcome`] and [`Listing`]: request outcomes
//! - [`Error`] and [`Result`]: errors for configuration and output
//! - [`Logger`] and [`LogLevel`]: logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use railres::{AddOutcome, ReservationDesk, ReservationId, ReservationRegistry};
//!
//! let mut registry = ReservationRegistry::new();
//! let booking = registry.add_reservation("Alice", 101, "Delhi");
//! assert_eq!(booking.outcome, AddOutcome::Created(ReservationId::new(1)));
//! assert_eq!(registry.list_reservations().count(), 1);
//! ```

pub mod config;
pub mod desk;
pub mod error;
pub mod logging;
pub mod output;
pub mod registry;
pub mod reservation;
pub mod special;
pub mod train;

pub use config::{Config, ConfigBuilder, ListFormat};
pub use desk::{AddOutcome, Booking, CancelOutcome, Listing, Perk, ReservationDesk};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use output::ListingFormatter;
pub use registry::ReservationRegistry;
pub use reservation::{DuplicateKey, Reservation, ReservationId, ValidationError};
pub use special::SpecialReservationRegistry;
pub use train::TrainNumber;
