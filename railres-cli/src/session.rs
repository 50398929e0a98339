//! Wires configuration, desk and terminal together for one run.

use std::io::{BufRead, Write};

use railres::{Config, ReservationDesk, ReservationRegistry, SpecialReservationRegistry};

use crate::error::CliError;
use crate::shell::MenuShell;
use crate::utils::{load_configuration, GlobalOptions};

/// Runs the menu on stdin/stdout with the configured desk.
pub fn run(global: &GlobalOptions) -> Result<(), CliError> {
    let config = load_configuration(global)?;
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run_with_io(&config, stdin.lock(), stdout.lock())
}

/// Runs the menu over arbitrary input and output.
///
/// A fresh registry is created for every run; nothing outlives it.
pub fn run_with_io<R: BufRead, W: Write>(
    config: &Config,
    input: R,
    output: W,
) -> Result<(), CliError> {
    let registry = ReservationRegistry::new();
    if config.special_bookings_or_default() {
        log::debug!("Using special reservation desk");
        drive(SpecialReservationRegistry::new(registry), config, input, output)
    } else {
        log::debug!("Using plain reservation desk");
        drive(registry, config, input, output)
    }
}

fn drive<D: ReservationDesk, R: BufRead, W: Write>(
    desk: D,
    config: &Config,
    input: R,
    output: W,
) -> Result<(), CliError> {
    let formatter = config
        .list_format_or_default()
        .create_formatter(config.show_count_or_default());
    MenuShell::new(desk, input, output, formatter).run()
}
