//! Main entry point for the railres CLI.
//!
//! Runs an interactive menu for adding, cancelling and displaying railway
//! reservations. Reservations live only as long as the process.

use clap::Parser;
use railres_cli::cli::Cli;
use railres_cli::session;
use railres_cli::utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = railres::init_logger(cli.verbose, cli.quiet);
    railres::logging::install(logger);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config_dir: cli.config_dir,
        format: cli.format,
        plain: cli.plain,
    };

    match session::run(&global) {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
