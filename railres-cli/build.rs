//! Build script for railres-cli.
//!
//! Generates the railres.1 man page at build time using clap_mangen and
//! places it in OUT_DIR.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is described here directly.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in sync with src/cli.rs.
fn build_cli() -> Command {
    Command::new("railres")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage railway reservations from an interactive menu")
        .long_about(
            "Interactive menu for adding, cancelling and displaying railway reservations. \
             Reservations are kept in memory for the lifetime of the process.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config-dir")
                .long("config-dir")
                .help("Directory holding config.yaml (default: ~/.railres)")
                .value_name("PATH")
                .env("RAILRES_CONFIG_DIR"),
        )
        .arg(
            Arg::new("format")
                .long("format")
                .help("Listing format used by \"Display Reservations\"")
                .value_parser(["table", "json"]),
        )
        .arg(
            Arg::new("plain")
                .long("plain")
                .help("Book without the complimentary perk")
                .action(clap::ArgAction::SetTrue),
        )
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(
        std::env::var("OUT_DIR").map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?,
    );
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let mut buffer = Vec::new();
    Man::new(build_cli()).render(&mut buffer)?;
    fs::write(man_dir.join("railres.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    Ok(())
}
