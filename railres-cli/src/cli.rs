//! CLI structure and option definitions.
//!
//! This module defines the main CLI structure using clap's derive macros.
//! The program has no subcommands: it always runs the interactive menu.

use clap::Parser;
use railres::ListFormat;
use std::path::PathBuf;

/// Interactive railway reservation manager.
#[derive(Parser)]
#[command(name = "railres")]
#[command(version, about = "Manage railway reservations from an interactive menu", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long)]
    pub quiet: bool,

    /// Directory holding config.yaml (default: ~/.railres)
    #[arg(long, value_name = "PATH", env = "RAILRES_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    /// Listing format used by "Display Reservations"
    #[arg(long, value_enum, ignore_case = true)]
    pub format: Option<ListFormat>,

    /// Book without the complimentary perk
    #[arg(long)]
    pub plain: bool,
}
