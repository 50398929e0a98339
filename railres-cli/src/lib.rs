//! Library exports for railres-cli.
//!
//! The binary is a thin wrapper around these modules; exposing them lets
//! tests drive the menu without spawning a process.

pub mod cli;
pub mod error;
pub mod render;
pub mod session;
pub mod shell;
pub mod utils;

pub use cli::Cli;
