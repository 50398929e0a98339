//! Common test utilities for CLI integration tests.
//!
//! Every command runs against its own temporary configuration directory
//! with the `RAILRES_*` variables cleared, so the host setup never leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const RAILRES_VARS: [&str; 5] = [
    "RAILRES_CONFIG_DIR",
    "RAILRES_SPECIAL_BOOKINGS",
    "RAILRES_LIST_FORMAT",
    "RAILRES_SHOW_COUNT",
    "RAILRES_LOG_MODE",
];

/// Test environment with an isolated configuration directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory passed as `--config-dir`
    pub config_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment with an empty configuration directory.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let config_dir = temp_dir.path().join("railres-config");
        std::fs::create_dir_all(&config_dir).expect("Failed to create config dir");

        Self {
            temp_dir,
            config_dir,
        }
    }

    /// The railres binary with a scrubbed environment and no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("railres").expect("Failed to find railres binary");
        for var in RAILRES_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// The railres binary pointed at this environment's config directory.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--config-dir").arg(&self.config_dir);
        cmd
    }

    /// Write `config.yaml` into the config directory.
    pub fn write_config(&self, content: &str) {
        std::fs::write(self.config_dir.join("config.yaml"), content)
            .expect("Failed to write config file");
    }

    /// The config directory.
    pub fn config_path(&self) -> &Path {
        &self.config_dir
    }
}

/// Menu input that adds a reservation.
#[allow(dead_code)]
pub fn add(name: &str, train: &str, destination: &str) -> String {
    format!("1\n{name}\n{train}\n{destination}\n")
}

/// Menu input that cancels a reservation.
#[allow(dead_code)]
pub fn cancel(id: &str) -> String {
    format!("2\n{id}\n")
}

/// Menu input that displays reservations.
#[allow(dead_code)]
pub const DISPLAY: &str = "3\n";

/// Menu input that exits.
#[allow(dead_code)]
pub const EXIT: &str = "4\n";
