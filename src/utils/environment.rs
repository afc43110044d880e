// file: src/utils/environment.rs
// version: 1.0.0
// guid: c4dda71b-9a32-4b0a-ae99-7f3a46255e1c

//! Host environment validation for the installer

use std::path::PathBuf;
use tracing::debug;

/// Commands the installer shells out to during a run
pub const REQUIRED_COMMANDS: [&str; 4] = ["zpool", "zfs", "debootstrap", "sgdisk"];

/// Preconditions checked before the installer is allowed to run.
///
/// Every knob is public so callers (and tests) can relax individual
/// checks without touching the process environment.
pub struct EnvironmentCheck {
    /// Whether an effective UID of 0 is required
    pub require_root: bool,

    /// File whose presence marks a rescue or live environment
    pub rescue_marker: PathBuf,

    /// Commands that must resolve on PATH
    pub required_commands: Vec<String>,
}

impl Default for EnvironmentCheck {
    fn default() -> Self {
        Self {
            require_root: true,
            rescue_marker: PathBuf::from("/proc/cmdline"),
            required_commands: REQUIRED_COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
        }
    }
}

impl EnvironmentCheck {
    /// Create a check with the default preconditions
    pub fn new() -> Self {
        Self::default()
    }

    /// Run every check and collect the findings
    pub fn run(&self) -> EnvironmentReport {
        let mut report = EnvironmentReport::default();

        if self.require_root && !is_root() {
            report.errors.push("Must run as root".to_string());
        }

        if !self.rescue_marker.exists() {
            report
                .warnings
                .push("Cannot verify rescue environment".to_string());
        }

        for command in &self.required_commands {
            match which::which(command) {
                Ok(path) => debug!("Found {} at {}", command, path.display()),
                Err(_) => {
                    report
                        .errors
                        .push(format!("Required command not found: {}", command));
                }
            }
        }

        report
    }
}

/// Findings from an environment check
#[derive(Debug, Clone, Default)]
pub struct EnvironmentReport {
    /// Fatal problems; any entry blocks the installation
    pub errors: Vec<String>,

    /// Non-fatal observations
    pub warnings: Vec<String>,
}

impl EnvironmentReport {
    /// True when no fatal problem was found
    pub fn passed(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check if the process runs with an effective UID of 0
pub fn is_root() -> bool {
    #[cfg(unix)]
    {
        unsafe { libc::geteuid() == 0 }
    }
    #[cfg(windows)]
    {
        false
    }
}
