// file: src/config/mod.rs
// version: 1.0.0
// guid: 7c615726-0cdc-4503-b6bf-4934b1e7e3b1

//! Configuration model for the ZFS installer
//!
//! Handles loading, validation, and serialization of the installer
//! parameter set consumed by the partitioning and bootstrap phases.

pub mod fields;
pub mod loader;
pub mod validator;

pub use fields::Field;
pub use loader::ConfigLoader;

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Installer configuration with validated, typed fields.
///
/// A value obtained through [`ZfsConfig::from_env_file`] has passed full
/// validation; no partially valid instance is observable from the loading
/// path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ZfsConfig {
    /// Target disk device path (whole disk, e.g. /dev/sda)
    pub disk: String,
    /// System hostname
    pub hostname: String,
    /// System timezone
    pub timezone: String,
    /// ZFS root pool name
    pub pool_root: String,
    /// ZFS boot pool name
    pub pool_boot: String,
    /// ZFS ARC cache ceiling in megabytes
    pub arc_max_mb: i64,
    /// Enable native ZFS encryption
    pub encrypt: bool,
    /// Cloud-init datasource list
    pub ci_datasources: Vec<String>,
    /// Skip destructive-operation confirmation
    pub force: bool,
    /// Additional user account to create
    pub new_user: Option<String>,
    /// Grant the new user sudo privileges
    pub new_user_sudo: bool,
    /// SSH key import identities (e.g. gh:username)
    pub ssh_import_ids: Vec<String>,
    /// Literal SSH authorized keys
    pub ssh_authorized_keys: Vec<String>,
    /// URLs to fetch authorized keys from
    pub ssh_authorized_keys_urls: Vec<String>,
    /// sshd PermitRootLogin setting
    pub permit_root_login: String,
    /// sshd password authentication setting
    pub password_auth: bool,
}

impl Default for ZfsConfig {
    fn default() -> Self {
        Self {
            disk: "/dev/sda".to_string(),
            hostname: "mail1".to_string(),
            timezone: "UTC".to_string(),
            pool_root: "rpool".to_string(),
            pool_boot: "bpool".to_string(),
            arc_max_mb: 2048,
            encrypt: false,
            ci_datasources: vec![
                "ConfigDrive".to_string(),
                "NoCloud".to_string(),
                "Ec2".to_string(),
            ],
            force: false,
            new_user: None,
            new_user_sudo: true,
            ssh_import_ids: Vec::new(),
            ssh_authorized_keys: Vec::new(),
            ssh_authorized_keys_urls: Vec::new(),
            permit_root_login: "prohibit-password".to_string(),
            password_auth: false,
        }
    }
}

impl ZfsConfig {
    /// Load a validated configuration from an env file, overlaying any
    /// matching process environment variables.
    ///
    /// A missing file is not an error; defaults are used and the
    /// environment overlay still applies.
    pub fn from_env_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        ConfigLoader::new().load(path)
    }

    /// Validate all field constraints, collecting every violation
    pub fn validate(&self) -> Result<()> {
        validator::validate_config(self)
    }

    /// Render every field as an environment variable pair, in canonical
    /// key order
    pub fn to_env_vars(&self) -> Vec<(&'static str, String)> {
        Field::ALL
            .into_iter()
            .map(|field| (field.env_key(), self.export_value(field)))
            .collect()
    }

    /// Generate the human-readable configuration summary
    pub fn display_summary(&self) -> String {
        let mut lines = vec![
            "=== ZFS Installation Configuration ===".to_string(),
            format!("Target Disk: {}", self.disk),
            format!("Hostname: {}", self.hostname),
            format!("Timezone: {}", self.timezone),
            format!("Root Pool: {}", self.pool_root),
            format!("Boot Pool: {}", self.pool_boot),
            format!("ARC Max: {}MB", self.arc_max_mb),
            format!(
                "Encryption: {}",
                if self.encrypt { "Enabled" } else { "Disabled" }
            ),
            format!("Force Mode: {}", if self.force { "Yes" } else { "No" }),
        ];

        if let Some(user) = &self.new_user {
            lines.push(format!("New User: {}", user));
            lines.push(format!(
                "User Sudo: {}",
                if self.new_user_sudo { "Yes" } else { "No" }
            ));
        }

        if !self.ssh_import_ids.is_empty() {
            lines.push(format!("SSH Import IDs: {}", self.ssh_import_ids.join(", ")));
        }

        lines.push(format!("Root Login: {}", self.permit_root_login));
        lines.push(format!(
            "Password Auth: {}",
            if self.password_auth { "Yes" } else { "No" }
        ));

        lines.join("\n")
    }
}
