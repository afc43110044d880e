// file: src/config/fields.rs
// version: 1.0.0
// guid: 02cc7d4d-8b8f-4d65-b8ec-c0b8ed208b38

//! Field registry and per-field value coercion
//!
//! Every configuration field has exactly one [`Field`] variant; the registry
//! is the single source of truth for the key table used by loading,
//! environment overlay, and serialization.

use crate::config::ZfsConfig;
use crate::error::{ConfigError, Result};

/// Identity of one configuration field in the installer schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Disk,
    Hostname,
    Timezone,
    PoolRoot,
    PoolBoot,
    ArcMaxMb,
    Encrypt,
    Force,
    NewUser,
    NewUserSudo,
    SshImportIds,
    SshAuthorizedKeys,
    SshAuthorizedKeysUrls,
    PermitRootLogin,
    PasswordAuth,
    CiDatasources,
}

impl Field {
    /// All fields in canonical key order
    pub const ALL: [Field; 16] = [
        Field::Disk,
        Field::Hostname,
        Field::Timezone,
        Field::PoolRoot,
        Field::PoolBoot,
        Field::ArcMaxMb,
        Field::Encrypt,
        Field::Force,
        Field::NewUser,
        Field::NewUserSudo,
        Field::SshImportIds,
        Field::SshAuthorizedKeys,
        Field::SshAuthorizedKeysUrls,
        Field::PermitRootLogin,
        Field::PasswordAuth,
        Field::CiDatasources,
    ];

    /// Get the environment variable key for this field
    pub fn env_key(self) -> &'static str {
        match self {
            Field::Disk => "DISK",
            Field::Hostname => "HOSTNAME",
            Field::Timezone => "TZ",
            Field::PoolRoot => "POOL_R",
            Field::PoolBoot => "POOL_B",
            Field::ArcMaxMb => "ARC_MAX_MB",
            Field::Encrypt => "ENCRYPT",
            Field::Force => "FORCE",
            Field::NewUser => "NEW_USER",
            Field::NewUserSudo => "NEW_USER_SUDO",
            Field::SshImportIds => "SSH_IMPORT_IDS",
            Field::SshAuthorizedKeys => "SSH_AUTHORIZED_KEYS",
            Field::SshAuthorizedKeysUrls => "SSH_AUTHORIZED_KEYS_URLS",
            Field::PermitRootLogin => "PERMIT_ROOT_LOGIN",
            Field::PasswordAuth => "PASSWORD_AUTH",
            Field::CiDatasources => "CI_DATASOURCES",
        }
    }

    /// Look up a field by its environment variable key
    pub fn from_env_key(key: &str) -> Option<Field> {
        Field::ALL.into_iter().find(|field| field.env_key() == key)
    }
}

impl ZfsConfig {
    /// Apply a raw string value to the given field, coercing it to the
    /// field's type.
    ///
    /// Boolean and list coercion never fail; a non-numeric value for an
    /// integer field is a fatal parse error.
    pub fn apply_raw(&mut self, field: Field, raw: &str) -> Result<()> {
        match field {
            Field::Disk => self.disk = raw.to_string(),
            Field::Hostname => self.hostname = raw.to_string(),
            Field::Timezone => self.timezone = raw.to_string(),
            Field::PoolRoot => self.pool_root = raw.to_string(),
            Field::PoolBoot => self.pool_boot = raw.to_string(),
            Field::ArcMaxMb => self.arc_max_mb = parse_int(field, raw)?,
            Field::Encrypt => self.encrypt = parse_bool(raw),
            Field::Force => self.force = parse_bool(raw),
            Field::NewUser => {
                self.new_user = if raw.is_empty() {
                    None
                } else {
                    Some(raw.to_string())
                };
            }
            Field::NewUserSudo => self.new_user_sudo = parse_bool(raw),
            Field::SshImportIds => self.ssh_import_ids = parse_list(raw),
            Field::SshAuthorizedKeys => self.ssh_authorized_keys = parse_list(raw),
            Field::SshAuthorizedKeysUrls => self.ssh_authorized_keys_urls = parse_list(raw),
            Field::PermitRootLogin => self.permit_root_login = raw.to_string(),
            Field::PasswordAuth => self.password_auth = parse_bool(raw),
            Field::CiDatasources => self.ci_datasources = parse_list(raw),
        }
        Ok(())
    }

    /// Render the given field as its shell-compatible textual form.
    ///
    /// Booleans become "1"/"0", the datasources list uses bracket form,
    /// other lists are whitespace-joined, and an absent optional is the
    /// empty string. The output reparses through [`ZfsConfig::apply_raw`]
    /// to an equal value.
    pub fn export_value(&self, field: Field) -> String {
        match field {
            Field::Disk => self.disk.clone(),
            Field::Hostname => self.hostname.clone(),
            Field::Timezone => self.timezone.clone(),
            Field::PoolRoot => self.pool_root.clone(),
            Field::PoolBoot => self.pool_boot.clone(),
            Field::ArcMaxMb => self.arc_max_mb.to_string(),
            Field::Encrypt => format_bool(self.encrypt),
            Field::Force => format_bool(self.force),
            Field::NewUser => self.new_user.clone().unwrap_or_default(),
            Field::NewUserSudo => format_bool(self.new_user_sudo),
            Field::SshImportIds => self.ssh_import_ids.join(" "),
            Field::SshAuthorizedKeys => self.ssh_authorized_keys.join(" "),
            Field::SshAuthorizedKeysUrls => self.ssh_authorized_keys_urls.join(" "),
            Field::PermitRootLogin => self.permit_root_login.clone(),
            Field::PasswordAuth => format_bool(self.password_auth),
            Field::CiDatasources => format!("[{}]", self.ci_datasources.join(",")),
        }
    }
}

/// Parse a boolean token: "1", "true", "yes", "on" (any case) are true,
/// everything else is false.
fn parse_bool(raw: &str) -> bool {
    matches!(raw.to_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

/// Parse a base-10 integer, reporting the owning field's key on failure.
fn parse_int(field: Field, raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ConfigError::parse(field.env_key(), raw))
}

/// Parse a list value: bracket form `[a,b,c]` splits on commas, anything
/// else splits on whitespace. Elements lose surrounding quotes; blank
/// elements are dropped.
fn parse_list(raw: &str) -> Vec<String> {
    if raw.is_empty() {
        return Vec::new();
    }
    let items: Vec<&str> = if raw.starts_with('[') && raw.ends_with(']') {
        raw[1..raw.len() - 1].split(',').collect()
    } else {
        raw.split_whitespace().collect()
    };
    items
        .into_iter()
        .filter(|item| !item.trim().is_empty())
        .map(|item| {
            item.trim()
                .trim_matches(|c| c == '"' || c == '\'')
                .to_string()
        })
        .collect()
}

fn format_bool(value: bool) -> String {
    let token = if value { "1" } else { "0" };
    token.to_string()
}
