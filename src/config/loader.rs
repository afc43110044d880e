// file: src/config/loader.rs
// version: 1.0.0
// guid: 96bafb6a-17ed-4556-b042-afbebdb03819

//! Environment file loading and process environment overlay

use std::collections::HashMap;
use std::fs;
use std::path::Path;
use tracing::{debug, warn};

use super::{Field, ZfsConfig};
use crate::error::{ConfigError, Result};

/// Configuration loader with an injectable environment snapshot.
///
/// The process environment is captured once at construction so tests can
/// substitute their own variable set without mutating global state.
pub struct ConfigLoader {
    env_vars: HashMap<String, String>,
}

impl ConfigLoader {
    /// Create a loader using the current process environment
    pub fn new() -> Self {
        Self {
            env_vars: std::env::vars().collect(),
        }
    }

    /// Create a loader with an explicit environment snapshot
    pub fn with_env(env_vars: HashMap<String, String>) -> Self {
        Self { env_vars }
    }

    /// Set an environment variable in the loader's snapshot
    pub fn set_env_var(&mut self, key: String, value: String) {
        self.env_vars.insert(key, value);
    }

    /// Load a validated configuration.
    ///
    /// Defaults, then file content, then environment variables; the
    /// environment always wins. A missing file is skipped silently.
    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<ZfsConfig> {
        let path = path.as_ref();
        let mut config = ZfsConfig::default();

        if path.exists() {
            let content = fs::read_to_string(path)
                .map_err(|e| ConfigError::file_read(path, e))?;
            self.apply_file(&mut config, &content, path)?;
        } else {
            debug!("Env file {} not found, using defaults", path.display());
        }

        for field in Field::ALL {
            if let Some(value) = self.env_vars.get(field.env_key()) {
                config.apply_raw(field, value)?;
            }
        }

        config.validate()?;
        Ok(config)
    }

    /// Apply key=value lines from file content.
    ///
    /// Blank lines and comment lines are skipped; a line without `=` is a
    /// warning, not an error. Unrecognized keys are ignored so the file
    /// can carry variables for other tooling.
    fn apply_file(&self, config: &mut ZfsConfig, content: &str, path: &Path) -> Result<()> {
        for (line_num, raw_line) in content.lines().enumerate() {
            let line = raw_line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            let (key, value) = match line.split_once('=') {
                Some(pair) => pair,
                None => {
                    warn!(
                        "Invalid line {} in {}: {}",
                        line_num + 1,
                        path.display(),
                        line
                    );
                    continue;
                }
            };

            let key = key.trim();
            let value = clean_value(value);
            if let Some(field) = Field::from_env_key(key) {
                config.apply_raw(field, &value)?;
            }
        }
        Ok(())
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Clean a raw value: trim, cut at the first unquoted `#`, then strip one
/// layer of matching surrounding quotes.
fn clean_value(raw: &str) -> String {
    let trimmed = raw.trim();
    let cut = match find_unquoted_hash(trimmed) {
        Some(pos) => trimmed[..pos].trim_end(),
        None => trimmed,
    };
    strip_quotes(cut).to_string()
}

/// Find the byte offset of the first `#` outside single or double quotes
fn find_unquoted_hash(value: &str) -> Option<usize> {
    let mut quote: Option<char> = None;
    for (idx, ch) in value.char_indices() {
        match quote {
            Some(open) if ch == open => quote = None,
            Some(_) => {}
            None => match ch {
                '"' | '\'' => quote = Some(ch),
                '#' => return Some(idx),
                _ => {}
            },
        }
    }
    None
}

/// Strip one matching pair of surrounding quotes, if present
fn strip_quotes(value: &str) -> &str {
    let bytes = value.as_bytes();
    if bytes.len() >= 2 {
        let first = bytes[0];
        if (first == b'"' || first == b'\'') && bytes[bytes.len() - 1] == first {
            return &value[1..value.len() - 1];
        }
    }
    value
}
