// file: src/config/validator.rs
// version: 1.0.0
// guid: 80a35530-8200-4cd7-b9c4-fa059fb86bb0

use regex::Regex;
use tracing::debug;

use super::ZfsConfig;
use crate::error::{ConfigError, Result};

/// Accepted values for the sshd PermitRootLogin directive
pub const VALID_PERMIT_ROOT_LOGIN: [&str; 3] = ["yes", "no", "prohibit-password"];

/// Validate the complete configuration.
///
/// Every field rule runs; all violations are collected in fixed field
/// order (disk, hostname, pools, ARC, permit-root-login) so one load
/// reports every problem in the file. Within a field the first failing
/// rule wins.
pub fn validate_config(config: &ZfsConfig) -> Result<()> {
    debug!("Validating configuration for host {}", config.hostname);

    let mut violations = Vec::new();

    check_disk(&config.disk, &mut violations);
    check_hostname(&config.hostname, &mut violations);
    check_pool_name(&config.pool_root, &mut violations);
    check_pool_name(&config.pool_boot, &mut violations);
    check_arc_size(config.arc_max_mb, &mut violations);
    check_permit_root_login(&config.permit_root_login, &mut violations);

    if violations.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::validation(violations))
    }
}

/// Disk must be an absolute device path naming a whole disk, not a
/// partition.
fn check_disk(disk: &str, violations: &mut Vec<String>) {
    if !disk.starts_with("/dev/") {
        violations.push(format!("Invalid disk path: {}", disk));
        return;
    }

    // NVMe partitions end in pN; SATA/SCSI/virtio partitions end in a digit
    let nvme_partition = Regex::new(r"p\d+$").expect("Invalid NVMe partition regex");
    let sata_partition =
        Regex::new(r"^/dev/[sv]d[a-z]\d+$").expect("Invalid SATA partition regex");

    if nvme_partition.is_match(disk) || sata_partition.is_match(disk) {
        violations.push(format!(
            "DISK={} appears to be a partition. Please specify the whole disk.",
            disk
        ));
    }
}

fn check_hostname(hostname: &str, violations: &mut Vec<String>) {
    let hostname_regex = Regex::new(r"^[a-zA-Z0-9-]+$").expect("Invalid hostname regex");

    if !hostname_regex.is_match(hostname) {
        violations.push(format!("Invalid hostname: {}", hostname));
        return;
    }
    if hostname.len() > 63 {
        violations.push(format!("Hostname too long: {}", hostname));
    }
}

fn check_pool_name(name: &str, violations: &mut Vec<String>) {
    let pool_regex = Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Invalid pool name regex");

    if !pool_regex.is_match(name) {
        violations.push(format!("Invalid pool name: {}", name));
    }
}

fn check_arc_size(arc_max_mb: i64, violations: &mut Vec<String>) {
    if arc_max_mb < 64 {
        violations.push(format!("ARC max too small: {}MB", arc_max_mb));
    }
}

fn check_permit_root_login(value: &str, violations: &mut Vec<String>) {
    if !VALID_PERMIT_ROOT_LOGIN.contains(&value) {
        violations.push(format!("Invalid permit_root_login: {}", value));
    }
}
