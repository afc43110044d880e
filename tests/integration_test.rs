// file: tests/integration_test.rs
// version: 1.0.0
// guid: 1c1c0e00-2631-41d2-b8ad-7c53d5050110

//! Integration tests for the ZFS install configuration tool

use std::collections::HashMap;
use tempfile::TempDir;
use zfs_install_config::{
    config::{loader::ConfigLoader, ZfsConfig},
    error::ConfigError,
    reporter::ProgressReporter,
    Result,
};

/// Loader with an empty environment overlay, so the surrounding process
/// environment can never leak into a test
fn loader_without_process_env() -> ConfigLoader {
    ConfigLoader::with_env(HashMap::new())
}

#[test]
fn test_full_config_loading() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();

    // Covers quoting, comments, booleans, and both list forms
    let config_content = r#"
# Installer settings for the mail host
DISK=/dev/nvme0n1
HOSTNAME=mail2
TZ='Europe/Berlin'
POOL_R=tank
POOL_B=boot-pool
ARC_MAX_MB=4096  # plenty for a restore
ENCRYPT=yes
FORCE=1
NEW_USER=admin
NEW_USER_SUDO=true
SSH_IMPORT_IDS="gh:user1 gh:user2"
PERMIT_ROOT_LOGIN=no
PASSWORD_AUTH=off
CI_DATASOURCES=[NoCloud,Ec2]
"#;

    let config_path = temp_dir.path().join("installer.env");
    std::fs::write(&config_path, config_content)?;

    let loader = loader_without_process_env();
    let config = loader.load(&config_path)?;

    assert_eq!(config.disk, "/dev/nvme0n1");
    assert_eq!(config.hostname, "mail2");
    assert_eq!(config.timezone, "Europe/Berlin");
    assert_eq!(config.pool_root, "tank");
    assert_eq!(config.pool_boot, "boot-pool");
    assert_eq!(config.arc_max_mb, 4096);
    assert!(config.encrypt);
    assert!(config.force);
    assert_eq!(config.new_user.as_deref(), Some("admin"));
    assert!(config.new_user_sudo);
    assert_eq!(config.ssh_import_ids, vec!["gh:user1", "gh:user2"]);
    assert_eq!(config.permit_root_login, "no");
    assert!(!config.password_auth);
    assert_eq!(config.ci_datasources, vec!["NoCloud", "Ec2"]);

    Ok(())
}

#[test]
fn test_missing_file_falls_back_to_defaults() -> Result<()> {
    let loader = loader_without_process_env();
    let config = loader.load("/nonexistent/installer.env")?;

    assert_eq!(config, ZfsConfig::default());
    Ok(())
}

#[test]
fn test_partition_disk_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("installer.env");
    std::fs::write(&config_path, "DISK=/dev/sda1\n").unwrap();

    let loader = loader_without_process_env();
    let result = loader.load(&config_path);

    assert!(result.is_err());
    let error = result.unwrap_err();
    assert!(error.to_string().contains("appears to be a partition"));
}

#[test]
fn test_collected_violations_keep_check_order() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("installer.env");
    std::fs::write(
        &config_path,
        "DISK=sda\nHOSTNAME=bad host\nARC_MAX_MB=32\n",
    )
    .unwrap();

    let loader = loader_without_process_env();
    let error = loader.load(&config_path).unwrap_err();

    match error {
        ConfigError::Validation(violations) => {
            assert_eq!(violations.len(), 3);
            assert_eq!(violations[0], "Invalid disk path: sda");
            assert_eq!(violations[1], "Invalid hostname: bad host");
            assert_eq!(violations[2], "ARC max too small: 32MB");
        }
        other => panic!("expected a validation error, got: {}", other),
    }
}

#[test]
fn test_env_overrides_file() -> Result<()> {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("installer.env");
    std::fs::write(&config_path, "HOSTNAME=from-file\nDISK=/dev/sdb\n")?;

    let mut loader = loader_without_process_env();
    loader.set_env_var("HOSTNAME".to_string(), "from-env".to_string());
    let config = loader.load(&config_path)?;

    assert_eq!(config.hostname, "from-env");
    assert_eq!(config.disk, "/dev/sdb");
    Ok(())
}

#[test]
fn test_round_trip_through_env_file() -> Result<()> {
    let original = ZfsConfig {
        disk: "/dev/vdb".to_string(),
        hostname: "restore-target".to_string(),
        arc_max_mb: 8192,
        encrypt: true,
        new_user: Some("operator".to_string()),
        ssh_import_ids: vec!["gh:one".to_string(), "gh:two".to_string()],
        ci_datasources: vec!["NoCloud".to_string()],
        ..ZfsConfig::default()
    };

    // Dump to a file the way the shell workflow would persist it
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("dump.env");
    let mut content = String::new();
    for (key, value) in original.to_env_vars() {
        content.push_str(&format!("{}={}\n", key, value));
    }
    std::fs::write(&config_path, content)?;

    let loader = loader_without_process_env();
    let restored = loader.load(&config_path)?;

    assert_eq!(restored, original);
    Ok(())
}

#[test]
fn test_json_dump_has_documented_shape() -> Result<()> {
    let config = ZfsConfig::default();
    let json = serde_json::to_string_pretty(&config)?;
    let value: serde_json::Value = serde_json::from_str(&json)?;

    assert_eq!(value["disk"], "/dev/sda");
    assert_eq!(value["hostname"], "mail1");
    assert_eq!(value["arc_max_mb"], 2048);
    assert_eq!(value["new_user"], serde_json::Value::Null);
    assert_eq!(value["permit_root_login"], "prohibit-password");
    assert_eq!(
        value["ci_datasources"],
        serde_json::json!(["ConfigDrive", "NoCloud", "Ec2"])
    );
    Ok(())
}

#[test]
fn test_installer_workflow_reporting() -> Result<()> {
    let mut reporter = ProgressReporter::with_color(3, false);

    // The wrapping workflow loads the configuration as its first step
    let load_idx = reporter.start_step("load_config", "Loading configuration");
    let loader = loader_without_process_env();
    let config = loader.load("/nonexistent/installer.env")?;
    reporter.complete_step(load_idx, Some("configuration loaded"));

    let validate_idx = reporter.start_step("validate", "Validating configuration");
    config.validate()?;
    reporter.complete_step(validate_idx, None);

    let partition_idx = reporter.start_step("partition", "Partitioning disk");
    reporter.fail_step(partition_idx, "device busy");

    let snapshot = reporter.status_snapshot();
    assert_eq!(snapshot.total_steps, 3);
    assert_eq!(snapshot.completed_steps, 2);
    assert_eq!(snapshot.failed_steps, 1);

    let summary = reporter.render_summary();
    assert!(summary.contains("Steps completed: 2/3"));
    assert!(summary.contains("Steps failed: 1"));
    assert!(summary.contains("3. partition: device busy"));

    Ok(())
}
