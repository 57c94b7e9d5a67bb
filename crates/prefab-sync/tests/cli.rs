/*
 * cli.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 *
 * Integration tests for the prefab-sync command.
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use prefab_sync::config::{DEFAULT_BASELINE, DEFAULT_OUTPUT};
use prefab_sync::{Destination, SyncArgs, SyncConfig};
use tempfile::TempDir;

const BASELINE: &str = include_str!("../../prefab-db/tests/fixtures/PrefabDefaults.cs");
const CONFIG: &str =
    include_str!("../../prefab-db/tests/fixtures/Searica.Valheim.MoreVanillaBuildPrefabs.cfg");

/// A mod checkout with a baseline table and a local config file.
fn project(baseline: &str) -> (TempDir, PathBuf) {
    let temp = TempDir::new().expect("Failed to create temp directory");
    let baseline_path = temp.path().join(DEFAULT_BASELINE);
    fs::create_dir_all(baseline_path.parent().unwrap()).unwrap();
    fs::write(&baseline_path, baseline).unwrap();

    let cfg = temp.path().join("mod.cfg");
    fs::write(&cfg, CONFIG).unwrap();
    (temp, cfg)
}

fn args(dir: &Path, cfg: &Path) -> SyncArgs {
    SyncArgs {
        project_dir: Some(dir.to_path_buf()),
        config: Some(cfg.to_path_buf()),
        profile: "Mod-Debug".to_string(),
        ..SyncArgs::default()
    }
}

#[test]
fn test_run_writes_default_output() {
    let (temp, cfg) = project(BASELINE);
    let config = SyncConfig::from_env(&args(temp.path(), &cfg)).unwrap();

    let reconciled = prefab_sync::run(&config).unwrap();

    let written = fs::read_to_string(temp.path().join(DEFAULT_OUTPUT)).unwrap();
    assert_eq!(written, reconciled.output);
    assert_eq!(reconciled.record_count, 4);
    assert!(written.contains("craftingStation: nameof(CraftingStations.Building),"));
}

#[test]
fn test_missing_marker_leaves_output_untouched() {
    let (temp, cfg) = project("namespace MVBP.Configs {}\n");
    let out = temp.path().join("out.txt");
    fs::write(&out, "previous").unwrap();

    let config = SyncConfig::from_env(&SyncArgs {
        output: Some(out.clone()),
        ..args(temp.path(), &cfg)
    })
    .unwrap();
    assert_eq!(config.output, Destination::File(out.clone()));

    let err = prefab_sync::run(&config).unwrap_err();
    let message = format!("{err:#}");
    assert!(message.contains("PrefabDefaults.cs"), "{message}");
    assert!(message.contains("marker line not found"), "{message}");
    assert_eq!(fs::read_to_string(&out).unwrap(), "previous");
}

#[test]
fn test_binary_prints_to_stdout() {
    let (temp, cfg) = project(BASELINE);

    let output = Command::new(env!("CARGO_BIN_EXE_prefab-sync"))
        .arg("--project-dir")
        .arg(temp.path())
        .arg("--config")
        .arg(&cfg)
        .args(["--output", "-", "--quiet"])
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run prefab-sync");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.starts_with(prefab_db::DEFAULT_MARKER));
    assert!(stdout.ends_with("        };\n"));
    assert!(!temp.path().join(DEFAULT_OUTPUT).exists());
}

#[test]
fn test_binary_reports_missing_appdata() {
    let temp = TempDir::new().unwrap();

    let output = Command::new(env!("CARGO_BIN_EXE_prefab-sync"))
        .arg("--project-dir")
        .arg(temp.path())
        .env_remove("APPDATA")
        .output()
        .expect("Failed to run prefab-sync");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("APPDATA"), "{stderr}");
}
