/*
 * lib.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Command-line plumbing around [`prefab_db::reconcile`].
//!
//! Reads `PrefabDefaults.cs` and the mod's BepInEx config, folds the config
//! values into the defaults and writes the regenerated table for review.

pub mod config;
pub mod output;

use anyhow::{Context, Result};
use prefab_db::Reconciled;

pub use config::{Destination, InvalidInputPath, SyncArgs, SyncConfig};

/// Run one reconciliation with resolved settings.
pub fn run(config: &SyncConfig) -> Result<Reconciled> {
    let baseline = config::read_input("baseline", &config.baseline)?;
    let overrides = config::read_input("config", &config.overrides)?;

    tracing::info!(
        baseline = %config.baseline.display(),
        config = %config.overrides.display(),
        "Reconciling prefab defaults"
    );

    let reconciled = prefab_db::reconcile(&baseline, &overrides, &config.options)
        .with_context(|| {
            format!(
                "Failed to reconcile {} with {}",
                config.baseline.display(),
                config.overrides.display()
            )
        })?;

    output::write_output(&config.output, &reconciled.output)?;

    tracing::info!(
        records = reconciled.record_count,
        changes = reconciled.changes.len(),
        "Wrote merged prefab defaults"
    );
    Ok(reconciled)
}
