/*
 * main.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! prefab-sync CLI - Main entry point

use anyhow::Result;
use clap::Parser;
use prefab_sync::{SyncArgs, SyncConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "prefab-sync")]
#[command(version)]
#[command(
    about = "Fold BepInEx config values back into PrefabDefaults.cs",
    long_about = None
)]
struct Cli {
    #[command(flatten)]
    args: SyncArgs,

    /// Only log warnings and errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,

    /// Log parser and writer progress
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_filter = if cli.verbose {
        "prefab_sync=debug,prefab_db=debug"
    } else if cli.quiet {
        "prefab_sync=warn,prefab_db=warn"
    } else {
        "prefab_sync=info,prefab_db=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = SyncConfig::from_env(&cli.args)?;
    prefab_sync::run(&config)?;
    Ok(())
}
