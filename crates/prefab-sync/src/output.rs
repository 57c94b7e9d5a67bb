/*
 * output.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Writing the regenerated table.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use tempfile::NamedTempFile;

use crate::config::Destination;

pub fn write_output(destination: &Destination, contents: &str) -> Result<()> {
    match destination {
        Destination::Stdout => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(contents.as_bytes())
                .context("Failed to write output to stdout")?;
            stdout.flush().context("Failed to flush stdout")
        }
        Destination::File(path) => write_atomic(path, contents),
    }
}

/// Replace `path` with `contents` in one step.
///
/// The text goes to a temporary file in the same directory, which is then
/// renamed over `path`. If anything fails, `path` keeps its old contents.
pub fn write_atomic(path: &Path, contents: &str) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create output directory: {}", dir.display()))?;

    let mut temp = NamedTempFile::new_in(dir)
        .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
    temp.write_all(contents.as_bytes())
        .with_context(|| format!("Failed to write temporary file: {}", temp.path().display()))?;
    temp.persist(path)
        .with_context(|| format!("Failed to write file: {}", path.display()))?;

    tracing::debug!(path = %path.display(), bytes = contents.len(), "Wrote output");
    Ok(())
}
