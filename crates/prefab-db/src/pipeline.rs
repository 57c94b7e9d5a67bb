/*
 * pipeline.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Baseline + overrides → merged C# table, in one call.

use crate::baseline::BaselineParser;
use crate::error::Result;
use crate::merge::{Change, merge};
use crate::overrides::{DEFAULT_HEADER_LINES, OverrideParser};
use crate::record::Schema;
use crate::serialize::{DEFAULT_MARKER, Serializer};

/// Knobs for [`reconcile`].
#[derive(Debug, Clone)]
pub struct ReconcileOptions {
    /// Line in the baseline where the table starts
    pub marker: String,
    /// Leading config-file lines to skip
    pub header_lines: usize,
    pub schema: Schema,
}

impl Default for ReconcileOptions {
    fn default() -> Self {
        ReconcileOptions {
            marker: DEFAULT_MARKER.to_string(),
            header_lines: DEFAULT_HEADER_LINES,
            schema: Schema::prefab(),
        }
    }
}

impl ReconcileOptions {
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.marker = marker.into();
        self
    }

    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }
}

/// Result of a [`reconcile`] run.
#[derive(Debug, Clone)]
pub struct Reconciled {
    /// The regenerated table text
    pub output: String,
    pub changes: Vec<Change>,
    /// Number of records in the output
    pub record_count: usize,
}

/// Parse both inputs, merge the overrides onto the baseline and render the
/// result.
pub fn reconcile(baseline: &str, overrides: &str, options: &ReconcileOptions) -> Result<Reconciled> {
    let schema = &options.schema;

    let baseline_records = BaselineParser::new(schema, &options.marker).parse(baseline)?;
    let override_records = OverrideParser::new(schema)
        .with_header_lines(options.header_lines)
        .parse(overrides);

    tracing::debug!(
        baseline = baseline_records.len(),
        overrides = override_records.len(),
        "Merging prefab records"
    );
    let outcome = merge(baseline_records, override_records);
    let output = Serializer::new(schema).serialize(&outcome.records)?;

    Ok(Reconciled {
        output,
        record_count: outcome.records.len(),
        changes: outcome.changes,
    })
}
