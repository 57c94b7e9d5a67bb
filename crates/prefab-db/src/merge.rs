/*
 * merge.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Field-wise merge of override records onto baseline records.
//!
//! For every override record:
//! - unknown names are added as-is;
//! - known names take every *set* override field whose value differs.
//!
//! Unset override fields never clear a baseline value, and baseline records
//! with no override pass through untouched.

use std::collections::hash_map::Entry;
use std::fmt;

use crate::record::{Field, Record, RecordSet};

/// A change the merge made to the baseline, for operator review.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Change {
    /// A record present only in the overrides
    Added { name: String },
    /// A baseline value replaced by a different override value
    Modified {
        name: String,
        field: Field,
        from: String,
        to: String,
    },
}

impl fmt::Display for Change {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Change::Added { name } => write!(f, "Added prefab {name}"),
            Change::Modified {
                name,
                field,
                from,
                to,
            } => write!(f, "Modified prefab {name}: changed {field}: {from} to {to}"),
        }
    }
}

/// The merged records and the changes that produced them.
#[derive(Debug, Clone, Default)]
pub struct MergeOutcome {
    pub records: RecordSet,
    /// Additions and modifications, ordered by record name then field
    pub changes: Vec<Change>,
}

/// Merge `overrides` onto `baseline`.
///
/// Filling a field the baseline left unset is applied but not reported as a
/// change; only replacing an existing value is.
pub fn merge(baseline: RecordSet, overrides: RecordSet) -> MergeOutcome {
    let mut records = baseline;
    let mut changes = Vec::new();

    let mut incoming: Vec<(String, Record)> = overrides.into_iter().collect();
    incoming.sort_by(|a, b| a.0.cmp(&b.0));

    for (name, record) in incoming {
        match records.entry(name) {
            Entry::Vacant(slot) => {
                tracing::info!(record = %slot.key(), "Added prefab");
                changes.push(Change::Added {
                    name: slot.key().clone(),
                });
                slot.insert(record);
            }
            Entry::Occupied(mut slot) => {
                let name = slot.key().clone();
                let existing = slot.get_mut();
                for (field, value) in record.set_fields() {
                    let current = existing.get(field).map(str::to_owned);
                    match current {
                        Some(ref current) if current == value => {}
                        Some(current) => {
                            tracing::info!(
                                record = %name,
                                field = field.key(),
                                from = %current,
                                to = %value,
                                "Modified prefab"
                            );
                            changes.push(Change::Modified {
                                name: name.clone(),
                                field,
                                from: current,
                                to: value.to_string(),
                            });
                            existing.set(field, value);
                        }
                        None => existing.set(field, value),
                    }
                }
            }
        }
    }

    MergeOutcome { records, changes }
}
