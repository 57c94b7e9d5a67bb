/*
 * error.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Error types for prefab-db

use thiserror::Error;

/// Fatal errors raised while reconciling PrefabDB tables.
///
/// Malformed input lines are never errors; they are skipped by the parsers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PrefabDbError {
    /// The baseline input ended before the marker line was seen.
    #[error("marker line not found in baseline input: {marker:?}")]
    MarkerNotFound {
        /// The marker line that was searched for
        marker: String,
    },

    /// A field has no canonical position in the schema.
    #[error("no canonical position defined for field `{field}`")]
    UnknownFieldOrdering {
        /// Baseline key of the field
        field: String,
    },

    /// Two fields claim the same canonical position.
    #[error("fields `{first}` and `{second}` share canonical position {position}")]
    DuplicateFieldOrdering {
        /// The contested position
        position: u8,
        /// First field holding the position
        first: String,
        /// Second field holding the position
        second: String,
    },
}

pub type Result<T> = std::result::Result<T, PrefabDbError>;
