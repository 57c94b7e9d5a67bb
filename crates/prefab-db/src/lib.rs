/*
 * lib.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Reconciliation of PrefabDB default tables.
//!
//! The mod ships a generated table of `PrefabDB` records in
//! `PrefabDefaults.cs`. Players (and the mod author while testing) tune those
//! records at runtime through a BepInEx `.cfg` file. This crate folds the
//! tuned values back into the table:
//!
//! 1. [`BaselineParser`] reads records out of the C# initializer.
//! 2. [`OverrideParser`] reads records out of the `.cfg` sections.
//! 3. [`merge`] applies every *set* override field on top of the baseline.
//! 4. [`Serializer`] renders the merged set back as C#, sorted by name.
//!
//! [`reconcile`] runs the four stages in order.
//!
//! # Example
//!
//! ```rust
//! use prefab_db::{ReconcileOptions, reconcile};
//!
//! let baseline = "        internal static readonly Dictionary<string, PrefabDB> DefaultConfigValues = new()\n\
//!                 name: \"Chair\",\n\
//!                 enabled: true\n";
//! let overrides = "[Chair]\nEnabled = false\n";
//!
//! let options = ReconcileOptions::default().with_header_lines(0);
//! let reconciled = reconcile(baseline, overrides, &options).unwrap();
//! assert!(reconciled.output.contains("enabled: false"));
//! ```

mod baseline;
mod error;
mod merge;
mod overrides;
mod pipeline;
mod record;
mod serialize;
mod value;

pub use baseline::BaselineParser;

pub use error::{PrefabDbError, Result};

pub use merge::{Change, MergeOutcome, merge};

pub use overrides::{DEFAULT_HEADER_LINES, OverrideParser};

pub use pipeline::{ReconcileOptions, Reconciled, reconcile};

pub use record::{Field, FieldKind, FieldSpec, Record, RecordSet, Schema};

pub use serialize::{DECLARATION, DEFAULT_MARKER, INDENT, Serializer};

pub use value::{CATEGORY_NAMESPACE, STATION_NAMESPACE, extract_value, wrap_reference};
