/*
 * overrides.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Reader for the BepInEx `.cfg` file the mod writes at runtime.
//!
//! ```text
//! [ArmorStand_Female]
//!
//! ## If true then allow this prefab to be built and deconstructed. ...
//! # Setting type: Boolean
//! # Default value: false
//! Enabled = true
//! ```
//!
//! Each `[Section]` is a record named after the section. A line is a field
//! assignment when it starts with the config key followed by `" = "`.
//! Comments, blank lines and unknown keys are skipped.

use crate::record::{Field, FieldSpec, Record, RecordSet, Schema, flush_record};
use crate::value::{extract_value, wrap_reference};

/// Number of preamble lines at the top of the mod's config file.
///
/// These hold the global (non-prefab) settings and are never read.
pub const DEFAULT_HEADER_LINES: usize = 88;

pub struct OverrideParser<'a> {
    schema: &'a Schema,
    header_lines: usize,
}

impl<'a> OverrideParser<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        OverrideParser {
            schema,
            header_lines: DEFAULT_HEADER_LINES,
        }
    }

    /// Skip `lines` leading lines instead of [`DEFAULT_HEADER_LINES`].
    pub fn with_header_lines(mut self, lines: usize) -> Self {
        self.header_lines = lines;
        self
    }

    pub fn parse(&self, text: &str) -> RecordSet {
        let prefixes: Vec<(&FieldSpec, String)> = self
            .schema
            .fields()
            .map(|spec| (spec, format!("{} = ", spec.field.override_key())))
            .collect();

        let mut records = RecordSet::new();
        let mut current = Record::new();

        for line in text.lines().skip(self.header_lines) {
            if let Some(section) = line.strip_prefix('[') {
                // A nameless record keeps its fields and takes the section name.
                if current.is_valid() {
                    flush_record(&mut records, std::mem::take(&mut current), "override");
                }
                current.set(Field::Name, section_name(section));
            }

            for (spec, prefix) in &prefixes {
                if line.starts_with(prefix.as_str()) {
                    let value = extract_value(line, "=");
                    current.set(spec.field, wrap_reference(spec.kind, value));
                }
            }
        }
        flush_record(&mut records, current, "override");

        tracing::debug!(
            records = records.len(),
            skipped = self.header_lines,
            "Parsed override config"
        );
        records
    }
}

/// The text of a section header after `[`, without the closing bracket.
fn section_name(rest: &str) -> &str {
    let rest = rest.trim_end_matches('\r');
    rest.strip_suffix(']').unwrap_or(rest)
}
