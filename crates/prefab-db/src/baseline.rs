/*
 * baseline.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Reader for the generated `PrefabDefaults.cs` table.
//!
//! The reader is line-oriented, not a C# parser. After
//! the marker line, any line containing `name:` begins a new record, and any
//! line containing `<field>:` assigns that field of the current record.
//! Everything else (braces, the quoted dictionary key, `new PrefabDB(`) is
//! skipped.

use crate::error::{PrefabDbError, Result};
use crate::record::{Field, Record, RecordSet, Schema, flush_record};
use crate::value::extract_value;

pub struct BaselineParser<'a> {
    schema: &'a Schema,
    marker: &'a str,
}

impl<'a> BaselineParser<'a> {
    /// Create a parser that starts reading at the line equal to `marker`.
    ///
    /// A trailing line terminator on `marker` is ignored.
    pub fn new(schema: &'a Schema, marker: &'a str) -> Self {
        BaselineParser {
            schema,
            marker: marker.trim_end_matches(['\r', '\n']),
        }
    }

    pub fn parse(&self, text: &str) -> Result<RecordSet> {
        let start = text
            .lines()
            .position(|line| line == self.marker)
            .ok_or_else(|| PrefabDbError::MarkerNotFound {
                marker: self.marker.to_string(),
            })?;

        let name_tag = Field::Name.baseline_tag();
        let tags: Vec<(Field, String)> = self
            .schema
            .fields()
            .map(|spec| (spec.field, spec.field.baseline_tag()))
            .collect();

        let mut records = RecordSet::new();
        let mut current = Record::new();

        for line in text.lines().skip(start) {
            if line.contains(&name_tag) {
                if current.is_valid() {
                    flush_record(&mut records, std::mem::take(&mut current), "baseline");
                }
                current.set(Field::Name, extract_value(line, &name_tag));
            }

            for (field, tag) in &tags {
                if line.contains(tag.as_str()) {
                    current.set(*field, extract_value(line, tag));
                }
            }
        }
        flush_record(&mut records, current, "baseline");

        tracing::debug!(records = records.len(), first_line = start + 1, "Parsed baseline table");
        Ok(records)
    }
}
