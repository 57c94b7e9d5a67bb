/*
 * serialize.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Writer for the `DefaultConfigValues` C# initializer.
//!
//! Output layout, for a record with two set fields:
//!
//! ```text
//!         internal static readonly Dictionary<string, PrefabDB> DefaultConfigValues = new()
//!         {
//!             {
//!                 "Chair",
//!                 new PrefabDB(
//!                     name: "Chair",
//!                     enabled: true
//!                 )
//!             },
//!         };
//! ```
//!
//! Records appear in byte order of their names and fields in canonical
//! order, so the same merged set always produces the same text.

use crate::error::Result;
use crate::record::{FieldSpec, Record, RecordSet, Schema};

/// One level of indentation.
pub const INDENT: &str = "    ";

/// The declaration line the table is written under.
pub const DECLARATION: &str =
    "internal static readonly Dictionary<string, PrefabDB> DefaultConfigValues = new()";

/// The declaration line as it appears in `PrefabDefaults.cs`, two levels deep.
///
/// This is where [`crate::BaselineParser`] starts reading by default.
pub const DEFAULT_MARKER: &str =
    "        internal static readonly Dictionary<string, PrefabDB> DefaultConfigValues = new()";

const TABLE_DEPTH: usize = 2;

pub struct Serializer<'a> {
    schema: &'a Schema,
}

impl<'a> Serializer<'a> {
    pub fn new(schema: &'a Schema) -> Self {
        Serializer { schema }
    }

    pub fn serialize(&self, records: &RecordSet) -> Result<String> {
        let order = self.schema.canonical_order()?;

        let mut names: Vec<&String> = records.keys().collect();
        names.sort();

        let mut out = String::new();
        push_line(&mut out, TABLE_DEPTH, DECLARATION);
        push_line(&mut out, TABLE_DEPTH, "{");
        for name in names {
            write_record(&mut out, name, &records[name], &order);
        }
        push_line(&mut out, TABLE_DEPTH, "};");

        Ok(out)
    }
}

fn write_record(out: &mut String, key: &str, record: &Record, order: &[FieldSpec]) {
    let depth = TABLE_DEPTH + 1;
    push_line(out, depth, "{");
    push_line(out, depth + 1, &format!("\"{}\",", record.name().unwrap_or(key)));
    push_line(out, depth + 1, "new PrefabDB(");

    let fields: Vec<String> = order
        .iter()
        .filter_map(|spec| {
            record
                .get(spec.field)
                .map(|value| render_field(spec, value))
        })
        .collect();
    let last = fields.len().saturating_sub(1);
    for (i, field) in fields.iter().enumerate() {
        if i == last {
            push_line(out, depth + 2, field);
        } else {
            push_line(out, depth + 2, &format!("{field},"));
        }
    }

    push_line(out, depth + 1, ")");
    push_line(out, depth, "},");
}

fn render_field(spec: &FieldSpec, value: &str) -> String {
    if spec.quoted {
        format!("{}: \"{}\"", spec.field.key(), value)
    } else {
        format!("{}: {}", spec.field.key(), value)
    }
}

fn push_line(out: &mut String, depth: usize, text: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(text);
    out.push('\n');
}
