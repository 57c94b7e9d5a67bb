/*
 * value.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! Value extraction shared by both parsers.

use crate::record::FieldKind;

/// Enum type that category values are members of.
pub const CATEGORY_NAMESPACE: &str = "HammerCategories";

/// Enum type that crafting-station values are members of.
pub const STATION_NAMESPACE: &str = "CraftingStations";

// Station names the config file uses that differ from the CraftingStations members.
const LITERAL_REWRITES: [(&str, &str); 2] = [
    ("BuildingWorkbench", "Building"),
    ("BuildingStonecutter", "Stonecutter"),
];

/// Extract the value that follows `delimiter` on `line`.
///
/// Takes the text after the last occurrence of `delimiter` (the whole line if
/// it does not occur), then strips separator commas and line terminators,
/// surrounding whitespace, and one layer of surrounding double quotes, in that
/// order.
/// Finally the station-name rewrites are applied as substring replacements.
pub fn extract_value(line: &str, delimiter: &str) -> String {
    let tail = match line.rfind(delimiter) {
        Some(at) => &line[at + delimiter.len()..],
        None => line,
    };

    let value = tail.trim_matches(|c| matches!(c, ',' | '\n' | '\r')).trim();
    let value = value.strip_prefix('"').unwrap_or(value);
    let mut value = value.strip_suffix('"').unwrap_or(value).to_string();

    for (from, to) in LITERAL_REWRITES {
        if value.contains(from) {
            value = value.replace(from, to);
        }
    }

    value
}

/// Wrap a config-file value as the C# expression the baseline stores.
///
/// Categories become `HammerCategories.<value>` and stations become
/// `nameof(CraftingStations.<value>)`. Other kinds pass through unchanged.
pub fn wrap_reference(kind: FieldKind, value: String) -> String {
    match kind {
        FieldKind::CategoryRef => format!("{CATEGORY_NAMESPACE}.{value}"),
        FieldKind::StationRef => format!("nameof({STATION_NAMESPACE}.{value})"),
        _ => value,
    }
}
