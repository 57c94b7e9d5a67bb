/*
 * record.rs
 * Copyright (c) 2025 MoreVanillaBuildPrefabs contributors
 */

//! The PrefabDB record model and its static field schema.
//!
//! A [`Record`] holds one optional string per [`Field`]. `None` means the
//! field was never mentioned by the input, which is different from a field
//! set to an empty string. The [`Schema`] table decides, per field, how the
//! value is wrapped when read from a config file, where it sits in the
//! generated C#, and whether it is emitted inside double quotes.

use std::collections::HashMap;
use std::fmt;

use crate::error::{PrefabDbError, Result};

/// Mapping from record name to record.
///
/// The map has no ordering; [`crate::Serializer`] sorts by name when writing.
pub type RecordSet = HashMap<String, Record>;

/// A field of the `PrefabDB` constructor, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    Name,
    Enabled,
    AllowedInDungeons,
    Category,
    CraftingStation,
    Requirements,
    ClipEverything,
    ClipGround,
    PlacementPatch,
    PlacementOffset,
    PieceName,
    PieceDesc,
    PieceGroup,
    PlayerBasePatch,
    SpawnOnDestroyed,
    InvWidth,
    InvHeight,
}

impl Field {
    pub const COUNT: usize = 17;

    pub const ALL: [Field; Field::COUNT] = [
        Field::Name,
        Field::Enabled,
        Field::AllowedInDungeons,
        Field::Category,
        Field::CraftingStation,
        Field::Requirements,
        Field::ClipEverything,
        Field::ClipGround,
        Field::PlacementPatch,
        Field::PlacementOffset,
        Field::PieceName,
        Field::PieceDesc,
        Field::PieceGroup,
        Field::PlayerBasePatch,
        Field::SpawnOnDestroyed,
        Field::InvWidth,
        Field::InvHeight,
    ];

    /// The C# parameter name, as written in `PrefabDefaults.cs`.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Enabled => "enabled",
            Field::AllowedInDungeons => "allowedInDungeons",
            Field::Category => "category",
            Field::CraftingStation => "craftingStation",
            Field::Requirements => "requirements",
            Field::ClipEverything => "clipEverything",
            Field::ClipGround => "clipGround",
            Field::PlacementPatch => "placementPatch",
            Field::PlacementOffset => "placementOffset",
            Field::PieceName => "pieceName",
            Field::PieceDesc => "pieceDesc",
            Field::PieceGroup => "pieceGroup",
            Field::PlayerBasePatch => "playerBasePatch",
            Field::SpawnOnDestroyed => "spawnOnDestroyed",
            Field::InvWidth => "invWidth",
            Field::InvHeight => "invHeight",
        }
    }

    /// The tag that introduces this field on a baseline line (`enabled:`).
    pub fn baseline_tag(self) -> String {
        format!("{}:", self.key())
    }

    /// The BepInEx config key: the C# name with its first letter upper-cased.
    pub fn override_key(self) -> String {
        let key = self.key();
        let mut chars = key.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What a field's value refers to.
///
/// Values are kept as raw text; the kind only selects the reference wrap
/// applied to config-file values (see [`crate::wrap_reference`]).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text, such as names and requirement lists
    Text,
    /// `true` / `false`
    Bool,
    /// Integer literal
    Integer,
    /// Any other C# expression, copied verbatim (vectors, enum members)
    Literal,
    /// A `HammerCategories` member
    CategoryRef,
    /// A `CraftingStations` member, referenced through `nameof`
    StationRef,
}

/// One row of the schema table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub field: Field,
    pub kind: FieldKind,
    /// 1-based slot in the generated constructor call
    pub position: u8,
    /// Emit the value inside double quotes
    pub quoted: bool,
}

impl FieldSpec {
    pub const fn new(field: Field, kind: FieldKind, position: u8, quoted: bool) -> Self {
        FieldSpec {
            field,
            kind,
            position,
            quoted,
        }
    }
}

const PREFAB_FIELDS: [FieldSpec; Field::COUNT] = [
    FieldSpec::new(Field::Name, FieldKind::Text, 1, true),
    FieldSpec::new(Field::Enabled, FieldKind::Bool, 2, false),
    FieldSpec::new(Field::AllowedInDungeons, FieldKind::Bool, 3, false),
    FieldSpec::new(Field::Category, FieldKind::CategoryRef, 4, false),
    FieldSpec::new(Field::CraftingStation, FieldKind::StationRef, 5, false),
    FieldSpec::new(Field::Requirements, FieldKind::Text, 6, true),
    FieldSpec::new(Field::ClipEverything, FieldKind::Bool, 7, false),
    FieldSpec::new(Field::ClipGround, FieldKind::Bool, 8, false),
    FieldSpec::new(Field::PlacementPatch, FieldKind::Bool, 9, false),
    FieldSpec::new(Field::PlacementOffset, FieldKind::Literal, 10, false),
    FieldSpec::new(Field::PieceName, FieldKind::Text, 11, true),
    FieldSpec::new(Field::PieceDesc, FieldKind::Text, 12, true),
    FieldSpec::new(Field::PieceGroup, FieldKind::Literal, 13, false),
    FieldSpec::new(Field::PlayerBasePatch, FieldKind::Bool, 14, false),
    FieldSpec::new(Field::SpawnOnDestroyed, FieldKind::Text, 15, true),
    FieldSpec::new(Field::InvWidth, FieldKind::Integer, 16, false),
    FieldSpec::new(Field::InvHeight, FieldKind::Integer, 17, false),
];

/// The declared field table shared by the parsers and the serializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    specs: Vec<FieldSpec>,
}

impl Schema {
    /// The `PrefabDB` schema.
    pub fn prefab() -> Self {
        Schema {
            specs: PREFAB_FIELDS.to_vec(),
        }
    }

    /// Build a schema from an explicit table.
    ///
    /// Fields missing from the table are ignored by the parsers and make
    /// [`Schema::canonical_order`] fail.
    pub fn new(specs: Vec<FieldSpec>) -> Self {
        Schema { specs }
    }

    /// Table rows in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.specs.iter()
    }

    pub fn spec(&self, field: Field) -> Option<&FieldSpec> {
        self.specs.iter().find(|spec| spec.field == field)
    }

    /// Every field, sorted by canonical position.
    ///
    /// Fails if any [`Field`] has no row, or if two rows share a position.
    pub fn canonical_order(&self) -> Result<Vec<FieldSpec>> {
        let mut order = Vec::with_capacity(Field::COUNT);
        for field in Field::ALL {
            let spec = self
                .spec(field)
                .ok_or_else(|| PrefabDbError::UnknownFieldOrdering {
                    field: field.key().to_string(),
                })?;
            order.push(*spec);
        }

        order.sort_by_key(|spec| spec.position);

        if let Some(pair) = order.windows(2).find(|w| w[0].position == w[1].position) {
            return Err(PrefabDbError::DuplicateFieldOrdering {
                position: pair[0].position,
                first: pair[0].field.key().to_string(),
                second: pair[1].field.key().to_string(),
            });
        }

        Ok(order)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::prefab()
    }
}

/// One PrefabDB entry under construction or after merging.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Record {
    values: [Option<String>; Field::COUNT],
}

impl Record {
    pub fn new() -> Self {
        Record::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        let mut record = Record::new();
        record.set(Field::Name, name);
        record
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.values[field.index()].as_deref()
    }

    /// Set a field, replacing any previous value.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        self.values[field.index()] = Some(value.into());
    }

    /// Builder-style [`Record::set`].
    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_set(&self, field: Field) -> bool {
        self.values[field.index()].is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.get(Field::Name)
    }

    /// A record is complete once it has a name.
    pub fn is_valid(&self) -> bool {
        self.is_set(Field::Name)
    }

    /// Set fields in declaration order.
    pub fn set_fields(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }
}

/// Move a finished record into `records`, keyed by name.
///
/// Records without a name are dropped. A repeated name replaces the earlier
/// record and is reported as a warning.
pub(crate) fn flush_record(records: &mut RecordSet, record: Record, input: &'static str) {
    let Some(name) = record.name().map(str::to_owned) else {
        return;
    };
    if records.insert(name.clone(), record).is_some() {
        tracing::warn!(input, record = %name, "duplicate record name, keeping the last definition");
    }
}
