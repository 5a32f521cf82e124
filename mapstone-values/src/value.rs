use crate::{MappedEntity, Timestamp};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A datastore-native value, as produced and consumed by the mapping layer.
///
/// Absence is always the explicit [`MappedValue::Null`] variant, never a
/// missing property — mappers rely on this when round-tripping optional
/// native values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MappedValue {
    Null,
    Boolean(bool),
    Integer(i64),
    Double(f64),
    Text(String),
    Blob(Vec<u8>),
    Timestamp(Timestamp),
    List(Vec<MappedValue>),
    Entity(MappedEntity),
}

impl MappedValue {
    /// Returns the variant discriminant, used in type-mismatch errors.
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Null => ValueKind::Null,
            Self::Boolean(_) => ValueKind::Boolean,
            Self::Integer(_) => ValueKind::Integer,
            Self::Double(_) => ValueKind::Double,
            Self::Text(_) => ValueKind::Text,
            Self::Blob(_) => ValueKind::Blob,
            Self::Timestamp(_) => ValueKind::Timestamp,
            Self::List(_) => ValueKind::List,
            Self::Entity(_) => ValueKind::Entity,
        }
    }

    /// Returns true for the explicit null marker.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

/// The kind of a [`MappedValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueKind {
    Null,
    Boolean,
    Integer,
    Double,
    Text,
    Blob,
    Timestamp,
    List,
    Entity,
}

impl ValueKind {
    /// The bare variant name, as it appears in error messages.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Null => "Null",
            Self::Boolean => "Boolean",
            Self::Integer => "Integer",
            Self::Double => "Double",
            Self::Text => "Text",
            Self::Blob => "Blob",
            Self::Timestamp => "Timestamp",
            Self::List => "List",
            Self::Entity => "Entity",
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
