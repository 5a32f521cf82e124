use crate::MappingResult;
use mapstone_values::{MappedEntity, MappedValue};

/// Bidirectional converter between one native type and its datastore
/// representation.
///
/// Implementations are stateless and never retain the input, so a single
/// instance is shared across concurrent persistence operations without
/// synchronization (hence the `Send + Sync` bound).
pub trait Mapper: Send + Sync {
    /// The application-side type this mapper converts.
    type Native;

    /// Converts a native value to its datastore representation.
    ///
    /// `None` maps to [`MappedValue::Null`]; conversion of a present value
    /// cannot fail.
    fn to_datastore(&self, input: Option<&Self::Native>) -> MappedValue;

    /// Converts a stored value back to the native type.
    ///
    /// `Null` loads as `Ok(None)`. Any variant other than `Null` or the
    /// mapper's own variant is a type mismatch — a schema inconsistency
    /// upstream, reported with both the expected and the actual kind.
    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<Self::Native>>;
}

/// Explicit field conversion for types stored as embedded entities.
///
/// Replaces reflective field discovery: a type declares how it flattens
/// into a [`MappedEntity`] and how it is rebuilt, and [`EmbeddedMapper`]
/// lifts that into the [`Mapper`] contract.
///
/// [`EmbeddedMapper`]: crate::EmbeddedMapper
pub trait EmbeddedFields: Sized {
    /// Flattens the value into a generic property record.
    fn to_fields(&self) -> MappedEntity;

    /// Rebuilds the value from a stored property record.
    fn from_fields(fields: &MappedEntity) -> MappingResult<Self>;
}
