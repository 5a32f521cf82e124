use crate::{EmbeddedFields, Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};
use std::marker::PhantomData;

/// Maps a type with explicit field conversion ([`EmbeddedFields`]) to the
/// datastore `Entity` variant.
#[derive(Debug)]
pub struct EmbeddedMapper<E> {
    _marker: PhantomData<fn() -> E>,
}

impl<E> EmbeddedMapper<E> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<E> Default for EmbeddedMapper<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: EmbeddedFields> Mapper for EmbeddedMapper<E> {
    type Native = E;

    fn to_datastore(&self, input: Option<&E>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(e) => MappedValue::Entity(e.to_fields()),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<E>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Entity(fields) => E::from_fields(fields).map(Some),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Entity,
                actual: other.kind(),
            }),
        }
    }
}
