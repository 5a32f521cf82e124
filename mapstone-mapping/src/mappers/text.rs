use crate::{Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};

/// Maps `String` to the datastore `Text` variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct TextMapper;

impl Mapper for TextMapper {
    type Native = String;

    fn to_datastore(&self, input: Option<&String>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Text(v.clone()),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<String>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Text(v) => Ok(Some(v.clone())),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Text,
                actual: other.kind(),
            }),
        }
    }
}
