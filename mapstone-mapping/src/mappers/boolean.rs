use crate::{Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};

/// Maps `bool` to the datastore `Boolean` variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct BooleanMapper;

impl Mapper for BooleanMapper {
    type Native = bool;

    fn to_datastore(&self, input: Option<&bool>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Boolean(*v),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<bool>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Boolean(v) => Ok(Some(*v)),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Boolean,
                actual: other.kind(),
            }),
        }
    }
}
