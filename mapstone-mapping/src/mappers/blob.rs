use crate::{Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};

/// Maps `Vec<u8>` to the datastore `Blob` variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct BlobMapper;

impl Mapper for BlobMapper {
    type Native = Vec<u8>;

    fn to_datastore(&self, input: Option<&Vec<u8>>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Blob(v.clone()),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<Vec<u8>>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Blob(v) => Ok(Some(v.clone())),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Blob,
                actual: other.kind(),
            }),
        }
    }
}
