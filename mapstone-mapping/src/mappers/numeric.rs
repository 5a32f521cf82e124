use crate::{Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};

/// Maps `i64` to the datastore `Integer` variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntegerMapper;

impl Mapper for IntegerMapper {
    type Native = i64;

    fn to_datastore(&self, input: Option<&i64>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Integer(*v),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<i64>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Integer(v) => Ok(Some(*v)),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Integer,
                actual: other.kind(),
            }),
        }
    }
}

/// Maps `i32` to the datastore `Integer` variant.
///
/// The datastore only has a 64-bit integer type; loading fails with
/// `OutOfRange` when the stored value does not fit in `i32`.
#[derive(Debug, Default, Clone, Copy)]
pub struct IntMapper;

impl Mapper for IntMapper {
    type Native = i32;

    fn to_datastore(&self, input: Option<&i32>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Integer(i64::from(*v)),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<i32>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Integer(v) => {
                let narrowed = i32::try_from(*v).map_err(|_| MappingError::OutOfRange {
                    value: *v,
                    target: "i32",
                })?;
                Ok(Some(narrowed))
            }
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Integer,
                actual: other.kind(),
            }),
        }
    }
}

/// Maps `f64` to the datastore `Double` variant.
#[derive(Debug, Default, Clone, Copy)]
pub struct DoubleMapper;

impl Mapper for DoubleMapper {
    type Native = f64;

    fn to_datastore(&self, input: Option<&f64>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(v) => MappedValue::Double(*v),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<f64>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Double(v) => Ok(Some(*v)),
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Double,
                actual: other.kind(),
            }),
        }
    }
}
