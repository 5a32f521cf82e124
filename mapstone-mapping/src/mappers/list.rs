use crate::{Mapper, MappingError, MappingResult};
use mapstone_values::{MappedValue, ValueKind};
use std::any::type_name;

/// Maps `Vec<T>` to the datastore `List` variant, delegating element
/// conversion to an inner mapper.
///
/// An element error aborts the whole conversion — there are no partial
/// lists. A stored `Null` element fails with `NullElement`, since `Vec<T>`
/// has no per-element absence.
#[derive(Debug, Default, Clone, Copy)]
pub struct ListMapper<M> {
    element: M,
}

impl<M> ListMapper<M> {
    /// Wraps an element mapper.
    #[must_use]
    pub fn new(element: M) -> Self {
        Self { element }
    }
}

impl<M: Mapper> Mapper for ListMapper<M> {
    type Native = Vec<M::Native>;

    fn to_datastore(&self, input: Option<&Vec<M::Native>>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(items) => MappedValue::List(
                items
                    .iter()
                    .map(|item| self.element.to_datastore(Some(item)))
                    .collect(),
            ),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<Vec<M::Native>>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::List(values) => {
                let mut items = Vec::with_capacity(values.len());
                for value in values {
                    match self.element.to_model(value)? {
                        Some(item) => items.push(item),
                        None => {
                            return Err(MappingError::NullElement {
                                native_type: type_name::<M::Native>(),
                            })
                        }
                    }
                }
                Ok(Some(items))
            }
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::List,
                actual: other.kind(),
            }),
        }
    }
}
