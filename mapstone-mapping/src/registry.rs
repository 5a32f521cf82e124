//! Native-type-keyed mapper lookup.
//!
//! The registry is the lookup table the persistence engine consults per
//! field: native type in, mapper out. It is built once at setup time and
//! then shared immutably; lookups and conversions take `&self`, so in-flight
//! operations on different entities use it concurrently without locking.

use crate::{
    BlobMapper, BooleanMapper, DateTimeMapper, DoubleMapper, IntMapper, IntegerMapper, Mapper,
    MappingError, MappingResult, TextMapper,
};
use mapstone_values::MappedValue;
use std::any::{type_name, Any, TypeId};
use std::collections::HashMap;
use tracing::trace;

/// Type-erased view over a [`Mapper`], so heterogeneous mappers share one map.
trait ErasedMapper: Send + Sync {
    fn to_datastore(&self, input: Option<&dyn Any>) -> MappingResult<MappedValue>;
    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<Box<dyn Any>>>;
}

struct Adapter<M>(M);

impl<M> ErasedMapper for Adapter<M>
where
    M: Mapper,
    M::Native: Any,
{
    fn to_datastore(&self, input: Option<&dyn Any>) -> MappingResult<MappedValue> {
        let input = match input {
            None => None,
            // the registry keys adapters by Native's TypeId, so a failed
            // downcast means the caller reached the wrong entry
            Some(value) => Some(value.downcast_ref::<M::Native>().ok_or(
                MappingError::NoMapper {
                    native_type: type_name::<M::Native>(),
                },
            )?),
        };
        Ok(self.0.to_datastore(input))
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<Box<dyn Any>>> {
        Ok(self
            .0
            .to_model(input)?
            .map(|native| Box::new(native) as Box<dyn Any>))
    }
}

/// Registry of mappers, keyed by native type.
///
/// Registration is a setup-time concern; the last mapper registered for a
/// native type wins. [`with_defaults`](Self::with_defaults) preloads the
/// scalar built-ins.
#[derive(Default)]
pub struct MapperRegistry {
    mappers: HashMap<TypeId, Box<dyn ErasedMapper>>,
}

impl MapperRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry preloaded with the scalar built-in mappers:
    /// `bool`, `i32`, `i64`, `f64`, `String`, `Vec<u8>`, `DateTime<Utc>`.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(BooleanMapper);
        registry.register(IntMapper);
        registry.register(IntegerMapper);
        registry.register(DoubleMapper);
        registry.register(TextMapper);
        registry.register(BlobMapper);
        registry.register(DateTimeMapper);
        registry
    }

    /// Registers a mapper for its native type, replacing any previous
    /// registration for the same type.
    pub fn register<M>(&mut self, mapper: M)
    where
        M: Mapper + 'static,
        M::Native: Any,
    {
        trace!("registering mapper for {}", type_name::<M::Native>());
        self.mappers
            .insert(TypeId::of::<M::Native>(), Box::new(Adapter(mapper)));
    }

    /// Returns true when a mapper is registered for `T`.
    #[must_use]
    pub fn contains<T: Any>(&self) -> bool {
        self.mappers.contains_key(&TypeId::of::<T>())
    }

    /// Converts a native value through the mapper registered for `T`.
    pub fn to_datastore<T: Any>(&self, input: Option<&T>) -> MappingResult<MappedValue> {
        self.lookup::<T>()?
            .to_datastore(input.map(|value| value as &dyn Any))
    }

    /// Converts a stored value back to `T` through its registered mapper.
    pub fn to_model<T: Any>(&self, input: &MappedValue) -> MappingResult<Option<T>> {
        match self.lookup::<T>()?.to_model(input)? {
            None => Ok(None),
            Some(boxed) => {
                let native = boxed.downcast::<T>().map_err(|_| MappingError::NoMapper {
                    native_type: type_name::<T>(),
                })?;
                Ok(Some(*native))
            }
        }
    }

    fn lookup<T: Any>(&self) -> MappingResult<&dyn ErasedMapper> {
        self.mappers
            .get(&TypeId::of::<T>())
            .map(AsRef::as_ref)
            .ok_or(MappingError::NoMapper {
                native_type: type_name::<T>(),
            })
    }
}
