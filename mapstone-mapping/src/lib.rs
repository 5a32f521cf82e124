//! Bidirectional value mapping between native Rust types and the datastore
//! value model.
//!
//! The persistence engine serializes one field at a time: it looks up the
//! [`Mapper`] registered for the field's native type and calls
//! `to_datastore` on save, `to_model` on load. Mappers are stateless and
//! shared across concurrent operations.
//!
//! Contract every mapper obeys:
//! - absent input maps to [`MappedValue::Null`], never to a missing result;
//! - `Null` loads back as `None` (the null round-trip law);
//! - a stored variant other than `Null` or the mapper's own variant fails
//!   with [`MappingError::TypeMismatch`] naming both kinds — a schema
//!   inconsistency upstream, never retried.
//!
//! [`MappedValue::Null`]: mapstone_values::MappedValue::Null

mod error;
mod mapper;
mod mappers;
mod registry;

pub use error::{MappingError, MappingResult};
pub use mapper::{EmbeddedFields, Mapper};
pub use mappers::{
    BlobMapper, BooleanMapper, DateTimeMapper, DoubleMapper, EmbeddedMapper, IntMapper,
    IntegerMapper, ListMapper, TextMapper,
};
pub use registry::MapperRegistry;
