//! Datastore-native value model for Mapstone.
//!
//! Defines the generic representation that typed application values are
//! converted into before they reach the document datastore:
//! - [`MappedValue`] — tagged union of datastore-native values (null, text,
//!   timestamp, blob, list, embedded entity, ...)
//! - [`ValueKind`] — variant discriminant, used in mapping error messages
//! - [`Timestamp`] — seconds + nanoseconds instant, normalized across the epoch
//! - [`MappedEntity`] — generic property record for embedded entities
//!
//! These types carry no conversion logic of their own; the mapping layer
//! (`mapstone-mapping`) produces and consumes them, and the datastore client
//! ships them over the wire.

mod entity;
mod timestamp;
mod value;

pub use entity::MappedEntity;
pub use timestamp::Timestamp;
pub use value::{MappedValue, ValueKind};
