//! Built-in mappers for the scalar and composite datastore types.
//!
//! Each mapper is a stateless unit struct (or a thin generic wrapper for the
//! composites) implementing the [`Mapper`](crate::Mapper) contract. Only the
//! variant mapping and per-type precision rules differ between them.

mod blob;
mod boolean;
mod datetime;
mod embedded;
mod list;
mod numeric;
mod text;

pub use blob::BlobMapper;
pub use boolean::BooleanMapper;
pub use datetime::DateTimeMapper;
pub use embedded::EmbeddedMapper;
pub use list::ListMapper;
pub use numeric::{DoubleMapper, IntMapper, IntegerMapper};
pub use text::TextMapper;
