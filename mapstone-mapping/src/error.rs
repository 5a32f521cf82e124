//! Error types for the mapping layer.

use mapstone_values::ValueKind;
use thiserror::Error;

/// Result type for mapping operations.
pub type MappingResult<T> = Result<T, MappingError>;

/// Errors that can occur while converting between native values and the
/// datastore value model. All of these indicate a schema or registration
/// inconsistency; none are transient, so callers must not retry.
#[derive(Debug, Error)]
pub enum MappingError {
    /// The stored variant does not match what the mapper expects.
    #[error("expecting {expected}, but found {actual}")]
    TypeMismatch {
        expected: ValueKind,
        actual: ValueKind,
    },

    /// A stored integer does not fit the narrower native type.
    #[error("stored value {value} does not fit in {target}")]
    OutOfRange { value: i64, target: &'static str },

    /// A stored list contains a null element, which the native element type
    /// cannot represent.
    #[error("null element in stored list cannot map to {native_type}")]
    NullElement { native_type: &'static str },

    /// No mapper is registered for the requested native type.
    #[error("no mapper registered for native type {native_type}")]
    NoMapper { native_type: &'static str },
}
