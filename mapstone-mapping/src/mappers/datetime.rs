use crate::{Mapper, MappingError, MappingResult};
use chrono::{DateTime, Utc};
use mapstone_values::{MappedValue, Timestamp, ValueKind};

/// Maps `DateTime<Utc>` to the datastore `Timestamp` variant.
///
/// Saving stores the full `(seconds, nanos)` precision of the input.
/// Loading truncates to milliseconds: sub-millisecond nanos are discarded
/// (floored, not rounded), so `(1 s, 999_999_999 ns)` loads as `1999` ms.
/// This keeps save-then-load stable — a second round-trip is the identity —
/// at the cost of a one-time precision loss for sub-millisecond inputs.
#[derive(Debug, Default, Clone, Copy)]
pub struct DateTimeMapper;

impl Mapper for DateTimeMapper {
    type Native = DateTime<Utc>;

    fn to_datastore(&self, input: Option<&DateTime<Utc>>) -> MappedValue {
        match input {
            None => MappedValue::Null,
            Some(dt) => MappedValue::Timestamp(Timestamp::new(
                dt.timestamp(),
                i64::from(dt.timestamp_subsec_nanos()),
            )),
        }
    }

    fn to_model(&self, input: &MappedValue) -> MappingResult<Option<DateTime<Utc>>> {
        match input {
            MappedValue::Null => Ok(None),
            MappedValue::Timestamp(ts) => {
                let millis = ts.as_millis();
                let dt = DateTime::from_timestamp_millis(millis).ok_or(
                    // chrono caps the representable year range
                    MappingError::OutOfRange {
                        value: millis,
                        target: "DateTime<Utc>",
                    },
                )?;
                Ok(Some(dt))
            }
            other => Err(MappingError::TypeMismatch {
                expected: ValueKind::Timestamp,
                actual: other.kind(),
            }),
        }
    }
}
