//! Instant representation used by the datastore value model.
//!
//! The datastore stores instants at nanosecond precision; the mapping layer
//! only guarantees millisecond fidelity on round-trip (see `as_millis`).

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const NANOS_PER_SECOND: i64 = 1_000_000_000;
const NANOS_PER_MILLI: u32 = 1_000_000;
const MILLIS_PER_SECOND: i64 = 1_000;

/// An instant since the Unix epoch, as stored by the datastore.
///
/// Always normalized: `nanos` is in `[0, 1_000_000_000)` regardless of sign,
/// so a pre-1970 instant has a floored (more negative) `seconds` component
/// and a non-negative sub-second remainder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp {
    /// Whole seconds since the Unix epoch (floor for pre-epoch instants).
    seconds: i64,
    /// Sub-second remainder, always `< 1_000_000_000`.
    nanos: u32,
}

impl Timestamp {
    /// Creates a timestamp, carrying whole seconds out of `nanos` so the
    /// stored pair is normalized. Negative `nanos` borrow from `seconds`.
    #[must_use]
    pub fn new(seconds: i64, nanos: i64) -> Self {
        let carry = nanos.div_euclid(NANOS_PER_SECOND);
        Self {
            seconds: seconds + carry,
            nanos: nanos.rem_euclid(NANOS_PER_SECOND) as u32,
        }
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub fn from_millis(millis: i64) -> Self {
        Self::new(
            millis.div_euclid(MILLIS_PER_SECOND),
            millis.rem_euclid(MILLIS_PER_SECOND) * i64::from(NANOS_PER_MILLI),
        )
    }

    /// Milliseconds since the Unix epoch, truncating the sub-millisecond
    /// remainder. `nanos` is non-negative, so this is a floor even for
    /// pre-epoch instants: `(1 s, 999_999_999 ns)` yields `1999`.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.seconds * MILLIS_PER_SECOND + (self.nanos / NANOS_PER_MILLI) as i64
    }

    /// Returns the whole-seconds component.
    #[must_use]
    pub const fn seconds(&self) -> i64 {
        self.seconds
    }

    /// Returns the sub-second remainder in nanoseconds.
    #[must_use]
    pub const fn nanos(&self) -> u32 {
        self.nanos
    }
}

impl PartialOrd for Timestamp {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Timestamp {
    fn cmp(&self, other: &Self) -> Ordering {
        match self.seconds.cmp(&other.seconds) {
            Ordering::Equal => self.nanos.cmp(&other.nanos),
            other => other,
        }
    }
}
