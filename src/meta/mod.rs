//! Duration and timestamp types with the text forms used by the cluster API.
//!
//! - [`Duration`] is written as a Go duration string such as `1h2m3.5s`.
//! - [`Time`] is written as an RFC 3339 timestamp with second precision.
//! - [`MicroTime`] is written as an RFC 3339 timestamp with exactly six
//!   fractional digits.
//!
//! Both timestamp types have a distinguished zero value
//! (`0001-01-01T00:00:00Z`) which is written as `null`, and `null` reads back
//! as the zero value.

mod duration;
mod micro_time;
mod time;

pub use self::duration::Duration;
pub use self::micro_time::MicroTime;
pub use self::time::Time;

use thiserror::Error;

/// Error returned when parsing the text form of one of the [`meta`](self)
/// types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Not a duration string at all.
    #[error("invalid duration {0:?}")]
    InvalidDuration(String),
    /// A number without a unit suffix, such as `5`.
    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),
    /// A unit suffix other than `ns`, `us`, `µs`, `ms`, `s`, `m` or `h`.
    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit {
        /// The unrecognized suffix.
        unit: String,
        /// The whole text being parsed.
        input: String,
    },
    /// The duration does not fit into a signed 64-bit nanosecond count.
    #[error("invalid duration {0:?}: out of range")]
    DurationOverflow(String),
    /// The timestamp is not valid RFC 3339.
    #[error("invalid timestamp {input:?}: {source}")]
    Timestamp {
        /// The text being parsed.
        input: String,
        /// The underlying calendar error.
        source: chrono::ParseError,
    },
    /// The timestamp is not laid out as `YYYY-MM-DDTHH:MM:SS` followed by an
    /// upper case offset.
    #[error("invalid timestamp {0:?}: unexpected layout")]
    TimestampLayout(String),
    /// Second 60. Leap seconds have no representation on the wire.
    #[error("invalid timestamp {0:?}: second out of range")]
    LeapSecond(String),
    /// A micro timestamp without exactly six fractional digits.
    #[error("invalid timestamp {0:?}: expected exactly six fractional digits")]
    MicroPrecision(String),
}
