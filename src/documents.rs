use crate::meta::{Duration, MicroTime, Time};
use serde::{Deserialize, Serialize};

/// A document with a single [`Duration`] under the key `d`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationDocument {
    /// The duration being round tripped.
    pub d: Duration,
}

/// A document with a single [`Time`] under the key `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeDocument {
    /// The timestamp being round tripped.
    pub t: Time,
}

/// A document with a single [`MicroTime`] under the key `t`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MicroTimeDocument {
    /// The timestamp being round tripped.
    pub t: MicroTime,
}
