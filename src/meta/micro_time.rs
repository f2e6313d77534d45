use crate::meta::time::{
    deserialize_nullable_text, non_zero, parse_rfc3339, serialize_instant, write_instant,
};
use crate::meta::ParseError;
use chrono::{DateTime, Utc};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

const MICROS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%S%.6fZ";
const ZERO_TEXT: &str = "0001-01-01T00:00:00.000000Z";

/// An instant written with microsecond precision, such as
/// `2023-01-01T00:00:00.000001Z`.
///
/// The fraction is always exactly six digits, both when parsing and when
/// writing. Sub-microsecond digits cannot be written and are truncated.
///
/// ```
/// use kube_yaml_fuzz::meta::MicroTime;
///
/// let time: MicroTime = "2023-01-01T00:00:00.250000Z".parse().unwrap();
/// assert_eq!(time.to_string(), "2023-01-01T00:00:00.250000Z");
/// assert!("2023-01-01T00:00:00.25Z".parse::<MicroTime>().is_err());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MicroTime {
    instant: Option<DateTime<Utc>>,
}

impl MicroTime {
    /// The zero time, `0001-01-01T00:00:00.000000Z`.
    pub const fn zero() -> Self {
        MicroTime { instant: None }
    }

    /// The current time.
    pub fn now() -> Self {
        MicroTime::from_datetime(Utc::now())
    }

    /// Wraps an instant. `0001-01-01T00:00:00Z` becomes the zero time.
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        MicroTime {
            instant: non_zero(instant),
        }
    }

    /// Returns true for the zero time.
    pub fn is_zero(&self) -> bool {
        self.instant.is_none()
    }

    /// The wrapped instant, or `None` for the zero time.
    pub fn datetime(&self) -> Option<DateTime<Utc>> {
        self.instant
    }
}

impl From<DateTime<Utc>> for MicroTime {
    fn from(instant: DateTime<Utc>) -> Self {
        MicroTime::from_datetime(instant)
    }
}

// `YYYY-MM-DDTHH:MM:SS` is 19 bytes; the fraction must follow immediately.
fn has_micro_fraction(text: &str) -> bool {
    let Some(fraction) = text.get(19..).and_then(|rest| rest.strip_prefix('.')) else {
        return false;
    };
    fraction.bytes().take_while(u8::is_ascii_digit).count() == 6
}

impl FromStr for MicroTime {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, ParseError> {
        let instant = parse_rfc3339(text)?;
        if !has_micro_fraction(text) {
            return Err(ParseError::MicroPrecision(text.to_owned()));
        }
        Ok(MicroTime::from_datetime(instant))
    }
}

impl Display for MicroTime {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write_instant(self.instant, MICROS_LAYOUT, ZERO_TEXT, formatter)
    }
}

impl Serialize for MicroTime {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_instant(self.instant, self, serializer)
    }
}

impl<'de> Deserialize<'de> for MicroTime {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_nullable_text(deserializer)? {
            Some(text) => text.parse().map_err(de::Error::custom),
            None => Ok(MicroTime::zero()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::has_micro_fraction;

    #[test]
    fn fraction_must_have_six_digits() {
        assert!(has_micro_fraction("2023-01-01T00:00:00.000000Z"));
        assert!(has_micro_fraction("2023-01-01T00:00:00.123456+02:00"));
        assert!(!has_micro_fraction("2023-01-01T00:00:00Z"));
        assert!(!has_micro_fraction("2023-01-01T00:00:00.12345Z"));
        assert!(!has_micro_fraction("2023-01-01T00:00:00.1234567Z"));
    }
}
