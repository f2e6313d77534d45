use crate::meta::ParseError;
use chrono::{DateTime, Datelike, Utc};
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{self, Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

/// Seconds from the Unix epoch back to `0001-01-01T00:00:00Z`.
const ZERO_UNIX_SECONDS: i64 = -62_135_596_800;

const SECONDS_LAYOUT: &str = "%Y-%m-%dT%H:%M:%SZ";
const ZERO_TEXT: &str = "0001-01-01T00:00:00Z";

/// An instant written with second precision, such as
/// `2023-01-01T00:00:00Z`.
///
/// Fractional seconds are accepted when parsing and kept in memory, but are
/// not written back out. The zero value reads from and writes to `null`.
///
/// ```
/// use kube_yaml_fuzz::meta::Time;
///
/// let time: Time = "2023-01-01T01:00:00+01:00".parse().unwrap();
/// assert_eq!(time.to_string(), "2023-01-01T00:00:00Z");
/// assert!(Time::zero().is_zero());
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Time {
    instant: Option<DateTime<Utc>>,
}

impl Time {
    /// The zero time, `0001-01-01T00:00:00Z`.
    pub const fn zero() -> Self {
        Time { instant: None }
    }

    /// The current time.
    pub fn now() -> Self {
        Time::from_datetime(Utc::now())
    }

    /// Wraps an instant. `0001-01-01T00:00:00Z` becomes the zero time.
    pub fn from_datetime(instant: DateTime<Utc>) -> Self {
        Time {
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

impl From<DateTime<Utc>> for Time {
    fn from(instant: DateTime<Utc>) -> Self {
        Time::from_datetime(instant)
    }
}

pub(crate) fn non_zero(instant: DateTime<Utc>) -> Option<DateTime<Utc>> {
    if instant.timestamp() == ZERO_UNIX_SECONDS && instant.timestamp_subsec_nanos() == 0 {
        None
    } else {
        Some(instant)
    }
}

/// Parses `YYYY-MM-DDTHH:MM:SS[.fraction](Z|±hh:mm)` into UTC.
///
/// The date/time separator must be `T` and a UTC designator must be `Z`;
/// the looser spellings RFC 3339 permits are rejected, and so is a leap
/// second.
pub(crate) fn parse_rfc3339(text: &str) -> Result<DateTime<Utc>, ParseError> {
    if text.as_bytes().get(10) != Some(&b'T') || text.ends_with('z') {
        return Err(ParseError::TimestampLayout(text.to_owned()));
    }
    if text.get(17..19) == Some("60") {
        return Err(ParseError::LeapSecond(text.to_owned()));
    }
    DateTime::parse_from_rfc3339(text)
        .map(|instant| instant.with_timezone(&Utc))
        .map_err(|source| ParseError::Timestamp {
            input: text.to_owned(),
            source,
        })
}

pub(crate) fn write_instant(
    instant: Option<DateTime<Utc>>,
    layout: &str,
    zero: &str,
    formatter: &mut fmt::Formatter,
) -> fmt::Result {
    match instant {
        Some(instant) => write!(formatter, "{}", instant.format(layout)),
        None => formatter.write_str(zero),
    }
}

pub(crate) fn serialize_instant<S, T>(
    instant: Option<DateTime<Utc>>,
    display: &T,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Display + ?Sized,
{
    let Some(instant) = instant else {
        return serializer.serialize_none();
    };
    let year = instant.year();
    if !(0..=9999).contains(&year) {
        return Err(ser::Error::custom(format_args!(
            "year {year} outside of range [0,9999]"
        )));
    }
    serializer.collect_str(display)
}

/// Reads an explicit null as `None` and a string as `Some`.
///
/// Goes through `deserialize_any` rather than `deserialize_option`, so an
/// absent struct field stays a "missing field" error instead of becoming
/// `None`.
pub(crate) fn deserialize_nullable_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    struct NullableTextVisitor;

    impl<'de> Visitor<'de> for NullableTextVisitor {
        type Value = Option<String>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a timestamp string or null")
        }

        fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v.to_owned()))
        }

        fn visit_string<E>(self, v: String) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(Some(v))
        }

        fn visit_unit<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_none<E>(self) -> Result<Self::Value, E>
        where
            E: de::Error,
        {
            Ok(None)
        }

        fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
        where
            D: Deserializer<'de>,
        {
            deserializer.deserialize_any(self)
        }
    }

    deserializer.deserialize_any(NullableTextVisitor)
}

impl FromStr for Time {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, ParseError> {
        parse_rfc3339(text).map(Time::from_datetime)
    }
}

impl Display for Time {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        write_instant(self.instant, SECONDS_LAYOUT, ZERO_TEXT, formatter)
    }
}

impl Serialize for Time {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serialize_instant(self.instant, self, serializer)
    }
}

impl<'de> Deserialize<'de> for Time {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match deserialize_nullable_text(deserializer)? {
            Some(text) => text.parse().map_err(de::Error::custom),
            None => Ok(Time::zero()),
        }
    }
}
