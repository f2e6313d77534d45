use crate::meta::ParseError;
use serde::de::{self, Deserialize, Deserializer, Visitor};
use serde::ser::{Serialize, Serializer};
use std::fmt::{self, Display};
use std::str::FromStr;

const NANOSECOND: u64 = 1;
const MICROSECOND: u64 = 1_000 * NANOSECOND;
const MILLISECOND: u64 = 1_000 * MICROSECOND;
const SECOND: u64 = 1_000 * MILLISECOND;
const MINUTE: u64 = 60 * SECOND;
const HOUR: u64 = 60 * MINUTE;

/// Largest magnitude a duration can have. Only a negative duration reaches it.
const MAGNITUDE_LIMIT: u64 = 1 << 63;

/// A signed span of time with nanosecond resolution.
///
/// The text form is the one produced by Go's `time.Duration`: the largest
/// units first, trailing zero units dropped below a minute, and fractional
/// seconds without trailing zeros.
///
/// ```
/// use kube_yaml_fuzz::meta::Duration;
///
/// let duration: Duration = "90m".parse().unwrap();
/// assert_eq!(duration.to_string(), "1h30m0s");
///
/// let duration: Duration = "1.5us".parse().unwrap();
/// assert_eq!(duration.to_string(), "1.5µs");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration {
    nanos: i64,
}

impl Duration {
    /// The empty duration, written `0s`.
    pub const ZERO: Duration = Duration { nanos: 0 };

    /// Creates a duration from a signed nanosecond count.
    pub const fn from_nanos(nanos: i64) -> Self {
        Duration { nanos }
    }

    /// Creates a duration from whole seconds, or `None` on overflow.
    pub const fn from_secs(secs: i64) -> Option<Self> {
        match secs.checked_mul(SECOND as i64) {
            Some(nanos) => Some(Duration { nanos }),
            None => None,
        }
    }

    /// Returns the signed nanosecond count.
    pub const fn as_nanos(self) -> i64 {
        self.nanos
    }

    /// Returns true if this duration is below zero.
    pub const fn is_negative(self) -> bool {
        self.nanos < 0
    }

    /// Converts into a standard library duration. Negative durations have no
    /// such representation.
    pub fn to_std(self) -> Option<std::time::Duration> {
        u64::try_from(self.nanos)
            .ok()
            .map(std::time::Duration::from_nanos)
    }

    /// Converts from a standard library duration, or `None` if it exceeds the
    /// signed 64-bit nanosecond range.
    pub fn from_std(duration: std::time::Duration) -> Option<Self> {
        i64::try_from(duration.as_nanos())
            .ok()
            .map(Duration::from_nanos)
    }
}

fn unit_nanos(unit: &str) -> Option<u64> {
    match unit {
        "ns" => Some(NANOSECOND),
        // ASCII, MICRO SIGN and GREEK SMALL LETTER MU.
        "us" | "\u{b5}s" | "\u{3bc}s" => Some(MICROSECOND),
        "ms" => Some(MILLISECOND),
        "s" => Some(SECOND),
        "m" => Some(MINUTE),
        "h" => Some(HOUR),
        _ => None,
    }
}

fn leading_digits(s: &str) -> usize {
    s.bytes().take_while(u8::is_ascii_digit).count()
}

// Consumes leading digits. None on overflow past MAGNITUDE_LIMIT.
fn leading_int(s: &str) -> Option<(u64, &str)> {
    let digits = leading_digits(s);
    let mut value: u64 = 0;
    for b in s[..digits].bytes() {
        if value > MAGNITUDE_LIMIT / 10 {
            return None;
        }
        value = value * 10 + u64::from(b - b'0');
        if value > MAGNITUDE_LIMIT {
            return None;
        }
    }
    Some((value, &s[digits..]))
}

// Consumes leading fraction digits. Digits that would overflow are dropped
// rather than reported, since they are below any meaningful precision.
fn leading_fraction(s: &str) -> (u64, f64, &str) {
    let digits = leading_digits(s);
    let mut value: u64 = 0;
    let mut scale = 1.0;
    let mut overflow = false;
    for b in s[..digits].bytes() {
        if overflow {
            continue;
        }
        if value > (MAGNITUDE_LIMIT - 1) / 10 {
            overflow = true;
            continue;
        }
        let next = value * 10 + u64::from(b - b'0');
        if next > MAGNITUDE_LIMIT {
            overflow = true;
            continue;
        }
        value = next;
        scale *= 10.0;
    }
    (value, scale, &s[digits..])
}

impl FromStr for Duration {
    type Err = ParseError;

    fn from_str(text: &str) -> Result<Self, ParseError> {
        let invalid = || ParseError::InvalidDuration(text.to_owned());
        let overflow = || ParseError::DurationOverflow(text.to_owned());

        let mut s = text;
        let mut negative = false;
        if let Some(rest) = s.strip_prefix('-') {
            negative = true;
            s = rest;
        } else if let Some(rest) = s.strip_prefix('+') {
            s = rest;
        }
        if s == "0" {
            return Ok(Duration::ZERO);
        }
        if s.is_empty() {
            return Err(invalid());
        }

        let mut total: u64 = 0;
        while !s.is_empty() {
            if !matches!(s.as_bytes()[0], b'.' | b'0'..=b'9') {
                return Err(invalid());
            }

            let (mut value, rest) = leading_int(s).ok_or_else(overflow)?;
            let has_int = rest.len() != s.len();
            s = rest;

            let mut fraction = 0;
            let mut scale = 1.0;
            let mut has_fraction = false;
            if let Some(rest) = s.strip_prefix('.') {
                let (digits, digits_scale, after) = leading_fraction(rest);
                has_fraction = after.len() != rest.len();
                fraction = digits;
                scale = digits_scale;
                s = after;
            }
            if !has_int && !has_fraction {
                return Err(invalid());
            }

            let unit_len = s
                .bytes()
                .position(|b| b == b'.' || b.is_ascii_digit())
                .unwrap_or(s.len());
            if unit_len == 0 {
                return Err(ParseError::MissingUnit(text.to_owned()));
            }
            let (unit, rest) = s.split_at(unit_len);
            s = rest;
            let unit = unit_nanos(unit).ok_or_else(|| ParseError::UnknownUnit {
                unit: unit.to_owned(),
                input: text.to_owned(),
            })?;

            if value > MAGNITUDE_LIMIT / unit {
                return Err(overflow());
            }
            value *= unit;
            if fraction > 0 {
                value += (fraction as f64 * (unit as f64 / scale)) as u64;
                if value > MAGNITUDE_LIMIT {
                    return Err(overflow());
                }
            }
            total = total
                .checked_add(value)
                .filter(|total| *total <= MAGNITUDE_LIMIT)
                .ok_or_else(overflow)?;
        }

        if negative {
            // MAGNITUDE_LIMIT itself wraps to i64::MIN, which is the intent.
            return Ok(Duration::from_nanos((total as i64).wrapping_neg()));
        }
        i64::try_from(total)
            .map(Duration::from_nanos)
            .map_err(|_| overflow())
    }
}

// Writes `whole` followed by up to `precision` fractional digits of
// `fraction`, with trailing zeros removed.
fn push_decimal(out: &mut String, whole: u64, fraction: u64, precision: usize) {
    out.push_str(itoa::Buffer::new().format(whole));
    if fraction == 0 {
        return;
    }
    let mut buffer = itoa::Buffer::new();
    let digits = buffer.format(fraction);
    out.push('.');
    for _ in digits.len()..precision {
        out.push('0');
    }
    out.push_str(digits.trim_end_matches('0'));
}

impl Display for Duration {
    fn fmt(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        let magnitude = self.nanos.unsigned_abs();
        if magnitude == 0 {
            return formatter.write_str("0s");
        }

        let mut out = String::with_capacity(24);
        if self.nanos < 0 {
            out.push('-');
        }
        if magnitude < SECOND {
            let (unit, scale, precision) = if magnitude < MICROSECOND {
                ("ns", NANOSECOND, 0)
            } else if magnitude < MILLISECOND {
                ("\u{b5}s", MICROSECOND, 3)
            } else {
                ("ms", MILLISECOND, 6)
            };
            push_decimal(&mut out, magnitude / scale, magnitude % scale, precision);
            out.push_str(unit);
        } else {
            let hours = magnitude / HOUR;
            if hours > 0 {
                out.push_str(itoa::Buffer::new().format(hours));
                out.push('h');
            }
            if magnitude >= MINUTE {
                out.push_str(itoa::Buffer::new().format(magnitude / MINUTE % 60));
                out.push('m');
            }
            let seconds = magnitude % MINUTE;
            push_decimal(&mut out, seconds / SECOND, seconds % SECOND, 9);
            out.push('s');
        }
        formatter.write_str(&out)
    }
}

impl Serialize for Duration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Duration {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct DurationVisitor;

        impl Visitor<'_> for DurationVisitor {
            type Value = Duration;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a duration string such as \"1h2m3s\"")
            }

            fn visit_str<E>(self, v: &str) -> Result<Duration, E>
            where
                E: de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_str(DurationVisitor)
    }
}
