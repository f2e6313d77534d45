use crate::options::HarnessOptions;
use crate::round_trip::{decode, Verdict};
use serde::de::{Deserialize, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde_yaml_bw::Deserializer as YamlDeserializer;
use std::collections::BTreeMap;
use std::fmt;
use tracing::trace;

/// How a structural check turns text into the target shapes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dialect {
    /// YAML is first converted into a JSON document, and the shapes are
    /// decoded from that document with JSON rules. Only string map keys and
    /// JSON scalars survive the conversion.
    Json,
    /// The shapes are decoded straight from YAML.
    Yaml,
}

/// A struct without fields. Decodes from any mapping, and from nothing else.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Empty {}

impl<'de> Deserialize<'de> for Empty {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct EmptyVisitor;

        impl<'de> Visitor<'de> for EmptyVisitor {
            type Value = Empty;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a mapping")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Empty, A::Error>
            where
                A: MapAccess<'de>,
            {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(Empty {})
            }
        }

        deserializer.deserialize_map(EmptyVisitor)
    }
}

/// Reports whether `input` decodes as an [`Empty`] struct or as a string
/// keyed mapping in the given dialect.
///
/// A stream without documents and an explicit null decode into either
/// shape as "nothing to fill in", so both are accepted. Sequences and
/// scalars are not. Both shapes are tried even when the first one succeeds.
/// No output is checked, so this never fails.
///
/// ```
/// use kube_yaml_fuzz::{decode_structure, Dialect, HarnessOptions, Verdict};
///
/// let options = HarnessOptions::default();
/// assert_eq!(decode_structure(b"{}", Dialect::Yaml, &options), Verdict::Accepted);
/// assert_eq!(decode_structure(b"null", Dialect::Json, &options), Verdict::Accepted);
/// assert_eq!(decode_structure(b"[]", Dialect::Json, &options), Verdict::Rejected);
/// assert_eq!(decode_structure(b"{", Dialect::Json, &options), Verdict::Rejected);
/// ```
pub fn decode_structure(input: &[u8], dialect: Dialect, options: &HarnessOptions) -> Verdict {
    let Some(text) = options.admit(input) else {
        return Verdict::Rejected;
    };
    if is_empty_stream(text, options) {
        return Verdict::Accepted;
    }
    let (mapping, empty) = match dialect {
        Dialect::Json => decode_json(text, options),
        Dialect::Yaml => decode_yaml(text, options),
    };
    Verdict::from(mapping || empty)
}

// A parse failure still yields one (failing) document, so only a stream of
// blanks and comments comes out empty.
fn is_empty_stream(text: &str, options: &HarnessOptions) -> bool {
    let opts = options.deserializer_options();
    YamlDeserializer::from_str_with_options(text, &opts)
        .next()
        .is_none()
}

fn decode_json(text: &str, options: &HarnessOptions) -> (bool, bool) {
    let document: serde_json::Value = match decode(text, options) {
        Ok(document) => document,
        Err(err) => {
            trace!(%err, "input is not convertible to JSON");
            return (false, false);
        }
    };
    let mapping = serde_json::from_value::<Option<serde_json::Map<String, serde_json::Value>>>(
        document.clone(),
    )
    .is_ok();
    let empty = serde_json::from_value::<Option<Empty>>(document).is_ok();
    (mapping, empty)
}

fn decode_yaml(text: &str, options: &HarnessOptions) -> (bool, bool) {
    let mapping = decode::<Option<BTreeMap<String, serde_yaml_bw::Value>>>(text, options).is_ok();
    let empty = decode::<Option<Empty>>(text, options).is_ok();
    (mapping, empty)
}
