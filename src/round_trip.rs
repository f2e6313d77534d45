use crate::error::Fatal;
use crate::options::HarnessOptions;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_yaml_bw::Deserializer;
use std::any;
use tracing::trace;

/// Outcome of one target invocation that did not find a defect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Verdict {
    /// The input did not decode. This is the common case for random bytes.
    Rejected,
    /// The input decoded (and, for round trip targets, encoded back to
    /// itself).
    Accepted,
}

impl Verdict {
    /// The value reported to the fuzz engine: 1 for inputs that reached a
    /// successful decode, 0 otherwise.
    pub fn priority(self) -> i32 {
        match self {
            Verdict::Rejected => 0,
            Verdict::Accepted => 1,
        }
    }

    /// Returns true for [`Verdict::Accepted`].
    pub fn is_accepted(self) -> bool {
        self == Verdict::Accepted
    }
}

impl From<bool> for Verdict {
    fn from(accepted: bool) -> Self {
        if accepted {
            Verdict::Accepted
        } else {
            Verdict::Rejected
        }
    }
}

/// Decodes a single YAML document from `text` into `T`.
pub(crate) fn decode<T>(text: &str, options: &HarnessOptions) -> serde_yaml_bw::Result<T>
where
    T: DeserializeOwned,
{
    let opts = options.deserializer_options();
    T::deserialize(Deserializer::from_str_with_options(text, &opts))
}

/// Checks that `input` either fails to decode as `T`, or decodes and encodes
/// back to exactly the same bytes.
///
/// Inputs that are too long, not UTF-8, or not a valid `T` are
/// [`Verdict::Rejected`]. Once the input has decoded, any failure to
/// reproduce it is returned as [`Fatal`].
///
/// ```
/// use kube_yaml_fuzz::{round_trip, HarnessOptions, TimeDocument, Verdict};
///
/// let options = HarnessOptions::default();
/// let input = b"t: 2023-01-01T00:00:00Z\n";
/// assert_eq!(round_trip::<TimeDocument>(input, &options).unwrap(), Verdict::Accepted);
/// ```
pub fn round_trip<T>(input: &[u8], options: &HarnessOptions) -> Result<Verdict, Fatal>
where
    T: Serialize + DeserializeOwned,
{
    let Some(text) = options.admit(input) else {
        return Ok(Verdict::Rejected);
    };

    let value: T = match decode(text, options) {
        Ok(value) => value,
        Err(err) => {
            trace!(target_type = any::type_name::<T>(), %err, "input rejected");
            return Ok(Verdict::Rejected);
        }
    };

    let output = serde_yaml_bw::to_string(&value).map_err(|source| Fatal::Encode {
        input: input.to_vec(),
        source,
    })?;

    if output.as_bytes() != input {
        return Err(Fatal::Mismatch {
            input: input.to_vec(),
            output: output.into_bytes(),
        });
    }
    Ok(Verdict::Accepted)
}
