use std::borrow::Cow;
use thiserror::Error;

/// A verification failure found by a round trip target.
///
/// Returned only after the input decoded successfully. Either kind means the
/// decoder and the encoder disagree about the input, so the input is worth
/// keeping as a crash artifact.
#[derive(Debug, Error)]
pub enum Fatal {
    /// The decoded value could not be encoded again.
    #[error("decoded value failed to encode: {source}\n input: {:?}", lossy(.input))]
    Encode {
        /// The original input.
        input: Vec<u8>,
        /// The encoder error.
        source: serde_yaml_bw::Error,
    },
    /// The decoded value encoded to bytes that differ from the input.
    #[error("round trip mismatch\n input: {:?}\noutput: {:?}", lossy(.input), lossy(.output))]
    Mismatch {
        /// The original input.
        input: Vec<u8>,
        /// What the decoded value encoded to.
        output: Vec<u8>,
    },
}

impl Fatal {
    /// The input that triggered the failure.
    pub fn input(&self) -> &[u8] {
        match self {
            Fatal::Encode { input, .. } | Fatal::Mismatch { input, .. } => input,
        }
    }
}

fn lossy(bytes: &[u8]) -> Cow<'_, str> {
    String::from_utf8_lossy(bytes)
}
