//! Entry points for the fuzz engine.
//!
//! Each function takes the raw input and returns 1 if the input reached a
//! successful decode, 0 otherwise, using [`HarnessOptions::default`].
//!
//! # Panics
//!
//! The round trip entry points panic when [`round_trip`] returns a
//! [`Fatal`], so that the engine keeps the input as a crash artifact. The
//! structural entry points never panic.

use crate::documents::{DurationDocument, MicroTimeDocument, TimeDocument};
use crate::error::Fatal;
use crate::options::HarnessOptions;
use crate::structure::{decode_structure, Dialect};
use crate::round_trip::{round_trip, Verdict};
use tracing::error;

fn report(result: Result<Verdict, Fatal>) -> i32 {
    match result {
        Ok(verdict) => verdict.priority(),
        Err(fatal) => {
            error!(input = %String::from_utf8_lossy(fatal.input()), "{fatal}");
            panic!("{fatal}");
        }
    }
}

/// Round trips a [`DurationDocument`] (`d: <duration>`).
pub fn fuzz_duration(data: &[u8]) -> i32 {
    report(round_trip::<DurationDocument>(data, &HarnessOptions::default()))
}

/// Round trips a [`TimeDocument`] (`t: <timestamp>`).
pub fn fuzz_time(data: &[u8]) -> i32 {
    report(round_trip::<TimeDocument>(data, &HarnessOptions::default()))
}

/// Round trips a [`MicroTimeDocument`] (`t: <timestamp with micros>`).
pub fn fuzz_micro_time(data: &[u8]) -> i32 {
    report(round_trip::<MicroTimeDocument>(data, &HarnessOptions::default()))
}

/// Checks the [`Dialect::Json`] decoding path.
pub fn fuzz_sig_yaml(data: &[u8]) -> i32 {
    decode_structure(data, Dialect::Json, &HarnessOptions::default()).priority()
}

/// Checks the [`Dialect::Yaml`] decoding path.
pub fn fuzz_yaml_v2(data: &[u8]) -> i32 {
    decode_structure(data, Dialect::Yaml, &HarnessOptions::default()).priority()
}
