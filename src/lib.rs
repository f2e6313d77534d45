//! Fuzz targets for the YAML decoding of cluster API values.
//!
//! Two kinds of target are provided:
//!
//! - **Round trip** targets decode the input into a small document holding
//!   one [`Duration`](meta::Duration), [`Time`](meta::Time) or
//!   [`MicroTime`](meta::MicroTime) field, encode the document again and
//!   require the output to be byte-for-byte identical to the input.
//! - **Structural** targets only check whether the input decodes into an empty
//!   struct or a generic string-keyed mapping, through one of two
//!   [`Dialect`]s.
//!
//! Inputs that do not decode are simply [`Verdict::Rejected`]. An input that
//! decodes but cannot be encoded, or encodes to different bytes, yields a
//! [`Fatal`] error.
//!
//! ```
//! use kube_yaml_fuzz::{round_trip, DurationDocument, Fatal, HarnessOptions, Verdict};
//!
//! let options = HarnessOptions::default();
//!
//! let verdict = round_trip::<DurationDocument>(b"d: 5s\n", &options).unwrap();
//! assert_eq!(verdict, Verdict::Accepted);
//!
//! let verdict = round_trip::<DurationDocument>(b"\x00\x01\xff", &options).unwrap();
//! assert_eq!(verdict, Verdict::Rejected);
//!
//! // Accepted by the parser, but the canonical form is `1h0m0s`.
//! let fatal = round_trip::<DurationDocument>(b"d: 1h\n", &options).unwrap_err();
//! assert!(matches!(fatal, Fatal::Mismatch { .. }));
//! ```
//!
//! The `fuzz/` directory holds the `cargo fuzz` package that drives the
//! [`targets`] entry points.

#![doc(html_root_url = "https://docs.rs/kube_yaml_fuzz/0.1.0")]
#![deny(missing_docs)]
#![allow(
    clippy::doc_markdown,
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
)]

mod documents;
mod error;
pub mod meta;
mod options;
mod round_trip;
mod structure;
pub mod targets;

pub use crate::documents::{DurationDocument, MicroTimeDocument, TimeDocument};
pub use crate::error::Fatal;
pub use crate::options::{HarnessOptions, DEFAULT_MAX_INPUT_LEN};
pub use crate::round_trip::{round_trip, Verdict};
pub use crate::structure::{decode_structure, Dialect, Empty};
pub use crate::targets::{fuzz_duration, fuzz_micro_time, fuzz_sig_yaml, fuzz_time, fuzz_yaml_v2};
