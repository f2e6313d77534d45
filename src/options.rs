use serde_yaml_bw::DeserializerOptions;
use std::str;
use tracing::trace;

/// Inputs longer than this are rejected without parsing.
pub const DEFAULT_MAX_INPUT_LEN: usize = 10 * 1024;

/// Settings shared by every target.
///
/// ```
/// use kube_yaml_fuzz::HarnessOptions;
///
/// let options = HarnessOptions::default()
///     .with_max_input_len(64 * 1024)
///     .with_pathology_screening(false);
/// assert_eq!(options.max_input_len, 64 * 1024);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HarnessOptions {
    /// Inputs longer than this many bytes are rejected. Default:
    /// [`DEFAULT_MAX_INPUT_LEN`].
    pub max_input_len: usize,
    /// Whether the YAML parser screens for pathological input (huge lines,
    /// alias bombs) before parsing. Default: true.
    pub screen_pathology: bool,
}

impl Default for HarnessOptions {
    fn default() -> Self {
        HarnessOptions {
            max_input_len: DEFAULT_MAX_INPUT_LEN,
            screen_pathology: true,
        }
    }
}

impl HarnessOptions {
    /// Sets [`max_input_len`](Self::max_input_len).
    pub fn with_max_input_len(mut self, max_input_len: usize) -> Self {
        self.max_input_len = max_input_len;
        self
    }

    /// Sets [`screen_pathology`](Self::screen_pathology).
    pub fn with_pathology_screening(mut self, screen_pathology: bool) -> Self {
        self.screen_pathology = screen_pathology;
        self
    }

    /// Returns the input as text if it is short enough and valid UTF-8.
    pub(crate) fn admit<'a>(&self, input: &'a [u8]) -> Option<&'a str> {
        if input.len() > self.max_input_len {
            trace!(len = input.len(), max = self.max_input_len, "input too long");
            return None;
        }
        match str::from_utf8(input) {
            Ok(text) => Some(text),
            Err(err) => {
                trace!(%err, "input is not UTF-8");
                None
            }
        }
    }

    pub(crate) fn deserializer_options(&self) -> DeserializerOptions {
        let mut opts = DeserializerOptions::default();
        if !self.screen_pathology {
            opts.budget = None;
        }
        opts
    }
}
