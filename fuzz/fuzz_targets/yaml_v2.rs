#![no_main]

use libfuzzer_sys::fuzz_target;
use std::io::Cursor;

// Plain YAML decoding into an empty struct and a map. The reader path of the
// parser is exercised on the same bytes.
fuzz_target!(|data: &[u8]| {
    if data.len() <= kube_yaml_fuzz::DEFAULT_MAX_INPUT_LEN {
        let _: Result<serde_yaml_bw::Value, _> = serde_yaml_bw::from_reader(Cursor::new(data));
    }
    kube_yaml_fuzz::fuzz_yaml_v2(data);
});
