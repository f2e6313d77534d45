#![no_main]

use libfuzzer_sys::fuzz_target;

// YAML converted to JSON, then decoded into an empty struct and a map.
fuzz_target!(|data: &[u8]| {
    kube_yaml_fuzz::fuzz_sig_yaml(data);
});
