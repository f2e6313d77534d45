#![no_main]

use libfuzzer_sys::fuzz_target;

// `t: <timestamp>` must either fail to decode or encode back to the input.
fuzz_target!(|data: &[u8]| {
    kube_yaml_fuzz::fuzz_time(data);
});
