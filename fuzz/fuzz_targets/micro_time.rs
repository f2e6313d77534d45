#![no_main]

use libfuzzer_sys::fuzz_target;

// Same as the time target, with the six digit fraction variant.
fuzz_target!(|data: &[u8]| {
    kube_yaml_fuzz::fuzz_micro_time(data);
});
