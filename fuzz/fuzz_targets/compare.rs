#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    jsoneq_fuzz::fuzz_compare(data);
});
