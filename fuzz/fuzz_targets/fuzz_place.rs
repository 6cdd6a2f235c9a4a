#![no_main]
use libfuzzer_sys::{fuzz_target, Corpus};
use place_hours::fuzzing::{run_fuzz_place, Data};

fuzz_target!(|data: Data| -> Corpus {
    if run_fuzz_place(data) {
        Corpus::Keep
    } else {
        Corpus::Reject
    }
});
