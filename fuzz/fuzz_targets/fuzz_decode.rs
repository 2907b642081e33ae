#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Auto-detect decode (ASE, RIFF PAL, JASC PAL, ACO) must never panic
    let _ = zenswatch::decode(data, enough::Unstoppable);

    // Neither may the formats without magic bytes
    let _ = zenswatch::decode_act(data, enough::Unstoppable);
    let _ = zenswatch::decode_raw(data, enough::Unstoppable);
});
