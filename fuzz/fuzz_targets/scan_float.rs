#![no_main]
use libfuzzer_sys::fuzz_target;
use scanfloat::scan;

fuzz_target!(|data: &[u8]| {
    let Ok(scanned) = scan::<f64, u8>(data) else {
        return;
    };
    assert!(scanned.consumed <= data.len());
    if let Ok(s) = std::str::from_utf8(&data[..scanned.consumed]) {
        if let Ok(expected) = s.parse::<f64>() {
            assert!(expected.to_bits() == scanned.value.to_bits() || expected.is_nan());
        }
    }
});
