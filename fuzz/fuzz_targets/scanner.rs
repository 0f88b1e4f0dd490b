#![no_main]
use libfuzzer_sys::fuzz_target;
use scanfloat::Scanner;

fuzz_target!(|data: &[u8]| {
    let mut scanner = Scanner::new(data);
    while !scanner.is_empty() {
        let before = scanner.offset();
        if scanner.scan_localized::<f32>().is_err() && scanner.scan_bool().is_err() {
            break;
        }
        assert!(scanner.offset() > before);
    }
});
