#![no_main]
use argconv_core::classify_at;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    // First two bytes = window, rest = argument
    let src = &data[2..];
    let start = (data[0] as usize).min(src.len());
    let end = (data[1] as usize).min(src.len());

    let (shape, pos) = classify_at(src, start, end);
    assert!(pos >= start.min(end));
    if shape.is_path() {
        assert!(pos < end);
    }
    assert_eq!(classify_at(src, start, end), (shape, pos));
});
