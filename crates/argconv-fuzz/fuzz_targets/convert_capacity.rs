#![no_main]
use argconv_core::{ArgConverter, MountTable, NullSink};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte = output capacity, rest = argument
    let capacity = data[0] as usize;
    let arg = &data[1..];

    let Ok(mounts) = MountTable::with_root("C:\\msys64") else {
        return;
    };
    let converter = ArgConverter::new(&mounts).with_sink(NullSink);

    // Guard bytes past the capacity must never be touched
    let mut buf = vec![0xa5u8; capacity + 8];
    let len = converter.convert(&mut buf[..capacity], arg).len();

    if capacity > 0 {
        assert!(len < capacity);
        assert_eq!(buf[len], 0);
    }
    assert!(buf[capacity..].iter().all(|&b| b == 0xa5));
});
