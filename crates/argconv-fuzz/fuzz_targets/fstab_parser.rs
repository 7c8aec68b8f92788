#![no_main]
use argconv_core::platform::fstab;
use argconv_core::PathResolver;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        let _ = fstab::unescape(text);

        if let Ok(table) = fstab::parse(text) {
            // Resolution over any parsed table must not panic
            for mount in table.mounts() {
                let _ = table.resolve_posix_to_native(&mount.posix);
            }
            let _ = table.resolve_posix_to_native("/usr/bin");
            let _ = table.resolve_posix_to_native("/c/x");
        }

        let _ = argconv_core::MountTable::from_yaml(text);
    }
});
