//! End-to-end conversions through the public API

use argconv_core::{
    convert, ArgConverter, CollectingSink, ConvertOptions, DiagnosticCategory, MountTable,
    PathShape, ResolveFn,
};
use assert_matches::assert_matches;
use tracing_subscriber::EnvFilter;

/// Route library events to the test harness; `RUST_LOG=argconv_core=trace`
/// shows classification and resolution
fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

fn msys() -> MountTable {
    MountTable::with_root("C:\\msys64").unwrap()
}

fn convert_str(input: &str) -> String {
    init_tracing();
    let mounts = msys();
    ArgConverter::new(&mounts)
        .with_sink(CollectingSink::new())
        .convert_to_string(input, 1024)
}

#[test]
fn test_plain_arguments_pass_through() {
    for arg in ["hello", "--verbose", "a b c", "foo /usr/bin", "x=1", ""] {
        assert_eq!(convert_str(arg), arg);
    }
}

#[test]
fn test_dev_null() {
    assert_eq!(convert_str("/dev/null"), "nul");
    assert_eq!(convert_str("--log=/dev/null"), "--log=nul");
}

#[test]
fn test_unc_path() {
    assert_eq!(convert_str("//server/share\\x\\y"), "//server/share/x/y");
}

#[test]
fn test_windows_paths_unchanged() {
    assert_eq!(convert_str("C:\\Windows\\System32"), "C:\\Windows\\System32");
    assert_eq!(convert_str("C:/Windows"), "C:/Windows");
    assert_eq!(convert_str("./configure"), "./configure");
    assert_eq!(convert_str("../lib/x.a"), "../lib/x.a");
}

#[test]
fn test_escaped_windows_path() {
    assert_eq!(convert_str("/C:\\foo"), "C:/foo");
}

#[test]
fn test_rooted_paths() {
    assert_eq!(convert_str("/usr/include"), "C:/msys64/usr/include");
    assert_eq!(convert_str("-I/usr/include"), "-IC:/msys64/usr/include");
    assert_eq!(convert_str("--prefix=/usr/local"), "--prefix=C:/msys64/usr/local");
    assert_eq!(convert_str("/c/Users"), "C:/Users");
}

#[test]
fn test_quoted_value() {
    assert_eq!(
        convert_str("--prefix=\"/usr/local\""),
        "--prefix=\"C:/msys64/usr/local\""
    );
}

#[test]
fn test_flag_colon_prefix_kept() {
    assert_eq!(convert_str("-x:/usr"), "-x:C:/msys64/usr");
}

#[test]
fn test_flag_comma_list_untouched() {
    assert_eq!(convert_str("-I/a,b"), "-I/a,b");
    assert_eq!(convert_str("-Ia/b,c"), "-Ia/b,c");
}

#[test]
fn test_default_sink_logs_cut_off() {
    init_tracing();
    let mounts = msys();
    let converter = ArgConverter::new(&mounts);
    assert_eq!(converter.convert_to_string("/usr/bin:/bin", 10), "C:\\msys64");
}

#[test]
fn test_parent_reference_stops_resolution() {
    assert_eq!(convert_str("/usr/local/../bin"), "C:/msys64/usr/local/../bin");
}

#[test]
fn test_posix_lists() {
    assert_eq!(
        convert_str("PATH=/usr/bin:/bin"),
        "PATH=C:\\msys64\\usr\\bin;C:\\msys64\\bin"
    );
    assert_eq!(
        convert_str("a:/usr/bin:/etc"),
        "a;C:\\msys64\\usr\\bin;C:\\msys64\\etc"
    );
}

#[test]
fn test_drive_colon_inside_list() {
    assert_eq!(convert_str("C:/x:/y"), "C:\\x;C:\\msys64\\y");
}

#[test]
fn test_url_untouched() {
    assert_eq!(convert_str("http://example.com/a"), "http://example.com/a");
}

#[test]
fn test_list_cut_off_reports_once() {
    let mounts = msys();
    let converter = ArgConverter::new(&mounts).with_sink(CollectingSink::new());

    let mut buf = [0u8; 10];
    let out = converter.convert(&mut buf, b"/usr/bin:/bin");
    assert_eq!(out, b"C:\\msys64");
    assert_eq!(buf[9], 0);

    let diagnostics = converter.sink().drain();
    assert_eq!(diagnostics.len(), 1);
    assert_matches!(diagnostics[0].category, DiagnosticCategory::PathCutOff);
}

#[test]
fn test_custom_options() {
    let mounts = msys();
    let converter = ArgConverter::new(&mounts).with_options(ConvertOptions {
        null_device: "NUL".into(),
        list_separator: b',',
        ..Default::default()
    });
    assert_eq!(converter.convert_to_string("/dev/null", 64), "NUL");
    assert_eq!(
        converter.convert_to_string("/ab:/cd", 64),
        "C:\\msys64\\ab,C:\\msys64\\cd"
    );
}

#[test]
fn test_failed_resolution_copies_original() {
    let mut buf = [0u8; 64];
    let resolver = ResolveFn(|posix: &str| -> argconv_core::Result<String> {
        Err(argconv_core::Error::Resolve(posix.to_string()))
    });
    assert_eq!(convert(&mut buf, b"-L/opt/lib", resolver), b"-L/opt/lib");
}

#[test]
fn test_shared_converter_across_threads() {
    let mounts = msys();
    let converter = ArgConverter::new(&mounts).with_sink(CollectingSink::new());

    std::thread::scope(|scope| {
        for i in 0..4 {
            let converter = &converter;
            scope.spawn(move || {
                let input = format!("/usr/lib{i}");
                let expected = format!("C:/msys64/usr/lib{i}");
                for _ in 0..100 {
                    assert_eq!(converter.convert_to_string(&input, 64), expected);
                }
            });
        }
    });
}

#[test]
fn test_classify_reports_path_start() {
    assert_eq!(
        argconv_core::classify_at(b"-I/usr/include", 0, 14),
        (PathShape::RootedPath, 2)
    );
}
