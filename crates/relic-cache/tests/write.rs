use relic_cache::CacheDir;
use std::path::Path;
use tempfile::TempDir;

fn entry_count(dir: &Path) -> usize {
    std::fs::read_dir(dir).unwrap().count()
}

#[test]
fn write_creates_directory_and_stores_contents() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = CacheDir::resolve(tmp.path(), "Report.Archive", None).unwrap();
    assert!(!dir.path().exists());

    let written = dir.write(b"{\"total\": 3}", "json", None).unwrap();

    assert!(written.starts_with(dir.path()));
    assert_eq!(entry_count(dir.path()), 1);
    assert_eq!(std::fs::read(&written).unwrap(), b"{\"total\": 3}");
}

#[test]
fn generated_filename_is_timestamped() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = CacheDir::resolve(tmp.path(), "reports", None).unwrap();

    let written = dir.write(b"payload", "json", None).unwrap();

    let name = written.file_name().unwrap().to_str().unwrap();
    let stem = name.strip_suffix(".json").expect("suffix appended");
    assert_eq!(stem.len(), 26, "unexpected filename: {name}");
    assert!(
        stem.chars().all(|c| c.is_ascii_digit() || c == '-'),
        "unexpected filename: {name}"
    );
}

#[test]
fn distinct_prefixes_coexist() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = CacheDir::resolve(tmp.path(), "reports", None).unwrap();

    let first = dir.write(b"first", "json", Some("2026-08-01")).unwrap();
    let second = dir.write(b"second", "json", Some("2026-08-02")).unwrap();

    assert_ne!(first, second);
    assert_eq!(entry_count(dir.path()), 2);
    assert_eq!(std::fs::read(&first).unwrap(), b"first");
    assert_eq!(std::fs::read(&second).unwrap(), b"second");
}

#[test]
fn duplicate_prefix_overwrites() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = CacheDir::resolve(tmp.path(), "reports", None).unwrap();

    let first = dir.write(b"stale contents", "json", Some("latest")).unwrap();
    let second = dir.write(b"fresh contents", "json", Some("latest")).unwrap();

    assert_eq!(first, second);
    assert_eq!(entry_count(dir.path()), 1);
    assert_eq!(std::fs::read(&second).unwrap(), b"fresh contents");
}

#[test]
fn write_into_subdirectory_creates_intermediate_directories() {
    let tmp = TempDir::new().expect("tempdir");
    let dir = CacheDir::resolve(
        tmp.path(),
        "Invoices.PDF",
        Some(Path::new("2026/08")),
    )
    .unwrap();

    let written = dir.write(b"%PDF-1.7", "pdf", Some("invoice-42")).unwrap();

    assert_eq!(
        written,
        tmp.path().join("invoices/pdf/2026/08/invoice-42.pdf")
    );
    assert_eq!(std::fs::read(&written).unwrap(), b"%PDF-1.7");
}
