use std::collections::BTreeSet;
use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::NaiveDate;
use tally_archive::{ArchiveConfig, Archiver, UnpackConfig, WarningKind, unpack};
use tempfile::TempDir;
use zip::ZipWriter;
use zip::write::SimpleFileOptions;

fn seed_data_dir(root: &Path) {
    let data = root.join("data");
    fs::create_dir_all(&data).unwrap();
    for id in 1..=10 {
        fs::write(data.join(format!("data_{id}.csv")), format!("row {id}\n")).unwrap();
    }
    fs::write(data.join("data_5.txt"), "wrong extension").unwrap();
    fs::write(data.join("data_x.csv"), "not numeric").unwrap();
    fs::write(data.join("summary.csv"), "not a data file").unwrap();
}

fn config(root: &Path, lower: u64, upper: u64) -> ArchiveConfig {
    ArchiveConfig::builder()
        .lower(lower)
        .upper(upper)
        .extension("csv")
        .source_dir(root.join("data"))
        .log_root(root.join("log"))
        .build()
        .unwrap()
}

fn names_in(dir: &Path) -> BTreeSet<String> {
    fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect()
}

#[test]
fn test_archive_copies_exactly_the_range() {
    let temp = TempDir::new().unwrap();
    seed_data_dir(temp.path());
    let date = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();

    let report = Archiver::new(config(temp.path(), 3, 6)).archive(date).unwrap();

    let expected_dest = temp.path().join("log").join("2024").join("06").join("09");
    assert_eq!(report.destination, expected_dest);
    assert_eq!(report.copied.len(), 4);
    assert_eq!(report.candidates_seen, 10);
    assert!(report.warnings.is_empty());

    let expected: BTreeSet<String> = (3..=6).map(|id| format!("data_{id}.csv")).collect();
    assert_eq!(names_in(&expected_dest), expected);
    assert_eq!(
        fs::read_to_string(expected_dest.join("data_4.csv")).unwrap(),
        "row 4\n"
    );
}

#[test]
fn test_archive_single_id_range() {
    let temp = TempDir::new().unwrap();
    seed_data_dir(temp.path());
    let date = NaiveDate::from_ymd_opt(2024, 6, 9).unwrap();

    let report = Archiver::new(config(temp.path(), 10, 10)).archive(date).unwrap();

    assert_eq!(report.copied.len(), 1);
    assert!(report.copied[0].ends_with("data_10.csv"));
}

#[test]
fn test_archive_is_idempotent() {
    let temp = TempDir::new().unwrap();
    seed_data_dir(temp.path());
    let date = NaiveDate::from_ymd_opt(2023, 11, 30).unwrap();
    let archiver = Archiver::new(config(temp.path(), 1, 2));

    let first = archiver.archive(date).unwrap();
    let after_first = names_in(&first.destination);

    let second = archiver.archive(date).unwrap();
    let after_second = names_in(&second.destination);

    assert_eq!(first.copied, second.copied);
    assert_eq!(after_first, after_second);
    assert_eq!(first.bytes_copied, second.bytes_copied);
}

#[test]
fn test_archive_out_of_range_reports_no_matches() {
    let temp = TempDir::new().unwrap();
    seed_data_dir(temp.path());
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let report = Archiver::new(config(temp.path(), 100, 200)).archive(date).unwrap();

    assert!(!report.has_copies());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::NoMatches);
    assert!(names_in(&report.destination).is_empty());
}

#[test]
fn test_archive_inverted_range_matches_nothing() {
    let temp = TempDir::new().unwrap();
    seed_data_dir(temp.path());
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let report = Archiver::new(config(temp.path(), 9, 2)).archive(date).unwrap();

    assert!(!report.has_copies());
    assert_eq!(report.candidates_seen, 10);
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::NoMatches);
    assert!(report.destination.is_dir());
    assert!(names_in(&report.destination).is_empty());
}

#[test]
fn test_archive_missing_source_dir_is_an_error() {
    let temp = TempDir::new().unwrap();
    let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();

    let result = Archiver::new(config(temp.path(), 1, 2)).archive(date);

    assert!(result.is_err());
}

fn write_zip(path: &Path, entries: &[(&str, &str)]) {
    let file = fs::File::create(path).unwrap();
    let mut zip = ZipWriter::new(file);
    let options = SimpleFileOptions::default();
    for (name, contents) in entries {
        zip.start_file(*name, options).unwrap();
        zip.write_all(contents.as_bytes()).unwrap();
    }
    zip.finish().unwrap();
}

#[test]
fn test_unpack_extracts_and_renames() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("photos.zip");
    write_zip(
        &archive,
        &[
            ("trip 2022.7.14.jpg", "a"),
            ("nested/scan.2021.10.3.pdf", "b"),
            ("readme.txt", "c"),
        ],
    );
    let location = temp.path().join("out").join("photos");

    let config = UnpackConfig::builder()
        .archive(archive)
        .location(location.clone())
        .build()
        .unwrap();
    let report = unpack(&config, |_| {}).unwrap();

    assert_eq!(report.entries_extracted, 3);
    assert_eq!(report.renames.len(), 2);
    assert!(location.join("trip 2022-07-14.jpg").is_file());
    assert!(location.join("nested").join("scan.2021-10-03.pdf").is_file());
    assert!(location.join("readme.txt").is_file());
    assert!(!location.join("trip 2022.7.14.jpg").exists());
}

#[test]
fn test_unpack_into_existing_location() {
    let temp = TempDir::new().unwrap();
    let archive = temp.path().join("docs.zip");
    write_zip(&archive, &[("a.txt", "a")]);
    let location = temp.path().join("docs");
    fs::create_dir(&location).unwrap();
    fs::write(location.join("keep.txt"), "existing").unwrap();

    let config = UnpackConfig::builder()
        .archive(archive)
        .location(location.clone())
        .build()
        .unwrap();
    let report = unpack(&config, |_| {}).unwrap();

    assert_eq!(report.entries_extracted, 1);
    assert!(report.renames.is_empty());
    assert!(location.join("keep.txt").is_file());
    assert!(location.join("a.txt").is_file());
}
