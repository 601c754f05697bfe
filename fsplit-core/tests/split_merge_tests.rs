//! End-to-end tests for splitting and merging files on disk

use fsplit_core::naming::chunk_file_name;
use fsplit_core::{merge, split, Config, ErrorKind, SplitOutcome};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_source(dir: &Path, len: usize) -> (std::path::PathBuf, Vec<u8>) {
    let data: Vec<u8> = (0..len).map(|i| (i * 31 % 256) as u8).collect();
    let path = dir.join("source.bin");
    fs::write(&path, &data).unwrap();
    (path, data)
}

fn chunk_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}

#[test]
fn test_ten_thousand_bytes_into_four_chunks() {
    let temp_dir = TempDir::new().unwrap();
    let (source, data) = write_source(temp_dir.path(), 10_000);
    let chunks = temp_dir.path().join("chunks");
    let config = Config::with_block_size(1000);

    let summary = split(&source, 4, &chunks, &config).unwrap();
    assert_eq!(summary.outcome, SplitOutcome::Complete);

    for index in 0..4 {
        let len = fs::metadata(chunks.join(chunk_file_name(index)))
            .unwrap()
            .len();
        assert_eq!(len, 2500, "chunk {index} has the wrong size");
    }

    let restored = temp_dir.path().join("restored.bin");
    let merged = merge(&chunks, &restored, &config).unwrap();
    assert_eq!(merged.chunks_merged, 4);
    assert_eq!(merged.bytes_written, 10_000);
    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_chunk_names_are_contiguous() {
    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_source(temp_dir.path(), 12_345);
    let chunks = temp_dir.path().join("chunks");

    split(&source, 12, &chunks, &Config::with_block_size(100)).unwrap();

    let expected: Vec<String> = (0..12).map(chunk_file_name).collect();
    assert_eq!(chunk_names(&chunks), expected);
    assert_eq!(expected[0], "chunk-000.fsplit");
    assert_eq!(expected[11], "chunk-011.fsplit");
}

#[test]
fn test_round_trip_with_uneven_remainder() {
    let temp_dir = TempDir::new().unwrap();
    let (source, data) = write_source(temp_dir.path(), 99_999);
    let chunks = temp_dir.path().join("chunks");
    let config = Config::with_block_size(4096);

    split(&source, 7, &chunks, &config).unwrap();
    let restored = temp_dir.path().join("restored.bin");
    merge(&chunks, &restored, &config).unwrap();

    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_merge_with_different_block_size() {
    let temp_dir = TempDir::new().unwrap();
    let (source, data) = write_source(temp_dir.path(), 50_000);
    let chunks = temp_dir.path().join("chunks");

    split(&source, 5, &chunks, &Config::with_block_size(10_000)).unwrap();
    let restored = temp_dir.path().join("restored.bin");
    merge(&chunks, &restored, &Config::with_block_size(7)).unwrap();

    assert_eq!(fs::read(&restored).unwrap(), data);
}

#[test]
fn test_split_rejects_one_chunk() {
    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_source(temp_dir.path(), 1000);
    let chunks = temp_dir.path().join("chunks");

    let err = split(&source, 1, &chunks, &Config::with_block_size(10)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(!chunks.exists());
}

#[test]
fn test_split_rejects_block_larger_than_chunk() {
    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_source(temp_dir.path(), 1000);
    let chunks = temp_dir.path().join("chunks");

    // Default block size (64000) is far larger than 1000 / 2
    let err = split(&source, 2, &chunks, &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationConflict);
}

#[test]
fn test_split_rejects_empty_source() {
    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_source(temp_dir.path(), 0);

    let err = split(&source, 2, temp_dir.path().join("c"), &Config::with_block_size(1)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::ConfigurationConflict);
}

#[test]
fn test_split_missing_source() {
    let temp_dir = TempDir::new().unwrap();
    let err = split(
        temp_dir.path().join("missing.bin"),
        2,
        temp_dir.path().join("chunks"),
        &Config::with_block_size(1),
    )
    .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPath);
}

#[test]
fn test_merge_fails_on_missing_index() {
    let temp_dir = TempDir::new().unwrap();
    let chunks = temp_dir.path().join("chunks");
    fs::create_dir(&chunks).unwrap();
    fs::write(chunks.join("chunk-000.fsplit"), b"zero").unwrap();
    fs::write(chunks.join("chunk-002.fsplit"), b"two").unwrap();

    let err = merge(&chunks, temp_dir.path().join("out.bin"), &Config::default()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_merge_after_removing_a_chunk() {
    let temp_dir = TempDir::new().unwrap();
    let (source, _) = write_source(temp_dir.path(), 3000);
    let chunks = temp_dir.path().join("chunks");
    let config = Config::with_block_size(100);

    split(&source, 3, &chunks, &config).unwrap();
    fs::remove_file(chunks.join(chunk_file_name(1))).unwrap();

    let err = merge(&chunks, temp_dir.path().join("out.bin"), &config).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IoFailure);
}

#[test]
fn test_non_positive_block_size_keeps_previous_value() {
    let mut config = Config::with_block_size(512);
    config.set_block_size(0);
    config.set_block_size(-1);
    assert_eq!(config.block_size(), 512);
}
