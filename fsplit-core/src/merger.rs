//! Reassembling chunk files into the original file

use crate::buffer::BlockBuffer;
use crate::config::Config;
use crate::error::{FsplitError, Result};
use crate::naming::{chunk_path, is_chunk_file_name};
use crate::progress::{NoopObserver, TransferObserver};
use crate::summary::MergeSummary;
use std::fs::{self, File};
use std::path::Path;

/// Concatenate the chunk files in `chunk_dir` into `output`.
///
/// See [`merge_with_observer`] for details.
pub fn merge(
    chunk_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
) -> Result<MergeSummary> {
    merge_with_observer(chunk_dir, output, config, &mut NoopObserver)
}

/// Concatenate the chunk files in `chunk_dir` into `output`, reporting
/// progress to `observer`.
///
/// The directory listing only decides how many chunks exist. Files are then
/// opened by index starting at `chunk-000.fsplit`, so a gap in the sequence
/// fails with an I/O error and leaves the partial output on disk.
pub fn merge_with_observer<O>(
    chunk_dir: impl AsRef<Path>,
    output: impl AsRef<Path>,
    config: &Config,
    observer: &mut O,
) -> Result<MergeSummary>
where
    O: TransferObserver + ?Sized,
{
    let chunk_dir = chunk_dir.as_ref();
    let output = output.as_ref();
    let block_size = config.block_size();

    let listing = list_chunk_files(chunk_dir)?;
    let total = listing.count;
    if total == 0 {
        log::warn!("No file to merge in {}", chunk_dir.display());
    }

    let mut writer = File::create(output).map_err(|err| FsplitError::io(output, err))?;
    log::info!(
        "Input directory: {}, output file: {}, block size: {}",
        chunk_dir.display(),
        output.display(),
        block_size
    );
    observer.merge_started(total, block_size);

    // No read can return more than the largest chunk holds
    let largest = usize::try_from(listing.largest).unwrap_or(usize::MAX);
    let mut buffer = BlockBuffer::new(block_size.min(largest.max(1)));
    let mut bytes_written = 0u64;

    for index in 0..total {
        log::info!("Merging file {} of {}...", index + 1, total);
        observer.chunk_started(index, total);

        let path = chunk_path(chunk_dir, index);
        let mut reader = File::open(&path).map_err(|err| FsplitError::io(&path, err))?;
        let copied = buffer
            .copy(&mut reader, &mut writer, None)
            .map_err(|err| err.with_paths(&path, output))?;

        bytes_written += copied.bytes;
        observer.chunk_finished(index, copied.bytes);
    }

    Ok(MergeSummary {
        chunks_merged: total,
        bytes_written,
        block_size,
    })
}

/// Chunk files found in a directory listing
struct ChunkListing {
    /// Entries that follow the chunk naming convention
    count: usize,
    /// Length in bytes of the largest of them
    largest: u64,
}

/// Count the entries in `dir` that follow the chunk naming convention
fn list_chunk_files(dir: &Path) -> Result<ChunkListing> {
    if !dir.is_dir() {
        return Err(FsplitError::invalid_path(dir, "not a directory"));
    }

    let entries = fs::read_dir(dir)
        .map_err(|err| FsplitError::invalid_path(dir, format!("cannot list directory: {err}")))?;

    let mut seen_entries = 0usize;
    let mut chunks = 0usize;
    let mut largest = 0u64;
    for entry in entries {
        let entry = entry.map_err(|err| {
            FsplitError::invalid_path(dir, format!("cannot list directory: {err}"))
        })?;
        seen_entries += 1;

        if entry
            .file_name()
            .to_str()
            .is_some_and(is_chunk_file_name)
        {
            chunks += 1;
            let len = entry
                .metadata()
                .map_err(|err| FsplitError::io(entry.path(), err))?
                .len();
            largest = largest.max(len);
        }
    }

    if seen_entries == 0 {
        return Err(FsplitError::invalid_path(dir, "empty directory"));
    }

    log::debug!(
        "Found {chunks} chunk files among {seen_entries} entries in {}",
        dir.display()
    );
    Ok(ChunkListing {
        count: chunks,
        largest,
    })
}
