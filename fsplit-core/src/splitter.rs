//! Splitting a file into sequentially named chunk files

use crate::buffer::BlockBuffer;
use crate::config::Config;
use crate::error::{FsplitError, Result};
use crate::naming::{chunk_path, MAX_CHUNKS};
use crate::progress::{NoopObserver, TransferObserver};
use crate::summary::{ChunkSpec, SplitOutcome, SplitSummary};
use std::fs::{self, File};
use std::io::Read;
use std::path::Path;

/// Where the split loop currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SplitState {
    /// Writing the chunk with this index
    Filling(usize),
    /// The final chunk received everything left in the source
    Done,
    /// The source ended before a chunk reached its quota
    ExhaustedEarly,
}

/// Split `source` into `chunk_count` chunk files inside `output_dir`.
///
/// See [`split_with_observer`] for details.
pub fn split(
    source: impl AsRef<Path>,
    chunk_count: usize,
    output_dir: impl AsRef<Path>,
    config: &Config,
) -> Result<SplitSummary> {
    split_with_observer(source, chunk_count, output_dir, config, &mut NoopObserver)
}

/// Split `source` into `chunk_count` chunk files inside `output_dir`,
/// reporting progress to `observer`.
///
/// Every chunk except the last holds exactly `total_size / chunk_count`
/// bytes; the last one also takes the remainder. The output directory is
/// created if needed, but only after every precondition has passed.
///
/// If the source runs out early (for example because it was truncated while
/// being read) the run stops with [`SplitOutcome::ExhaustedEarly`] and the
/// chunk files already written are left in place.
pub fn split_with_observer<O>(
    source: impl AsRef<Path>,
    chunk_count: usize,
    output_dir: impl AsRef<Path>,
    config: &Config,
    observer: &mut O,
) -> Result<SplitSummary>
where
    O: TransferObserver + ?Sized,
{
    let source = source.as_ref();
    let output_dir = output_dir.as_ref();

    let spec = prepare(source, chunk_count, output_dir, config.block_size())?;

    let mut reader = File::open(source).map_err(|err| FsplitError::io(source, err))?;
    write_chunks(
        &mut reader,
        source,
        spec,
        output_dir,
        config.block_size(),
        observer,
    )
}

/// Check every precondition and create the output directory
fn prepare(
    source: &Path,
    chunk_count: usize,
    output_dir: &Path,
    block_size: usize,
) -> Result<ChunkSpec> {
    if chunk_count < 2 {
        return Err(FsplitError::invalid_argument(
            "number of chunks must be greater than 1",
        ));
    }
    if chunk_count > MAX_CHUNKS {
        return Err(FsplitError::invalid_argument(format!(
            "number of chunks must not exceed {MAX_CHUNKS}"
        )));
    }

    let metadata = fs::metadata(source)
        .map_err(|err| FsplitError::invalid_path(source, format!("invalid input file: {err}")))?;
    if !metadata.is_file() {
        return Err(FsplitError::invalid_path(source, "not a regular file"));
    }

    let spec = ChunkSpec::new(metadata.len(), chunk_count);
    if block_size as u64 > spec.chunk_size {
        return Err(FsplitError::ConfigurationConflict {
            block_size,
            chunk_size: spec.chunk_size,
        });
    }

    if !output_dir.is_dir() {
        fs::create_dir_all(output_dir).map_err(|err| {
            FsplitError::invalid_path(output_dir, format!("error creating output directory: {err}"))
        })?;
        log::debug!("Created output directory {}", output_dir.display());
    }

    Ok(spec)
}

/// Drive the split state machine over an already opened source
fn write_chunks<R, O>(
    reader: &mut R,
    source: &Path,
    spec: ChunkSpec,
    output_dir: &Path,
    block_size: usize,
    observer: &mut O,
) -> Result<SplitSummary>
where
    R: Read + ?Sized,
    O: TransferObserver + ?Sized,
{
    log::info!(
        "Number of chunks: {}, chunk size: {}, block size: {}",
        spec.chunk_count,
        spec.chunk_size,
        block_size
    );
    observer.split_started(&spec, block_size);

    let mut buffer = BlockBuffer::new(block_size);
    let mut chunks_written = 0;
    let mut bytes_written = 0u64;
    let mut state = SplitState::Filling(0);

    let outcome = loop {
        state = match state {
            SplitState::Filling(index) => {
                log::info!("Creating file {} of {}...", index + 1, spec.chunk_count);
                observer.chunk_started(index, spec.chunk_count);

                let path = chunk_path(output_dir, index);
                let mut chunk = File::create(&path).map_err(|err| FsplitError::io(&path, err))?;
                let limit = (!spec.is_last(index)).then_some(spec.chunk_size);
                let copied = buffer
                    .copy(reader, &mut chunk, limit)
                    .map_err(|err| err.with_paths(source, &path))?;
                drop(chunk);

                chunks_written += 1;
                bytes_written += copied.bytes;
                observer.chunk_finished(index, copied.bytes);
                log::debug!("Closed {} ({} bytes)", path.display(), copied.bytes);

                if copied.exhausted && copied.bytes < spec.chunk_size {
                    SplitState::ExhaustedEarly
                } else if spec.is_last(index) {
                    SplitState::Done
                } else {
                    SplitState::Filling(index + 1)
                }
            }
            SplitState::Done => break SplitOutcome::Complete,
            SplitState::ExhaustedEarly => {
                log::warn!(
                    "Source exhausted after {chunks_written} of {} chunks",
                    spec.chunk_count
                );
                break SplitOutcome::ExhaustedEarly;
            }
        };
    };

    Ok(SplitSummary {
        spec,
        block_size,
        chunks_written,
        bytes_written,
        outcome,
    })
}
