//! Bounded-buffer copy loop shared by the splitter and the merger

use crate::error::FsplitError;
use std::io::{self, Read, Write};
use std::path::Path;

/// Result of one bounded copy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct CopyOutcome {
    /// Bytes moved from the reader to the writer
    pub bytes: u64,
    /// The reader reported end of stream
    pub exhausted: bool,
}

/// Which side of the copy failed
#[derive(Debug)]
pub(crate) enum CopyError {
    Read(io::Error),
    Write(io::Error),
}

impl CopyError {
    /// Attach the path of the failing side
    pub fn with_paths(self, source: &Path, target: &Path) -> FsplitError {
        match self {
            CopyError::Read(err) => FsplitError::io(source, err),
            CopyError::Write(err) => FsplitError::io(target, err),
        }
    }
}

/// Fixed-size transfer buffer, allocated once per operation
pub(crate) struct BlockBuffer {
    buf: Vec<u8>,
}

impl BlockBuffer {
    pub fn new(block_size: usize) -> Self {
        Self {
            buf: vec![0; block_size],
        }
    }

    /// Move bytes one block at a time until `limit` bytes have been copied
    /// or the reader is exhausted. With no limit the copy runs to end of
    /// stream. Each write carries exactly what the preceding read returned.
    pub fn copy<R, W>(
        &mut self,
        reader: &mut R,
        writer: &mut W,
        limit: Option<u64>,
    ) -> Result<CopyOutcome, CopyError>
    where
        R: Read + ?Sized,
        W: Write + ?Sized,
    {
        let mut copied = 0u64;

        loop {
            let want = match limit {
                Some(limit) if copied >= limit => {
                    return Ok(CopyOutcome {
                        bytes: copied,
                        exhausted: false,
                    });
                }
                Some(limit) => (limit - copied).min(self.buf.len() as u64) as usize,
                None => self.buf.len(),
            };

            let read = match reader.read(&mut self.buf[..want]) {
                Ok(0) => {
                    return Ok(CopyOutcome {
                        bytes: copied,
                        exhausted: true,
                    });
                }
                Ok(n) => n,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => return Err(CopyError::Read(err)),
            };

            writer
                .write_all(&self.buf[..read])
                .map_err(CopyError::Write)?;
            copied += read as u64;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Records the size of every write it receives
    struct RecordingWriter {
        data: Vec<u8>,
        writes: Vec<usize>,
    }

    impl Write for RecordingWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.data.extend_from_slice(buf);
            self.writes.push(buf.len());
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct FailingReader;

    impl Read for FailingReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("disk on fire"))
        }
    }

    /// Fails its first read with `Interrupted`, then behaves like `inner`
    struct InterruptedOnce<R> {
        inner: R,
        interrupted: bool,
    }

    impl<R: Read> Read for InterruptedOnce<R> {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(io::Error::from(io::ErrorKind::Interrupted));
            }
            self.inner.read(buf)
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::other("no space left"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_copy_to_end_of_stream() {
        let data: Vec<u8> = (0..=255).cycle().take(2500).collect();
        let mut reader = Cursor::new(data.clone());
        let mut writer = RecordingWriter {
            data: Vec::new(),
            writes: Vec::new(),
        };

        let outcome = BlockBuffer::new(1000)
            .copy(&mut reader, &mut writer, None)
            .unwrap();

        assert_eq!(outcome.bytes, 2500);
        assert!(outcome.exhausted);
        assert_eq!(writer.data, data);
        assert_eq!(writer.writes, vec![1000, 1000, 500]);
    }

    #[test]
    fn test_copy_stops_at_limit_without_overshooting() {
        let mut reader = Cursor::new(vec![7u8; 10_000]);
        let mut writer = Vec::new();
        let mut buffer = BlockBuffer::new(1000);

        let outcome = buffer.copy(&mut reader, &mut writer, Some(2500)).unwrap();
        assert_eq!(outcome.bytes, 2500);
        assert!(!outcome.exhausted);
        assert_eq!(writer.len(), 2500);

        // The reader resumes exactly where the previous copy stopped
        assert_eq!(reader.position(), 2500);
    }

    #[test]
    fn test_copy_reports_exhaustion_before_limit() {
        let mut reader = Cursor::new(vec![1u8; 300]);
        let mut writer = Vec::new();

        let outcome = BlockBuffer::new(128)
            .copy(&mut reader, &mut writer, Some(1000))
            .unwrap();

        assert_eq!(outcome.bytes, 300);
        assert!(outcome.exhausted);
    }

    #[test]
    fn test_read_failure_is_attributed_to_source() {
        let mut writer = Vec::new();
        let err = BlockBuffer::new(16)
            .copy(&mut FailingReader, &mut writer, None)
            .unwrap_err();

        assert!(matches!(err, CopyError::Read(_)));
        let err = err.with_paths(Path::new("in.bin"), Path::new("out.bin"));
        assert!(err.to_string().contains("in.bin"));
    }

    #[test]
    fn test_interrupted_read_is_retried() {
        let data: Vec<u8> = (0..100).collect();
        let mut reader = InterruptedOnce {
            inner: Cursor::new(data.clone()),
            interrupted: false,
        };
        let mut writer = Vec::new();

        let outcome = BlockBuffer::new(32)
            .copy(&mut reader, &mut writer, None)
            .unwrap();

        assert!(reader.interrupted);
        assert_eq!(outcome.bytes, 100);
        assert!(outcome.exhausted);
        assert_eq!(writer, data);
    }

    #[test]
    fn test_write_failure_is_attributed_to_target() {
        let mut reader = Cursor::new(vec![3u8; 64]);
        let err = BlockBuffer::new(16)
            .copy(&mut reader, &mut FailingWriter, None)
            .unwrap_err();

        assert!(matches!(err, CopyError::Write(_)));
        let err = err.with_paths(Path::new("in.bin"), Path::new("out.bin"));
        assert!(err.to_string().contains("out.bin"));
        assert!(!err.to_string().contains("in.bin"));
    }
}
