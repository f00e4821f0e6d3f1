//! Readers for heads checkpoint and chunk files

use std::fs::{self, File};
use std::io::{BufReader, Read, Seek, SeekFrom, Write};
use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use tracing::{debug, instrument};

use crate::storage::hexdump::write_hex_dump;
use crate::storage::{IoResultExt, StorageError, StorageResult};

/// Offset value meaning "no bound on this side".
pub const UNBOUNDED: i64 = -1;

/// Number of leading bytes of a heads checkpoint shown by [`FileInspector`].
pub const HEADS_PREVIEW_LEN: u64 = 64;

/// Dumps storage files in human-readable form.
///
/// Offsets follow the storage engine convention: any negative value,
/// normally [`UNBOUNDED`], leaves that side of the range open.
pub trait StorageInspector {
    /// Dump the metadata of a heads checkpoint file to `out`.
    fn dump_heads(&self, path: &Path, out: &mut dyn Write) -> StorageResult<()>;

    /// Dump the chunk file at `path`, restricted to `[start_offset, end_offset)`.
    fn dump_chunks(
        &self,
        path: &Path,
        out: &mut dyn Write,
        start_offset: i64,
        end_offset: i64,
    ) -> StorageResult<()>;
}

/// Byte-level inspector: reports file metadata and hex dumps raw content
/// without interpreting the storage encoding.
#[derive(Debug, Default, Clone, Copy)]
pub struct FileInspector;

impl FileInspector {
    pub fn new() -> Self {
        Self
    }
}

impl StorageInspector for FileInspector {
    #[instrument(skip(self, out))]
    fn dump_heads(&self, path: &Path, out: &mut dyn Write) -> StorageResult<()> {
        let meta = fs::metadata(path).with_path_context("stat", path)?;
        if !meta.is_file() {
            return Err(StorageError::io(
                format!("open {}", path.display()),
                std::io::Error::new(std::io::ErrorKind::InvalidInput, "not a regular file"),
            ));
        }
        let modified = meta
            .modified()
            .map(|t| DateTime::<Utc>::from(t).to_rfc3339_opts(SecondsFormat::Secs, true))
            .unwrap_or_else(|_| "unknown".to_string());
        debug!("heads checkpoint size: {}", meta.len());

        writeln!(out, "heads checkpoint: {}", path.display())
            .with_path_context("write dump of", path)?;
        writeln!(out, "size:             {} bytes", meta.len())
            .with_path_context("write dump of", path)?;
        writeln!(out, "modified:         {}", modified)
            .with_path_context("write dump of", path)?;

        let file = File::open(path).with_path_context("open", path)?;
        let preview = BufReader::new(file).take(HEADS_PREVIEW_LEN);
        write_hex_dump(preview, out, 0).with_path_context("read", path)?;
        Ok(())
    }

    #[instrument(skip(self, out))]
    fn dump_chunks(
        &self,
        path: &Path,
        out: &mut dyn Write,
        start_offset: i64,
        end_offset: i64,
    ) -> StorageResult<()> {
        let start = bound(start_offset);
        let end = bound(end_offset);
        if let (Some(s), Some(e)) = (start, end) {
            if s > e {
                return Err(StorageError::InvalidRange {
                    start: start_offset,
                    end: end_offset,
                });
            }
        }

        let mut file = File::open(path).with_path_context("open", path)?;
        let size = file.metadata().with_path_context("stat", path)?.len();
        let from = start.unwrap_or(0).min(size);
        let to = end.unwrap_or(size).min(size);
        debug!("dumping bytes [{}, {}) of {}", from, to, size);

        writeln!(out, "chunk file: {}", path.display()).with_path_context("write dump of", path)?;
        writeln!(out, "size:       {} bytes", size).with_path_context("write dump of", path)?;
        writeln!(out, "range:      [{}, {})", from, to).with_path_context("write dump of", path)?;

        file.seek(SeekFrom::Start(from))
            .with_path_context("seek", path)?;
        let region = BufReader::new(file).take(to.saturating_sub(from));
        write_hex_dump(region, out, from).with_path_context("read", path)?;
        Ok(())
    }
}

fn bound(offset: i64) -> Option<u64> {
    u64::try_from(offset).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn chunk_file(len: u8) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        let data: Vec<u8> = (0..len).collect();
        file.write_all(&data).unwrap();
        file
    }

    fn dump(file: &Path, start: i64, end: i64) -> StorageResult<String> {
        let mut out = Vec::new();
        FileInspector::new().dump_chunks(file, &mut out, start, end)?;
        Ok(String::from_utf8(out).unwrap())
    }

    #[test]
    fn given_unbounded_offsets_when_dumping_chunks_then_whole_file_is_shown() {
        let file = chunk_file(32);

        let text = dump(file.path(), UNBOUNDED, UNBOUNDED).unwrap();

        assert!(text.contains("range:      [0, 32)"));
        assert!(text.contains("00000000  00 01 02"));
        assert!(text.contains("00000010  10 11 12"));
    }

    #[test]
    fn given_bounded_range_when_dumping_chunks_then_only_range_is_shown() {
        let file = chunk_file(64);

        let text = dump(file.path(), 16, 20).unwrap();

        let rows: Vec<&str> = text.lines().skip(3).collect();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].starts_with("00000010  10 11 12 13 "));
    }

    #[test]
    fn given_end_past_eof_when_dumping_chunks_then_range_is_clamped() {
        let file = chunk_file(8);
        let text = dump(file.path(), 4, 1000).unwrap();
        assert!(text.contains("range:      [4, 8)"));
    }

    #[test]
    fn given_start_past_eof_when_dumping_chunks_then_no_rows_are_written() {
        let file = chunk_file(8);
        let text = dump(file.path(), 100, UNBOUNDED).unwrap();
        assert_eq!(text.lines().count(), 3);
    }

    #[test]
    fn given_inverted_range_when_dumping_chunks_then_fails() {
        let file = chunk_file(8);
        let err = dump(file.path(), 6, 2).unwrap_err();
        assert!(matches!(err, StorageError::InvalidRange { start: 6, end: 2 }));
    }

    #[test]
    fn given_missing_file_when_dumping_heads_then_error_names_path() {
        let mut out = Vec::new();
        let err = FileInspector::new()
            .dump_heads(Path::new("/nonexistent/heads.db"), &mut out)
            .unwrap_err();
        assert!(err.to_string().contains("/nonexistent/heads.db"));
        assert!(out.is_empty());
    }

    #[test]
    fn given_heads_file_when_dumping_then_metadata_and_preview_are_written() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xab; 100]).unwrap();
        let mut out = Vec::new();

        FileInspector::new().dump_heads(file.path(), &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("size:             100 bytes"));
        // 64 byte preview is four full rows
        assert_eq!(text.lines().filter(|l| l.contains("ab ab")).count(), 4);
    }
}
