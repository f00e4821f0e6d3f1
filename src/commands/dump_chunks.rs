//! `dump-chunks <file> [startOffset [endOffset]]`

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use tracing::{debug, instrument};

use crate::cli::{CliResult, Term};
use crate::commands::{parse_args, report};
use crate::storage::{StorageInspector, UNBOUNDED};

pub const USAGE: &str = "usage: storagetool dump-chunks <file> [startOffset [endOffset]]";

/// Arguments of `dump-chunks`.
#[derive(Parser, Debug)]
#[command(
    name = "dump-chunks",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct DumpChunksArgs {
    /// Chunk (series) file
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: PathBuf,

    /// First byte to dump
    pub start_offset: Option<i64>,

    /// Byte to stop before
    pub end_offset: Option<i64>,
}

/// Byte range requested on the command line. `None` leaves a side open.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OffsetRange {
    pub start: Option<i64>,
    pub end: Option<i64>,
}

impl OffsetRange {
    /// Offsets in the inspector's convention, open sides become [`UNBOUNDED`].
    pub fn to_sentinels(self) -> (i64, i64) {
        (
            self.start.unwrap_or(UNBOUNDED),
            self.end.unwrap_or(UNBOUNDED),
        )
    }
}

impl From<&DumpChunksArgs> for OffsetRange {
    fn from(args: &DumpChunksArgs) -> Self {
        Self {
            start: args.start_offset,
            end: args.end_offset,
        }
    }
}

/// Dump a chunk file, optionally limited to a byte range, to the terminal's output.
#[instrument(skip(inspector, term))]
pub fn run(inspector: &dyn StorageInspector, term: &mut dyn Term, args: &[String]) -> i32 {
    let result = execute(inspector, term, args);
    report(term, USAGE, result)
}

fn execute(inspector: &dyn StorageInspector, term: &mut dyn Term, args: &[String]) -> CliResult<()> {
    let args: DumpChunksArgs = parse_args(args)?;
    let (start, end) = OffsetRange::from(&args).to_sentinels();
    debug!("file: {:?}, start: {}, end: {}", args.file, start, end);
    inspector.dump_chunks(&args.file, term.out(), start, end)?;
    Ok(())
}
