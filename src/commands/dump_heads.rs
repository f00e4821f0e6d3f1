//! `dump-heads <file>`

use std::path::PathBuf;

use clap::builder::{OsStringValueParser, TypedValueParser};
use clap::Parser;
use tracing::instrument;

use crate::cli::{CliResult, Term};
use crate::commands::{parse_args, report};
use crate::storage::StorageInspector;

pub const USAGE: &str = "usage: storagetool dump-heads <file>";

/// Arguments of `dump-heads`.
#[derive(Parser, Debug)]
#[command(
    name = "dump-heads",
    no_binary_name = true,
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct DumpHeadsArgs {
    /// Heads checkpoint file
    #[arg(value_parser = OsStringValueParser::new().map(PathBuf::from))]
    pub file: PathBuf,
}

/// Dump the metadata of a heads checkpoint file to the terminal's output.
#[instrument(skip(inspector, term))]
pub fn run(inspector: &dyn StorageInspector, term: &mut dyn Term, args: &[String]) -> i32 {
    let result = execute(inspector, term, args);
    report(term, USAGE, result)
}

fn execute(inspector: &dyn StorageInspector, term: &mut dyn Term, args: &[String]) -> CliResult<()> {
    let args: DumpHeadsArgs = parse_args(args)?;
    inspector.dump_heads(&args.file, term.out())?;
    Ok(())
}
