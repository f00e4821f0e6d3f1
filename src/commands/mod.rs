//! The storagetool commands and their registration

pub mod dump_chunks;
pub mod dump_heads;
pub mod version;

use clap::Parser;
use tracing::debug;

use crate::cli::{App, CliError, CliResult, Command, Term};
use crate::exitcode;
use crate::storage::StorageInspector;
use crate::{errorf, infof};

/// Name the tool reports in usage lines and the version banner.
pub const TOOL_NAME: &str = "storagetool";

/// Build the registry with every storagetool command, reading files through
/// `inspector`.
pub fn build_app(inspector: &dyn StorageInspector) -> CliResult<App<'_>> {
    let mut app = App::new(TOOL_NAME);

    app.register(
        "dump-heads",
        Command::new(
            "dump metadata of a heads.db checkpoint file",
            move |term: &mut dyn Term, args: &[String]| dump_heads::run(inspector, term, args),
        ),
    )?;

    app.register(
        "dump-chunks",
        Command::new(
            "dump metadata of a series file",
            move |term: &mut dyn Term, args: &[String]| dump_chunks::run(inspector, term, args),
        ),
    )?;

    app.register(
        "version",
        Command::new("print the version of this binary", version::run),
    )?;

    Ok(app)
}

/// Parse `args` into a command's clap argument struct.
///
/// Every token is positional: a leading `--` stops clap from reading a later
/// `--` or `-h` as its own syntax. Any rejection by clap, including a bad
/// number, is a usage error.
pub(crate) fn parse_args<T: Parser>(args: &[String]) -> CliResult<T> {
    let tokens = std::iter::once("--").chain(args.iter().map(String::as_str));
    T::try_parse_from(tokens).map_err(|e| {
        debug!("argument parsing failed: {}", e);
        CliError::Usage(e.to_string())
    })
}

/// Map a command outcome onto the terminal and an exit code.
///
/// Usage errors print `usage`, failures print `FAILED: <cause>`.
pub(crate) fn report(term: &mut dyn Term, usage: &str, result: CliResult<()>) -> i32 {
    match result {
        Ok(()) => exitcode::OK,
        Err(e @ CliError::Usage(_)) => {
            infof!(term, "{}", usage);
            e.exit_code()
        }
        Err(e) => {
            errorf!(term, "FAILED: {}", e);
            e.exit_code()
        }
    }
}
