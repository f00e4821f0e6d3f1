//! `version`

use crate::cli::Term;
use crate::commands::TOOL_NAME;
use crate::exitcode;
use crate::version::format_version;

/// Print the build report. Arguments are ignored.
pub fn run(term: &mut dyn Term, _args: &[String]) -> i32 {
    writeln!(term.out(), "{}", format_version(TOOL_NAME)).ok();
    exitcode::OK
}
