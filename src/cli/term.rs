//! Terminal abstraction: leveled diagnostics plus a raw output sink

use std::fmt;
use std::io::{self, Stderr, Stdout, Write};

/// Output surface handed to every command.
///
/// `info` and `error` are line-oriented diagnostics, `out` is the sink for
/// dump data. Write failures are swallowed: a closed pipe must not turn a
/// finished dump into a different exit code.
pub trait Term {
    /// Write an informational line (usage, help).
    fn info(&mut self, args: fmt::Arguments<'_>);

    /// Write an error line.
    fn error(&mut self, args: fmt::Arguments<'_>);

    /// Raw sink for bulk data.
    fn out(&mut self) -> &mut dyn Write;
}

/// Write a formatted informational line to a [`Term`].
#[macro_export]
macro_rules! infof {
    ($term:expr, $($arg:tt)*) => {
        $crate::cli::Term::info(&mut *$term, format_args!($($arg)*))
    };
}

/// Write a formatted error line to a [`Term`].
#[macro_export]
macro_rules! errorf {
    ($term:expr, $($arg:tt)*) => {
        $crate::cli::Term::error(&mut *$term, format_args!($($arg)*))
    };
}

/// [`Term`] over two writers: data goes to `out`, every diagnostic to `err`.
#[derive(Debug)]
pub struct BasicTerm<O, E> {
    out: O,
    err: E,
}

impl<O: Write, E: Write> BasicTerm<O, E> {
    pub fn new(out: O, err: E) -> Self {
        Self { out, err }
    }
}

impl BasicTerm<Stdout, Stderr> {
    /// Terminal bound to the process's stdout and stderr.
    pub fn stdio() -> Self {
        Self::new(io::stdout(), io::stderr())
    }
}

impl<O: Write, E: Write> Term for BasicTerm<O, E> {
    fn info(&mut self, args: fmt::Arguments<'_>) {
        writeln!(self.err, "{}", args).ok();
    }

    fn error(&mut self, args: fmt::Arguments<'_>) {
        writeln!(self.err, "{}", args).ok();
    }

    fn out(&mut self) -> &mut dyn Write {
        &mut self.out
    }
}

/// In-memory terminal for tests.
pub type BufferTerm = BasicTerm<Vec<u8>, Vec<u8>>;

impl BufferTerm {
    pub fn buffered() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    /// Output sink content as text.
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.out).into_owned()
    }

    /// Error sink content as text.
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.err).into_owned()
    }
}
