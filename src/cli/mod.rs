//! CLI layer: terminal, command registry and dispatch

pub mod app;
pub mod error;
pub mod term;

pub use app::{App, Command, Handler};
pub use error::{CliError, CliResult};
pub use term::{BasicTerm, BufferTerm, Term};
