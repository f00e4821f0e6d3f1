//! Command registry and dispatch

use std::fmt;

use tracing::debug;

use crate::cli::{CliError, CliResult, Term};
use crate::exitcode;
use crate::infof;

/// Behaviour of a registered command: receives the terminal and the
/// arguments following the command name, returns the process exit code.
pub trait Handler {
    fn run(&self, term: &mut dyn Term, args: &[String]) -> i32;
}

impl<F> Handler for F
where
    F: Fn(&mut dyn Term, &[String]) -> i32,
{
    fn run(&self, term: &mut dyn Term, args: &[String]) -> i32 {
        self(term, args)
    }
}

/// A named entry in the [`App`] registry.
pub struct Command<'a> {
    description: String,
    handler: Box<dyn Handler + 'a>,
}

impl<'a> Command<'a> {
    pub fn new(description: impl Into<String>, handler: impl Handler + 'a) -> Self {
        Self {
            description: description.into(),
            handler: Box::new(handler),
        }
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn run(&self, term: &mut dyn Term, args: &[String]) -> i32 {
        self.handler.run(term, args)
    }
}

impl fmt::Debug for Command<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}

/// First arguments that print the command listing instead of dispatching.
const HELP_ARGS: [&str; 3] = ["-h", "--help", "help"];

/// Registry of commands, listed in registration order.
#[derive(Debug)]
pub struct App<'a> {
    name: String,
    commands: Vec<(String, Command<'a>)>,
}

impl<'a> App<'a> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            commands: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Register `command` under `name`.
    ///
    /// Names are unique: registering a taken name fails with
    /// [`CliError::DuplicateCommand`] and leaves the registry unchanged.
    pub fn register(&mut self, name: impl Into<String>, command: Command<'a>) -> CliResult<()> {
        let name = name.into();
        if self.get(&name).is_some() {
            return Err(CliError::DuplicateCommand(name));
        }
        debug!("registered command: {}", name);
        self.commands.push((name, command));
        Ok(())
    }

    /// Look up a command by exact, case-sensitive name.
    pub fn get(&self, name: &str) -> Option<&Command<'a>> {
        self.commands
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, cmd)| cmd)
    }

    /// Registered command names in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().map(|(n, _)| n.as_str())
    }

    /// Resolve `args[0]` to a command and run it with the remaining arguments.
    ///
    /// Returns the command's exit code verbatim, or [`exitcode::USAGE`] when no
    /// command is given or the name is unknown.
    pub fn run(&self, term: &mut dyn Term, args: &[String]) -> i32 {
        let Some((name, rest)) = args.split_first() else {
            debug!("no command given");
            self.usage(term);
            return exitcode::USAGE;
        };

        if HELP_ARGS.contains(&name.as_str()) && self.get(name).is_none() {
            self.usage(term);
            return exitcode::USAGE;
        }

        match self.get(name) {
            Some(cmd) => {
                debug!("dispatching {} with {} argument(s)", name, rest.len());
                cmd.run(term, rest)
            }
            None => {
                debug!("unknown command: {}", name);
                term.error(format_args!("unknown command {:?}", name));
                self.usage(term);
                exitcode::USAGE
            }
        }
    }

    /// Write the command listing to the informational sink.
    pub fn usage(&self, term: &mut dyn Term) {
        infof!(term, "usage: {} <command> [<args>]", self.name);
        infof!(term, "");
        infof!(term, "Available commands:");
        let width = self.names().map(str::len).max().unwrap_or(0);
        for (name, cmd) in &self.commands {
            infof!(term, "  {:<width$}  {}", name, cmd.description(), width = width);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::BufferTerm;
    use std::cell::RefCell;

    fn args(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn given_registered_command_when_running_then_handler_gets_remaining_args() {
        // Arrange
        let seen = RefCell::new(Vec::new());
        let mut app = App::new("tool");
        app.register(
            "echo",
            Command::new("echo args", |_: &mut dyn Term, a: &[String]| {
                seen.borrow_mut().extend_from_slice(a);
                7
            }),
        )
        .unwrap();
        let mut term = BufferTerm::buffered();

        // Act
        let code = app.run(&mut term, &args(&["echo", "a", "b"]));

        // Assert
        assert_eq!(code, 7);
        assert_eq!(*seen.borrow(), args(&["a", "b"]));
    }

    #[test]
    fn given_duplicate_name_when_registering_then_rejected_and_first_kept() {
        let mut app = App::new("tool");
        app.register("x", Command::new("first", |_: &mut dyn Term, _: &[String]| 0))
            .unwrap();

        let err = app
            .register("x", Command::new("second", |_: &mut dyn Term, _: &[String]| 1))
            .unwrap_err();

        assert!(matches!(err, CliError::DuplicateCommand(ref n) if n == "x"));
        assert_eq!(app.get("x").unwrap().description(), "first");
        assert_eq!(app.names().count(), 1);
    }

    #[test]
    fn given_mixed_case_name_when_looking_up_then_no_match() {
        let mut app = App::new("tool");
        app.register("version", Command::new("v", |_: &mut dyn Term, _: &[String]| 0))
            .unwrap();
        assert!(app.get("Version").is_none());
        assert!(app.get("version").is_some());
    }

    #[test]
    fn given_commands_when_listing_usage_then_registration_order_is_kept() {
        let mut app = App::new("tool");
        for name in ["zeta", "alpha", "mid"] {
            app.register(name, Command::new(format!("{name} desc"), |_: &mut dyn Term, _: &[String]| 0))
                .unwrap();
        }
        let mut term = BufferTerm::buffered();

        app.usage(&mut term);

        let text = term.stderr_text();
        let zeta = text.find("zeta").unwrap();
        let alpha = text.find("alpha").unwrap();
        let mid = text.find("mid desc").unwrap();
        assert!(zeta < alpha && alpha < mid);
        assert!(text.starts_with("usage: tool <command> [<args>]\n"));
    }

    #[test]
    fn given_help_flag_when_running_then_usage_and_exit_usage() {
        let app = App::new("tool");
        let mut term = BufferTerm::buffered();

        let code = app.run(&mut term, &args(&["--help"]));

        assert_eq!(code, exitcode::USAGE);
        assert!(term.stderr_text().contains("Available commands:"));
        assert!(!term.stderr_text().contains("unknown command"));
    }
}
