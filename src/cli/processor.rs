//! Command processor: parse, dispatch, render, map failures to exit codes
//!
//! The command tree is handed in at construction time, so the same
//! processor can be driven by `main` or by tests with in-memory streams.

use std::ffi::OsString;
use std::io::Write;

use clap::error::ErrorKind;
use clap::{Command, FromArgMatches};
use tracing::debug;

use crate::cli::args::{Cli, Commands};
use crate::cli::commands;
use crate::cli::error::{CliError, CliResult};
use crate::cli::logging::setup_logging;
use crate::cli::output;
use crate::exitcode;
use crate::infrastructure::ServiceContainer;

/// Result of a successful parse.
#[derive(Debug)]
pub enum Parsed {
    /// Run the parsed invocation.
    Run(Cli),
    /// Print this text to stdout and stop (help, usage, version).
    Help(String),
}

pub struct CommandProcessor {
    command: Command,
    services: ServiceContainer,
}

impl CommandProcessor {
    pub fn new(command: Command, services: ServiceContainer) -> Self {
        Self { command, services }
    }

    /// Parse raw arguments (including the program name).
    ///
    /// Help, version, a bare invocation and an unknown subcommand all yield
    /// [`Parsed::Help`]; any other clap failure is a `CliError::Usage`.
    pub fn parse<I, T>(&mut self, args: I) -> CliResult<Parsed>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = match self.command.try_get_matches_from_mut(args) {
            Ok(matches) => matches,
            Err(e) => {
                return match e.kind() {
                    ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
                        Ok(Parsed::Help(e.render().to_string()))
                    }
                    ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
                    | ErrorKind::InvalidSubcommand => Ok(Parsed::Help(self.usage())),
                    _ => Err(CliError::Usage(e)),
                };
            }
        };
        Ok(Parsed::Run(Cli::from_arg_matches(&matches)?))
    }

    /// Run one invocation and return the process exit code.
    pub fn run<I, T>(&mut self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> i32
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        match self.try_run(args, out, err) {
            Ok(()) => exitcode::OK,
            Err(e) => {
                let code = e.exit_code();
                // stderr is the last resort; nothing to do if it fails too
                let _ = match &e {
                    CliError::Usage(clap_err) => write!(err, "{}", clap_err.render()),
                    _ => output::error(err, &e),
                };
                code
            }
        }
    }

    fn try_run<I, T>(&mut self, args: I, out: &mut dyn Write, err: &mut dyn Write) -> CliResult<()>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let cli = match self.parse(args)? {
            Parsed::Run(cli) => cli,
            Parsed::Help(text) => {
                out.write_all(text.as_bytes())?;
                return Ok(());
            }
        };

        if cli.debug > 0 {
            setup_logging(cli.debug);
        }
        debug!(?cli, "parsed invocation");

        match cli.command {
            Some(Commands::Prd(args)) => commands::prd(&self.services, &args.into(), out, err),
            Some(Commands::Completion { shell }) => {
                commands::completion(shell, &mut self.command, out)
            }
            None => {
                out.write_all(self.usage().as_bytes())?;
                Ok(())
            }
        }
    }

    fn usage(&mut self) -> String {
        let mut text = self.command.render_help().to_string();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        text
    }
}
