//! CLI layer: argument parsing, command dispatch and output rendering

pub mod args;
pub mod commands;
pub mod error;
pub mod logging;
pub mod output;
pub mod processor;

pub use args::{Cli, Commands, PrdArgs};
pub use error::{CliError, CliResult};
pub use processor::{CommandProcessor, Parsed};
