use std::io::{self, Write};
use std::process::ExitCode;

use clap::CommandFactory;

use pm::cli::{Cli, CommandProcessor};
use pm::exitcode;
use pm::infrastructure::ServiceContainer;

fn main() -> ExitCode {
    let mut processor = CommandProcessor::new(Cli::command(), ServiceContainer::new());

    let mut out = io::stdout().lock();
    let mut err = io::stderr().lock();
    let mut code = processor.run(std::env::args_os(), &mut out, &mut err);

    if let Err(e) = out.flush() {
        let _ = writeln!(err, "error: cannot write output: {}", e);
        code = exitcode::FAILURE;
    }
    ExitCode::from(u8::try_from(code).unwrap_or(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }
}
