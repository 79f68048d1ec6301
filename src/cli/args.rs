//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use crate::domain::PrdRequest;

/// Project management helper
#[derive(Parser, Debug)]
#[command(name = "pm")]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help = true)]
pub struct Cli {
    /// Enable tracing output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub debug: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// PRD generation commands
    #[command(args_override_self = true)]
    Prd(PrdArgs),

    /// Generate shell completions
    Completion {
        /// Shell type
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Generate a stub PRD markdown file
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct PrdArgs {
    /// Path to write PRD stub
    #[arg(long, value_hint = ValueHint::FilePath)]
    pub out: PathBuf,

    /// Emit JSON output
    #[arg(long)]
    pub json: bool,

    /// Emit debug logs to stderr
    #[arg(long)]
    pub verbose: bool,
}

impl From<PrdArgs> for PrdRequest {
    fn from(args: PrdArgs) -> Self {
        Self {
            out: args.out,
            json: args.json,
            verbose: args.verbose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_prd_flags_when_parsed_then_request_carries_them() {
        let cli = Cli::try_parse_from(["pm", "prd", "--out", "a.md", "--json", "--verbose"]).unwrap();

        let Some(Commands::Prd(args)) = cli.command else {
            panic!("expected prd command");
        };
        let request = PrdRequest::from(args);

        assert_eq!(request.out, PathBuf::from("a.md"));
        assert!(request.json);
        assert!(request.verbose);
    }

    #[test]
    fn given_prd_without_flags_when_parsed_then_flags_default_to_false() {
        let cli = Cli::try_parse_from(["pm", "prd", "--out", "a.md"]).unwrap();

        let Some(Commands::Prd(args)) = cli.command else {
            panic!("expected prd command");
        };

        assert!(!args.json);
        assert!(!args.verbose);
        assert_eq!(cli.debug, 0);
    }

    #[test]
    fn given_repeated_out_when_parsed_then_last_value_wins() {
        let cli = Cli::try_parse_from(["pm", "prd", "--out", "a.md", "--out", "b.md"]).unwrap();

        let Some(Commands::Prd(args)) = cli.command else {
            panic!("expected prd command");
        };

        assert_eq!(args.out, PathBuf::from("b.md"));
    }

    #[test]
    fn given_repeated_debug_when_parsed_then_counts() {
        let cli = Cli::try_parse_from(["pm", "-dd", "prd", "--out", "a.md"]).unwrap();
        assert_eq!(cli.debug, 2);
    }
}
