//! Command handlers
//!
//! Each handler performs one subcommand's side effect and renders its
//! outcome. Handlers never exit the process; failures propagate as
//! `CliError` to the processor.

use std::io::{self, Write};

use clap::Command;
use clap_complete::{generate, Generator};
use tracing::instrument;

use crate::cli::error::CliResult;
use crate::cli::output;
use crate::domain::{OutcomeReport, PrdRequest};
use crate::infrastructure::ServiceContainer;

/// Write the PRD stub and report where it went.
#[instrument(skip_all, fields(out = %request.out.display(), json = request.json))]
pub fn prd(
    services: &ServiceContainer,
    request: &PrdRequest,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> CliResult<()> {
    if request.verbose {
        output::debug(err, &format!("writing stub to {}", request.out.display()))?;
    }

    let report = services.prd_service.write_stub(&request.out)?;

    if request.verbose {
        if let Some(dir) = &report.created_dir {
            output::debug(err, &format!("created directory {}", dir.display()))?;
        }
    }

    render_outcome(&report, request.json, out)?;
    Ok(())
}

/// Render a successful outcome as JSON or a human-readable line.
pub fn render_outcome(report: &OutcomeReport, json: bool, out: &mut dyn Write) -> io::Result<()> {
    if json {
        output::json(out, report)
    } else {
        output::info(out, &format!("Wrote PRD stub to {}", report.output_path))
    }
}

/// Write a shell completion script for `cmd`.
#[instrument(skip(cmd, out))]
pub fn completion<G: Generator + std::fmt::Debug>(
    generator: G,
    cmd: &mut Command,
    out: &mut dyn Write,
) -> CliResult<()> {
    let name = cmd.get_name().to_string();
    generate(generator, cmd, name, out);
    Ok(())
}
