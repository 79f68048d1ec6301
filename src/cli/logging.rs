//! Tracing subscriber setup for the `-d/--debug` flag

use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Map the `-d` count to a level filter.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Install a stderr fmt subscriber filtered by `verbosity`.
///
/// Does nothing if a global subscriber is already installed.
pub fn setup_logging(verbosity: u8) {
    let filter = level_for(verbosity);

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_names(false)
        .with_span_events(FmtSpan::CLOSE);

    let installed = tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .try_init()
        .is_ok();

    if installed {
        match filter {
            LevelFilter::INFO => tracing::info!("Debug mode: info"),
            LevelFilter::DEBUG => tracing::debug!("Debug mode: debug"),
            LevelFilter::TRACE => tracing::debug!("Debug mode: trace"),
            _ => {}
        }
    }
}
