//! Setup for the application logging.
//!
//! Diagnostics are emitted with the `tracing` macros and written, in the
//! compact format, to the standard error. They never mix with the report the
//! checker prints on the standard output.
//!
//! - `Off`
//! - `Error`
//! - `Warn`
//! - `Info`
//! - `Debug`
//! - `Trace`
use std::sync::Once;

use tracing::debug;
use tracing::level_filters::LevelFilter;

static INIT: Once = Once::new();

/// It redirects the tracing output to the standard error with the given level.
///
/// Only the first call has any effect.
pub fn setup(level: LevelFilter) {
    if level == LevelFilter::OFF {
        return;
    }

    INIT.call_once(|| {
        tracing_stderr_init(level);
    });
}

fn tracing_stderr_init(filter: LevelFilter) {
    let () = tracing_subscriber::fmt()
        .compact()
        .with_max_level(filter)
        .with_writer(std::io::stderr)
        .with_ansi(true)
        .init();

    debug!("Logging initialized");
}
