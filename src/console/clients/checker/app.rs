//! Program to run the smoke tests against a running backend.
//!
//! Run providing the backend base URL:
//!
//! ```text
//! cargo run --bin backend_checker -- --backend-url "http://127.0.0.1:8001/api"
//! BACKEND_URL="http://127.0.0.1:8001/api" cargo run --bin backend_checker
//! ```
//!
//! Without a base URL the checks run against the default deployment
//! ([`DEFAULT_BACKEND_URL`]).
use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;

use super::config::{Configuration, PlainConfiguration, DEFAULT_BACKEND_URL};
use super::console::Console;
use super::report::Report;
use super::service::Service;
use crate::bootstrap::logging;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the backend API.
    #[clap(short, long, env = "BACKEND_URL", default_value = DEFAULT_BACKEND_URL)]
    backend_url: String,
}

/// # Errors
///
/// Will return an error if the configuration is not valid or the checks
/// can't be run at all. Failing checks are reported in the returned [`Report`].
pub async fn run() -> Result<Report> {
    logging::setup(LevelFilter::WARN);

    let args = Args::parse();

    let config = setup_config(args)?;

    let service = Service::new(config, Console::new());

    service.run_checks().await.context("unable to run the backend checks")
}

fn setup_config(args: Args) -> Result<Configuration> {
    let plain_config = PlainConfiguration {
        backend_url: args.backend_url,
    };

    Configuration::try_from(plain_config).context("invalid backend URL")
}
