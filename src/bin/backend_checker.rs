//! Program to run smoke tests against a running backend.
//!
//! ```text
//! BACKEND_URL="http://127.0.0.1:8001/api" cargo run --bin backend_checker
//! ```
//!
//! It exits with `0` when every check passed and `1` otherwise.
use std::process::ExitCode;

use backend_checker::console::clients::checker::app;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    match app::run().await {
        Ok(report) => ExitCode::from(report.exit_status()),
        Err(err) => {
            eprintln!("ERROR: {err:?}");
            ExitCode::FAILURE
        }
    }
}
