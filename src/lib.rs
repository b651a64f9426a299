//! **Backend Checker** is a smoke-test runner for the alarm clock backend API.
//!
//! It runs three independent checks, one after the other, against a running
//! backend:
//!
//! 1. **Availability**: the base URL answers at all, whatever the status code.
//! 2. **Health check**: `GET {base}/` returns `200` with `{"message": "Hello World"}`.
//! 3. **Database connection**: `POST {base}/status` creates a status record and
//!    `GET {base}/status` lists the stored records as a JSON array.
//!
//! Each check ends up as a plain pass/fail outcome. A failing check never
//! stops the following ones. When all of them have run the checker prints a
//! summary and the binary exits with `0` only if every check passed.
//!
//! ```text
//! BACKEND_URL="http://127.0.0.1:8001/api" cargo run --bin backend_checker
//! cargo run --bin backend_checker -- --backend-url "http://127.0.0.1:8001/api"
//! ```
//!
//! The crate is split into:
//!
//! - [`console::clients::backend`]: a small HTTP client for the backend API.
//! - [`console::clients::checker`]: the configuration, the checks, the runner and its report.
//! - [`bootstrap::logging`]: the `tracing` subscriber setup.
pub mod bootstrap;
pub mod console;
