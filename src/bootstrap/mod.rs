//! Setup for the application.
pub mod logging;
