//! Smoke-test runner for the backend API.
pub mod app;
pub mod checks;
pub mod config;
pub mod console;
pub mod logger;
pub mod printer;
pub mod report;
pub mod service;
