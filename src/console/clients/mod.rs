//! Console clients.
pub mod backend;
pub mod checker;
