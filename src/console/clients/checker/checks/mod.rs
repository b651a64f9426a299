//! The checks run against the backend.
//!
//! Each check prints what it sees and ends up as a plain `bool`: every error
//! is reported on the console and turned into `false`, nothing escapes.
use std::sync::Arc;

use reqwest::StatusCode;
use thiserror::Error;

use crate::console::clients::backend;

pub mod availability;
pub mod database;
pub mod health;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("{err}")]
    RequestError { err: backend::Error },

    #[error("Http check returned a non-success code: \"{code}\"")]
    UnsuccessfulResponse { code: StatusCode },

    #[error("Failed to deserialize the JSON response body: {err}")]
    JsonParseError { err: Arc<serde_json::Error> },

    #[error("Unexpected response data: {data}")]
    UnexpectedResponse { data: String },
}

impl From<backend::Error> for Error {
    fn from(err: backend::Error) -> Self {
        Self::RequestError { err }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonParseError { err: err.into() }
    }
}

/// Only `200 OK` is a success, any other code (even `2xx`) is not.
fn expect_ok(code: StatusCode) -> Result<(), Error> {
    if code == StatusCode::OK {
        Ok(())
    } else {
        Err(Error::UnsuccessfulResponse { code })
    }
}
