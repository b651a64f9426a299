//! HTTP client for the backend API.
//!
//! It only knows the endpoints the checker needs:
//!
//! ```text
//! https://awake-alarm.preview.emergentagent.com/api         -> availability (base URL)
//! https://awake-alarm.preview.emergentagent.com/api/        -> health check
//! https://awake-alarm.preview.emergentagent.com/api/status  -> create and list status records
//! \_______________________________________________/\_____/
//!                      |                              |
//!                   base url                        path
//! ```
//!
//! Every request carries its own timeout, and the whole body is read before
//! the [`Reply`] is returned so the checks can print it.
use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client as ReqwestClient, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use thiserror::Error;

pub mod resources;

use resources::NewStatus;

#[derive(Debug, Clone, Error)]
pub enum Error {
    #[error("Failed to build the http client: {err}")]
    ClientBuildingError { err: Arc<reqwest::Error> },

    #[error("Request to {url} failed to get a response: {err}")]
    ResponseError { url: Url, err: Arc<reqwest::Error> },

    #[error("Failed to read the response body from {url}: {err}")]
    BodyError { url: Url, err: Arc<reqwest::Error> },
}

/// The backend URLs the checker talks to, derived from the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    pub base: Url,
    pub health: Url,
    pub status: Url,
}

impl Endpoints {
    /// Builds the endpoints below the given base URL. A trailing slash in the
    /// base URL is ignored.
    ///
    /// # Errors
    ///
    /// Will return an error if the base URL plus an endpoint path is not a valid URL.
    pub fn new(base: Url) -> Result<Self, url::ParseError> {
        let root = base.as_str().trim_end_matches('/');

        let health = format!("{root}/").parse::<Url>()?;
        let status = format!("{root}/status").parse::<Url>()?;

        Ok(Self { base, health, status })
    }
}

/// A fully read HTTP response.
#[derive(Debug, Clone)]
pub struct Reply {
    pub url: Url,
    pub status: StatusCode,
    pub body: String,
}

impl Reply {
    /// Decodes the body as JSON.
    ///
    /// # Errors
    ///
    /// Will return an error if the body is not valid JSON for `T`.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.body)
    }
}

/// Backend API Client
#[derive(Debug, Clone)]
pub struct Client {
    endpoints: Endpoints,
    reqwest: ReqwestClient,
}

impl Client {
    /// # Errors
    ///
    /// Will return an error if the underlying http client can't be built.
    pub fn new(endpoints: Endpoints) -> Result<Self, Error> {
        let reqwest = ReqwestClient::builder()
            .build()
            .map_err(|e| Error::ClientBuildingError { err: e.into() })?;

        Ok(Self { endpoints, reqwest })
    }

    #[must_use]
    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    /// `GET` on the base URL.
    ///
    /// # Errors
    ///
    /// Will return an error if no complete response arrives within the timeout.
    pub async fn get_base(&self, timeout: Duration) -> Result<Reply, Error> {
        let url = self.endpoints.base.clone();
        send(self.reqwest.get(url.clone()), url, timeout).await
    }

    /// `GET {base}/`
    ///
    /// # Errors
    ///
    /// Will return an error if no complete response arrives within the timeout.
    pub async fn health_check(&self, timeout: Duration) -> Result<Reply, Error> {
        let url = self.endpoints.health.clone();
        send(self.reqwest.get(url.clone()), url, timeout).await
    }

    /// `POST {base}/status` with the new status record as JSON body.
    ///
    /// # Errors
    ///
    /// Will return an error if no complete response arrives within the timeout.
    pub async fn create_status(&self, new_status: &NewStatus, timeout: Duration) -> Result<Reply, Error> {
        let url = self.endpoints.status.clone();
        send(self.reqwest.post(url.clone()).json(new_status), url, timeout).await
    }

    /// `GET {base}/status`
    ///
    /// # Errors
    ///
    /// Will return an error if no complete response arrives within the timeout.
    pub async fn list_status(&self, timeout: Duration) -> Result<Reply, Error> {
        let url = self.endpoints.status.clone();
        send(self.reqwest.get(url.clone()), url, timeout).await
    }
}

async fn send(request: RequestBuilder, url: Url, timeout: Duration) -> Result<Reply, Error> {
    tracing::debug!(%url, ?timeout, "sending request");

    let response = request.timeout(timeout).send().await.map_err(|e| Error::ResponseError {
        url: url.clone(),
        err: e.into(),
    })?;

    let status = response.status();

    let body = response.text().await.map_err(|e| Error::BodyError {
        url: url.clone(),
        err: e.into(),
    })?;

    tracing::debug!(%url, %status, "received response");

    Ok(Reply { url, status, body })
}
