use std::error::Error;
use std::fmt;
use std::time::Duration;

use reqwest::Url as ServiceUrl;

use crate::console::clients::backend::Endpoints;

/// The deployment the checker was written for. Used when `BACKEND_URL` is not set.
pub const DEFAULT_BACKEND_URL: &str = "https://awake-alarm.preview.emergentagent.com/api";

/// Timeout for the availability request.
pub const AVAILABILITY_TIMEOUT: Duration = Duration::from_secs(5);

/// Timeout for the health check and the status requests.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// DTO for the configuration as it comes from the command line or the environment.
///
/// Configuration does not need to be valid.
#[derive(Debug, Clone)]
pub struct PlainConfiguration {
    pub backend_url: String,
}

/// Validated configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    pub endpoints: Endpoints,
    pub timeouts: Timeouts,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeouts {
    pub availability: Duration,
    pub request: Duration,
}

impl Default for Timeouts {
    fn default() -> Self {
        Self {
            availability: AVAILABILITY_TIMEOUT,
            request: REQUEST_TIMEOUT,
        }
    }
}

#[derive(Debug)]
pub enum ConfigurationError {
    InvalidUrl(url::ParseError),
    UnsupportedScheme(String),
}

impl Error for ConfigurationError {}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::InvalidUrl(e) => write!(f, "Invalid URL: {e}"),
            ConfigurationError::UnsupportedScheme(scheme) => {
                write!(f, "Unsupported URL scheme: \"{scheme}\", expected \"http\" or \"https\"")
            }
        }
    }
}

impl TryFrom<PlainConfiguration> for Configuration {
    type Error = ConfigurationError;

    fn try_from(plain_config: PlainConfiguration) -> Result<Self, Self::Error> {
        let base_url = plain_config
            .backend_url
            .trim()
            .parse::<ServiceUrl>()
            .map_err(ConfigurationError::InvalidUrl)?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigurationError::UnsupportedScheme(base_url.scheme().to_string()));
        }

        let endpoints = Endpoints::new(base_url).map_err(ConfigurationError::InvalidUrl)?;

        Ok(Configuration {
            endpoints,
            timeouts: Timeouts::default(),
        })
    }
}
