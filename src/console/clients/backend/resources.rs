//! JSON resources exchanged with the backend API.
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Body of the health check endpoint: `{"message": "Hello World"}`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct HealthMessage {
    pub message: String,
}

/// Request body to create a status record.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct NewStatus {
    pub client_name: String,
}

impl NewStatus {
    #[must_use]
    pub fn new(client_name: &str) -> Self {
        Self {
            client_name: client_name.to_string(),
        }
    }
}

/// A stored status record. Only `client_name` is known, the backend may add
/// any other field (id, timestamp, ...).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct StatusRecord {
    pub client_name: String,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}
