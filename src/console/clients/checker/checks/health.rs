use std::time::Duration;

use serde_json::Value;

use super::{expect_ok, Error};
use crate::console::clients::backend::resources::HealthMessage;
use crate::console::clients::backend::Client;
use crate::console::clients::checker::printer::Printer;

/// The greeting the health check endpoint must return.
pub const EXPECTED_MESSAGE: &str = "Hello World";

/// Checks `GET {base}/` answers `200` with `{"message": "Hello World"}`.
pub async fn run<P: Printer>(client: &Client, timeout: Duration, console: &P) -> bool {
    console.println("🔍 Testing Health Check Endpoint...");

    match check(client, timeout, console).await {
        Ok(health) => {
            tracing::debug!(?health, "health check passed");
            console.println("✅ Health check endpoint working correctly");
            true
        }
        Err(err) => {
            tracing::warn!(%err, "health check failed");
            console.println(&failure_line(&err));
            false
        }
    }
}

async fn check<P: Printer>(client: &Client, timeout: Duration, console: &P) -> Result<HealthMessage, Error> {
    let reply = client.health_check(timeout).await?;

    console.println(&format!("Status Code: {}", reply.status.as_u16()));
    console.println(&format!("Response: {}", reply.body));

    expect_ok(reply.status)?;

    parse_greeting(&reply.json::<Value>()?).ok_or(Error::UnexpectedResponse { data: reply.body })
}

/// Only a JSON object whose `message` is the expected greeting is accepted.
fn parse_greeting(body: &Value) -> Option<HealthMessage> {
    let message = body.as_object()?.get("message")?.as_str()?;

    (message == EXPECTED_MESSAGE).then(|| HealthMessage {
        message: message.to_string(),
    })
}

fn failure_line(err: &Error) -> String {
    match err {
        Error::UnsuccessfulResponse { code } => format!("❌ Health check failed with status {}", code.as_u16()),
        Error::UnexpectedResponse { .. } => format!("❌ {err}"),
        Error::RequestError { .. } | Error::JsonParseError { .. } => format!("❌ Health check request failed: {err}"),
    }
}
