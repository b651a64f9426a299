use std::fmt;
use std::time::Duration;

use serde_json::Value;

use super::{expect_ok, Error};
use crate::console::clients::backend::resources::{NewStatus, StatusRecord};
use crate::console::clients::backend::Client;
use crate::console::clients::checker::printer::Printer;

/// `client_name` of the status record created by the check.
pub const TEST_CLIENT_NAME: &str = "test_alarm_client";

/// The two requests of the check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Create,
    List,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Step::Create => f.write_str("POST"),
            Step::List => f.write_str("GET"),
        }
    }
}

/// Checks the backend can write to and read from its database, through the
/// status endpoints:
///
/// 1. `POST {base}/status` must answer `200` with a JSON body.
/// 2. `GET {base}/status` must answer `200` with a JSON array.
///
/// The second request is only sent when the first one succeeded.
pub async fn run<P: Printer>(client: &Client, timeout: Duration, console: &P) -> bool {
    console.println("🔍 Testing Database Connection via Status Endpoints...");

    match check(client, timeout, console).await {
        Ok(records) => {
            console.println(&format!("✅ Retrieved {} status checks", records.len()));
            true
        }
        Err((step, err)) => {
            tracing::warn!(%step, %err, "database connection check failed");
            console.println(&failure_line(step, &err));
            false
        }
    }
}

async fn check<P: Printer>(client: &Client, timeout: Duration, console: &P) -> Result<Vec<Value>, (Step, Error)> {
    create_status(client, timeout, console)
        .await
        .map_err(|err| (Step::Create, err))?;

    console.println("");

    list_status(client, timeout, console).await.map_err(|err| (Step::List, err))
}

async fn create_status<P: Printer>(client: &Client, timeout: Duration, console: &P) -> Result<(), Error> {
    let path = client.endpoints().status.path().to_string();

    console.println(&format!("Testing POST {path}..."));

    let reply = client.create_status(&NewStatus::new(TEST_CLIENT_NAME), timeout).await?;

    console.println(&format!("POST Status Code: {}", reply.status.as_u16()));
    console.println(&format!("POST Response: {}", reply.body));

    expect_ok(reply.status)?;

    let created = reply.json::<Value>()?;

    // Any JSON is accepted, the record shape is only traced.
    match serde_json::from_value::<StatusRecord>(created) {
        Ok(record) => tracing::debug!(?record, "status record created"),
        Err(err) => tracing::debug!(%err, "the created status record is not a known resource"),
    }

    console.println("✅ Status creation successful");

    Ok(())
}

async fn list_status<P: Printer>(client: &Client, timeout: Duration, console: &P) -> Result<Vec<Value>, Error> {
    let path = client.endpoints().status.path().to_string();

    console.println(&format!("Testing GET {path}..."));

    let reply = client.list_status(timeout).await?;

    console.println(&format!("GET Status Code: {}", reply.status.as_u16()));
    console.println(&format!("GET Response: {}", reply.body));

    expect_ok(reply.status)?;

    let Value::Array(records) = reply.json::<Value>()? else {
        return Err(Error::UnexpectedResponse { data: reply.body });
    };

    Ok(records)
}

fn failure_line(step: Step, err: &Error) -> String {
    match err {
        Error::UnsuccessfulResponse { code } => format!("❌ {step} status failed with status {}", code.as_u16()),
        _ => format!("❌ Database connection test failed: {err}"),
    }
}
