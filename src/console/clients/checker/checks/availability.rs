use std::time::Duration;

use crate::console::clients::backend::Client;
use crate::console::clients::checker::printer::Printer;

/// Checks the backend answers on its base URL.
///
/// Any HTTP response counts as reachable, whatever its status code. Only a
/// transport failure (refused connection, DNS, timeout) makes it fail.
pub async fn run<P: Printer>(client: &Client, timeout: Duration, console: &P) -> bool {
    console.println("🔍 Testing Backend Availability...");

    match client.get_base(timeout).await {
        Ok(reply) => {
            console.println(&format!("Backend reachable - Status: {}", reply.status.as_u16()));
            true
        }
        Err(err) => {
            tracing::warn!(%err, "backend not reachable");
            console.println(&format!("❌ Backend not reachable: {err}"));
            false
        }
    }
}
