use chrono::Local;

use super::checks::{availability, database, health};
use super::config::Configuration;
use super::printer::Printer;
use super::report::{Check, Report};
use crate::console::clients::backend::{self, Client};

/// Runs the checks one after the other and prints the report.
pub struct Service<P: Printer> {
    config: Configuration,
    console: P,
}

impl<P: Printer> Service<P> {
    #[must_use]
    pub fn new(config: Configuration, console: P) -> Self {
        Self { config, console }
    }

    #[must_use]
    pub fn console(&self) -> &P {
        &self.console
    }

    /// Runs the availability, health check and database connection checks,
    /// in this order. A failed check does not prevent the next ones from
    /// running.
    ///
    /// # Errors
    ///
    /// It will return an error if the http client can't be built. Failing
    /// checks are not errors, they are recorded in the [`Report`].
    pub async fn run_checks(&self) -> Result<Report, backend::Error> {
        tracing::info!("Running checks for backend {} ...", self.config.endpoints.base);

        let client = Client::new(self.config.endpoints.clone())?;
        let timeouts = self.config.timeouts;

        self.print_banner();

        let mut report = Report::new();

        let passed = availability::run(&client, timeouts.availability, &self.console).await;
        record(&mut report, Check::Availability, passed);

        self.console.println("");
        let passed = health::run(&client, timeouts.request, &self.console).await;
        record(&mut report, Check::HealthCheck, passed);

        self.console.println("");
        let passed = database::run(&client, timeouts.request, &self.console).await;
        record(&mut report, Check::DatabaseConnection, passed);

        self.print_summary(&report);

        Ok(report)
    }

    fn print_banner(&self) {
        self.console.heading("🚀 ALARM CLOCK APP - BACKEND API TESTING");
        self.console
            .println(&format!("Testing Backend URL: {}", self.config.endpoints.base));
        self.console
            .println(&format!("Test Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S%.6f")));
        self.console.rule();
    }

    fn print_summary(&self, report: &Report) {
        self.console.println("");
        self.console.heading("📊 TEST SUMMARY");

        for (check, passed) in report.results() {
            let status = if *passed { "✅ PASS" } else { "❌ FAIL" };
            self.console.println(&format!("{check}: {status}"));
        }

        self.console
            .println(&format!("\nOverall: {}/{} tests passed", report.passed(), report.total()));

        if report.all_passed() {
            self.console.println("🎉 All backend tests passed!");
        } else {
            self.console.println("⚠️  Some backend tests failed!");
        }
    }
}

fn record(report: &mut Report, check: Check, passed: bool) {
    tracing::debug!(check = check.key(), passed, "check finished");

    report.record(check, passed);
}
