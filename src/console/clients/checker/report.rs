//! Outcome of a checker run.
use std::fmt;

/// Exit status when every check passed.
pub const EXIT_SUCCESS: u8 = 0;

/// Exit status when at least one check failed.
pub const EXIT_FAILURE: u8 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    Availability,
    HealthCheck,
    DatabaseConnection,
}

impl Check {
    /// Stable snake case name of the check.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Check::Availability => "availability",
            Check::HealthCheck => "health_check",
            Check::DatabaseConnection => "database_connection",
        }
    }

    /// Name shown in the summary.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Check::Availability => "Availability",
            Check::HealthCheck => "Health Check",
            Check::DatabaseConnection => "Database Connection",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered `(check, passed)` pairs, in execution order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Report {
    results: Vec<(Check, bool)>,
}

impl Report {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, check: Check, passed: bool) {
        self.results.push((check, passed));
    }

    #[must_use]
    pub fn results(&self) -> &[(Check, bool)] {
        &self.results
    }

    /// Outcome recorded for the check, if it ran.
    #[must_use]
    pub fn outcome(&self, check: Check) -> Option<bool> {
        self.results.iter().find(|(c, _)| *c == check).map(|(_, passed)| *passed)
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.results.len()
    }

    #[must_use]
    pub fn passed(&self) -> usize {
        self.results.iter().filter(|(_, passed)| *passed).count()
    }

    #[must_use]
    pub fn all_passed(&self) -> bool {
        self.results.iter().all(|(_, passed)| *passed)
    }

    /// Process exit status for this report.
    #[must_use]
    pub fn exit_status(&self) -> u8 {
        if self.all_passed() {
            EXIT_SUCCESS
        } else {
            EXIT_FAILURE
        }
    }
}
