/// Width of the horizontal rules framing the report sections.
pub const RULE_WIDTH: usize = 60;

/// Where the checker writes its human-readable report.
pub trait Printer {
    fn println(&self, output: &str);

    /// Prints a `====...` line.
    fn rule(&self) {
        self.println(&"=".repeat(RULE_WIDTH));
    }

    /// Prints a section title framed by two rules.
    fn heading(&self, title: &str) {
        self.rule();
        self.println(title);
        self.rule();
    }
}
