use super::printer::Printer;

/// Writes the report to the process standard output.
#[derive(Debug, Default)]
pub struct Console {}

impl Console {
    #[must_use]
    pub fn new() -> Self {
        Self {}
    }
}

impl Printer for Console {
    fn println(&self, output: &str) {
        println!("{output}");
    }
}
