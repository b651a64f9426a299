use std::cell::RefCell;

use super::printer::Printer;

/// Keeps everything printed in memory, in the order it was written. Used to
/// assert on the report.
#[derive(Debug, Default)]
pub struct Logger {
    output: RefCell<String>,
}

impl Logger {
    #[must_use]
    pub fn new() -> Self {
        Self {
            output: RefCell::new(String::new()),
        }
    }

    #[must_use]
    pub fn log(&self) -> String {
        self.output.borrow().clone()
    }

    #[must_use]
    pub fn lines(&self) -> Vec<String> {
        self.output.borrow().lines().map(ToString::to_string).collect()
    }

    fn append(&self, output: &str) {
        self.output.borrow_mut().push_str(output);
    }
}

impl Printer for Logger {
    fn println(&self, output: &str) {
        self.append(output);
        self.append("\n");
    }
}
