//! Human-facing CLI output.

use colored::Colorize;

/// Formats success, info, and error lines for the terminal.
pub struct OutputFormatter {
    no_color: bool,
}

impl OutputFormatter {
    #[must_use]
    pub const fn new(no_color: bool) -> Self {
        Self { no_color }
    }

    pub fn success(&self, message: &str) {
        if self.no_color {
            println!("{message}");
        } else {
            println!("{}", message.green());
        }
    }

    pub fn info(&self, message: &str) {
        println!("{message}");
    }

    pub fn error(&self, message: &str) {
        if self.no_color {
            eprintln!("Error: {message}");
        } else {
            eprintln!("{} {message}", "Error:".red().bold());
        }
    }
}
