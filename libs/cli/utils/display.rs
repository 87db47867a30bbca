use colored::*;
use std::fmt::Display;

/// Defines the type of log message to determine the icon and color scheme.
pub enum LogType {
    Success,
    Info,
    /// For destructive commands like 'delete' and 'reset'.
    Removed,
}

/// A builder for creating structured, tree-like log messages.
pub struct LogBuilder<'a> {
    log_type: LogType,
    message: String,
    details: Vec<(&'a str, Box<dyn Display>)>,
}

impl<'a> LogBuilder<'a> {
    pub fn new(log_type: LogType, message: impl Display) -> Self {
        Self {
            log_type,
            message: message.to_string(),
            details: Vec::new(),
        }
    }

    /// Adds a new detail line (a "branch") to the log message.
    pub fn with_branch(mut self, label: &'a str, value: impl Display + 'static) -> Self {
        self.details.push((label, Box::new(value)));
        self
    }

    /// Conditionally adds a branch if the `value` is `Some`.
    pub fn with_optional_branch<T: Display + 'static>(
        self,
        label: &'a str,
        value: Option<T>,
    ) -> Self {
        if let Some(val) = value {
            self.with_branch(label, val)
        } else {
            self
        }
    }

    /// Consumes the builder and prints the formatted message to the console.
    pub fn print(self) {
        let (symbol, color) = match self.log_type {
            LogType::Success => ("✔", "green"),
            LogType::Info => ("ℹ", "blue"),
            LogType::Removed => ("✗", "red"),
        };

        println!(
            "\n{} {}",
            symbol.color(color).bold(),
            self.message.color(color).bold()
        );

        let count = self.details.len();
        for (i, (label, value)) in self.details.iter().enumerate() {
            let prefix = if i == count - 1 { "  ╰─" } else { "  ├─" };
            let padded_label = format!("{label}:");
            // Pad to align with "Last year:"
            println!("{} {:<10} {}", prefix.dimmed(), padded_label.bold(), value);
        }
    }
}

/// Banner shown on top of a tax year listing, e.g. `Tax Year 2024 (Due 2025)`
pub fn print_year_header(year: i32) {
    println!(
        "{} {}\n",
        format!("Tax Year {year}").bold().underline(),
        format!("(Due {})", year + 1).dimmed()
    );
}
