//! Terminal implementation of the controller view

use std::io::{self, BufRead, Write};
use uni_records::app::View;

/// Reads answers from stdin and prints to stdout/stderr
pub struct TerminalView {
    assume_yes: bool,
}

impl TerminalView {
    /// Create a terminal view. With `assume_yes`, confirmations are answered without asking.
    pub const fn new(assume_yes: bool) -> Self {
        Self { assume_yes }
    }

    fn read_line(prompt: &str) -> Option<String> {
        print!("{prompt}");
        io::stdout().flush().ok();
        let mut line = String::new();
        match io::stdin().lock().read_line(&mut line) {
            Ok(0) | Err(_) => None,
            Ok(_) => Some(line.trim().to_string()),
        }
    }
}

impl View for TerminalView {
    fn display(&mut self, text: &str) {
        println!("{text}");
    }

    fn display_error(&mut self, message: &str) {
        eprintln!("✗ Error: {message}");
    }

    fn display_success(&mut self, message: &str) {
        println!("✓ {message}");
    }

    fn get_input(&mut self, prompt: &str) -> Option<String> {
        Self::read_line(&format!("{prompt}: "))
    }

    fn confirm_action(&mut self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }
        Self::read_line(&format!("{message} (y/n): "))
            .is_some_and(|answer| answer.eq_ignore_ascii_case("y"))
    }
}
