//! Output abstraction
//!
//! Presenters write through `OutputWriter` so reports can be captured
//! in tests instead of going to stdout.

/// Trait for writing output to the user
pub trait OutputWriter {
    /// Write a message with a newline
    fn writeln(&mut self, message: &str);
}

/// Terminal output using stdout
pub struct TerminalIO;

impl OutputWriter for TerminalIO {
    fn writeln(&mut self, message: &str) {
        println!("{}", message);
    }
}
