//! Shared CLI output helpers for consistent operator-facing text.

use std::fmt::Display;

const RULE_WIDTH: usize = 56;

/// Print a section header and separator.
pub fn section(title: &str) {
    println!();
    println!("{title}");
    println!("{}", "\u{2500}".repeat(RULE_WIDTH));
}

/// Print a simple key/value line.
pub fn key_value(label: &str, value: impl Display) {
    println!("{label:<14} {value}");
}

/// Print a successful status line.
pub fn ok(message: &str) {
    println!("\u{2713} {message}");
}

/// Print an error status line.
pub fn error(message: &str) {
    eprintln!("\u{2717} {message}");
}

/// Print a single-line note.
pub fn note(message: &str) {
    println!("{message}");
}
