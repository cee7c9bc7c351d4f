//! UI utilities for the client.

use std::io::Write;

/// Prompt shown before each input line
pub fn prompt(name: &str) -> String {
    format!("{}> ", name)
}

/// Print formatted output and redisplay the prompt below it
pub fn print_with_prompt(text: &str, name: &str) {
    let mut stdout = std::io::stdout().lock();
    write!(stdout, "{}{}", text, prompt(name)).ok();
    stdout.flush().ok();
}
