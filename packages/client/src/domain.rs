//! Domain logic for client-side operations.
//!
//! This module contains pure functions that implement business logic
//! without side effects, making them easy to test.

/// Sentinel line that ends the session (case-insensitive)
const EXIT_COMMAND: &str = "exit";

/// What to do with one line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputAction {
    /// Leave the chat
    Exit,
    /// Nothing to send
    Skip,
    /// Send the (trimmed) line as a message
    Send(String),
}

/// Classify a line of user input.
pub fn parse_input(line: &str) -> InputAction {
    let line = line.trim();
    if line.eq_ignore_ascii_case(EXIT_COMMAND) {
        InputAction::Exit
    } else if line.is_empty() {
        InputAction::Skip
    } else {
        InputAction::Send(line.to_string())
    }
}
