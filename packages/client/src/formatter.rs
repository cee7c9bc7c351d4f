//! Message formatting utilities for client display.

use rendezvous_shared::rpc::MessageInfo;

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format the greeting shown after a successful join
    ///
    /// # Arguments
    ///
    /// * `welcome` - The welcome message returned by Join
    pub fn format_welcome(welcome: &str) -> String {
        format!(
            "\n{}\n\nType messages and press Enter.\nUse 'exit' to leave the chat.\n\n",
            welcome
        )
    }

    /// Format a message received by polling
    ///
    /// System notices are tagged `[SYSTEM]`; chat messages are shown as
    /// `sender: content`.
    pub fn format_message(message: &MessageInfo) -> String {
        if message.is_system() {
            format!("\n[SYSTEM] {}\n", message.content)
        } else {
            format!("\n{}: {}\n", message.sender, message.content)
        }
    }

    /// Format the local echo of a message this client sent
    pub fn format_sent_confirmation(content: &str) -> String {
        format!("\n[You] {}\n", content)
    }

    /// Format a failed send
    pub fn format_send_error(error: &str) -> String {
        format!("\n[Send error] {}\n", error)
    }

    /// Format the notice shown when polling fails
    pub fn format_connection_lost() -> String {
        "\n[Connection lost]\n".to_string()
    }
}
