//! Entities owned by the chat room.

use rendezvous_shared::rpc::SYSTEM_SENDER;

use super::value_object::{ClientId, MessageContent, MessageId, Timestamp};

/// One joined session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Client {
    /// Assigned display name, unique among joined clients
    pub id: ClientId,
    /// Name the client asked for at join time (diagnostics only)
    pub requested_name: String,
    /// Log head when the client joined, then the id of its latest message
    pub last_seen_message_id: MessageId,
    pub joined_at: Timestamp,
}

/// Origin of a message
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sender {
    /// Join / leave notice generated by the room
    System,
    Client(ClientId),
}

impl Sender {
    /// Wire representation: `"System"` or the client id
    pub fn as_str(&self) -> &str {
        match self {
            Sender::System => SYSTEM_SENDER,
            Sender::Client(id) => id.as_str(),
        }
    }

    /// Whether this message was authored by `client_id`
    pub fn is_client(&self, client_id: &ClientId) -> bool {
        matches!(self, Sender::Client(id) if id == client_id)
    }
}

/// An entry of the append-only message log
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: MessageId,
    pub sender: Sender,
    pub content: MessageContent,
    pub timestamp: Timestamp,
}
