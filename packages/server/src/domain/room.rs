//! Chat room state machine.
//!
//! `ChatRoom` owns the client registry, the append-only message log and the
//! message id counter. It is purely synchronous; callers serialize access
//! (see `InMemoryRoomRepository`). Nothing outside this module can mutate
//! the registry or the log except through `join`, `send` and `leave`.

use std::collections::HashMap;

use super::{
    entity::{Client, Message, Sender},
    error::RoomError,
    name_allocator::assign_name,
    value_object::{ClientId, MessageContent, MessageId, RoomId, Timestamp},
};

/// Result of an incremental poll
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Updates {
    /// Messages newer than the cursor, excluding the caller's own, ascending
    pub messages: Vec<Message>,
    /// Highest id scanned past the cursor, or the cursor itself if none
    pub watermark: MessageId,
}

/// Read-only view of the room for diagnostics
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomSnapshot {
    pub room_id: RoomId,
    pub created_at: Timestamp,
    /// Joined clients sorted by id
    pub clients: Vec<Client>,
    pub message_count: usize,
    pub next_message_id: MessageId,
}

#[derive(Debug, Clone)]
pub struct ChatRoom {
    id: RoomId,
    created_at: Timestamp,
    clients: HashMap<ClientId, Client>,
    messages: Vec<Message>,
    next_message_id: MessageId,
}

impl ChatRoom {
    pub fn new(id: RoomId, created_at: Timestamp) -> Self {
        Self {
            id,
            created_at,
            clients: HashMap::new(),
            messages: Vec::new(),
            next_message_id: MessageId::FIRST,
        }
    }

    pub fn id(&self) -> &RoomId {
        &self.id
    }

    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }

    pub fn client(&self, client_id: &ClientId) -> Option<&Client> {
        self.clients.get(client_id)
    }

    pub fn is_joined(&self, client_id: &ClientId) -> bool {
        self.clients.contains_key(client_id)
    }

    pub fn client_count(&self) -> usize {
        self.clients.len()
    }

    /// The full log in append (= ascending id) order
    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    /// Register a new client under a unique name derived from `requested_name`
    /// and announce it with a system message.
    pub fn join(&mut self, requested_name: &str, joined_at: Timestamp) -> &Client {
        let assigned = ClientId::new(assign_name(
            requested_name,
            |candidate| self.clients.contains_key(candidate),
            joined_at.value(),
        ));

        let client = Client {
            id: assigned.clone(),
            requested_name: requested_name.to_string(),
            last_seen_message_id: self.next_message_id.prev(),
            joined_at,
        };
        self.clients.insert(assigned.clone(), client);

        self.append(
            Sender::System,
            MessageContent::new(format!("User {} joined the chat", assigned)),
            joined_at,
        );

        &self.clients[&assigned]
    }

    /// Append a chat message from a joined client.
    pub fn send(
        &mut self,
        from: &ClientId,
        content: MessageContent,
        sent_at: Timestamp,
    ) -> Result<&Message, RoomError> {
        if !self.clients.contains_key(from) {
            return Err(RoomError::NotRegistered(from.clone()));
        }

        let id = self.append(Sender::Client(from.clone()), content, sent_at);
        if let Some(client) = self.clients.get_mut(from) {
            client.last_seen_message_id = id;
        }

        Ok(&self.messages[self.messages.len() - 1])
    }

    /// Messages after `last_seen` that `client_id` did not author.
    ///
    /// The watermark advances over the caller's own messages too, so the next
    /// poll never rescans them.
    pub fn updates_since(
        &self,
        client_id: &ClientId,
        last_seen: MessageId,
    ) -> Result<Updates, RoomError> {
        if !self.clients.contains_key(client_id) {
            return Err(RoomError::UnknownClient(client_id.clone()));
        }

        // ids are dense and start at 1, so the index of id n is n - 1
        let start = usize::try_from(last_seen.value())
            .unwrap_or(usize::MAX)
            .min(self.messages.len());
        let newer = &self.messages[start..];

        let watermark = newer.last().map_or(last_seen, |message| message.id);
        let messages = newer
            .iter()
            .filter(|message| !message.sender.is_client(client_id))
            .cloned()
            .collect();

        Ok(Updates {
            messages,
            watermark,
        })
    }

    /// Remove a client and announce it. Returns the notice, or `None` if the
    /// client was not joined (no-op).
    pub fn leave(&mut self, client_id: &ClientId, left_at: Timestamp) -> Option<&Message> {
        self.clients.remove(client_id)?;

        self.append(
            Sender::System,
            MessageContent::new(format!("User {} left the chat", client_id)),
            left_at,
        );

        self.messages.last()
    }

    pub fn snapshot(&self) -> RoomSnapshot {
        let mut clients: Vec<Client> = self.clients.values().cloned().collect();
        clients.sort_by(|a, b| a.id.cmp(&b.id));

        RoomSnapshot {
            room_id: self.id.clone(),
            created_at: self.created_at,
            clients,
            message_count: self.messages.len(),
            next_message_id: self.next_message_id,
        }
    }

    fn append(
        &mut self,
        sender: Sender,
        content: MessageContent,
        timestamp: Timestamp,
    ) -> MessageId {
        let id = self.next_message_id;
        self.messages.push(Message {
            id,
            sender,
            content,
            timestamp,
        });
        self.next_message_id = id.next();
        id
    }
}
