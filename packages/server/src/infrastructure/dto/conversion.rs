//! Conversion logic between domain entities and RPC wire types.

use rendezvous_shared::{
    rpc::{JoinReply, MessageInfo, UpdateReply},
    time::timestamp_to_jst_rfc3339,
};

use crate::domain::{Client, Message, Updates};

// ========================================
// Domain Entity → DTO
// ========================================

impl From<Message> for MessageInfo {
    fn from(model: Message) -> Self {
        Self {
            id: model.id.value(),
            sender: model.sender.as_str().to_string(),
            content: model.content.into_string(),
            time: timestamp_to_jst_rfc3339(model.timestamp.value()),
        }
    }
}

impl From<Updates> for UpdateReply {
    fn from(model: Updates) -> Self {
        Self {
            messages: model.messages.into_iter().map(Into::into).collect(),
            new_msg_id: model.watermark.value(),
        }
    }
}

impl From<Client> for JoinReply {
    fn from(model: Client) -> Self {
        let assigned_name = model.id.into_string();
        Self {
            success: true,
            message: format!("Welcome! You are now {}", assigned_name),
            assigned_name,
        }
    }
}
