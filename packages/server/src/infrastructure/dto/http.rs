//! HTTP API response DTOs.

use serde::Serialize;

use rendezvous_shared::time::timestamp_to_jst_rfc3339;

use crate::domain::{Client, RoomSnapshot};

/// Joined client as shown by the debug endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClientDetailDto {
    pub id: String,
    pub requested_name: String,
    pub last_seen_message_id: u64,
    pub joined_at: String,
}

/// Room state as shown by the debug endpoint
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomSnapshotDto {
    pub id: String,
    pub created_at: String,
    pub clients: Vec<ClientDetailDto>,
    pub message_count: usize,
    pub next_message_id: u64,
}

impl From<Client> for ClientDetailDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id.into_string(),
            requested_name: client.requested_name,
            last_seen_message_id: client.last_seen_message_id.value(),
            joined_at: timestamp_to_jst_rfc3339(client.joined_at.value()),
        }
    }
}

impl From<RoomSnapshot> for RoomSnapshotDto {
    fn from(snapshot: RoomSnapshot) -> Self {
        Self {
            id: snapshot.room_id.as_str().to_string(),
            created_at: timestamp_to_jst_rfc3339(snapshot.created_at.value()),
            clients: snapshot.clients.into_iter().map(Into::into).collect(),
            message_count: snapshot.message_count,
            next_message_id: snapshot.next_message_id.value(),
        }
    }
}
