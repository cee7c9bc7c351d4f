//! Wire types of the chat room RPC calls.
//!
//! Every call is a `POST /rpc` carrying an [`RpcRequest`] envelope. The
//! server answers with an [`RpcResponse`] holding either `result` or `error`.

use serde::{Deserialize, Serialize};

/// Sender name used for room-generated messages
pub const SYSTEM_SENDER: &str = "System";

/// Chat room RPC methods
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcMethod {
    Join,
    Send,
    GetUpdates,
    Leave,
}

impl RpcMethod {
    /// Wire name of the method (e.g., "ChatRoom.Join")
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcMethod::Join => "ChatRoom.Join",
            RpcMethod::Send => "ChatRoom.Send",
            RpcMethod::GetUpdates => "ChatRoom.GetUpdates",
            RpcMethod::Leave => "ChatRoom.Leave",
        }
    }

    /// Resolve a wire name. Returns `None` for unknown methods.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "ChatRoom.Join" => Some(RpcMethod::Join),
            "ChatRoom.Send" => Some(RpcMethod::Send),
            "ChatRoom.GetUpdates" => Some(RpcMethod::GetUpdates),
            "ChatRoom.Leave" => Some(RpcMethod::Leave),
            _ => None,
        }
    }
}

/// Request envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcRequest {
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Reply envelope
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RpcResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl RpcResponse {
    pub fn ok(result: serde_json::Value) -> Self {
        Self {
            result: Some(result),
            error: None,
        }
    }

    pub fn err(message: impl Into<String>) -> Self {
        Self {
            result: None,
            error: Some(message.into()),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct JoinArgs {
    #[serde(rename = "requestedName", default)]
    pub requested_name: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JoinReply {
    pub success: bool,
    #[serde(rename = "assignedName")]
    pub assigned_name: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendArgs {
    pub id: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendReply {
    pub success: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateArgs {
    pub id: String,
    /// Signed on the wire; a negative cursor reads as "nothing consumed yet"
    #[serde(rename = "lastMsgID", default)]
    pub last_msg_id: i64,
}

/// One message as delivered to a polling client
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageInfo {
    pub id: u64,
    pub sender: String,
    pub content: String,
    /// RFC 3339 creation time
    pub time: String,
}

impl MessageInfo {
    /// Whether the message was generated by the room (join / leave notice)
    pub fn is_system(&self) -> bool {
        self.sender == SYSTEM_SENDER
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateReply {
    pub messages: Vec<MessageInfo>,
    #[serde(rename = "newMsgID")]
    pub new_msg_id: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveArgs {
    pub id: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LeaveReply {
    pub success: bool,
    pub message: String,
}
