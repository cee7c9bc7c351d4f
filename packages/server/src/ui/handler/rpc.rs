//! RPC dispatcher.
//!
//! A single `POST /rpc` endpoint receives `{"method": ..., "params": ...}`,
//! routes it to the matching use case by method name, and wraps the reply
//! (or error) in an `RpcResponse`.

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode};
use serde::{Serialize, de::DeserializeOwned};
use thiserror::Error;

use rendezvous_shared::rpc::{
    JoinArgs, JoinReply, LeaveArgs, LeaveReply, RpcMethod, RpcRequest, RpcResponse, SendArgs,
    SendReply, UpdateArgs, UpdateReply,
};

use crate::{
    domain::{ClientId, MessageContent, MessageId},
    ui::state::AppState,
    usecase::{GetUpdatesError, SendMessageError},
};

/// Reply text of a successful (or no-op) Leave
const LEAVE_REPLY_MESSAGE: &str = "Disconnected";

/// Errors surfaced to the RPC caller
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("unknown method: {0}")]
    UnknownMethod(String),

    #[error("invalid params: {0}")]
    InvalidParams(#[source] serde_json::Error),

    #[error("failed to encode reply: {0}")]
    Encode(#[source] serde_json::Error),

    #[error(transparent)]
    Send(#[from] SendMessageError),

    #[error(transparent)]
    GetUpdates(#[from] GetUpdatesError),
}

impl RpcError {
    fn status_code(&self) -> StatusCode {
        match self {
            RpcError::UnknownMethod(_) | RpcError::InvalidParams(_) => StatusCode::BAD_REQUEST,
            RpcError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
            RpcError::Send(SendMessageError::NotRegistered(_))
            | RpcError::GetUpdates(GetUpdatesError::UnknownClient(_)) => StatusCode::NOT_FOUND,
        }
    }
}

/// `POST /rpc`
pub async fn rpc_handler(
    State(state): State<Arc<AppState>>,
    Json(request): Json<RpcRequest>,
) -> (StatusCode, Json<RpcResponse>) {
    match dispatch(&state, request).await {
        Ok(result) => (StatusCode::OK, Json(RpcResponse::ok(result))),
        Err(e) => {
            let status = e.status_code();
            tracing::warn!(status = %status, "RPC call failed: {}", e);
            (status, Json(RpcResponse::err(e.to_string())))
        }
    }
}

async fn dispatch(state: &AppState, request: RpcRequest) -> Result<serde_json::Value, RpcError> {
    let method = RpcMethod::from_name(&request.method)
        .ok_or_else(|| RpcError::UnknownMethod(request.method.clone()))?;
    tracing::debug!(method = method.as_str(), "RPC call");

    match method {
        RpcMethod::Join => encode(join(state, parse_params(request.params)?).await),
        RpcMethod::Send => encode(send(state, parse_params(request.params)?).await?),
        RpcMethod::GetUpdates => encode(get_updates(state, parse_params(request.params)?).await?),
        RpcMethod::Leave => encode(leave(state, parse_params(request.params)?).await),
    }
}

async fn join(state: &AppState, args: JoinArgs) -> JoinReply {
    let client = state.join_room_usecase.execute(args.requested_name).await;
    client.into()
}

async fn send(state: &AppState, args: SendArgs) -> Result<SendReply, RpcError> {
    state
        .send_message_usecase
        .execute(ClientId::new(args.id), MessageContent::new(args.message))
        .await?;
    Ok(SendReply { success: true })
}

async fn get_updates(state: &AppState, args: UpdateArgs) -> Result<UpdateReply, RpcError> {
    let updates = state
        .get_updates_usecase
        .execute(ClientId::new(args.id), cursor_from_wire(args.last_msg_id))
        .await?;
    Ok(updates.into())
}

async fn leave(state: &AppState, args: LeaveArgs) -> LeaveReply {
    state.leave_room_usecase.execute(ClientId::new(args.id)).await;
    LeaveReply {
        success: true,
        message: LEAVE_REPLY_MESSAGE.to_string(),
    }
}

/// Negative cursors are read as `MessageId::NONE`.
fn cursor_from_wire(last_msg_id: i64) -> MessageId {
    MessageId::new(u64::try_from(last_msg_id).unwrap_or(0))
}

/// Deserialize call params. Missing params are read as an empty object.
fn parse_params<T: DeserializeOwned>(params: serde_json::Value) -> Result<T, RpcError> {
    let params = match params {
        serde_json::Value::Null => serde_json::Value::Object(serde_json::Map::new()),
        other => other,
    };
    serde_json::from_value(params).map_err(RpcError::InvalidParams)
}

fn encode<T: Serialize>(reply: T) -> Result<serde_json::Value, RpcError> {
    serde_json::to_value(reply).map_err(RpcError::Encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_params_treats_null_as_empty_object() {
        // テスト項目: params が省略された場合も JoinArgs として解釈できる
        // given (前提条件):
        let params = serde_json::Value::Null;

        // when (操作):
        let args: JoinArgs = parse_params(params).unwrap();

        // then (期待する結果):
        assert_eq!(args.requested_name, "");
    }

    #[test]
    fn test_parse_params_rejects_missing_required_field() {
        // テスト項目: 必須フィールドがない params は InvalidParams になる
        // given (前提条件):
        let params = serde_json::json!({"message": "hi"});

        // when (操作):
        let result: Result<SendArgs, RpcError> = parse_params(params);

        // then (期待する結果):
        let error = result.unwrap_err();
        assert!(matches!(error, RpcError::InvalidParams(_)));
        assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_negative_cursor_reads_as_none() {
        // テスト項目: 負の lastMsgID は 0（未読なし）として扱われる
        // given (前提条件):
        let cursors = [-1, i64::MIN];

        // when (操作) / then (期待する結果):
        for cursor in cursors {
            assert_eq!(cursor_from_wire(cursor), MessageId::NONE);
        }
        assert_eq!(cursor_from_wire(7), MessageId::new(7));
    }

    #[test]
    fn test_domain_errors_map_to_not_found() {
        // テスト項目: NotRegistered / UnknownClient は 404 とドメインのエラーメッセージになる
        // given (前提条件):
        let send_error = RpcError::from(SendMessageError::NotRegistered("ghost".to_string()));
        let updates_error = RpcError::from(GetUpdatesError::UnknownClient("ghost".to_string()));

        // when (操作) / then (期待する結果):
        assert_eq!(send_error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(send_error.to_string(), "user not registered");
        assert_eq!(updates_error.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(updates_error.to_string(), "unknown client");
    }
}
