//! RPC client for the chat room server.

use serde::{Serialize, de::DeserializeOwned};

use rendezvous_shared::rpc::{
    JoinArgs, JoinReply, LeaveArgs, LeaveReply, RpcMethod, RpcRequest, RpcResponse, SendArgs,
    SendReply, UpdateArgs, UpdateReply,
};

use crate::error::ClientError;

/// Calls the four chat room methods over `POST /rpc`
#[derive(Debug, Clone)]
pub struct RpcClient {
    http: reqwest::Client,
    endpoint: String,
}

impl RpcClient {
    /// Create a client for the server at `base_url` (e.g., "http://127.0.0.1:1234")
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: format!("{}/rpc", base_url.trim_end_matches('/')),
        }
    }

    pub async fn join(&self, requested_name: &str) -> Result<JoinReply, ClientError> {
        let args = JoinArgs {
            requested_name: requested_name.to_string(),
        };
        self.call(RpcMethod::Join, &args).await
    }

    pub async fn send(&self, id: &str, message: &str) -> Result<SendReply, ClientError> {
        let args = SendArgs {
            id: id.to_string(),
            message: message.to_string(),
        };
        self.call(RpcMethod::Send, &args).await
    }

    pub async fn get_updates(&self, id: &str, last_msg_id: u64) -> Result<UpdateReply, ClientError> {
        let args = UpdateArgs {
            id: id.to_string(),
            last_msg_id: i64::try_from(last_msg_id).unwrap_or(i64::MAX),
        };
        self.call(RpcMethod::GetUpdates, &args).await
    }

    pub async fn leave(&self, id: &str) -> Result<LeaveReply, ClientError> {
        let args = LeaveArgs { id: id.to_string() };
        self.call(RpcMethod::Leave, &args).await
    }

    async fn call<P, R>(&self, method: RpcMethod, params: &P) -> Result<R, ClientError>
    where
        P: Serialize,
        R: DeserializeOwned,
    {
        let request = RpcRequest {
            method: method.as_str().to_string(),
            params: serde_json::to_value(params)?,
        };

        let response: RpcResponse = self
            .http
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?
            .json()
            .await?;

        match response {
            RpcResponse {
                error: Some(error), ..
            } => Err(ClientError::Rpc(error)),
            RpcResponse {
                result: Some(result),
                ..
            } => Ok(serde_json::from_value(result)?),
            RpcResponse { .. } => Err(ClientError::Rpc(format!(
                "empty reply to {}",
                method.as_str()
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::json;

    use super::*;

    /// Serve a stub `/rpc` that echoes the method name back and fails sends
    async fn start_stub_server() -> String {
        async fn stub(Json(request): Json<RpcRequest>) -> (StatusCode, Json<RpcResponse>) {
            match request.method.as_str() {
                "ChatRoom.Join" => {
                    let name = request.params["requestedName"].as_str().unwrap_or_default();
                    (
                        StatusCode::OK,
                        Json(RpcResponse::ok(json!({
                            "success": true,
                            "assignedName": format!("{}1", name),
                            "message": format!("Welcome! You are now {}1", name),
                        }))),
                    )
                }
                "ChatRoom.GetUpdates" => (
                    StatusCode::OK,
                    Json(RpcResponse::ok(json!({
                        "messages": [{
                            "id": 5,
                            "sender": "System",
                            "content": "User bob joined the chat",
                            "time": "2023-01-01T00:00:00+09:00",
                        }],
                        "newMsgID": request.params["lastMsgID"].as_u64().unwrap_or(0) + 5,
                    }))),
                ),
                _ => (
                    StatusCode::NOT_FOUND,
                    Json(RpcResponse::err("user not registered")),
                ),
            }
        }

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, Router::new().route("/rpc", post(stub)))
                .await
                .unwrap();
        });
        format!("http://{}/", addr)
    }

    #[tokio::test]
    async fn test_join_decodes_reply() {
        // テスト項目: Join の応答が JoinReply にデコードされる
        // given (前提条件):
        let client = RpcClient::new(&start_stub_server().await);

        // when (操作):
        let reply = client.join("alice").await.unwrap();

        // then (期待する結果):
        assert!(reply.success);
        assert_eq!(reply.assigned_name, "alice1");
        assert_eq!(reply.message, "Welcome! You are now alice1");
    }

    #[tokio::test]
    async fn test_get_updates_sends_cursor() {
        // テスト項目: GetUpdates でカーソルが lastMsgID として送信される
        // given (前提条件):
        let client = RpcClient::new(&start_stub_server().await);

        // when (操作):
        let reply = client.get_updates("alice", 10).await.unwrap();

        // then (期待する結果):
        assert_eq!(reply.new_msg_id, 15);
        assert_eq!(reply.messages.len(), 1);
        assert!(reply.messages[0].is_system());
    }

    #[tokio::test]
    async fn test_server_error_becomes_rpc_error() {
        // テスト項目: サーバーのエラー応答は ClientError::Rpc になる
        // given (前提条件):
        let client = RpcClient::new(&start_stub_server().await);

        // when (操作):
        let result = client.send("ghost", "boo").await;

        // then (期待する結果):
        match result {
            Err(ClientError::Rpc(message)) => assert_eq!(message, "user not registered"),
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_server_is_connection_error() {
        // テスト項目: 接続できないサーバーへの呼び出しは ClientError::Connection になる
        // given (前提条件):
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let client = RpcClient::new(&format!("http://{}", addr));

        // when (操作):
        let result = client.leave("alice").await;

        // then (期待する結果):
        assert!(matches!(result, Err(ClientError::Connection(_))));
    }
}
