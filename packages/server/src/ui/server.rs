//! Server execution logic.

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::usecase::{
    GetRoomStateUseCase, GetUpdatesUseCase, JoinRoomUseCase, LeaveRoomUseCase,
    SendMessageUseCase,
};

use super::{
    handler::{debug_room_state, health_check, rpc_handler},
    signal::shutdown_signal,
    state::AppState,
};

/// Chat room RPC server
///
/// This struct encapsulates the use cases and provides methods to run the server.
///
/// # Example
///
/// ```ignore
/// let server = Server::new(
///     join_room_usecase,
///     send_message_usecase,
///     get_updates_usecase,
///     leave_room_usecase,
///     get_room_state_usecase,
/// );
/// server.run("127.0.0.1".to_string(), 1234).await?;
/// ```
pub struct Server {
    /// JoinRoomUseCase（参加のユースケース）
    join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    send_message_usecase: Arc<SendMessageUseCase>,
    /// GetUpdatesUseCase（新着メッセージ取得のユースケース）
    get_updates_usecase: Arc<GetUpdatesUseCase>,
    /// LeaveRoomUseCase（退出のユースケース）
    leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    get_room_state_usecase: Arc<GetRoomStateUseCase>,
}

impl Server {
    /// Create a new Server instance
    ///
    /// # Arguments
    ///
    /// * `join_room_usecase` - UseCase for joining the room
    /// * `send_message_usecase` - UseCase for message sending
    /// * `get_updates_usecase` - UseCase for polling new messages
    /// * `leave_room_usecase` - UseCase for leaving the room
    /// * `get_room_state_usecase` - UseCase for getting room state
    pub fn new(
        join_room_usecase: Arc<JoinRoomUseCase>,
        send_message_usecase: Arc<SendMessageUseCase>,
        get_updates_usecase: Arc<GetUpdatesUseCase>,
        leave_room_usecase: Arc<LeaveRoomUseCase>,
        get_room_state_usecase: Arc<GetRoomStateUseCase>,
    ) -> Self {
        Self {
            join_room_usecase,
            send_message_usecase,
            get_updates_usecase,
            leave_room_usecase,
            get_room_state_usecase,
        }
    }

    /// Build the router with all endpoints
    pub fn router(self) -> Router {
        let app_state = Arc::new(AppState {
            join_room_usecase: self.join_room_usecase,
            send_message_usecase: self.send_message_usecase,
            get_updates_usecase: self.get_updates_usecase,
            leave_room_usecase: self.leave_room_usecase,
            get_room_state_usecase: self.get_room_state_usecase,
        });

        Router::new()
            // RPC エンドポイント
            .route("/rpc", post(rpc_handler))
            // HTTP エンドポイント
            .route("/debug/room", get(debug_room_state))
            .route("/api/health", get(health_check))
            .layer(TraceLayer::new_for_http())
            .with_state(app_state)
    }

    /// Run the chat room server
    ///
    /// # Arguments
    ///
    /// * `host` - The host address to bind to (e.g., "127.0.0.1")
    /// * `port` - The port number to bind to (e.g., 1234)
    ///
    /// # Errors
    ///
    /// Returns an error if the server fails to bind to the specified address or
    /// if there's an error during server execution.
    pub async fn run(self, host: String, port: u16) -> Result<(), Box<dyn std::error::Error>> {
        // Bind the server to the host and port
        let bind_addr = format!("{}:{}", host, port);
        let listener = TcpListener::bind(&bind_addr).await?;

        tracing::info!("Chat server listening on {}", listener.local_addr()?);
        tracing::info!("RPC endpoint: http://{}/rpc", bind_addr);
        tracing::info!("Press Ctrl+C to shutdown gracefully");

        // Set up graceful shutdown signal handler
        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("Server shutdown complete");

        Ok(())
    }
}
