//! Shared application state.

use std::sync::Arc;

use crate::usecase::{
    GetRoomStateUseCase, GetUpdatesUseCase, JoinRoomUseCase, LeaveRoomUseCase,
    SendMessageUseCase,
};

/// Shared application state
pub struct AppState {
    /// JoinRoomUseCase（参加のユースケース）
    pub join_room_usecase: Arc<JoinRoomUseCase>,
    /// SendMessageUseCase（メッセージ送信のユースケース）
    pub send_message_usecase: Arc<SendMessageUseCase>,
    /// GetUpdatesUseCase（新着メッセージ取得のユースケース）
    pub get_updates_usecase: Arc<GetUpdatesUseCase>,
    /// LeaveRoomUseCase（退出のユースケース）
    pub leave_room_usecase: Arc<LeaveRoomUseCase>,
    /// GetRoomStateUseCase（ルーム状態取得のユースケース）
    pub get_room_state_usecase: Arc<GetRoomStateUseCase>,
}
