//! UseCase: ルーム状態取得（デバッグ用）

use std::sync::Arc;

use crate::domain::{RoomRepository, RoomSnapshot};

/// ルーム状態取得のユースケース
pub struct GetRoomStateUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetRoomStateUseCase {
    /// 新しい GetRoomStateUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// ルームの読み取り専用スナップショットを取得
    pub async fn execute(&self) -> RoomSnapshot {
        self.repository.snapshot().await
    }
}
