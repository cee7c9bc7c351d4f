//! UseCase: 参加処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - JoinRoomUseCase::execute() メソッド
//! - 名前の割り当て（重複時のサフィックス付与、空の名前の置き換え）
//!
//! ### なぜこのテストが必要か
//! - 参加中のクライアント名は常に一意でなければならない
//! - 参加通知が System メッセージとして記録されることを保証
//!
//! ### どのような状況を想定しているか
//! - 正常系：新しい名前での参加
//! - エッジケース：同じ名前での連続参加、空の名前での参加

use std::sync::Arc;

use rendezvous_shared::time::Clock;

use crate::domain::{Client, RoomRepository, Timestamp};

/// 参加のユースケース
pub struct JoinRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl JoinRoomUseCase {
    /// 新しい JoinRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 参加を実行
    ///
    /// 名前の衝突は常にサフィックスで解決されるため、失敗しない。
    ///
    /// # Arguments
    ///
    /// * `requested_name` - 希望する表示名（空の場合は "Guest"）
    ///
    /// # Returns
    ///
    /// 登録されたクライアント（割り当てられた名前を含む）
    pub async fn execute(&self, requested_name: String) -> Client {
        let joined_at = Timestamp::new(self.clock.now_millis());
        let client = self.repository.join(requested_name, joined_at).await;

        tracing::info!(
            client_id = %client.id,
            requested_name = %client.requested_name,
            "[JOIN] {} connected",
            client.id
        );

        client
    }
}
