//! UseCase: メッセージ送信処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - SendMessageUseCase::execute() メソッド
//! - メッセージのログへの追加と送信者の last_seen_message_id の更新
//!
//! ### なぜこのテストが必要か
//! - 未参加のクライアントからの送信を拒否し、状態を変更しないことを保証
//! - 空のメッセージも拒否されないことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：参加中のクライアントからの送信
//! - 異常系：未参加のクライアントからの送信
//! - エッジケース：空のメッセージ

use std::sync::Arc;

use rendezvous_shared::time::Clock;

use crate::domain::{ClientId, Message, MessageContent, RoomRepository, Timestamp};

use super::error::SendMessageError;

/// メッセージ送信のユースケース
pub struct SendMessageUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl SendMessageUseCase {
    /// 新しい SendMessageUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// メッセージ送信を実行
    ///
    /// # Arguments
    ///
    /// * `from_client_id` - メッセージ送信者のクライアント ID（Domain Model）
    /// * `content` - メッセージ内容（Domain Model）
    ///
    /// # Returns
    ///
    /// * `Ok(Message)` - ログに追加されたメッセージ
    /// * `Err(SendMessageError)` - 送信失敗
    pub async fn execute(
        &self,
        from_client_id: ClientId,
        content: MessageContent,
    ) -> Result<Message, SendMessageError> {
        let sent_at = Timestamp::new(self.clock.now_millis());

        let message = self
            .repository
            .send(&from_client_id, content, sent_at)
            .await
            .inspect_err(|_| {
                tracing::warn!(
                    client_id = %from_client_id,
                    "Send from unregistered client rejected"
                );
            })?;

        tracing::info!(
            client_id = %from_client_id,
            message_id = %message.id,
            "[MSG] {} → {}",
            from_client_id,
            message.content.as_str()
        );

        Ok(message)
    }
}
