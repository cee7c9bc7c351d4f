//! UseCase: 新着メッセージ取得処理
//!
//! ## テスト実装の作業記録
//!
//! ### 何をテストしているか
//! - GetUpdatesUseCase::execute() メソッド
//! - カーソルより新しいメッセージの取得と自分のメッセージの除外（no-echo）
//!
//! ### なぜこのテストが必要か
//! - 自分のメッセージは返さないが、ウォーターマークはそれを越えて進むことを保証
//! - カーソルを進めながらのポーリングで全メッセージが一度ずつ届くことを確認
//!
//! ### どのような状況を想定しているか
//! - 正常系：他者のメッセージと System メッセージの取得
//! - 異常系：未参加のクライアントからのポーリング
//! - エッジケース：新着なし

use std::sync::Arc;

use crate::domain::{ClientId, MessageId, RoomRepository, Updates};

use super::error::GetUpdatesError;

/// 新着メッセージ取得のユースケース
pub struct GetUpdatesUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
}

impl GetUpdatesUseCase {
    /// 新しい GetUpdatesUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>) -> Self {
        Self { repository }
    }

    /// 新着メッセージ取得を実行
    ///
    /// # Arguments
    ///
    /// * `client_id` - ポーリングするクライアントの ID
    /// * `last_seen` - 既に受け取った最大のメッセージ ID
    ///
    /// # Returns
    ///
    /// * `Ok(Updates)` - 新着メッセージと次回のカーソル
    /// * `Err(GetUpdatesError)` - クライアントが参加していない
    pub async fn execute(
        &self,
        client_id: ClientId,
        last_seen: MessageId,
    ) -> Result<Updates, GetUpdatesError> {
        let updates = self
            .repository
            .updates_since(&client_id, last_seen)
            .await?;

        if !updates.messages.is_empty() {
            tracing::debug!(
                client_id = %client_id,
                count = updates.messages.len(),
                watermark = %updates.watermark,
                "Delivering updates"
            );
        }

        Ok(updates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatRoom, MessageContent, MockRoomRepository, RoomIdFactory, Timestamp},
        infrastructure::repository::InMemoryRoomRepository,
    };

    fn create_test_repository() -> Arc<InMemoryRoomRepository> {
        let room = ChatRoom::new(RoomIdFactory::generate(), Timestamp::new(0));
        Arc::new(InMemoryRoomRepository::new(room))
    }

    #[tokio::test]
    async fn test_no_echo_with_advancing_watermark() {
        // テスト項目: 自分の送信メッセージは返されず、ウォーターマークはその ID 以上になる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = GetUpdatesUseCase::new(repository.clone());
        let alice = repository.join("alice".to_string(), Timestamp::new(0)).await;
        let own = repository
            .send(&alice.id, MessageContent::new("mine"), Timestamp::new(0))
            .await
            .unwrap();

        // when (操作):
        let updates = usecase
            .execute(alice.id.clone(), MessageId::NONE)
            .await
            .unwrap();

        // then (期待する結果):
        assert!(updates.messages.iter().all(|m| m.id != own.id));
        assert!(updates.watermark >= own.id);
    }

    #[tokio::test]
    async fn test_guest_scenario() {
        // テスト項目: Guest と Guest1 が参加し、Guest の "hi" が Guest1 に届く
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = GetUpdatesUseCase::new(repository.clone());
        let guest = repository.join(String::new(), Timestamp::new(0)).await;
        let guest1 = repository.join("Guest".to_string(), Timestamp::new(0)).await;
        repository
            .send(&guest.id, MessageContent::new("hi"), Timestamp::new(0))
            .await
            .unwrap();

        // when (操作):
        let updates = usecase
            .execute(guest1.id.clone(), MessageId::NONE)
            .await
            .unwrap();

        // then (期待する結果):
        assert_eq!(guest.id.as_str(), "Guest");
        assert_eq!(guest1.id.as_str(), "Guest1");
        let contents: Vec<&str> = updates
            .messages
            .iter()
            .map(|m| m.content.as_str())
            .collect();
        assert_eq!(
            contents,
            vec![
                "User Guest joined the chat",
                "User Guest1 joined the chat",
                "hi"
            ]
        );
        assert_eq!(updates.watermark.value(), 3);
    }

    #[tokio::test]
    async fn test_no_new_messages_keeps_cursor() {
        // テスト項目: 新着がない場合は空のリストと入力したカーソルが返る
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = GetUpdatesUseCase::new(repository.clone());
        let alice = repository.join("alice".to_string(), Timestamp::new(0)).await;

        // when (操作):
        let updates = usecase
            .execute(alice.id, MessageId::new(1))
            .await
            .unwrap();

        // then (期待する結果):
        assert!(updates.messages.is_empty());
        assert_eq!(updates.watermark.value(), 1);
    }

    #[tokio::test]
    async fn test_unknown_client() {
        // テスト項目: 未参加のクライアントからのポーリングは UnknownClient になる
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = GetUpdatesUseCase::new(repository);

        // when (操作):
        let result = usecase
            .execute(ClientId::new("ghost"), MessageId::NONE)
            .await;

        // then (期待する結果):
        assert_eq!(
            result,
            Err(GetUpdatesError::UnknownClient("ghost".to_string()))
        );
    }

    #[tokio::test]
    async fn test_cursor_is_forwarded_to_repository() {
        // テスト項目: カーソルがそのまま Repository に渡される
        // given (前提条件):
        let mut repository = MockRoomRepository::new();
        repository
            .expect_updates_since()
            .withf(|client_id, last_seen| client_id.as_str() == "alice" && last_seen.value() == 9)
            .times(1)
            .returning(|_, last_seen| {
                Ok(Updates {
                    messages: Vec::new(),
                    watermark: last_seen,
                })
            });
        let usecase = GetUpdatesUseCase::new(Arc::new(repository));

        // when (操作):
        let result = usecase
            .execute(ClientId::new("alice"), MessageId::new(9))
            .await;

        // then (期待する結果):
        assert_eq!(result.unwrap().watermark.value(), 9);
    }
}
