//! UseCase: 退出処理
//!
//! 退出は冪等。未参加のクライアントや 2 回目の退出は何もせずに成功する。

use std::sync::Arc;

use rendezvous_shared::time::Clock;

use crate::domain::{ClientId, RoomRepository, Timestamp};

/// 退出のユースケース
pub struct LeaveRoomUseCase {
    /// Repository（データアクセス層の抽象化）
    repository: Arc<dyn RoomRepository>,
    clock: Arc<dyn Clock>,
}

impl LeaveRoomUseCase {
    /// 新しい LeaveRoomUseCase を作成
    pub fn new(repository: Arc<dyn RoomRepository>, clock: Arc<dyn Clock>) -> Self {
        Self { repository, clock }
    }

    /// 退出を実行
    ///
    /// # Returns
    ///
    /// クライアントが削除された場合は `true`、参加していなかった場合は `false`
    pub async fn execute(&self, client_id: ClientId) -> bool {
        let left_at = Timestamp::new(self.clock.now_millis());
        match self.repository.leave(&client_id, left_at).await {
            Some(notice) => {
                tracing::info!(
                    client_id = %client_id,
                    notice_id = %notice.id,
                    "[LEAVE] {} disconnected",
                    client_id
                );
                true
            }
            None => {
                tracing::debug!(client_id = %client_id, "Leave for unknown client ignored");
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        domain::{ChatRoom, MessageId, RoomIdFactory},
        infrastructure::repository::InMemoryRoomRepository,
    };
    use rendezvous_shared::time::FixedClock;

    fn create_test_repository() -> Arc<InMemoryRoomRepository> {
        let room = ChatRoom::new(RoomIdFactory::generate(), Timestamp::new(0));
        Arc::new(InMemoryRoomRepository::new(room))
    }

    #[tokio::test]
    async fn test_leave_removes_client_and_announces() {
        // テスト項目: 退出するとクライアントが削除され、退出通知が他の参加者に届く
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = LeaveRoomUseCase::new(repository.clone(), Arc::new(FixedClock::new(0)));
        let alice = repository.join("alice".to_string(), Timestamp::new(0)).await;
        let bob = repository.join("bob".to_string(), Timestamp::new(0)).await;

        // when (操作):
        let removed = usecase.execute(alice.id.clone()).await;

        // then (期待する結果):
        assert!(removed);
        let updates = repository
            .updates_since(&bob.id, MessageId::new(2))
            .await
            .unwrap();
        assert_eq!(updates.messages.len(), 1);
        assert_eq!(
            updates.messages[0].content.as_str(),
            "User alice left the chat"
        );
        assert_eq!(repository.snapshot().await.clients.len(), 1);
    }

    #[tokio::test]
    async fn test_leave_twice_is_noop() {
        // テスト項目: 2 回目の退出は何も記録せずに成功する
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = LeaveRoomUseCase::new(repository.clone(), Arc::new(FixedClock::new(0)));
        let alice = repository.join("alice".to_string(), Timestamp::new(0)).await;

        // when (操作):
        let first = usecase.execute(alice.id.clone()).await;
        let second = usecase.execute(alice.id.clone()).await;

        // then (期待する結果):
        assert!(first);
        assert!(!second);
        assert_eq!(repository.snapshot().await.message_count, 2);
    }

    #[tokio::test]
    async fn test_leave_never_joined_is_noop() {
        // テスト項目: 参加していないクライアントの退出は何も記録しない
        // given (前提条件):
        let repository = create_test_repository();
        let usecase = LeaveRoomUseCase::new(repository.clone(), Arc::new(FixedClock::new(0)));

        // when (操作):
        let removed = usecase.execute(ClientId::new("ghost")).await;

        // then (期待する結果):
        assert!(!removed);
        assert_eq!(repository.snapshot().await.message_count, 0);
    }
}
