//! InMemory Room Repository 実装
//!
//! ドメイン層が定義する RoomRepository trait の具体的な実装。
//! `ChatRoom` ドメインモデルをひとつの readers-writer lock で保護します。
//!
//! ## ロックの規律
//!
//! - `join` / `send` / `leave` は write lock を取得し、存在確認と更新を不可分に行う
//! - `updates_since` / `snapshot` は read lock を取得し、互いに並行して実行できる
//! - lock を保持したまま `.await` することはない（`ChatRoom` は同期的）

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::{
    ChatRoom, Client, ClientId, Message, MessageContent, MessageId, RepositoryError,
    RoomRepository, RoomSnapshot, Timestamp, Updates,
};

/// インメモリ Room Repository 実装
///
/// ChatRoom ドメインモデルを保持し、ドメイン層の RoomRepository trait を実装します（依存性の逆転）。
pub struct InMemoryRoomRepository {
    /// ChatRoom ドメインモデル
    room: RwLock<ChatRoom>,
}

impl InMemoryRoomRepository {
    /// 新しい InMemoryRoomRepository を作成
    pub fn new(room: ChatRoom) -> Self {
        Self {
            room: RwLock::new(room),
        }
    }
}

#[async_trait]
impl RoomRepository for InMemoryRoomRepository {
    async fn join(&self, requested_name: String, joined_at: Timestamp) -> Client {
        let mut room = self.room.write().await;
        room.join(&requested_name, joined_at).clone()
    }

    async fn send(
        &self,
        from: &ClientId,
        content: MessageContent,
        sent_at: Timestamp,
    ) -> Result<Message, RepositoryError> {
        let mut room = self.room.write().await;
        let message = room.send(from, content, sent_at)?;
        Ok(message.clone())
    }

    async fn updates_since(
        &self,
        client_id: &ClientId,
        last_seen: MessageId,
    ) -> Result<Updates, RepositoryError> {
        let room = self.room.read().await;
        Ok(room.updates_since(client_id, last_seen)?)
    }

    async fn leave(&self, client_id: &ClientId, left_at: Timestamp) -> Option<Message> {
        let mut room = self.room.write().await;
        room.leave(client_id, left_at).cloned()
    }

    async fn snapshot(&self) -> RoomSnapshot {
        let room = self.room.read().await;
        room.snapshot()
    }
}
