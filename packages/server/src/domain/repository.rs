//! Repository trait 定義
//!
//! ドメイン層が必要とするデータアクセスのインターフェースを定義します。
//! 具体的な実装は Infrastructure 層が提供します（依存性の逆転）。

use async_trait::async_trait;

use super::{
    Client, ClientId, Message, MessageContent, MessageId, RepositoryError, RoomSnapshot,
    Timestamp, Updates,
};

/// Room Repository trait
///
/// 各メソッドは Room に対するひとつの不可分な操作です。
/// 実装は、存在確認と更新の間に他の操作が割り込まないことを保証しなければなりません。
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RoomRepository: Send + Sync {
    /// 名前を割り当てて参加者を追加し、参加通知を記録
    async fn join(&self, requested_name: String, joined_at: Timestamp) -> Client;

    /// 参加者のメッセージを記録
    async fn send(
        &self,
        from: &ClientId,
        content: MessageContent,
        sent_at: Timestamp,
    ) -> Result<Message, RepositoryError>;

    /// `last_seen` より新しく、自分以外が送ったメッセージを取得
    async fn updates_since(
        &self,
        client_id: &ClientId,
        last_seen: MessageId,
    ) -> Result<Updates, RepositoryError>;

    /// 参加者を削除し、退出通知を記録（未参加なら `None`）
    async fn leave(&self, client_id: &ClientId, left_at: Timestamp) -> Option<Message>;

    /// Room の読み取り専用スナップショットを取得
    async fn snapshot(&self) -> RoomSnapshot;
}
