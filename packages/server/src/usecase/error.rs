//! UseCase エラー型

use thiserror::Error;

use crate::domain::{RepositoryError, RoomError};

/// メッセージ送信のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// 送信者が参加していない
    #[error("user not registered")]
    NotRegistered(String),
}

impl From<RepositoryError> for SendMessageError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Room(RoomError::NotRegistered(id))
            | RepositoryError::Room(RoomError::UnknownClient(id)) => {
                SendMessageError::NotRegistered(id.into_string())
            }
        }
    }
}

/// 新着メッセージ取得のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GetUpdatesError {
    /// ポーリングしたクライアントが参加していない
    #[error("unknown client")]
    UnknownClient(String),
}

impl From<RepositoryError> for GetUpdatesError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::Room(RoomError::UnknownClient(id))
            | RepositoryError::Room(RoomError::NotRegistered(id)) => {
                GetUpdatesError::UnknownClient(id.into_string())
            }
        }
    }
}
