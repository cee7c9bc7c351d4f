//! Domain error types.

use thiserror::Error;

use super::value_object::ClientId;

/// Errors raised by the room state machine.
///
/// Every variant is terminal for the single call that produced it and is
/// raised before any mutation takes place.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoomError {
    /// Send from an id that is not in the registry
    #[error("user not registered")]
    NotRegistered(ClientId),

    /// Poll from an id that is not in the registry
    #[error("unknown client")]
    UnknownClient(ClientId),
}

/// Errors raised by a `RoomRepository` implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepositoryError {
    #[error(transparent)]
    Room(#[from] RoomError),
}
