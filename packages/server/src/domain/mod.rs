//! Domain layer: chat room entities, value objects, and the room state machine.

pub mod entity;
pub mod error;
pub mod name_allocator;
pub mod repository;
pub mod room;
pub mod value_object;

pub use entity::{Client, Message, Sender};
pub use error::{RepositoryError, RoomError};
pub use repository::RoomRepository;
pub use room::{ChatRoom, RoomSnapshot, Updates};
pub use value_object::{ClientId, MessageContent, MessageId, RoomId, RoomIdFactory, Timestamp};

#[cfg(test)]
pub use repository::MockRoomRepository;
