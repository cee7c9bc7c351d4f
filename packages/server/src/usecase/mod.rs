//! UseCase layer: one use case per chat room operation.

mod error;
mod get_room_state;
mod get_updates;
mod join_room;
mod leave_room;
mod send_message;

pub use error::{GetUpdatesError, SendMessageError};
pub use get_room_state::GetRoomStateUseCase;
pub use get_updates::GetUpdatesUseCase;
pub use join_room::JoinRoomUseCase;
pub use leave_room::LeaveRoomUseCase;
pub use send_message::SendMessageUseCase;
