//! Request handlers.

mod http;
mod rpc;

pub use http::{debug_room_state, health_check};
pub use rpc::rpc_handler;
