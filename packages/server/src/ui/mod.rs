//! HTTP/JSON RPC server for the chat room.

mod handler;
mod server;
mod signal;
pub mod state;

pub use server::Server;
