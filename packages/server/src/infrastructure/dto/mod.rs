//! Data Transfer Objects (DTOs) for the chat room.
//!
//! - `http`: debug / diagnostics response DTOs
//! - `conversion`: domain entities to RPC wire types
//!
//! The RPC wire types themselves live in `rendezvous_shared::rpc` so the
//! client can reuse them.

pub mod conversion;
pub mod http;
