//! Polling chat room server library.
//!
//! Clients join a single shared room, send messages, and poll for messages
//! they have not seen yet. The room state lives behind one readers-writer
//! lock and is reached through an HTTP/JSON RPC endpoint.

// layers
pub mod domain;
pub mod infrastructure;
pub mod ui;
pub mod usecase;
