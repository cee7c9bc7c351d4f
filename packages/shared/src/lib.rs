//! Code shared between the Rendezvous server and client.
//!
//! - `rpc`: request / reply types of the four chat room calls
//! - `logger`: tracing subscriber setup
//! - `time`: clock abstraction and timestamp formatting

pub mod logger;
pub mod rpc;
pub mod time;
