//! Interactive chat room client.
//!
//! Joins the room once, polls for new messages on a fixed interval, sends
//! each entered line, and leaves on exit.

mod domain;
mod error;
mod formatter;
mod rpc;
mod runner;
mod session;
mod ui;

pub use error::ClientError;
pub use rpc::RpcClient;
pub use runner::run_client;
