//! Interactive chat room client.
//!
//! Joins the room over RPC, polls for new messages on a fixed interval and
//! sends each entered line. Type `exit` (or press Ctrl+D) to leave.
//!
//! Run with:
//! ```not_rust
//! cargo run --bin rendezvous-client -- --name Alice
//! cargo run --bin rendezvous-client -- -u http://127.0.0.1:1234
//! ```

use std::time::Duration;

use clap::Parser;

use rendezvous_shared::logger::setup_logger;

#[derive(Parser, Debug)]
#[command(name = "rendezvous-client")]
#[command(about = "Polling chat room client", long_about = None)]
struct Args {
    /// Chat server base URL
    #[arg(short = 'u', long, default_value = "http://127.0.0.1:1234")]
    url: String,

    /// Requested name (asked interactively when omitted)
    #[arg(short = 'n', long)]
    name: Option<String>,

    /// Interval between polls in milliseconds (must be at least 1)
    #[arg(long, default_value_t = 250, value_parser = clap::value_parser!(u64).range(1..))]
    poll_interval_ms: u64,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("rendezvous_client", env!("CARGO_BIN_NAME"), "info");

    let args = Args::parse();

    // Run the client
    if let Err(e) = rendezvous_client::run_client(
        args.url,
        args.name,
        Duration::from_millis(args.poll_interval_ms),
    )
    .await
    {
        tracing::error!("Client error: {}", e);
        std::process::exit(1);
    }
}
