//! Polling chat room server.
//!
//! Clients join the room, send messages, and poll for new ones over a
//! JSON RPC endpoint (`POST /rpc`).
//!
//! Run with:
//! ```not_rust
//! cargo run --bin rendezvous-server
//! cargo run --bin rendezvous-server -- --host 0.0.0.0 --port 3000
//! ```

use std::sync::Arc;

use clap::Parser;
use rendezvous_server::{
    domain::{ChatRoom, RoomIdFactory, Timestamp},
    infrastructure::repository::InMemoryRoomRepository,
    ui::Server,
    usecase::{
        GetRoomStateUseCase, GetUpdatesUseCase, JoinRoomUseCase, LeaveRoomUseCase,
        SendMessageUseCase,
    },
};
use rendezvous_shared::{
    logger::setup_logger,
    time::{Clock, SystemClock},
};

#[derive(Parser, Debug)]
#[command(name = "rendezvous-server")]
#[command(about = "Polling chat room server", long_about = None)]
struct Args {
    /// Host address to bind the server to
    #[arg(short = 'H', long, default_value = "127.0.0.1")]
    host: String,

    /// Port number to bind the server to
    #[arg(short = 'p', long, default_value = "1234")]
    port: u16,
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    setup_logger("rendezvous_server", env!("CARGO_BIN_NAME"), "debug");

    let args = Args::parse();

    // Initialize dependencies in order:
    // 1. Clock
    // 2. Repository
    // 3. UseCases
    // 4. Server

    // 1. Create Clock
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    // 2. Create Repository (in-memory room)
    let room = ChatRoom::new(RoomIdFactory::generate(), Timestamp::new(clock.now_millis()));
    tracing::info!("Room {} created!", room.id());
    let repository = Arc::new(InMemoryRoomRepository::new(room));

    // 3. Create UseCases
    let join_room_usecase = Arc::new(JoinRoomUseCase::new(repository.clone(), clock.clone()));
    let send_message_usecase = Arc::new(SendMessageUseCase::new(repository.clone(), clock.clone()));
    let get_updates_usecase = Arc::new(GetUpdatesUseCase::new(repository.clone()));
    let leave_room_usecase = Arc::new(LeaveRoomUseCase::new(repository.clone(), clock.clone()));
    let get_room_state_usecase = Arc::new(GetRoomStateUseCase::new(repository.clone()));

    // 4. Create and run the server
    let server = Server::new(
        join_room_usecase,
        send_message_usecase,
        get_updates_usecase,
        leave_room_usecase,
        get_room_state_usecase,
    );
    if let Err(e) = server.run(args.host, args.port).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
