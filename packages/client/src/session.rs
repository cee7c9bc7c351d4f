//! Polling client session management.

use std::time::Duration;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tokio::{sync::mpsc, time::MissedTickBehavior};

use crate::{
    domain::{InputAction, parse_input},
    error::ClientError,
    formatter::MessageFormatter,
    rpc::RpcClient,
    ui::{print_with_prompt, prompt},
};

/// How a session ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SessionEnd {
    /// The user typed "exit" or closed the input
    UserExit,
    /// A poll or a send failed
    ConnectionLost,
}

/// Run one chat session: join, poll and send until exit, then leave.
pub async fn run_client_session(
    client: RpcClient,
    requested_name: &str,
    poll_interval: Duration,
) -> Result<(), ClientError> {
    let reply = client.join(requested_name).await?;
    if !reply.success {
        return Err(ClientError::JoinRejected(reply.message));
    }
    let name = reply.assigned_name;

    tracing::info!("Joined the chat room as '{}'", name);
    print!("{}", MessageFormatter::format_welcome(&reply.message));

    // Spawn a task to poll for new messages
    let poll_client = client.clone();
    let poll_name = name.clone();
    let mut poll_task = tokio::spawn(async move {
        let mut interval = tokio::time::interval(poll_interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut cursor = 0;

        loop {
            interval.tick().await;
            match poll_client.get_updates(&poll_name, cursor).await {
                Ok(updates) => {
                    for message in &updates.messages {
                        let formatted = MessageFormatter::format_message(message);
                        print_with_prompt(&formatted, &poll_name);
                    }
                    cursor = updates.new_msg_id;
                }
                Err(e) => {
                    tracing::warn!("Polling failed: {}", e);
                    print!("{}", MessageFormatter::format_connection_lost());
                    return SessionEnd::ConnectionLost;
                }
            }
        }
    });

    // Create channel for rustyline input
    let (input_tx, mut input_rx) = mpsc::unbounded_channel::<String>();

    // Spawn a blocking thread for rustyline (synchronous readline)
    let prompt_text = prompt(&name);
    let _readline_handle = std::thread::spawn(move || {
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(e) => {
                tracing::error!("Failed to initialize readline: {}", e);
                return;
            }
        };

        loop {
            match rl.readline(&prompt_text) {
                Ok(line) => {
                    if !line.trim().is_empty() {
                        rl.add_history_entry(line.trim()).ok();
                    }
                    if input_tx.send(line).is_err() {
                        // Channel closed, exit thread
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    // Ctrl+C
                    tracing::info!("Interrupted");
                    break;
                }
                Err(ReadlineError::Eof) => {
                    // Ctrl+D
                    tracing::info!("EOF");
                    break;
                }
                Err(err) => {
                    tracing::error!("Readline error: {}", err);
                    break;
                }
            }
        }
    });

    // Spawn a task to send each input line
    let send_client = client.clone();
    let send_name = name.clone();
    let mut input_task = tokio::spawn(async move {
        while let Some(line) = input_rx.recv().await {
            match parse_input(&line) {
                InputAction::Exit => {
                    println!("Leaving chat...");
                    return SessionEnd::UserExit;
                }
                InputAction::Skip => {}
                InputAction::Send(content) => {
                    match send_client.send(&send_name, &content).await {
                        Ok(_) => {
                            let formatted = MessageFormatter::format_sent_confirmation(&content);
                            print_with_prompt(&formatted, &send_name);
                        }
                        Err(e) => {
                            tracing::warn!("Failed to send message: {}", e);
                            print!("{}", MessageFormatter::format_send_error(&e.to_string()));
                            return SessionEnd::ConnectionLost;
                        }
                    }
                }
            }
        }

        // Input closed (Ctrl+C / Ctrl+D)
        SessionEnd::UserExit
    });

    // If any one of the tasks completes, abort the other
    let end = tokio::select! {
        poll_result = &mut poll_task => {
            input_task.abort();
            poll_result.unwrap_or(SessionEnd::ConnectionLost)
        }
        input_result = &mut input_task => {
            poll_task.abort();
            input_result.unwrap_or(SessionEnd::ConnectionLost)
        }
    };

    // Always leave; a repeated leave is a no-op on the server
    match client.leave(&name).await {
        Ok(reply) => tracing::info!("Left the chat room: {}", reply.message),
        Err(e) => tracing::warn!("Failed to leave the chat room: {}", e),
    }

    match end {
        SessionEnd::UserExit => Ok(()),
        SessionEnd::ConnectionLost => Err(ClientError::Rpc("Connection lost".to_string())),
    }
}
