//! Client execution logic.

use std::time::Duration;

use rustyline::DefaultEditor;

use super::{error::ClientError, rpc::RpcClient, session::run_client_session};

const NAME_PROMPT: &str = "Choose a username (leave blank for default): ";

/// `tokio::time::interval` rejects a zero period
const MIN_POLL_INTERVAL: Duration = Duration::from_millis(1);

/// Run the chat client until the user exits or the connection is lost
///
/// # Arguments
///
/// * `url` - Base URL of the chat server (e.g., "http://127.0.0.1:1234")
/// * `name` - Requested name; asked for interactively when `None`
/// * `poll_interval` - Interval between GetUpdates calls
pub async fn run_client(
    url: String,
    name: Option<String>,
    poll_interval: Duration,
) -> Result<(), ClientError> {
    let requested_name = match name {
        Some(name) => name,
        None => ask_name().await?,
    };

    tracing::info!(
        "Connecting to {} as '{}'",
        url,
        if requested_name.trim().is_empty() {
            "<default>"
        } else {
            requested_name.trim()
        }
    );

    let client = RpcClient::new(&url);
    run_client_session(
        client,
        requested_name.trim(),
        effective_poll_interval(poll_interval),
    )
    .await?;

    tracing::info!("Client session ended normally");
    Ok(())
}

/// Ask for a name on the terminal. An empty answer lets the server pick one.
async fn ask_name() -> Result<String, ClientError> {
    tokio::task::spawn_blocking(|| {
        let mut rl = DefaultEditor::new().map_err(|e| ClientError::Readline(e.to_string()))?;
        rl.readline(NAME_PROMPT)
            .map_err(|e| ClientError::Readline(e.to_string()))
    })
    .await
    .map_err(|e| ClientError::Readline(e.to_string()))?
}

/// Clamp the poll interval to a period `tokio::time::interval` accepts
fn effective_poll_interval(requested: Duration) -> Duration {
    requested.max(MIN_POLL_INTERVAL)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_poll_interval_is_clamped() {
        // テスト項目: 0 のポーリング間隔は最小値に切り上げられる
        // given (前提条件):
        let requested = Duration::ZERO;

        // when (操作):
        let interval = effective_poll_interval(requested);

        // then (期待する結果):
        assert_eq!(interval, MIN_POLL_INTERVAL);
    }

    #[test]
    fn test_positive_poll_interval_is_kept() {
        // テスト項目: 正のポーリング間隔はそのまま使われる
        // given (前提条件):
        let requested = Duration::from_millis(250);

        // when (操作):
        let interval = effective_poll_interval(requested);

        // then (期待する結果):
        assert_eq!(interval, requested);
    }

    #[tokio::test]
    async fn test_clamped_interval_ticks_without_panic() {
        // テスト項目: 切り上げた間隔で tokio の interval を作成してもパニックしない
        // given (前提条件):
        let interval = effective_poll_interval(Duration::ZERO);

        // when (操作):
        let result = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            ticker.tick().await;
            ticker.tick().await;
        })
        .await;

        // then (期待する結果):
        assert!(result.is_ok());
    }
}
