//! Long-polling hosting adapter.
//!
//! Drives the same dispatcher as the webhook server, pulling updates via
//! `getUpdates` instead of receiving them over HTTP. Useful for local runs
//! where no public endpoint is registered with Telegram.

use crate::dispatch::Dispatcher;
use crate::telegram::TelegramClient;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

/// Server-side long-poll wait.
const POLL_TIMEOUT_SECS: u64 = 30;
/// Pause after a failed fetch before asking again.
const RETRY_DELAY: Duration = Duration::from_secs(5);

/// Poll for updates until the process is stopped.
pub async fn run(dispatcher: Arc<Dispatcher>, telegram: Arc<TelegramClient>) -> anyhow::Result<()> {
    let mut offset = 0i64;
    info!("Polling for updates");

    loop {
        match telegram.get_updates(offset, POLL_TIMEOUT_SECS).await {
            Ok(updates) => {
                for update in updates {
                    offset = offset.max(update.update_id + 1);
                    dispatcher.handle_update(update).await;
                }
            }
            Err(e) => {
                warn!(error = %e, "getUpdates failed");
                tokio::time::sleep(RETRY_DELAY).await;
            }
        }
    }
}
