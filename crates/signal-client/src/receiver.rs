//! Polling receiver for inbound messages.
//!
//! Receipts and typing notifications carry no data message and are skipped,
//! as are messages with empty text.

use crate::client::SignalClient;
use crate::types::*;
use std::time::Duration;
use tokio::time::sleep;
use tokio_stream::Stream;
use tracing::{debug, error};

/// Delay before polling again after a failed receive.
const ERROR_BACKOFF: Duration = Duration::from_secs(5);

/// Polls the REST API and yields text messages as a stream.
pub struct MessageReceiver {
    client: SignalClient,
    poll_interval: Duration,
    error_backoff: Duration,
}

impl MessageReceiver {
    pub fn new(client: SignalClient, poll_interval: Duration) -> Self {
        Self {
            client,
            poll_interval,
            error_backoff: ERROR_BACKOFF,
        }
    }

    /// Override the delay used after a failed receive.
    pub fn with_error_backoff(mut self, backoff: Duration) -> Self {
        self.error_backoff = backoff;
        self
    }

    /// Poll forever, yielding every text message in arrival order.
    pub fn stream(self) -> impl Stream<Item = BotMessage> {
        async_stream::stream! {
            loop {
                let batch = match self.client.receive().await {
                    Ok(batch) => batch,
                    Err(e) => {
                        error!("Receive error: {}", e);
                        sleep(self.error_backoff).await;
                        continue;
                    }
                };

                for incoming in &batch {
                    let Some(message) = BotMessage::from_incoming(incoming) else {
                        continue;
                    };
                    if message.text.is_empty() {
                        continue;
                    }

                    debug!(
                        "Received: {} from {}",
                        message.text.chars().take(50).collect::<String>(),
                        message.source
                    );
                    yield message;
                }

                sleep(self.poll_interval).await;
            }
        }
    }
}
