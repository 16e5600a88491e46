//! Chat transport backed by the Signal REST API.

use crate::client::SignalClient;
use crate::error::SignalError;
use crate::types::BotMessage;
use async_trait::async_trait;
use chat_router::{InboundMessage, Transport, TransportError};

#[async_trait]
impl Transport for SignalClient {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), TransportError> {
        Ok(self.send(channel_id, text).await?)
    }

    async fn send_file(
        &self,
        channel_id: &str,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<(), TransportError> {
        Ok(self.send_attachment(channel_id, filename, &data).await?)
    }

    async fn identity(&self) -> Result<String, TransportError> {
        let account = self.get_account().await?;
        if !account.registered {
            return Err(SignalError::NotRegistered(account.number).into());
        }
        Ok(account.number)
    }
}

impl From<BotMessage> for InboundMessage {
    /// Replies go to the group for group messages and to the sender otherwise.
    /// Signal has no bot accounts, so `author_is_bot` is always false.
    fn from(message: BotMessage) -> Self {
        InboundMessage {
            channel_id: message.reply_target().to_string(),
            author_id: message.source,
            author_is_bot: false,
            text: message.text,
        }
    }
}
