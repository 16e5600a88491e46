//! Boundary with the chat transport.

use crate::error::TransportError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// A text message delivered by the transport.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InboundMessage {
    /// Channel the message arrived on. Replies go back here.
    pub channel_id: String,
    pub author_id: String,
    /// Set by transports that flag automated accounts.
    #[serde(default)]
    pub author_is_bot: bool,
    pub text: String,
}

impl InboundMessage {
    pub fn new(
        channel_id: impl Into<String>,
        author_id: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            channel_id: channel_id.into(),
            author_id: author_id.into(),
            author_is_bot: false,
            text: text.into(),
        }
    }
}

/// Outbound operations the router needs from a chat transport.
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send a plain chat message.
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), TransportError>;

    /// Send `data` as a file attachment.
    async fn send_file(
        &self,
        channel_id: &str,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<(), TransportError>;

    /// Author id of the bot account, used to ignore its own messages.
    async fn identity(&self) -> Result<String, TransportError>;
}
