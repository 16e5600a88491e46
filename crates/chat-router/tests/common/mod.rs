//! Common test utilities for dispatch tests.

use async_trait::async_trait;
use chat_router::{
    CommandRegistry, Dispatcher, InboundMessage, RouterConfig, Transport, TransportError,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const BOT_ID: &str = "bot-1";
pub const GENERAL_CHANNEL: &str = "chan-general";
pub const ADMIN_CHANNEL: &str = "chan-admin";

/// Something the transport was asked to deliver.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Text {
        channel_id: String,
        text: String,
    },
    File {
        channel_id: String,
        filename: String,
        data: String,
    },
}

/// Transport that records outbound calls and can be told to fail them.
#[derive(Default)]
pub struct RecordingTransport {
    sent: Mutex<Vec<Sent>>,
    fail_sends: bool,
}

impl RecordingTransport {
    pub fn failing() -> Self {
        Self {
            sent: Mutex::default(),
            fail_sends: true,
        }
    }

    pub fn sent(&self) -> Vec<Sent> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Transport for RecordingTransport {
    async fn send_text(&self, channel_id: &str, text: &str) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError::new("channel unavailable"));
        }
        self.sent.lock().unwrap().push(Sent::Text {
            channel_id: channel_id.into(),
            text: text.into(),
        });
        Ok(())
    }

    async fn send_file(
        &self,
        channel_id: &str,
        filename: &str,
        data: Vec<u8>,
    ) -> Result<(), TransportError> {
        if self.fail_sends {
            return Err(TransportError::new("channel unavailable"));
        }
        self.sent.lock().unwrap().push(Sent::File {
            channel_id: channel_id.into(),
            filename: filename.into(),
            data: String::from_utf8(data).map_err(TransportError::new)?,
        });
        Ok(())
    }

    async fn identity(&self) -> Result<String, TransportError> {
        Ok(BOT_ID.into())
    }
}

/// Router config with general and admin channels mapped.
pub fn test_config() -> RouterConfig {
    RouterConfig {
        channels: HashMap::from([
            ("general".to_string(), GENERAL_CHANNEL.to_string()),
            ("admin".to_string(), ADMIN_CHANNEL.to_string()),
        ]),
        ..Default::default()
    }
}

pub fn dispatcher(
    config: RouterConfig,
    commands: CommandRegistry,
    transport: Arc<RecordingTransport>,
) -> Dispatcher {
    Dispatcher::new(config, commands, transport, BOT_ID).unwrap()
}

pub fn message(channel_id: &str, text: &str) -> InboundMessage {
    InboundMessage::new(channel_id, "user-1", text)
}
