//! Per-dispatch request context.

use crate::command::{Command, MatchedCommand};
use crate::error::{ParseError, SendError};
use crate::registry::CommandRegistry;
use crate::tokenizer;
use crate::transport::{InboundMessage, Transport};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, instrument};

/// Hard message length cap of the chat platform.
pub const MAX_MESSAGE_LEN: usize = 2000;

/// Default length above which messages are sent as a file, in characters.
pub const DEFAULT_MAX_MESSAGE_LEN: usize = 1990;

/// Filename used when a long message is sent as an attachment.
pub const DEFAULT_FILENAME: &str = "message.txt";

/// Generic response sent when a handler fails.
pub const RESPONSE_MESSAGE_FAIL: &str = "```fail```";

/// Layout for JSON responses.
pub const RESPONSE_FORMAT_JSON_PREFIX: &str = "```json\n";
pub const RESPONSE_FORMAT_JSON_SUFFIX: &str = "\n```";

/// Outbound side of a context, bound to the originating channel.
#[derive(Clone)]
pub struct Outbound {
    transport: Arc<dyn Transport>,
    channel_id: String,
    max_len: usize,
}

impl Outbound {
    pub fn new(transport: Arc<dyn Transport>, channel_id: impl Into<String>, max_len: usize) -> Self {
        Self {
            transport,
            channel_id: channel_id.into(),
            max_len,
        }
    }

    pub fn channel_id(&self) -> &str {
        &self.channel_id
    }

    /// Send `text` to the channel, falling back to a `message.txt` attachment
    /// when it is too long.
    pub async fn send(&self, text: &str) -> Result<(), SendError> {
        self.send_file_named(text, DEFAULT_FILENAME).await
    }

    /// Send `text` to the channel, falling back to an attachment named
    /// `filename` when it is too long. Code fences are stripped from
    /// attachments.
    #[instrument(skip(self, text), fields(channel_id = %self.channel_id, len = text.len()))]
    pub async fn send_file_named(&self, text: &str, filename: &str) -> Result<(), SendError> {
        if text.chars().count() <= self.max_len {
            return self
                .transport
                .send_text(&self.channel_id, text)
                .await
                .map_err(|source| SendError::Text {
                    channel_id: self.channel_id.clone(),
                    source,
                });
        }

        debug!("Message too long, sending as {}", filename);
        let body = strip_code_fence(text);

        self.transport
            .send_file(&self.channel_id, filename, body.as_bytes().to_vec())
            .await
            .map_err(|source| SendError::File {
                channel_id: self.channel_id.clone(),
                filename: filename.to_string(),
                source,
            })
    }
}

/// Strip a leading ```` ```lang ```` line and a trailing ```` ``` ```` line.
pub fn strip_code_fence(text: &str) -> &str {
    let text = text
        .strip_prefix("```")
        .and_then(|rest| rest.split_once('\n'))
        .filter(|(lang, _)| {
            lang.chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '+'))
        })
        .map_or(text, |(_, body)| body);

    text.strip_suffix("\n```").unwrap_or(text)
}

/// Context of the command being handled.
///
/// Owned by a single handler invocation.
pub struct Context {
    matched: MatchedCommand,
    message: InboundMessage,
    commands: Arc<CommandRegistry>,
    outbound: Outbound,
}

impl Context {
    pub fn new(
        matched: MatchedCommand,
        message: InboundMessage,
        commands: Arc<CommandRegistry>,
        outbound: Outbound,
    ) -> Self {
        Self {
            matched,
            message,
            commands,
            outbound,
        }
    }

    /// The command being handled.
    pub fn command(&self) -> &Command {
        &self.matched.command
    }

    pub fn matched(&self) -> &MatchedCommand {
        &self.matched
    }

    /// The message that invoked the command.
    pub fn message(&self) -> &InboundMessage {
        &self.message
    }

    pub fn channel_id(&self) -> &str {
        &self.message.channel_id
    }

    /// Every registered command.
    pub fn commands(&self) -> &CommandRegistry {
        &self.commands
    }

    /// The raw argument string after the command name.
    pub fn query_string(&self) -> &str {
        &self.matched.arg
    }

    /// The argument string split into arguments.
    pub fn query_params(&self) -> Result<Vec<String>, ParseError> {
        tokenizer::tokenize(&self.matched.arg)
    }

    pub fn outbound(&self) -> &Outbound {
        &self.outbound
    }

    /// Reply on the originating channel.
    pub async fn send(&self, text: &str) -> Result<(), SendError> {
        self.outbound.send(text).await
    }

    /// Reply on the originating channel, naming the attachment used for long
    /// replies.
    pub async fn send_file_named(&self, text: &str, filename: &str) -> Result<(), SendError> {
        self.outbound.send_file_named(text, filename).await
    }

    /// Reply with `value` as pretty JSON in a `json` code block.
    pub async fn send_json<T: Serialize + ?Sized>(
        &self,
        value: &T,
        filename: &str,
    ) -> Result<(), SendError> {
        let json = serde_json::to_string_pretty(value)?;
        let text = format!("{RESPONSE_FORMAT_JSON_PREFIX}{json}{RESPONSE_FORMAT_JSON_SUFFIX}");
        self.outbound.send_file_named(&text, filename).await
    }
}
