//! Router error types.

use thiserror::Error;

/// Startup configuration errors. These are fatal: dispatch never begins.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("command prefix is empty")]
    EmptyPrefix,

    #[error("bot token is empty")]
    EmptyToken,
}

/// Argument tokenization errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The input ended inside a quoted region.
    #[error("unclosed quote: {input}")]
    UnclosedQuote { input: String },
}

/// Command registration errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    #[error("command name is empty")]
    EmptyName,

    #[error("command \"{0}\" is already registered")]
    Duplicate(String),
}

/// Command resolution errors. Never reported back to the sender.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MatchError {
    #[error("command not found")]
    CommandNotFound,

    #[error("access to command \"{0}\" denied")]
    AccessDenied(String),
}

/// Error reported by a transport implementation.
#[derive(Error, Debug)]
#[error(transparent)]
pub struct TransportError(Box<dyn std::error::Error + Send + Sync>);

impl TransportError {
    pub fn new(err: impl Into<Box<dyn std::error::Error + Send + Sync>>) -> Self {
        Self(err.into())
    }
}

/// Outbound send errors, tagged with the operation that failed.
#[derive(Error, Debug)]
pub enum SendError {
    #[error("send text to channel {channel_id}: {source}")]
    Text {
        channel_id: String,
        #[source]
        source: TransportError,
    },

    #[error("send file {filename} to channel {channel_id}: {source}")]
    File {
        channel_id: String,
        filename: String,
        #[source]
        source: TransportError,
    },

    #[error("encode json payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Umbrella error for callers that want a single type.
#[derive(Error, Debug)]
pub enum RouterError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Match error: {0}")]
    Match(#[from] MatchError),

    #[error("Send error: {0}")]
    Send(#[from] SendError),

    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),
}

/// Result type alias for router errors.
pub type RouterResult<T> = Result<T, RouterError>;
