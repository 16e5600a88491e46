//! Router configuration.

use crate::access::{AccessOrder, ChannelMap};
use crate::context::DEFAULT_MAX_MESSAGE_LEN;
use crate::error::ConfigError;
use serde::Deserialize;

/// Default command prefix.
pub const DEFAULT_COMMAND_PREFIX: &str = "!";

/// Router configuration, loadable from YAML, JSON or environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct RouterConfig {
    /// Bot credential. Only required when the transport is built from this
    /// configuration.
    #[serde(default)]
    pub token: Option<String>,

    /// Prefix that marks a message as a command.
    #[serde(default = "default_prefix")]
    pub prefix: String,

    /// Drop messages from channels not mapped to any role.
    #[serde(default)]
    pub safemode: bool,

    /// Role to channel id mapping.
    #[serde(default)]
    pub channels: ChannelMap,

    /// Role priority used to normalize command access lists.
    #[serde(default)]
    pub access_order: Option<AccessOrder>,

    /// Messages longer than this many characters are sent as files.
    #[serde(default = "default_max_message_len")]
    pub max_message_len: usize,
}

impl Default for RouterConfig {
    fn default() -> Self {
        Self {
            token: None,
            prefix: default_prefix(),
            safemode: false,
            channels: ChannelMap::new(),
            access_order: None,
            max_message_len: default_max_message_len(),
        }
    }
}

fn default_prefix() -> String {
    DEFAULT_COMMAND_PREFIX.into()
}

fn default_max_message_len() -> usize {
    DEFAULT_MAX_MESSAGE_LEN
}

impl RouterConfig {
    /// Check required fields.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.prefix.is_empty() {
            return Err(ConfigError::EmptyPrefix);
        }

        Ok(())
    }

    /// The credential, for configurations that own their transport.
    pub fn require_token(&self) -> Result<&str, ConfigError> {
        match self.token.as_deref() {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(ConfigError::EmptyToken),
        }
    }

    /// The configured access order, or `[general, admin]` when unset or empty.
    pub fn access_order(&self) -> AccessOrder {
        self.access_order
            .clone()
            .filter(|order| !order.is_empty())
            .unwrap_or_default()
    }
}
