//! Command routing for chat bots.
//!
//! Messages starting with a configured prefix are matched against registered
//! commands, checked against the channel each command may run on, and handed
//! to the command's handler together with a [`Context`] for replying and
//! parsing arguments.

pub mod access;
mod command;
mod config;
mod context;
mod dispatcher;
mod error;
mod matcher;
mod registry;
pub mod tokenizer;
mod transport;

pub use access::{AccessOrder, ChannelMap, ROLE_ADMIN, ROLE_GENERAL};
pub use command::{Command, CommandOption, Handler, MatchedCommand};
pub use config::{RouterConfig, DEFAULT_COMMAND_PREFIX};
pub use context::{
    strip_code_fence, Context, Outbound, DEFAULT_FILENAME, DEFAULT_MAX_MESSAGE_LEN,
    MAX_MESSAGE_LEN, RESPONSE_FORMAT_JSON_PREFIX, RESPONSE_FORMAT_JSON_SUFFIX,
    RESPONSE_MESSAGE_FAIL,
};
pub use dispatcher::{Dispatcher, Outcome};
pub use error::*;
pub use matcher::COMMAND_DELIMITER;
pub use registry::CommandRegistry;
pub use tokenizer::tokenize;
pub use transport::{InboundMessage, Transport};
