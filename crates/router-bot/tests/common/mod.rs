//! Common test utilities for integration tests.

use chat_router::{CommandRegistry, Dispatcher, InboundMessage, RouterConfig};
use router_bot::commands::register_builtin;
use signal_client::SignalClient;
use std::collections::HashMap;
use std::sync::Arc;
use wiremock::MockServer;

pub const BOT_NUMBER: &str = "+987654321";
pub const USER_NUMBER: &str = "+123456789";
pub const ADMIN_GROUP: &str = "admin-group";

/// Router config with the user's direct chat as general and a group as admin.
pub fn test_router_config() -> RouterConfig {
    RouterConfig {
        token: Some(BOT_NUMBER.into()),
        channels: HashMap::from([
            ("general".to_string(), USER_NUMBER.to_string()),
            ("admin".to_string(), ADMIN_GROUP.to_string()),
        ]),
        ..Default::default()
    }
}

/// Dispatcher with the built-in commands, talking to a mock Signal API.
pub fn test_dispatcher(mock_server: &MockServer, config: RouterConfig) -> Dispatcher {
    let client = SignalClient::new(mock_server.uri(), BOT_NUMBER).unwrap();

    let mut registry = CommandRegistry::new(config.access_order());
    register_builtin(&mut registry).unwrap();

    Dispatcher::new(config, registry, Arc::new(client), BOT_NUMBER).unwrap()
}

pub fn direct_message(text: &str) -> InboundMessage {
    InboundMessage::new(USER_NUMBER, USER_NUMBER, text)
}

pub fn group_message(group_id: &str, text: &str) -> InboundMessage {
    InboundMessage::new(group_id, USER_NUMBER, text)
}
