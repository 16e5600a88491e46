//! Per-message dispatch.

use crate::access::{self, AccessOrder};
use crate::config::RouterConfig;
use crate::context::{Context, Outbound, RESPONSE_MESSAGE_FAIL};
use crate::error::{ConfigError, MatchError, RouterResult};
use crate::registry::CommandRegistry;
use crate::transport::{InboundMessage, Transport};
use std::sync::Arc;
use tracing::{debug, error, info, instrument, warn};

/// Terminal state of one dispatched message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Sent by the bot itself or an automated author.
    OwnMessage,
    /// Does not start with the command prefix.
    NotCommand,
    /// Safe mode is on and the channel is not mapped to a role.
    UnknownChannel,
    /// No registered command matches.
    NotFound,
    /// The command may not run on this channel.
    Denied { command: String },
    /// The handler completed.
    Handled { command: String },
    /// The handler returned an error.
    Failed { command: String },
}

/// Routes inbound messages to registered command handlers.
///
/// Cheap to clone; every clone shares the same read-only registry.
#[derive(Clone)]
pub struct Dispatcher {
    inner: Arc<Inner>,
}

struct Inner {
    config: RouterConfig,
    /// Resolved once; safe mode checks it on every message.
    access_order: AccessOrder,
    bot_id: String,
    commands: Arc<CommandRegistry>,
    transport: Arc<dyn Transport>,
}

impl Dispatcher {
    /// Create a dispatcher for a bot whose own author id is `bot_id`.
    pub fn new(
        config: RouterConfig,
        commands: CommandRegistry,
        transport: Arc<dyn Transport>,
        bot_id: impl Into<String>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;

        let access_order = config.access_order();
        if commands.access_order() != &access_order {
            warn!(
                "Registry access order {:?} differs from configured {:?}",
                commands.access_order().roles(),
                access_order.roles()
            );
        }

        Ok(Self {
            inner: Arc::new(Inner {
                config,
                access_order,
                bot_id: bot_id.into(),
                commands: Arc::new(commands),
                transport,
            }),
        })
    }

    /// Create a dispatcher, asking the transport for the bot's identity.
    pub async fn connect(
        config: RouterConfig,
        commands: CommandRegistry,
        transport: Arc<dyn Transport>,
    ) -> RouterResult<Self> {
        config.validate()?;

        let bot_id = transport.identity().await?;
        info!(
            "Dispatcher ready (bot_id={}, commands={})",
            bot_id,
            commands.len()
        );

        Ok(Self::new(config, commands, transport, bot_id)?)
    }

    pub fn bot_id(&self) -> &str {
        &self.inner.bot_id
    }

    pub fn config(&self) -> &RouterConfig {
        &self.inner.config
    }

    pub fn commands(&self) -> &CommandRegistry {
        &self.inner.commands
    }

    /// Process one inbound message.
    ///
    /// Unknown commands and access denials are only logged; handler errors
    /// are answered with a generic failure response.
    #[instrument(skip_all, fields(channel_id = %message.channel_id, author_id = %message.author_id))]
    pub async fn dispatch(&self, message: InboundMessage) -> Outcome {
        let inner = &self.inner;

        if message.author_is_bot || message.author_id == inner.bot_id {
            return Outcome::OwnMessage;
        }

        let Some(body) = message.text.strip_prefix(inner.config.prefix.as_str()) else {
            return Outcome::NotCommand;
        };

        if inner.config.safemode && !self.is_known_channel(&message.channel_id) {
            debug!("unknown channel {}", message.channel_id);
            return Outcome::UnknownChannel;
        }

        let matched = match inner.commands.find(body) {
            Ok(matched) => matched,
            Err(e) => {
                debug!("{}", e);
                return Outcome::NotFound;
            }
        };

        let command = matched.name().to_string();

        if !access::allowed(
            &message.channel_id,
            &matched.command.access,
            &inner.config.channels,
        ) {
            debug!("{}", MatchError::AccessDenied(command.clone()));
            return Outcome::Denied { command };
        }

        let outbound = Outbound::new(
            Arc::clone(&inner.transport),
            message.channel_id.clone(),
            inner.config.max_message_len,
        );
        let handler = matched.command.handler();
        let ctx = Context::new(
            matched,
            message,
            Arc::clone(&inner.commands),
            outbound.clone(),
        );

        debug!("Running command \"{}\"", command);

        if let Err(e) = handler.handle(ctx).await {
            error!("Command \"{}\" failed: {:#}", command, e);

            if let Err(e) = outbound.send(RESPONSE_MESSAGE_FAIL).await {
                error!("send fail response error: {}", e);
            }

            return Outcome::Failed { command };
        }

        Outcome::Handled { command }
    }

    /// Whether `channel_id` is mapped to a role of the access order.
    fn is_known_channel(&self, channel_id: &str) -> bool {
        access::allowed(
            channel_id,
            self.inner.access_order.roles(),
            &self.inner.config.channels,
        )
    }
}
