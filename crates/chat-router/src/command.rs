//! Command definitions and handler abstraction.

use crate::context::Context;
use async_trait::async_trait;
use serde::Serialize;
use std::fmt;
use std::future::Future;
use std::sync::Arc;

/// Command handler.
///
/// Any `Fn(Context) -> impl Future<Output = anyhow::Result<()>>` closure is a
/// handler, so most commands never implement this trait by hand.
#[async_trait]
pub trait Handler: Send + Sync {
    /// Run the command.
    async fn handle(&self, ctx: Context) -> anyhow::Result<()>;
}

#[async_trait]
impl<F, Fut> Handler for F
where
    F: Fn(Context) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
{
    async fn handle(&self, ctx: Context) -> anyhow::Result<()> {
        (self)(ctx).await
    }
}

/// A registered command.
#[derive(Clone, Serialize)]
pub struct Command {
    pub name: String,
    pub description: String,
    pub help: String,
    /// Roles allowed to run the command, in access order. Empty means public.
    pub access: Vec<String>,
    #[serde(skip)]
    pub(crate) handler: Arc<dyn Handler>,
}

impl Command {
    pub(crate) fn new(name: impl Into<String>, handler: Arc<dyn Handler>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            help: String::new(),
            access: Vec::new(),
            handler,
        }
    }

    /// Whether any channel may run the command.
    pub fn is_public(&self) -> bool {
        self.access.is_empty()
    }

    pub(crate) fn handler(&self) -> Arc<dyn Handler> {
        Arc::clone(&self.handler)
    }
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("help", &self.help)
            .field("access", &self.access)
            .finish_non_exhaustive()
    }
}

/// A command resolved from a message, with its raw argument string.
#[derive(Debug, Clone)]
pub struct MatchedCommand {
    pub command: Arc<Command>,
    pub arg: String,
}

impl MatchedCommand {
    pub fn name(&self) -> &str {
        &self.command.name
    }
}

/// Registration option.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandOption {
    /// Restrict the command to the given roles. Repeated options accumulate.
    Access(Vec<String>),
    /// Human readable one-line description.
    Description(String),
    /// Usage text, e.g. `<name> [value]`.
    Help(String),
}

impl CommandOption {
    pub fn access<I, S>(roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::Access(roles.into_iter().map(Into::into).collect())
    }

    pub fn description(description: impl Into<String>) -> Self {
        Self::Description(description.into())
    }

    pub fn help(help: impl Into<String>) -> Self {
        Self::Help(help.into())
    }

    pub(crate) fn apply(self, command: &mut Command) {
        match self {
            Self::Access(roles) => command.access.extend(roles),
            Self::Description(description) => command.description = description,
            Self::Help(help) => command.help = help,
        }
    }
}
