//! Command registry.

use crate::access::{AccessOrder, ROLE_ADMIN, ROLE_GENERAL};
use crate::command::{Command, CommandOption, Handler, MatchedCommand};
use crate::error::{MatchError, RegistryError};
use crate::matcher;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registry of commands keyed by name.
///
/// Built once before dispatch starts and shared read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: BTreeMap<String, Arc<Command>>,
    access_order: AccessOrder,
}

impl CommandRegistry {
    /// Create an empty registry normalizing access against `access_order`.
    pub fn new(access_order: AccessOrder) -> Self {
        Self {
            commands: BTreeMap::new(),
            access_order,
        }
    }

    /// Register a command.
    ///
    /// Without an access option the command is public.
    pub fn register<H, I>(&mut self, name: &str, handler: H, options: I) -> Result<(), RegistryError>
    where
        H: Handler + 'static,
        I: IntoIterator<Item = CommandOption>,
    {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }

        if self.commands.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_string()));
        }

        let mut command = Command::new(name, Arc::new(handler));
        for option in options {
            option.apply(&mut command);
        }
        let requested = std::mem::take(&mut command.access);
        command.access = self.access_order.normalize(&requested);

        if !requested.is_empty() && command.is_public() {
            warn!(
                command = name,
                requested = ?requested,
                order = ?self.access_order.roles(),
                "No requested role is in the access order, command is public"
            );
        }

        debug!(command = name, access = ?command.access, "Registered command");
        self.commands.insert(name.to_string(), Arc::new(command));

        Ok(())
    }

    /// Register a command restricted to the admin channel.
    pub fn admin<H, I>(&mut self, name: &str, handler: H, options: I) -> Result<(), RegistryError>
    where
        H: Handler + 'static,
        I: IntoIterator<Item = CommandOption>,
    {
        self.register(name, handler, with_access(options, [ROLE_ADMIN]))
    }

    /// Register a command restricted to the general channel.
    pub fn general<H, I>(&mut self, name: &str, handler: H, options: I) -> Result<(), RegistryError>
    where
        H: Handler + 'static,
        I: IntoIterator<Item = CommandOption>,
    {
        self.register(name, handler, with_access(options, [ROLE_GENERAL]))
    }

    /// Register a command allowed on the channel of every role in the access order.
    pub fn all<H, I>(&mut self, name: &str, handler: H, options: I) -> Result<(), RegistryError>
    where
        H: Handler + 'static,
        I: IntoIterator<Item = CommandOption>,
    {
        let roles = self.access_order.roles().to_vec();
        self.register(name, handler, with_access(options, roles))
    }

    /// Get a command by exact name.
    pub fn get(&self, name: &str) -> Option<&Arc<Command>> {
        self.commands.get(name)
    }

    /// Resolve the command invoked by a de-prefixed message body.
    pub fn find(&self, body: &str) -> Result<MatchedCommand, MatchError> {
        matcher::resolve(&self.commands, body)
    }

    /// All commands, sorted by name.
    pub fn commands(&self) -> impl Iterator<Item = &Command> {
        self.commands.values().map(|command| command.as_ref())
    }

    pub fn access_order(&self) -> &AccessOrder {
        &self.access_order
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

fn with_access<I, R, S>(options: I, roles: R) -> impl Iterator<Item = CommandOption>
where
    I: IntoIterator<Item = CommandOption>,
    R: IntoIterator<Item = S>,
    S: Into<String>,
{
    options
        .into_iter()
        .chain(std::iter::once(CommandOption::access(roles)))
}
