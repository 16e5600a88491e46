//! Built-in bot commands.

mod echo;
mod help;
mod ping;
mod table;

pub use echo::echo;
pub use help::help;
pub use ping::ping;
pub use table::commands;

use chat_router::{CommandOption, CommandRegistry, RegistryError};

/// Register every built-in command.
pub fn register_builtin(registry: &mut CommandRegistry) -> Result<(), RegistryError> {
    registry.register(
        "help",
        help,
        [
            CommandOption::description("Show commands or help for one command"),
            CommandOption::help("help [command]"),
        ],
    )?;

    registry.register(
        "ping",
        ping,
        [CommandOption::description("Check that the bot is alive")],
    )?;

    registry.general(
        "echo",
        echo,
        [
            CommandOption::description("Repeat the arguments one per line"),
            CommandOption::help("echo <args...>"),
        ],
    )?;

    registry.admin(
        "commands",
        commands,
        [CommandOption::description("Dump the command table as JSON")],
    )?;

    Ok(())
}

/// Usage line of a command: its help text, or its bare name.
pub(crate) fn usage(command: &chat_router::Command) -> &str {
    if command.help.is_empty() {
        &command.name
    } else {
        &command.help
    }
}
