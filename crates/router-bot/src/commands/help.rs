//! Help command - lists commands or describes one.

use super::usage;
use chat_router::{Command, Context};

pub async fn help(ctx: Context) -> anyhow::Result<()> {
    let reply = match ctx.query_string() {
        "" => overview(ctx.commands().commands()),
        name => match ctx.commands().get(name) {
            Some(command) => details(command),
            None => format!("Unknown command: {name}"),
        },
    };

    ctx.send(&reply).await?;
    Ok(())
}

fn overview<'a>(commands: impl Iterator<Item = &'a Command>) -> String {
    let mut reply = String::from("**Commands:**");
    for command in commands {
        reply.push_str(&format!("\n- {}", usage(command)));
        if !command.description.is_empty() {
            reply.push_str(&format!(" - {}", command.description));
        }
        if !command.is_public() {
            reply.push_str(&format!(" [{}]", command.access.join(", ")));
        }
    }
    reply
}

fn details(command: &Command) -> String {
    let mut reply = format!("**{}**", usage(command));
    if !command.description.is_empty() {
        reply.push_str(&format!("\n{}", command.description));
    }
    if command.is_public() {
        reply.push_str("\nAllowed in: any channel");
    } else {
        reply.push_str(&format!("\nAllowed in: {}", command.access.join(", ")));
    }
    reply
}
