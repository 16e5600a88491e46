//! Commands command - dumps the command table as JSON.

use chat_router::{Command, Context};

pub async fn commands(ctx: Context) -> anyhow::Result<()> {
    let table: Vec<&Command> = ctx.commands().commands().collect();
    ctx.send_json(&table, "commands.json").await?;
    Ok(())
}
