//! Ping command - liveness check.

use chat_router::Context;

pub async fn ping(ctx: Context) -> anyhow::Result<()> {
    ctx.send("pong").await?;
    Ok(())
}
