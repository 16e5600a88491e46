//! Echo command - shows how arguments are tokenized.

use chat_router::Context;
use tracing::debug;

pub async fn echo(ctx: Context) -> anyhow::Result<()> {
    let args = match ctx.query_params() {
        Ok(args) => args,
        Err(e) => {
            debug!("echo: {}", e);
            ctx.send(&format!("Could not parse arguments: {e}")).await?;
            return Ok(());
        }
    };

    if args.is_empty() {
        ctx.send(&format!("Usage: {}", super::usage(ctx.command())))
            .await?;
        return Ok(());
    }

    let lines: Vec<String> = args
        .iter()
        .map(|arg| if arg.is_empty() { "(empty)".to_string() } else { arg.clone() })
        .collect();

    ctx.send(&lines.join("\n")).await?;
    Ok(())
}
