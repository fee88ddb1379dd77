use anyhow::Result;
use clap::Args;

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Show the effective jvmreq configuration")]
pub struct ConfigArgs {}

/// Display the effective configuration, including command-line overrides
///
/// # Errors
/// Returns error if serializing the configuration fails.
pub async fn handle_config(_args: &ConfigArgs, ctx: &CommandContext) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&ctx.config)?);
    Ok(())
}
