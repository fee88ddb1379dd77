use anyhow::Result;
use clap::Args;
use jvmreq_gradle::{gradle_wrapper_file_name_for, prepare_gradle_command};

use crate::{context::CommandContext, error::CliError};

#[derive(Args, Debug)]
#[command(about = "Check the Gradle wrapper and print the command to run it")]
pub struct WrapperArgs {
    /// Wrapper script relative to the project directory (default: platform wrapper name)
    pub path: Option<String>,
}

async fn wrapper_output(args: &WrapperArgs, ctx: &CommandContext) -> Result<(String, String)> {
    let path = args
        .path
        .as_deref()
        .unwrap_or_else(|| gradle_wrapper_file_name_for(ctx.resolve.os));
    let command = prepare_gradle_command(&ctx.fs, ctx.resolve.os, path)
        .await
        .ok_or_else(|| CliError::WrapperUnavailable(path.to_string()))?;
    let json = serde_json::to_string(&serde_json::json!({ "wrapperCommand": command }))?;
    Ok((command, json))
}

/// Print the runnable wrapper command
///
/// # Errors
/// Returns error if the wrapper is missing or not a regular file.
pub async fn handle_wrapper(args: &WrapperArgs, ctx: &CommandContext) -> Result<()> {
    let (stdout, json) = wrapper_output(args, ctx).await?;
    ctx.format.print(&stdout, &json);
    Ok(())
}
