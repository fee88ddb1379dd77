use anyhow::Result;
use clap::Args;
use jvmreq_core::LocalFs;
use jvmreq_gradle::extract_gradle_version;

use crate::{context::CommandContext, error::CliError};

#[derive(Args, Debug)]
#[command(about = "Extract the Gradle version from a file")]
pub struct ExtractArgs {
    /// File relative to the project directory, e.g. gradle/wrapper/gradle-wrapper.properties
    pub file: String,
}

async fn extract_output(args: &ExtractArgs, ctx: &CommandContext) -> Result<(String, String)> {
    let content = ctx
        .fs
        .read_local_file(&args.file)
        .await?
        .ok_or_else(|| CliError::FileNotFound(args.file.clone()))?;
    let version = extract_gradle_version(Some(content.as_str()))
        .ok_or_else(|| CliError::NoGradleVersion(args.file.clone()))?;
    let json = serde_json::to_string(&serde_json::json!({ "gradleVersion": version }))?;
    Ok((version, json))
}

/// Print the Gradle version found in the given file
///
/// # Errors
/// Returns error if the file is missing or contains no Gradle version.
pub async fn handle_extract(args: &ExtractArgs, ctx: &CommandContext) -> Result<()> {
    let (stdout, json) = extract_output(args, ctx).await?;
    ctx.format.print(&stdout, &json);
    Ok(())
}
