use anyhow::Result;
use clap::Args;
use colored::Colorize;
use jvmreq_gradle::{GradleInspection, inspect_project};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Inspect the Gradle project and its Java requirement")]
pub struct InspectArgs {}

fn render(inspection: &GradleInspection) -> Result<(String, String)> {
    let stdout = format!(
        "{} {}\n{} {}\n{} {}",
        "Gradle:".bold(),
        inspection.gradle_version.as_deref().unwrap_or("unknown"),
        "Wrapper:".bold(),
        inspection.wrapper_command.as_deref().unwrap_or("not found"),
        "Java:".bold(),
        inspection.java_constraint.as_str().green().bold(),
    );
    Ok((stdout, serde_json::to_string(inspection)?))
}

/// Print the Gradle version, wrapper command and Java constraint of the project
///
/// # Errors
/// Returns error if serializing the inspection fails.
pub async fn handle_inspect(_args: &InspectArgs, ctx: &CommandContext) -> Result<()> {
    let inspection = inspect_project(&ctx.fs, &ctx.resolve).await;
    let (stdout, json) = render(&inspection)?;
    ctx.format.print(&stdout, &json);
    Ok(())
}
