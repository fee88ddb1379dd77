use anyhow::Result;
use clap::Args;
use jvmreq_gradle::{get_java_constraint, gradle_wrapper_file_name_for};

use crate::context::CommandContext;

#[derive(Args, Debug)]
#[command(about = "Resolve the Java constraint for a Gradle version")]
pub struct ConstraintArgs {
    /// Gradle version of the build (unknown when omitted)
    #[arg(short, long)]
    pub gradle_version: Option<String>,

    /// Wrapper script path relative to the project directory
    #[arg(short, long)]
    pub wrapper: Option<String>,
}

async fn constraint_output(
    args: &ConstraintArgs,
    ctx: &CommandContext,
) -> Result<(String, String)> {
    let wrapper = args
        .wrapper
        .as_deref()
        .unwrap_or_else(|| gradle_wrapper_file_name_for(ctx.resolve.os));
    let constraint = get_java_constraint(
        &ctx.fs,
        &ctx.resolve,
        args.gradle_version.as_deref(),
        wrapper,
    )
    .await;
    let json = serde_json::to_string(&serde_json::json!({ "javaConstraint": constraint }))?;
    Ok((constraint.to_string(), json))
}

/// Print the resolved Java constraint
///
/// # Errors
/// Returns error if serializing the output fails.
pub async fn handle_constraint(args: &ConstraintArgs, ctx: &CommandContext) -> Result<()> {
    let (stdout, json) = constraint_output(args, ctx).await?;
    ctx.format.print(&stdout, &json);
    Ok(())
}
