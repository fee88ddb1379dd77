use anyhow::Result;
use clap::{Parser, Subcommand};
use jvmreq_core::ExecutionMode;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use crate::{
    commands::{
        ConfigArgs, ConstraintArgs, ExtractArgs, InspectArgs, WrapperArgs, handle_config,
        handle_constraint, handle_extract, handle_inspect, handle_wrapper,
    },
    context::CommandContext,
    options::FormatOptions,
};
pub mod commands;
pub mod context;
pub mod error;
pub mod options;

pub use error::CliError;

/// Environment variable holding the log filter, e.g. `JVMREQ_LOG=debug`
pub const LOG_ENV: &str = "JVMREQ_LOG";

#[derive(Parser, Debug)]
#[command(
    name = "jvmreq",
    author,
    version,
    about = "Resolve the Java runtime a Gradle build requires",
    help_template = "{name} {version}\n{about}\n\n{usage-heading} {usage}\n\n{all-args}"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Project directory (default: current directory)
    #[arg(short, long, global = true)]
    dir: Option<PathBuf>,

    /// Execution mode, overrides binarySource from .jvmreq/config.json
    #[arg(short, long, global = true)]
    mode: Option<ExecutionMode>,

    #[arg(short, long, global = true, value_enum, default_value_t)]
    format: FormatOptions,
}

#[derive(Subcommand, Debug)]
enum Commands {
    Inspect(InspectArgs),
    Constraint(ConstraintArgs),
    Extract(ExtractArgs),
    Wrapper(WrapperArgs),
    Config(ConfigArgs),
}

fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // a subscriber may already be installed when main runs more than once in-process
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .try_init();
}

/// # Errors
/// Returns error if the configuration is invalid or the selected command fails.
pub async fn main(args: &[String]) -> Result<()> {
    let cli = Cli::parse_from(args);
    init_tracing();

    let ctx = CommandContext::new(cli.dir, cli.mode, cli.format).await?;
    match cli.command {
        Some(Commands::Inspect(args)) => handle_inspect(&args, &ctx).await?,
        Some(Commands::Constraint(args)) => handle_constraint(&args, &ctx).await?,
        Some(Commands::Extract(args)) => handle_extract(&args, &ctx).await?,
        Some(Commands::Wrapper(args)) => handle_wrapper(&args, &ctx).await?,
        Some(Commands::Config(args)) => handle_config(&args, &ctx).await?,
        None => handle_inspect(&InspectArgs {}, &ctx).await?,
    }
    Ok(())
}
