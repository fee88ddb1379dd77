use anyhow::Result;
use jvmreq_core::{Config, ExecutionMode, ResolveContext};
use jvmreq_utils::{TokioLocalFs, get_jvmreq_config};
use std::path::PathBuf;

use crate::options::FormatOptions;

/// State shared by every command: the project file system, its effective config and output format
pub struct CommandContext {
    pub config: Config,
    pub resolve: ResolveContext,
    pub fs: TokioLocalFs,
    pub format: FormatOptions,
}

impl CommandContext {
    /// Load `.jvmreq/config.json` from `dir` (default: current directory); `mode` overrides
    /// the configured binary source.
    ///
    /// # Errors
    /// Returns error if the current directory cannot be determined or the config is invalid.
    pub async fn new(
        dir: Option<PathBuf>,
        mode: Option<ExecutionMode>,
        format: FormatOptions,
    ) -> Result<Self> {
        let project_dir = match dir {
            Some(dir) => dir,
            None => std::env::current_dir()?,
        };
        let mut config = get_jvmreq_config(&project_dir).await?;
        if let Some(mode) = mode {
            config.binary_source = mode;
        }
        let resolve = ResolveContext::from_config(&config);
        tracing::debug!(
            dir = %project_dir.display(),
            mode = %resolve.mode,
            os = %resolve.os,
            "command context ready"
        );

        Ok(Self {
            fs: TokioLocalFs::new(project_dir),
            config,
            resolve,
            format,
        })
    }
}
