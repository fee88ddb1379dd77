use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use async_trait::async_trait;
use jvmreq_core::{FileStat, LocalFs};
use tokio::fs::{metadata, read_to_string};

/// `LocalFs` backed by the real file system, rooted at a project directory
#[derive(Debug, Clone)]
pub struct TokioLocalFs {
    root: PathBuf,
}

impl TokioLocalFs {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn resolve(&self, path: &str) -> PathBuf {
        self.root.join(path)
    }
}

#[cfg(unix)]
fn permission_bits(metadata: &std::fs::Metadata) -> u32 {
    use std::os::unix::fs::PermissionsExt;
    metadata.permissions().mode() & 0o7777
}

#[cfg(not(unix))]
fn permission_bits(_metadata: &std::fs::Metadata) -> u32 {
    0
}

#[async_trait]
impl LocalFs for TokioLocalFs {
    async fn read_local_file(&self, path: &str) -> Result<Option<String>> {
        let full_path = self.resolve(path);
        match read_to_string(&full_path).await {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to read file - {}", full_path.display())),
        }
    }

    async fn stat_local_file(&self, path: &str) -> Result<Option<FileStat>> {
        let full_path = self.resolve(path);
        match metadata(&full_path).await {
            Ok(metadata) => Ok(Some(FileStat {
                is_file: metadata.is_file(),
                mode: permission_bits(&metadata),
            })),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e).context(format!("Failed to stat file - {}", full_path.display())),
        }
    }

    async fn chmod_local_file(&self, path: &str, mode: u32) -> Result<()> {
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            let full_path = self.resolve(path);
            tokio::fs::set_permissions(&full_path, std::fs::Permissions::from_mode(mode))
                .await
                .context(format!("Failed to chmod file - {}", full_path.display()))
        }
        #[cfg(not(unix))]
        {
            let _ = (path, mode);
            Ok(())
        }
    }
}
