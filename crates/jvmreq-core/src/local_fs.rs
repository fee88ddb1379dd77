use anyhow::Result;
use async_trait::async_trait;

/// Subset of file metadata needed to judge a wrapper script
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileStat {
    pub is_file: bool,
    /// Unix permission bits; `0` where the platform has none
    pub mode: u32,
}

impl FileStat {
    #[must_use]
    pub const fn is_executable_by_others(&self) -> bool {
        self.mode & 0o001 != 0
    }
}

/// Dependency injection interface for file-system access relative to a project root.
///
/// Production code uses `TokioLocalFs`, tests use in-memory doubles that record which
/// paths were read. Missing files are `Ok(None)`, not errors.
#[async_trait]
pub trait LocalFs: Send + Sync {
    /// # Errors
    /// Returns error if the file exists but cannot be read.
    async fn read_local_file(&self, path: &str) -> Result<Option<String>>;

    /// # Errors
    /// Returns error if the metadata lookup fails for a reason other than absence.
    async fn stat_local_file(&self, path: &str) -> Result<Option<FileStat>>;

    /// # Errors
    /// Returns error if the permissions cannot be changed.
    async fn chmod_local_file(&self, path: &str, mode: u32) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::{collections::HashMap, sync::Mutex};

    #[rstest]
    #[case(0o755, true)]
    #[case(0o550, false)]
    #[case(0o644, false)]
    #[case(0o001, true)]
    fn test_file_stat_executable_by_others(#[case] mode: u32, #[case] expected: bool) {
        let stat = FileStat {
            is_file: true,
            mode,
        };
        assert_eq!(stat.is_executable_by_others(), expected);
    }

    #[derive(Default)]
    struct MemoryFs {
        files: Mutex<HashMap<String, (String, u32)>>,
    }

    #[async_trait]
    impl LocalFs for MemoryFs {
        async fn read_local_file(&self, path: &str) -> Result<Option<String>> {
            Ok(self
                .files
                .lock()
                .unwrap()
                .get(path)
                .map(|(content, _)| content.clone()))
        }

        async fn stat_local_file(&self, path: &str) -> Result<Option<FileStat>> {
            Ok(self.files.lock().unwrap().get(path).map(|(_, mode)| FileStat {
                is_file: true,
                mode: *mode,
            }))
        }

        async fn chmod_local_file(&self, path: &str, mode: u32) -> Result<()> {
            let mut files = self.files.lock().unwrap();
            let entry = files
                .get_mut(path)
                .ok_or_else(|| anyhow::anyhow!("File not found - {path}"))?;
            entry.1 = mode;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_local_fs_as_trait_object() {
        let fs = MemoryFs::default();
        fs.files
            .lock()
            .unwrap()
            .insert("gradlew".to_string(), ("#!/bin/sh".to_string(), 0o644));
        let fs: &dyn LocalFs = &fs;

        assert_eq!(
            fs.read_local_file("gradlew").await.unwrap().as_deref(),
            Some("#!/bin/sh")
        );
        assert!(fs.read_local_file("missing").await.unwrap().is_none());

        fs.chmod_local_file("gradlew", 0o755).await.unwrap();
        let stat = fs.stat_local_file("gradlew").await.unwrap().unwrap();
        assert!(stat.is_executable_by_others());
        assert!(fs.chmod_local_file("missing", 0o755).await.is_err());
    }
}
