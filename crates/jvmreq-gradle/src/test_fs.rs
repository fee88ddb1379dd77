use std::{collections::HashMap, sync::Mutex};

use anyhow::{Result, anyhow};
use async_trait::async_trait;
use jvmreq_core::{FileStat, LocalFs};

/// In-memory `LocalFs` that records every path it reads
#[derive(Debug, Default)]
pub struct MemoryFs {
    files: HashMap<String, String>,
    stats: Mutex<HashMap<String, FileStat>>,
    reads: Mutex<Vec<String>>,
    chmods: Mutex<Vec<(String, u32)>>,
    fail_reads: bool,
    fail_chmod: bool,
}

impl MemoryFs {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(path.to_string(), content.to_string());
        self
    }

    pub fn with_stat(self, path: &str, is_file: bool, mode: u32) -> Self {
        self.stats
            .lock()
            .unwrap()
            .insert(path.to_string(), FileStat { is_file, mode });
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_chmod(mut self) -> Self {
        self.fail_chmod = true;
        self
    }

    pub fn reads(&self) -> Vec<String> {
        self.reads.lock().unwrap().clone()
    }

    pub fn chmods(&self) -> Vec<(String, u32)> {
        self.chmods.lock().unwrap().clone()
    }
}

#[async_trait]
impl LocalFs for MemoryFs {
    async fn read_local_file(&self, path: &str) -> Result<Option<String>> {
        self.reads.lock().unwrap().push(path.to_string());
        if self.fail_reads {
            return Err(anyhow!("permission denied - {path}"));
        }
        Ok(self.files.get(path).cloned())
    }

    async fn stat_local_file(&self, path: &str) -> Result<Option<FileStat>> {
        Ok(self.stats.lock().unwrap().get(path).copied())
    }

    async fn chmod_local_file(&self, path: &str, mode: u32) -> Result<()> {
        self.chmods.lock().unwrap().push((path.to_string(), mode));
        if self.fail_chmod {
            return Err(anyhow!("operation not permitted - {path}"));
        }
        if let Some(stat) = self.stats.lock().unwrap().get_mut(path) {
            stat.mode = mode;
        }
        Ok(())
    }
}
