use std::path::Path;

use anyhow::{Context, Result};
use jvmreq_core::Config;
use tokio::fs::read_to_string;

pub const CONFIG_DIR: &str = ".jvmreq";
pub const CONFIG_FILE: &str = "config.json";

/// Load `.jvmreq/config.json` from `dir`, falling back to defaults when absent
///
/// # Errors
/// Returns error if the config file exists but cannot be read or parsed.
pub async fn get_jvmreq_config(dir: &Path) -> Result<Config> {
    let config_file = dir.join(CONFIG_DIR).join(CONFIG_FILE);
    if !config_file.is_file() {
        tracing::debug!(path = %config_file.display(), "config file not found, using defaults");
        return Ok(Config::default());
    }
    let content = read_to_string(&config_file)
        .await
        .context(format!("Failed to read config - {}", config_file.display()))?;
    serde_json::from_str(&content)
        .context(format!("Failed to parse config - {}", config_file.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use jvmreq_core::ExecutionMode;
    use std::fs;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_get_jvmreq_config_missing() {
        let temp_dir = TempDir::new().unwrap();

        let config = get_jvmreq_config(temp_dir.path()).await.unwrap();
        assert_eq!(config, Config::default());

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_jvmreq_config_docker() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(
            config_dir.join(CONFIG_FILE),
            r#"{ "binarySource": "docker" }"#,
        )
        .unwrap();

        let config = get_jvmreq_config(temp_dir.path()).await.unwrap();
        assert_eq!(config.binary_source, ExecutionMode::Docker);

        temp_dir.close().unwrap();
    }

    #[tokio::test]
    async fn test_get_jvmreq_config_invalid_json() {
        let temp_dir = TempDir::new().unwrap();
        let config_dir = temp_dir.path().join(CONFIG_DIR);
        fs::create_dir_all(&config_dir).unwrap();
        fs::write(config_dir.join(CONFIG_FILE), "{ not json").unwrap();

        let result = get_jvmreq_config(temp_dir.path()).await;
        assert!(result.is_err());
        assert!(
            result
                .unwrap_err()
                .to_string()
                .contains("Failed to parse config")
        );

        temp_dir.close().unwrap();
    }
}
