use serde::{Deserialize, Serialize};

use crate::{ExecutionMode, Os};

/// Loaded from `.jvmreq/config.json`, controls how Java requirements are resolved.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Where build tools run (default: "global")
    #[serde(default)]
    pub binary_source: ExecutionMode,
}

/// Inputs of a resolution that come from the surrounding system rather than the project.
///
/// Passed explicitly into every resolver call; nothing reads process-wide state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolveContext {
    pub mode: ExecutionMode,
    pub os: Os,
}

impl ResolveContext {
    #[must_use]
    pub const fn new(mode: ExecutionMode, os: Os) -> Self {
        Self { mode, os }
    }

    #[must_use]
    pub const fn from_config(config: &Config) -> Self {
        Self::new(config.binary_source, Os::current())
    }
}

impl Default for ResolveContext {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.binary_source, ExecutionMode::Global);
    }

    #[test]
    fn test_config_deserialize_camel_case() {
        let config: Config = serde_json::from_str(r#"{"binarySource": "docker"}"#).unwrap();
        assert_eq!(config.binary_source, ExecutionMode::Docker);
    }

    #[test]
    fn test_config_deserialize_empty() {
        let config: Config = serde_json::from_str("{}").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_config_deserialize_unknown_mode() {
        let result = serde_json::from_str::<Config>(r#"{"binarySource": "podman"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_resolve_context_from_config() {
        let config = Config {
            binary_source: ExecutionMode::Docker,
        };
        let ctx = ResolveContext::from_config(&config);
        assert_eq!(ctx.mode, ExecutionMode::Docker);
        assert_eq!(ctx.os, Os::current());
        assert_eq!(ResolveContext::default().mode, ExecutionMode::Global);
    }
}
