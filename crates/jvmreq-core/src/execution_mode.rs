use std::{fmt::Display, str::FromStr};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Where build tooling commands are executed.
///
/// Only `Docker` runs inside an isolated runtime with its own JDK baseline; every other
/// mode executes directly on the host.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
pub enum ExecutionMode {
    /// Tools already installed on the host
    #[default]
    Global,
    /// Tools run inside a container image
    Docker,
    /// Tools installed on demand on the host
    Install,
    /// Tools provided by a hermit environment
    Hermit,
}

impl ExecutionMode {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::Docker => "docker",
            Self::Install => "install",
            Self::Hermit => "hermit",
        }
    }

    #[must_use]
    pub const fn is_containerized(&self) -> bool {
        matches!(self, Self::Docker)
    }
}

impl Display for ExecutionMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown execution mode: {0}")]
pub struct UnknownExecutionMode(pub String);

impl FromStr for ExecutionMode {
    type Err = UnknownExecutionMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "docker" => Ok(Self::Docker),
            "install" => Ok(Self::Install),
            "hermit" => Ok(Self::Hermit),
            _ => Err(UnknownExecutionMode(s.to_string())),
        }
    }
}
