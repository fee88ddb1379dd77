use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Host operating system family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Os {
    Linux,
    Darwin,
    Windows,
    Other,
}

impl Os {
    /// Detect the current operating system at compile time
    #[must_use]
    pub const fn current() -> Self {
        if cfg!(target_os = "windows") {
            Self::Windows
        } else if cfg!(target_os = "macos") {
            Self::Darwin
        } else if cfg!(target_os = "linux") {
            Self::Linux
        } else {
            Self::Other
        }
    }

    /// Map a Node-style platform identifier (`win32`, `linux`, `darwin`, ...)
    #[must_use]
    pub fn from_platform_name(name: &str) -> Self {
        match name {
            "win32" | "windows" => Self::Windows,
            "linux" => Self::Linux,
            "darwin" | "macos" => Self::Darwin,
            _ => Self::Other,
        }
    }

    #[must_use]
    pub const fn is_windows(&self) -> bool {
        matches!(self, Self::Windows)
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Linux => "linux",
            Self::Darwin => "darwin",
            Self::Windows => "windows",
            Self::Other => "other",
        }
    }
}

impl Display for Os {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
