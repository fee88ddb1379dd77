use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Caret range over a Java major version, e.g. `^17.0.0`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct JavaConstraint(String);

impl JavaConstraint {
    #[must_use]
    pub fn caret(major: impl Display) -> Self {
        Self(format!("^{major}.0.0"))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for JavaConstraint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
