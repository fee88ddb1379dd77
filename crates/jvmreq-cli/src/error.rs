use thiserror::Error;

/// Failures a command reports to the user
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    #[error("File not found - {0}")]
    FileNotFound(String),
    #[error("No Gradle version found in {0}")]
    NoGradleVersion(String),
    #[error("Gradle wrapper is missing or not a file - {0}")]
    WrapperUnavailable(String),
}
