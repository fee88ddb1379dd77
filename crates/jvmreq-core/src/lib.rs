pub mod config;
pub mod execution_mode;
pub mod java_constraint;
pub mod local_fs;
pub mod os;

// Re-export for convenience
pub use config::{Config, ResolveContext};
pub use execution_mode::{ExecutionMode, UnknownExecutionMode};
pub use java_constraint::JavaConstraint;
pub use local_fs::{FileStat, LocalFs};
pub use os::Os;
