//! # jvmreq-gradle
//!
//! Resolves the Java runtime a Gradle build needs without running Gradle.
//!
//! An explicit `gradle/gradle-daemon-jvm.properties` toolchain always wins. Otherwise host
//! execution falls back to a conservative Java 8 baseline, while containerized execution
//! maps the Gradle version onto a compatibility table. Wrapper scripts are located and
//! checked before being handed out as runnable commands.

pub mod command;
pub mod constraint;
pub mod daemon_jvm;
pub mod inspect;
pub mod version_extractor;

#[cfg(test)]
mod test_fs;

pub use command::{gradle_wrapper_file_name, gradle_wrapper_file_name_for, prepare_gradle_command};
pub use constraint::get_java_constraint;
pub use daemon_jvm::{DAEMON_JVM_PROPERTIES, daemon_jvm_properties_path, get_jvm_configuration};
pub use inspect::{GRADLE_WRAPPER_PROPERTIES, GradleInspection, inspect_project};
pub use version_extractor::{
    DistributionKind, GradleDistribution, extract_distribution, extract_gradle_version,
};
