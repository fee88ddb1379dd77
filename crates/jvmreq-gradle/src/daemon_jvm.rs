use jvmreq_core::LocalFs;
use jvmreq_utils::get_property;
use tracing::{debug, warn};

/// Daemon JVM criteria file, relative to the project root
pub const DAEMON_JVM_PROPERTIES: &str = "gradle/gradle-daemon-jvm.properties";

const TOOLCHAIN_VERSION_KEY: &str = "toolchainVersion";

/// Path of the daemon JVM properties next to the given wrapper script
///
/// `sub/gradlew` maps to `sub/gradle/gradle-daemon-jvm.properties`; a wrapper without a
/// directory component (or in `.`) maps to the project root.
#[must_use]
pub fn daemon_jvm_properties_path(wrapper_path: &str) -> String {
    let normalized = wrapper_path.replace('\\', "/");
    let dir = normalized
        .rsplit_once('/')
        .map_or("", |(dir, _)| dir)
        .trim_end_matches('/');
    let dir = dir.strip_prefix("./").unwrap_or(dir);
    if dir.is_empty() || dir == "." {
        DAEMON_JVM_PROPERTIES.to_string()
    } else {
        format!("{dir}/{DAEMON_JVM_PROPERTIES}")
    }
}

/// Read the `toolchainVersion` declared for the Gradle daemon, if any
///
/// Missing or unreadable files and files without the key all yield `None`.
pub async fn get_jvm_configuration(fs: &dyn LocalFs, wrapper_path: &str) -> Option<String> {
    let properties_path = daemon_jvm_properties_path(wrapper_path);
    let content = match fs.read_local_file(&properties_path).await {
        Ok(Some(content)) => content,
        Ok(None) => {
            debug!(path = %properties_path, "daemon JVM properties not found");
            return None;
        }
        Err(e) => {
            warn!(path = %properties_path, error = %e, "failed to read daemon JVM properties");
            return None;
        }
    };

    let toolchain_version = get_property(&content, TOOLCHAIN_VERSION_KEY)
        .filter(|value| !value.is_empty())
        .map(str::to_string);
    debug!(
        path = %properties_path,
        toolchain_version = ?toolchain_version,
        "read daemon JVM properties"
    );
    toolchain_version
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_fs::MemoryFs;
    use rstest::rstest;

    const DAEMON_JVM: &str = "#This file is generated by updateDaemonJvm\ntoolchainVersion=21\n";

    #[rstest]
    #[case("sub/gradlew", "sub/gradle/gradle-daemon-jvm.properties")]
    #[case("a/b/gradlew.bat", "a/b/gradle/gradle-daemon-jvm.properties")]
    #[case("a\\b\\gradlew.bat", "a/b/gradle/gradle-daemon-jvm.properties")]
    #[case("gradlew", "gradle/gradle-daemon-jvm.properties")]
    #[case("./gradlew", "gradle/gradle-daemon-jvm.properties")]
    #[case("./sub/gradlew", "sub/gradle/gradle-daemon-jvm.properties")]
    #[case("", "gradle/gradle-daemon-jvm.properties")]
    fn test_daemon_jvm_properties_path(#[case] wrapper: &str, #[case] expected: &str) {
        assert_eq!(daemon_jvm_properties_path(wrapper), expected);
    }

    #[tokio::test]
    async fn test_get_jvm_configuration_extracts_toolchain_version() {
        let fs = MemoryFs::new().with_file(DAEMON_JVM_PROPERTIES, DAEMON_JVM);
        assert_eq!(get_jvm_configuration(&fs, "").await.as_deref(), Some("21"));
    }

    #[tokio::test]
    async fn test_get_jvm_configuration_missing_file() {
        let fs = MemoryFs::new();
        assert_eq!(get_jvm_configuration(&fs, "sub/gradlew").await, None);
        assert_eq!(fs.reads(), vec!["sub/gradle/gradle-daemon-jvm.properties"]);
    }

    #[tokio::test]
    async fn test_get_jvm_configuration_missing_key() {
        let fs = MemoryFs::new().with_file(DAEMON_JVM_PROPERTIES, "toolchainVendor=ADOPTIUM\n");
        assert_eq!(get_jvm_configuration(&fs, "./gradlew").await, None);
    }

    #[tokio::test]
    async fn test_get_jvm_configuration_malformed_content() {
        let fs = MemoryFs::new().with_file(
            "sub/gradle/gradle-daemon-jvm.properties",
            "garbage line\n=\n  toolchainVersion = 17 \n[section]\n",
        );
        assert_eq!(
            get_jvm_configuration(&fs, "sub/gradlew").await.as_deref(),
            Some("17")
        );
    }

    #[tokio::test]
    async fn test_get_jvm_configuration_read_error() {
        let fs = MemoryFs::new()
            .with_file(DAEMON_JVM_PROPERTIES, DAEMON_JVM)
            .failing_reads();
        assert_eq!(get_jvm_configuration(&fs, "gradlew").await, None);
    }
}
