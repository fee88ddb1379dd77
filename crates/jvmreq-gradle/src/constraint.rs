use jvmreq_core::{ExecutionMode, JavaConstraint, LocalFs, ResolveContext};
use jvmreq_utils::coerce_version;
use semver::Version;
use tracing::debug;

use crate::daemon_jvm::get_jvm_configuration;

/// Java baseline assumed when nothing pins the runtime on the host
const HOST_JAVA_MAJOR: u64 = 8;

/// Java major assumed in a container when the Gradle version is unknown
const UNSPECIFIED_GRADLE_JAVA_MAJOR: u64 = 11;

/// Java major for Gradle versions past every bound below
const LATEST_JAVA_MAJOR: u64 = 17;

/// Exclusive upper Gradle bound and the Java major required below it, in ascending order
const GRADLE_JAVA_COMPATIBILITY: &[((u64, u64, u64), u64)] =
    &[((5, 0, 0), 8), ((7, 0, 0), 11), ((7, 3, 0), 16)];

/// Resolve the Java constraint a Gradle build needs
///
/// Layers are tried in order until one answers:
/// 1. a `toolchainVersion` in the daemon JVM properties next to `wrapper_path`
/// 2. the host baseline `^8.0.0` for any mode that is not containerized
/// 3. the Gradle to Java compatibility table
///
/// Never fails; an unknown Gradle version in a container maps to `^11.0.0`.
pub async fn get_java_constraint(
    fs: &dyn LocalFs,
    ctx: &ResolveContext,
    gradle_version: Option<&str>,
    wrapper_path: &str,
) -> JavaConstraint {
    if let Some(toolchain_version) = get_jvm_configuration(fs, wrapper_path).await {
        debug!(%toolchain_version, "using daemon JVM toolchain");
        return JavaConstraint::caret(toolchain_version);
    }

    let constraint =
        host_baseline(ctx.mode).unwrap_or_else(|| compatible_java(gradle_version));
    debug!(mode = %ctx.mode, ?gradle_version, %constraint, "resolved java constraint");
    constraint
}

fn host_baseline(mode: ExecutionMode) -> Option<JavaConstraint> {
    (!mode.is_containerized()).then(|| JavaConstraint::caret(HOST_JAVA_MAJOR))
}

fn compatible_java(gradle_version: Option<&str>) -> JavaConstraint {
    let Some(version) = gradle_version.and_then(coerce_version) else {
        return JavaConstraint::caret(UNSPECIFIED_GRADLE_JAVA_MAJOR);
    };
    let major = GRADLE_JAVA_COMPATIBILITY
        .iter()
        .find(|((major, minor, patch), _)| version < Version::new(*major, *minor, *patch))
        .map_or(LATEST_JAVA_MAJOR, |(_, java_major)| *java_major);
    JavaConstraint::caret(major)
}
