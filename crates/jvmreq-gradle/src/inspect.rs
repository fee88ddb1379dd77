use jvmreq_core::{JavaConstraint, LocalFs, ResolveContext};
use serde::Serialize;
use tracing::warn;

use crate::{
    command::{gradle_wrapper_file_name_for, prepare_gradle_command},
    constraint::get_java_constraint,
    version_extractor::{GradleDistribution, extract_distribution, extract_gradle_version},
};

/// Wrapper properties, relative to the project root
pub const GRADLE_WRAPPER_PROPERTIES: &str = "gradle/wrapper/gradle-wrapper.properties";

/// Everything known about a Gradle project's Java requirement
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GradleInspection {
    pub gradle_version: Option<String>,
    pub distribution: Option<GradleDistribution>,
    /// Runnable wrapper invocation, `None` when the script is missing
    pub wrapper_command: Option<String>,
    pub java_constraint: JavaConstraint,
}

/// Inspect the Gradle project `fs` is rooted at
pub async fn inspect_project(fs: &dyn LocalFs, ctx: &ResolveContext) -> GradleInspection {
    let wrapper = gradle_wrapper_file_name_for(ctx.os);

    let properties = match fs.read_local_file(GRADLE_WRAPPER_PROPERTIES).await {
        Ok(properties) => properties,
        Err(e) => {
            warn!(path = GRADLE_WRAPPER_PROPERTIES, error = %e, "failed to read wrapper properties");
            None
        }
    };
    let distribution = properties.as_deref().and_then(extract_distribution);
    let gradle_version = extract_gradle_version(properties.as_deref());

    let wrapper_command = prepare_gradle_command(fs, ctx.os, wrapper).await;
    let java_constraint = get_java_constraint(fs, ctx, gradle_version.as_deref(), wrapper).await;

    GradleInspection {
        gradle_version,
        distribution,
        wrapper_command,
        java_constraint,
    }
}
