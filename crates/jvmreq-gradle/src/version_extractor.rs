use jvmreq_utils::get_property;
use regex::Regex;
use serde::Serialize;
use std::{fmt::Display, sync::LazyLock};

static DISTRIBUTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?P<url>[^\s=]*-(?P<version>\d+\.\d+(?:\.\d+)?(?:-\w+)*)-(?P<kind>bin|all)\.zip)",
    )
    .expect("hardcoded regex must compile")
});

// A dotted version standing alone: not part of a host, path or `key=value` pair
static VERSION_TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?m)(?:^|[\s_-])v?(?P<version>\d+(?:\.\d+)+(?:-[A-Za-z][0-9A-Za-z]*(?:[.-][0-9A-Za-z]+)*)?)(?:$|[\s,;)])",
    )
    .expect("hardcoded regex must compile")
});

const DISTRIBUTION_URL_KEY: &str = "distributionUrl";

/// Flavour of a Gradle distribution archive
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DistributionKind {
    /// Binaries only
    Bin,
    /// Binaries, sources and docs
    All,
}

impl Display for DistributionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Self::Bin => "bin",
                Self::All => "all",
            }
        )
    }
}

/// A Gradle distribution referenced by `distributionUrl`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GradleDistribution {
    pub url: String,
    pub version: String,
    pub kind: DistributionKind,
}

/// Find a distribution archive URL (`...-<version>-bin.zip` / `-all.zip`) in `text`
///
/// Properties escapes such as `https\://` are removed from the returned URL.
#[must_use]
pub fn extract_distribution(text: &str) -> Option<GradleDistribution> {
    let caps = DISTRIBUTION_PATTERN.captures(text)?;
    let kind = match &caps["kind"] {
        "all" => DistributionKind::All,
        _ => DistributionKind::Bin,
    };
    Some(GradleDistribution {
        url: caps["url"].replace(r"\:", ":").replace(r"\=", "="),
        version: caps["version"].to_string(),
        kind,
    })
}

/// Find the Gradle version embedded in wrapper properties, a distribution URL or similar text
///
/// A distribution archive URL is the most specific source. When the text has a
/// `distributionUrl` entry, only the archive file name is searched; otherwise a standalone
/// dotted version token is taken. Absent or version-free input yields `None`.
#[must_use]
pub fn extract_gradle_version(text: Option<&str>) -> Option<String> {
    let text = text?;
    if let Some(distribution) = extract_distribution(text) {
        return Some(distribution.version);
    }
    let haystack = match get_property(text, DISTRIBUTION_URL_KEY) {
        Some(url) => {
            let file_name = url.rsplit(['/', '\\']).next().unwrap_or(url);
            file_name.strip_suffix(".zip").unwrap_or(file_name)
        }
        None => text,
    };
    VERSION_TOKEN_PATTERN
        .captures(haystack)
        .map(|caps| caps["version"].to_string())
}
