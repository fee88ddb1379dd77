use semver::Version;

/// Coerce a loose version string into a comparable semver version
///
/// Takes the leading dot-separated numeric groups (at most three); missing
/// components become `0` and any qualifier after them is dropped, so `"7.0"`
/// becomes `7.0.0` and `"8.5-rc-1"` becomes `8.5.0`.
#[must_use]
pub fn coerce_version(version: &str) -> Option<Version> {
    let mut parts = [0u64; 3];
    let mut found = 0;
    for group in version.trim().trim_start_matches(['v', 'V']).split('.') {
        if found == parts.len() {
            break;
        }
        let digits_end = group
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(group.len());
        if digits_end == 0 {
            break;
        }
        parts[found] = group[..digits_end].parse().ok()?;
        found += 1;
        // a qualifier ends the numeric part
        if digits_end < group.len() {
            break;
        }
    }

    (found > 0).then(|| Version::new(parts[0], parts[1], parts[2]))
}
