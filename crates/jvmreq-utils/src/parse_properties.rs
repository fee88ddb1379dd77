/// Parse line-oriented `key=value` properties content
///
/// Blank lines and comment lines (`#` or `!`) are skipped. Each remaining line is
/// split on its first `=`; lines without one are ignored. Keys and values are trimmed.
#[must_use]
pub fn parse_properties(content: &str) -> Vec<(&str, &str)> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#') && !line.starts_with('!'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim(), value.trim()))
        .collect()
}

/// Value of the first entry named `key`
#[must_use]
pub fn get_property<'a>(content: &'a str, key: &str) -> Option<&'a str> {
    parse_properties(content)
        .into_iter()
        .find_map(|(k, v)| (k == key).then_some(v))
}
