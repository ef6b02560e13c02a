//! Shared utility functions used across multiple modules.

/// Normalize optional text by trimming whitespace and removing empties.
///
/// Returns `None` when the input is `None` or the trimmed value is empty.
pub fn normalize_text_option(value: Option<String>) -> Option<String> {
    let value = value?;
    let value = value.trim();
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

/// Normalize a file extension: trimmed, without a leading dot, lowercase.
pub fn normalize_extension(value: &str) -> String {
    value.trim().trim_start_matches('.').to_ascii_lowercase()
}

/// Extension taken from the last `.` segment of a file name.
///
/// Hidden files such as `.env` and names ending in a dot have no extension.
pub fn extension_from_name(name: &str) -> String {
    name.trim()
        .rsplit_once('.')
        .filter(|(stem, ext)| !stem.is_empty() && !ext.is_empty())
        .map_or_else(String::new, |(_, ext)| normalize_extension(ext))
}
