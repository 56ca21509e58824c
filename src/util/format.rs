#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Date part of a backend timestamp (`2025-04-02T09:00:00.000Z` →
/// `2025-04-02`). Timestamps are displayed as-is, never parsed.
pub fn date_prefix(timestamp: &str) -> &str {
    timestamp.get(..10).unwrap_or(timestamp)
}

/// Basename of a server-side path, used for download URLs and labels.
pub fn basename(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// Uppercased first letter of a name, for the header avatar.
pub fn initial(name: &str) -> String {
    name.chars()
        .next()
        .map_or_else(String::new, |c| c.to_uppercase().to_string())
}
