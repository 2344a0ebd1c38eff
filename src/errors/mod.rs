/// Add context to fetch errors
pub fn fetch_context(url: &str) -> String {
    format!("Failed to fetch from: {}", url)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Add context to CSV log errors
pub fn log_context(operation: &str, path: &std::path::Path) -> String {
    format!("Failed to {} CSV log: {}", operation, path.display())
}
