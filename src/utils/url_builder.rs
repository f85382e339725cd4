/// Build an absolute URL from the public base URL and a console path.
/// An empty base keeps the path relative.
pub fn absolute_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    let base = base_url.trim_end_matches('/');
    let trimmed = path.trim_start_matches('/');
    if trimmed.is_empty() {
        return if base.is_empty() { "/".to_string() } else { base.to_string() };
    }
    format!("{}/{}", base, trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absolute_url_with_base() {
        assert_eq!(absolute_url("https://ops.example", "/memos?page=2"), "https://ops.example/memos?page=2");
        assert_eq!(absolute_url("https://ops.example/", "instances"), "https://ops.example/instances");
    }

    #[test]
    fn test_absolute_url_without_base_stays_relative() {
        assert_eq!(absolute_url("", "/instances"), "/instances");
        assert_eq!(absolute_url("", "/"), "/");
    }

    #[test]
    fn test_absolute_url_passes_through_full_urls() {
        assert_eq!(absolute_url("https://ops.example", "http://other/x"), "http://other/x");
    }
}
