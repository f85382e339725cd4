use urlencoding::encode;

/// Build a query string from key-value pairs
pub fn build_query_string(pairs: &[(String, String)]) -> String {
    let mut first = true;
    let mut out = String::new();
    for (k, v) in pairs {
        if !first {
            out.push('&');
        } else {
            first = false;
        }
        out.push_str(&encode(k));
        out.push('=');
        out.push_str(&encode(v));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_query_string_encodes_values() {
        let pairs = vec![
            ("page".to_string(), "2".to_string()),
            ("notice".to_string(), "a b&c".to_string()),
        ];
        assert_eq!(build_query_string(&pairs), "page=2&notice=a%20b%26c");
    }

    #[test]
    fn test_build_query_string_empty() {
        assert_eq!(build_query_string(&[]), "");
    }
}
