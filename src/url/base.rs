/// Reduces an absolute URL to its origin-only base form.
///
/// Splits the URL on `/` and keeps the first three segments (`scheme:`, the
/// empty segment between the slashes, and `host[:port]`), rejoined:
///
/// ```
/// use linkrake::url::to_base;
///
/// assert_eq!(to_base("http://host.example/search?q=1"), "http://host.example");
/// ```
///
/// A string without that shape is returned unchanged rather than failing.
pub fn to_base(absolute_url: &str) -> String {
    let mut segments = absolute_url.splitn(4, '/');
    match (segments.next(), segments.next(), segments.next()) {
        (Some(scheme), Some(gap), Some(host)) => format!("{}/{}/{}", scheme, gap, host),
        _ => absolute_url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_reduction_literal() {
        assert_eq!(
            to_base("http://www.example.com/search?q=1337"),
            "http://www.example.com"
        );
    }

    #[test]
    fn test_origin_only_is_unchanged() {
        assert_eq!(to_base("http://host.example"), "http://host.example");
    }

    #[test]
    fn test_trailing_slash_is_dropped() {
        assert_eq!(to_base("http://host.example/"), "http://host.example");
    }

    #[test]
    fn test_port_is_kept() {
        assert_eq!(
            to_base("https://host.example:8443/a/b?c=d"),
            "https://host.example:8443"
        );
    }

    #[test]
    fn test_https_scheme() {
        assert_eq!(to_base("https://example.com/page"), "https://example.com");
    }

    #[test]
    fn test_idempotent() {
        let base = to_base("http://host.example/deep/path");
        assert_eq!(to_base(&base), base);
    }

    #[test]
    fn test_shapeless_string_unchanged() {
        assert_eq!(to_base("not-a-url"), "not-a-url");
        assert_eq!(to_base("one/two"), "one/two");
        assert_eq!(to_base(""), "");
    }
}
