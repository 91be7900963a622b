use crate::UrlError;
use url::Url;

/// Resolves a raw href from a page into an absolute URL.
///
/// The href is first tried as an absolute URL on its own; if that fails it is
/// joined against the page's final (post-redirect) URL. The fragment component
/// is stripped from the result, and only `http`/`https` URLs are accepted.
///
/// Callers are expected to drop erroring links and move on; a bad href is
/// never a reason to stop a crawl.
pub fn resolve_href(raw_href: &str, page_final_url: &str) -> Result<String, UrlError> {
    let raw_href = raw_href.trim();

    let mut resolved = match Url::parse(raw_href) {
        Ok(url) => url,
        Err(_) => {
            // Not absolute on its own; resolve relative to the page it came from
            let base = Url::parse(page_final_url)
                .map_err(|e| UrlError::Parse(format!("{}: {}", page_final_url, e)))?;
            base.join(raw_href)
                .map_err(|e| UrlError::Parse(format!("{}: {}", raw_href, e)))?
        }
    };

    if resolved.scheme() != "http" && resolved.scheme() != "https" {
        return Err(UrlError::InvalidScheme(resolved.scheme().to_string()));
    }

    resolved.set_fragment(None);
    Ok(resolved.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = "http://site.test/";

    #[test]
    fn test_absolute_href_kept() {
        let resolved = resolve_href("http://other.test/x", PAGE).unwrap();
        assert_eq!(resolved, "http://other.test/x");
    }

    #[test]
    fn test_relative_href_joined_against_page() {
        let resolved = resolve_href("/page1", PAGE).unwrap();
        assert_eq!(resolved, "http://site.test/page1");
    }

    #[test]
    fn test_relative_path_href() {
        let resolved = resolve_href("sub/page", "http://site.test/dir/index.html").unwrap();
        assert_eq!(resolved, "http://site.test/dir/sub/page");
    }

    #[test]
    fn test_protocol_relative_href() {
        let resolved = resolve_href("//other.test/x", PAGE).unwrap();
        assert_eq!(resolved, "http://other.test/x");
    }

    #[test]
    fn test_fragment_stripped() {
        let resolved = resolve_href("http://site.test/page#section", PAGE).unwrap();
        assert_eq!(resolved, "http://site.test/page");
    }

    #[test]
    fn test_fragment_only_href_resolves_to_page() {
        let resolved = resolve_href("#top", PAGE).unwrap();
        assert_eq!(resolved, "http://site.test/");
    }

    #[test]
    fn test_javascript_href_rejected() {
        let result = resolve_href("javascript:void(0)", PAGE);
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_mailto_href_rejected() {
        let result = resolve_href("mailto:admin@site.test", PAGE);
        assert!(matches!(result, Err(UrlError::InvalidScheme(_))));
    }

    #[test]
    fn test_unresolvable_href_with_bad_base() {
        let result = resolve_href("/page", "not a url");
        assert!(matches!(result, Err(UrlError::Parse(_))));
    }

    #[test]
    fn test_resolution_is_idempotent() {
        let once = resolve_href("/page1?q=1#frag", PAGE).unwrap();
        let twice = resolve_href(&once, PAGE).unwrap();
        assert_eq!(once, twice);
    }
}
