use scraper::{Html, Selector};

/// Pulls the raw href attribute off every anchor in the document.
///
/// Empty hrefs are skipped; everything else is returned as written,
/// duplicates included.
pub fn extract_hrefs(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);
    let mut hrefs = Vec::new();

    if let Ok(selector) = Selector::parse("a[href]") {
        for element in document.select(&selector) {
            if let Some(href) = element.value().attr("href") {
                let href = href.trim();
                if !href.is_empty() {
                    hrefs.push(href.to_string());
                }
            }
        }
    }

    hrefs
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_raw_hrefs() {
        let html = r#"<html><body>
            <a href="/page1">One</a>
            <a href="http://other.test/x">Two</a>
        </body></html>"#;
        let hrefs = extract_hrefs(html);
        assert_eq!(hrefs, vec!["/page1", "http://other.test/x"]);
    }

    #[test]
    fn test_keeps_duplicates() {
        let html = r#"<html><body>
            <a href="/page">A</a>
            <a href="/page">B</a>
        </body></html>"#;
        assert_eq!(extract_hrefs(html).len(), 2);
    }

    #[test]
    fn test_keeps_special_schemes() {
        // Scheme filtering happens during resolution, not extraction
        let html = r#"<html><body><a href="javascript:void(0)">JS</a></body></html>"#;
        assert_eq!(extract_hrefs(html), vec!["javascript:void(0)"]);
    }

    #[test]
    fn test_skips_empty_hrefs() {
        let html = r#"<html><body><a href="  ">Blank</a><a>None</a></body></html>"#;
        assert!(extract_hrefs(html).is_empty());
    }

    #[test]
    fn test_no_anchors() {
        let html = "<html><body><p>No links here</p></body></html>";
        assert!(extract_hrefs(html).is_empty());
    }
}
