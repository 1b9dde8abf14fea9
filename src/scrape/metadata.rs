use kuchiki::traits::TendrilSink;
use kuchiki::NodeRef;
use url::Url;

/// Best-effort title/image scraped from a listing page. Absent fields are not
/// errors; the caller decides the fallbacks.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct PageMetadata {
    pub title: Option<String>,
    pub image: Option<String>,
}

/// Pull the poster-relevant metadata out of raw page HTML.
///
/// Image candidates, first non-empty wins: the Open Graph image tag, the
/// Twitter-card image tag, the first `<img>` source on the page. Title:
/// the Open Graph title tag, else the document title. Relative image URLs
/// are resolved against the origin of `target_url`.
pub fn extract(html: &str, target_url: &str) -> PageMetadata {
    let document = kuchiki::parse_html().one(html);

    let image = select_attr(&document, r#"meta[property="og:image"]"#, "content")
        .or_else(|| select_attr(&document, r#"meta[name="twitter:image"]"#, "content"))
        .or_else(|| select_attr(&document, "img[src]", "src"))
        .and_then(|raw| absolutize(&raw, target_url));

    let title = select_attr(&document, r#"meta[property="og:title"]"#, "content")
        .or_else(|| {
            document
                .select_first("title")
                .ok()
                .map(|t| t.text_contents())
        })
        .map(|t| t.trim().to_owned())
        .filter(|t| !t.is_empty());

    PageMetadata { title, image }
}

/// First match of `selector` with a non-empty `attr`, if any.
fn select_attr(document: &NodeRef, selector: &str, attr: &str) -> Option<String> {
    let matches = document.select(selector).ok()?;
    for element in matches {
        let attributes = element.attributes.borrow();
        if let Some(value) = attributes.get(attr) {
            if !value.is_empty() {
                return Some(value.to_owned());
            }
        }
    }
    None
}

/// Resolve a possibly-relative image URL against the target page's origin.
/// Already-absolute (`http...`) and inline `data:` references pass through.
/// An unresolvable reference is dropped rather than kept broken.
fn absolutize(image_url: &str, target_url: &str) -> Option<String> {
    if image_url.starts_with("http") || image_url.starts_with("data:") {
        return Some(image_url.to_owned());
    }

    let target = match Url::parse(target_url) {
        Ok(url) => url,
        Err(parse_err) => {
            log::debug!("Cannot resolve image {image_url:?} against {target_url:?}: {parse_err}");
            return None;
        }
    };

    Url::parse(&target.origin().ascii_serialization())
        .ok()?
        .join(image_url)
        .ok()
        .map(String::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    const TARGET: &str = "https://listings.test/abc";

    fn page(head: &str, body: &str) -> String {
        format!("<html><head>{head}</head><body>{body}</body></html>")
    }

    #[test]
    fn prefers_open_graph_image() {
        let html = page(
            r#"<meta property="og:image" content="https://cdn.test/og.jpg">
               <meta name="twitter:image" content="https://cdn.test/tw.jpg">"#,
            r#"<img src="https://cdn.test/body.jpg">"#,
        );
        let meta = extract(&html, TARGET);
        assert_eq!(meta.image.as_deref(), Some("https://cdn.test/og.jpg"));
    }

    #[test]
    fn falls_back_to_twitter_image() {
        let html = page(
            r#"<meta name="twitter:image" content="https://cdn.test/tw.jpg">"#,
            "",
        );
        let meta = extract(&html, TARGET);
        assert_eq!(meta.image.as_deref(), Some("https://cdn.test/tw.jpg"));
    }

    #[test]
    fn falls_back_to_first_img_tag() {
        let html = page(
            "",
            r#"<p>hello</p><img src="/images/first.jpg"><img src="/images/second.jpg">"#,
        );
        let meta = extract(&html, TARGET);
        assert_eq!(
            meta.image.as_deref(),
            Some("https://listings.test/images/first.jpg")
        );
    }

    #[test]
    fn skips_empty_image_candidates() {
        let html = page(
            r#"<meta property="og:image" content="">"#,
            r#"<img src="https://cdn.test/real.jpg">"#,
        );
        let meta = extract(&html, TARGET);
        assert_eq!(meta.image.as_deref(), Some("https://cdn.test/real.jpg"));
    }

    #[test]
    fn resolves_relative_image_against_origin() {
        let html = page(r#"<meta property="og:image" content="/images/cover.jpg">"#, "");
        let meta = extract(&html, "https://listings.test/abc");
        assert_eq!(
            meta.image.as_deref(),
            Some("https://listings.test/images/cover.jpg")
        );
    }

    #[test]
    fn keeps_absolute_image_untouched() {
        let html = page(
            r#"<meta property="og:image" content="http://cdn.test/a.png">"#,
            "",
        );
        let meta = extract(&html, TARGET);
        assert_eq!(meta.image.as_deref(), Some("http://cdn.test/a.png"));
    }

    #[test]
    fn drops_relative_image_when_target_unparseable() {
        let html = page(r#"<meta property="og:image" content="/images/cover.jpg">"#, "");
        let meta = extract(&html, "not a url");
        assert_eq!(meta.image, None);
    }

    #[test]
    fn prefers_open_graph_title() {
        let html = page(
            r#"<meta property="og:title" content="Sunny 2BR near campus">
               <title>listings.test</title>"#,
            "",
        );
        let meta = extract(&html, TARGET);
        assert_eq!(meta.title.as_deref(), Some("Sunny 2BR near campus"));
    }

    #[test]
    fn falls_back_to_document_title_trimmed() {
        let html = page("<title>  Cozy studio \n</title>", "");
        let meta = extract(&html, TARGET);
        assert_eq!(meta.title.as_deref(), Some("Cozy studio"));
    }

    #[test]
    fn missing_everything_is_not_an_error() {
        let meta = extract("<html><body><p>nothing here</p></body></html>", TARGET);
        assert_eq!(meta, PageMetadata::default());
    }
}
