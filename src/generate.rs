use crate::context::AppContext;
use crate::poster::PosterData;
use crate::{qr, scrape};

/// Build a poster for `url`: one scrape round trip through the proxy, a QR
/// reference derived locally, and the documented fallbacks when anything on
/// the network side goes wrong.
pub fn generate_poster(ctx: &mut AppContext, url: &str) -> anyhow::Result<()> {
    // Derived before the phase changes so a bad QR endpoint config cannot
    // leave the session stuck in the generating phase.
    let qr_code = qr::qr_image_url(&ctx.config.qr, url)?;

    ctx.session.begin_generate()?;
    ctx.write_session()?;

    println!("Generating poster for {url}");
    let uploaded_image = ctx.session.uploaded_image.clone();
    let poster = match ctx.scraper.fetch_page_html(url) {
        Ok(html) => poster_from_page(&html, url, uploaded_image.as_deref(), qr_code),
        Err(scrape_err) => {
            // Transport failure. Deliberately collapsed into the same visible
            // fallback as a page without tags, but distinguished here.
            log::warn!("Fetching {url} through the proxy failed: {scrape_err}");
            PosterData::fallback(url, uploaded_image.as_deref(), qr_code)
        }
    };

    println!("Poster ready:");
    poster.print_summary();

    ctx.session.finish_generate(poster);
    ctx.write_session()?;
    Ok(())
}

/// Successful fetch: per-field fallbacks only. A page without any usable tags
/// is not a failure, it is just a sparse page.
fn poster_from_page(
    html: &str,
    url: &str,
    uploaded_image: Option<&str>,
    qr_code: String,
) -> PosterData {
    let metadata = scrape::extract(html, url);
    if metadata.title.is_none() && metadata.image.is_none() {
        log::info!("No Open Graph, Twitter-card, or image tags found on {url}");
    }
    PosterData::from_scraped(url, metadata, uploaded_image, qr_code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::QrConfig;

    const URL: &str = "https://example.com/listing/42";

    fn qr() -> String {
        crate::qr::qr_image_url(&QrConfig::default(), URL).unwrap()
    }

    #[test]
    fn scraped_page_fills_title_and_image() {
        let html = r#"<html><head>
            <meta property="og:title" content="Bright 1BR">
            <meta property="og:image" content="https://cdn.test/a.jpg">
        </head></html>"#;
        let poster = poster_from_page(html, URL, None, qr());
        assert_eq!(poster.title, "Bright 1BR");
        assert_eq!(poster.image.as_deref(), Some("https://cdn.test/a.jpg"));
        assert_eq!(poster.description, "Scan to view this price, listing, and details.");
    }

    #[test]
    fn sparse_page_uses_per_field_fallbacks_not_the_failure_poster() {
        let poster = poster_from_page("<html><body></body></html>", URL, None, qr());
        assert_eq!(poster.title, "Premium Apartment");
        assert_eq!(poster.image, None);
        // success-path description, not the failure one
        assert_eq!(poster.description, "Scan to view this price, listing, and details.");
    }

    #[test]
    fn uploaded_image_wins_on_the_success_path() {
        let html = r#"<html><head>
            <meta property="og:image" content="https://cdn.test/a.jpg">
        </head></html>"#;
        let poster = poster_from_page(html, URL, Some("data:image/png;base64,AA=="), qr());
        assert_eq!(poster.image.as_deref(), Some("data:image/png;base64,AA=="));
    }
}
