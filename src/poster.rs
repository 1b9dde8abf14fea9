use serde::{Deserialize, Serialize};

use crate::config::QrConfig;
use crate::qr;
use crate::scrape::PageMetadata;

/// Title used when a page was fetched but exposed no usable title tag.
pub static SCRAPED_TITLE_FALLBACK: &str = "Premium Apartment";
/// Title used when the page could not be fetched at all.
pub static FALLBACK_TITLE: &str = "Premium Student Apartment";

pub static SUBTITLE: &str = "Off-Campus Apartment For Rent";
pub static DESCRIPTION: &str = "Scan to view this price, listing, and details.";
pub static FALLBACK_DESCRIPTION: &str = "Scan to view this amazing apartment listing";
pub static FOOTER_TITLE: &str = "Find the perfect off-campus apartment near campus";
pub static FOOTER_SUBTITLE: &str =
    "Quality student housing • Verified listings • Trusted by students";

/// Everything that ends up on a printed poster. The footer fields are fixed
/// copy and not reachable through `PosterField`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PosterData {
    pub title: String,
    pub subtitle: String,
    pub description: String,
    /// Absolute image URL or an inline `data:` URL from an upload.
    pub image: Option<String>,
    pub url: String,
    pub qr_code: String,
    pub footer_title: String,
    pub footer_subtitle: String,
}

impl PosterData {
    /// Poster built from successfully scraped page metadata. An uploaded
    /// image always wins over whatever the page offered.
    pub fn from_scraped(
        url: &str,
        metadata: PageMetadata,
        uploaded_image: Option<&str>,
        qr_code: String,
    ) -> PosterData {
        PosterData {
            title: metadata
                .title
                .unwrap_or_else(|| SCRAPED_TITLE_FALLBACK.to_owned()),
            subtitle: SUBTITLE.to_owned(),
            description: DESCRIPTION.to_owned(),
            image: uploaded_image.map(str::to_owned).or(metadata.image),
            url: url.to_owned(),
            qr_code,
            footer_title: FOOTER_TITLE.to_owned(),
            footer_subtitle: FOOTER_SUBTITLE.to_owned(),
        }
    }

    /// Poster built when the scrape failed for any reason. Identical for
    /// every failure cause on purpose; the log carries the distinction.
    pub fn fallback(url: &str, uploaded_image: Option<&str>, qr_code: String) -> PosterData {
        PosterData {
            title: FALLBACK_TITLE.to_owned(),
            subtitle: SUBTITLE.to_owned(),
            description: FALLBACK_DESCRIPTION.to_owned(),
            image: uploaded_image.map(str::to_owned),
            url: url.to_owned(),
            qr_code,
            footer_title: FOOTER_TITLE.to_owned(),
            footer_subtitle: FOOTER_SUBTITLE.to_owned(),
        }
    }

    /// Set one editable field. Any text is accepted, including the empty
    /// string; an empty image clears it. Changing the URL re-derives the QR
    /// reference so it never points at a stale address.
    pub fn set_field(
        &mut self,
        field: PosterField,
        value: &str,
        qr_config: &QrConfig,
    ) -> anyhow::Result<()> {
        match field {
            PosterField::Title => self.title = value.to_owned(),
            PosterField::Subtitle => self.subtitle = value.to_owned(),
            PosterField::Description => self.description = value.to_owned(),
            PosterField::Image => {
                self.image = if value.is_empty() {
                    None
                } else {
                    Some(value.to_owned())
                };
            }
            PosterField::Url => {
                self.url = value.to_owned();
                self.qr_code = qr::qr_image_url(qr_config, value)?;
            }
        }
        Ok(())
    }

    pub fn print_summary(&self) {
        println!(" - title: {}", self.title);
        println!(" - subtitle: {}", self.subtitle);
        println!(" - description: {}", self.description);
        println!(
            " - image: {}",
            match self.image.as_deref() {
                Some(image) if image.starts_with("data:") => "<uploaded image>",
                Some(image) => image,
                None => "<none>",
            }
        );
        println!(" - url: {}", self.url);
        println!(" - qr-code: {}", self.qr_code);
        println!(" - footer: {} / {}", self.footer_title, self.footer_subtitle);
    }
}

/// The user-editable poster fields. Footer copy is deliberately absent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::EnumString, strum::Display, strum::VariantNames)]
#[strum(serialize_all = "lowercase")]
pub enum PosterField {
    Title,
    Subtitle,
    Description,
    Image,
    Url,
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    fn qr_for(url: &str) -> String {
        crate::qr::qr_image_url(&QrConfig::default(), url).unwrap()
    }

    #[test]
    fn fallback_poster_matches_documented_defaults() {
        let url = "https://example.com/listing/42";
        let poster = PosterData::fallback(url, None, qr_for(url));

        assert_eq!(poster.title, "Premium Student Apartment");
        assert_eq!(poster.image, None);
        assert_eq!(poster.url, url);
        assert_eq!(poster.subtitle, "Off-Campus Apartment For Rent");
        assert_eq!(
            poster.description,
            "Scan to view this amazing apartment listing"
        );
        assert_eq!(
            poster.footer_title,
            "Find the perfect off-campus apartment near campus"
        );
        assert_eq!(
            poster.footer_subtitle,
            "Quality student housing • Verified listings • Trusted by students"
        );
    }

    #[test]
    fn uploaded_image_overrides_scraped_image() {
        let url = "https://example.com/listing/42";
        let metadata = PageMetadata {
            title: Some("Listing".to_owned()),
            image: Some("https://cdn.test/scraped.jpg".to_owned()),
        };
        let poster =
            PosterData::from_scraped(url, metadata, Some("data:image/png;base64,AA=="), qr_for(url));
        assert_eq!(poster.image.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn uploaded_image_survives_fallback() {
        let url = "https://example.com/listing/42";
        let poster = PosterData::fallback(url, Some("data:image/png;base64,AA=="), qr_for(url));
        assert_eq!(poster.image.as_deref(), Some("data:image/png;base64,AA=="));
    }

    #[test]
    fn scraped_title_falls_back_when_absent() {
        let url = "https://example.com/listing/42";
        let poster = PosterData::from_scraped(url, PageMetadata::default(), None, qr_for(url));
        assert_eq!(poster.title, "Premium Apartment");
        assert_eq!(poster.description, "Scan to view this price, listing, and details.");
        assert_eq!(poster.image, None);
    }

    #[test]
    fn setting_url_rederives_qr_code() {
        let config = QrConfig::default();
        let mut poster = PosterData::fallback("https://a.test", None, qr_for("https://a.test"));

        poster
            .set_field(PosterField::Url, "https://b.test", &config)
            .unwrap();
        assert_eq!(poster.url, "https://b.test");
        assert_eq!(poster.qr_code, qr_for("https://b.test"));
    }

    #[test]
    fn setting_empty_image_clears_it() {
        let config = QrConfig::default();
        let mut poster = PosterData::fallback(
            "https://a.test",
            Some("data:image/png;base64,AA=="),
            qr_for("https://a.test"),
        );

        poster.set_field(PosterField::Image, "", &config).unwrap();
        assert_eq!(poster.image, None);
    }

    #[test]
    fn empty_text_values_are_accepted() {
        let config = QrConfig::default();
        let mut poster = PosterData::fallback("https://a.test", None, qr_for("https://a.test"));
        poster.set_field(PosterField::Title, "", &config).unwrap();
        assert_eq!(poster.title, "");
    }

    #[test]
    fn field_names_parse_lowercase() {
        assert_eq!(PosterField::from_str("title").unwrap(), PosterField::Title);
        assert_eq!(PosterField::from_str("url").unwrap(), PosterField::Url);
        assert!(PosterField::from_str("qrCode").is_err());
        assert!(PosterField::from_str("footer_title").is_err());
    }

    #[test]
    fn serializes_camel_case() {
        let url = "https://example.com/listing/42";
        let poster = PosterData::fallback(url, None, qr_for(url));
        let json = serde_json::to_value(&poster).unwrap();
        assert!(json.get("qrCode").is_some());
        assert!(json.get("footerTitle").is_some());
        assert!(json.get("qr_code").is_none());
    }
}
