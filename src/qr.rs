use anyhow::Context;
use url::Url;

use crate::config::QrConfig;

/// Build the QR image reference for a poster URL.
///
/// This is a pure function of the endpoint config and the input string: the
/// same URL always yields the same reference. The image itself is rendered
/// by the remote endpoint when the poster document is displayed; we never
/// fetch it.
pub fn qr_image_url(config: &QrConfig, data: &str) -> anyhow::Result<String> {
    let mut url = Url::parse(&config.root_url)
        .with_context(|| format!("Invalid QR endpoint URL {:?}", config.root_url))?;

    url.query_pairs_mut()
        .append_pair("size", &format!("{0}x{0}", config.size))
        .append_pair("data", data);

    Ok(url.into())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_url_same_reference() {
        let config = QrConfig::default();
        let a = qr_image_url(&config, "https://example.com/listing/42").unwrap();
        let b = qr_image_url(&config, "https://example.com/listing/42").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn encodes_size_and_data() {
        let config = QrConfig::default();
        let reference = qr_image_url(&config, "https://example.com/listing/42").unwrap();
        assert!(reference.starts_with("https://api.qrserver.com/v1/create-qr-code/?"));
        assert!(reference.contains("size=200x200"));
        assert!(reference.contains("data=https%3A%2F%2Fexample.com%2Flisting%2F42"));
    }

    #[test]
    fn respects_configured_size() {
        let config = QrConfig {
            size: 320,
            ..QrConfig::default()
        };
        let reference = qr_image_url(&config, "https://example.com").unwrap();
        assert!(reference.contains("size=320x320"));
    }

    #[test]
    fn rejects_malformed_endpoint() {
        let config = QrConfig {
            root_url: "not a url".to_owned(),
            ..QrConfig::default()
        };
        assert!(qr_image_url(&config, "https://example.com").is_err());
    }
}
