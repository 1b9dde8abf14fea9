use serde::Deserialize;

/// The JSON envelope returned by the CORS proxy: the raw page HTML in
/// `contents`, plus the status the proxy saw when fetching the target.
#[derive(Debug, Deserialize)]
pub struct ProxyResponse {
    #[serde(default)]
    pub contents: Option<String>,
    #[serde(default)]
    pub status: Option<ProxyStatus>,
}

#[derive(Debug, Deserialize)]
pub struct ProxyStatus {
    pub http_code: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_envelope() {
        let json = r#"{
            "contents": "<html><head><title>Listing</title></head></html>",
            "status": { "url": "https://listings.test/abc", "http_code": 200 }
        }"#;
        let response = serde_json::from_str::<ProxyResponse>(json).unwrap();
        assert!(response.contents.unwrap().contains("<title>Listing</title>"));
        assert_eq!(response.status.unwrap().http_code, Some(200));
    }

    #[test]
    fn tolerates_missing_fields() {
        let response = serde_json::from_str::<ProxyResponse>("{}").unwrap();
        assert!(response.contents.is_none());
        assert!(response.status.is_none());
    }
}
