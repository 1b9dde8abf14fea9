use super::{ProxyResponse, Result};

pub struct Client {
    agent: ureq::Agent,
    proxy_root_url: String,
}

impl Client {
    pub fn new(proxy_root_url: String) -> Client {
        Client {
            agent: ureq::AgentBuilder::new().build(),
            proxy_root_url,
        }
    }

    /// Fetch the raw HTML of `target_url` through the CORS proxy.
    /// Exactly one network round trip; no retry, no caching.
    pub fn fetch_page_html(&mut self, target_url: &str) -> Result<String> {
        let envelope_json = self
            .agent
            .get(&self.proxy_root_url)
            .query("url", target_url)
            .call()?
            .into_string()?;

        let envelope = serde_json::from_str::<ProxyResponse>(&envelope_json).map_err(|json_err| {
            log::debug!("Proxy envelope was not JSON: {json_err:?}");
            super::Error::from(json_err)
        })?;

        if let Some(code) = envelope.status.as_ref().and_then(|s| s.http_code) {
            if code >= 400 {
                return Err(super::Error::TargetStatus(code));
            }
        }

        match envelope.contents {
            Some(contents) if !contents.is_empty() => Ok(contents),
            _ => Err(super::Error::EmptyContents),
        }
    }
}
