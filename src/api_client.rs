use crate::error::{FetchError, Result};
use reqwest::Url;
use std::time::Duration;
use tracing::debug;

pub const DEFAULT_BASE_URL: &str = "https://blockstream.info/api";

/// Raw result of a single GET against the explorer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Anything that can look up an address and hand back the raw HTTP answer.
///
/// Implementations perform exactly one request per call and never retry.
pub trait AddressSource {
    fn get_address(&self, address: &str) -> Result<HttpResponse>;
}

/// Build the lookup URL for an address.
///
/// The address always lands in exactly one path segment, percent-encoded,
/// so it can never select a different endpoint or add a query.
pub fn address_url(base_url: &str, address: &str) -> Result<Url> {
    // Dot segments are dropped by the URL path setter
    if matches!(address, "." | "..") {
        return Err(FetchError::UnaddressableInput {
            address: address.to_string(),
            reason: "dot path segments cannot be sent".to_string(),
        });
    }

    let invalid_base = |reason: String| FetchError::InvalidBaseUrl {
        url: base_url.to_string(),
        reason,
    };

    let mut url = Url::parse(base_url).map_err(|e| invalid_base(e.to_string()))?;
    url.set_query(None);
    url.set_fragment(None);
    url.path_segments_mut()
        .map_err(|_| invalid_base("cannot be a base URL".to_string()))?
        .pop_if_empty()
        .push("address")
        .push(address);
    Ok(url)
}

/// Blocking client for the Blockstream Esplora API
#[derive(Clone)]
pub struct BlockstreamClient {
    base_url: String,
    client: reqwest::blocking::Client,
}

impl BlockstreamClient {
    /// `timeout` of `None` leaves the request unbounded.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Transport {
                url: base_url.to_string(),
                source: Box::new(e),
            })?;

        Ok(Self {
            base_url: base_url.to_string(),
            client,
        })
    }

    /// Use a preconfigured reqwest client (proxy settings, TLS roots).
    pub fn with_client(base_url: &str, client: reqwest::blocking::Client) -> Self {
        Self {
            base_url: base_url.to_string(),
            client,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

impl AddressSource for BlockstreamClient {
    fn get_address(&self, address: &str) -> Result<HttpResponse> {
        let url = address_url(&self.base_url, address)?;
        debug!(target: "api", "GET {}", url);

        let transport = |e: reqwest::Error| FetchError::Transport {
            url: url.to_string(),
            source: Box::new(e),
        };

        let response = self.client.get(url.clone()).send().map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().map_err(transport)?;

        debug!(target: "api", "Received HTTP {} ({} bytes)", status, body.len());
        Ok(HttpResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_address_url_default_base() {
        assert_eq!(
            address_url(DEFAULT_BASE_URL, "1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa")
                .unwrap()
                .as_str(),
            "https://blockstream.info/api/address/1A1zP1eP5QGefi2DMPTfTL5SLmv7DivfNa"
        );
    }

    #[test]
    fn test_address_url_trailing_slash() {
        assert_eq!(
            address_url("http://127.0.0.1:3000/api/", "bc1qxyz")
                .unwrap()
                .as_str(),
            "http://127.0.0.1:3000/api/address/bc1qxyz"
        );
    }

    #[test]
    fn test_address_url_escapes_path_characters() {
        let cases = [
            ("x/../../blocks/tip", "/api/address/x%2F..%2F..%2Fblocks%2Ftip"),
            ("x?y=1", "/api/address/x%3Fy=1"),
            ("x#frag", "/api/address/x%23frag"),
            ("50%", "/api/address/50%25"),
        ];
        for (address, path) in cases {
            let url = address_url(DEFAULT_BASE_URL, address).unwrap();
            assert_eq!(url.path(), path, "address {address:?}");
            assert_eq!(url.query(), None);
            assert_eq!(url.fragment(), None);
        }
    }

    #[test]
    fn test_address_url_rejects_dot_segments() {
        for address in [".", ".."] {
            assert!(matches!(
                address_url(DEFAULT_BASE_URL, address),
                Err(FetchError::UnaddressableInput { .. })
            ));
        }
    }

    #[test]
    fn test_address_url_invalid_base() {
        assert!(matches!(
            address_url("not a url", "bc1qxyz"),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
        assert!(matches!(
            address_url("mailto:someone@example.com", "bc1qxyz"),
            Err(FetchError::InvalidBaseUrl { .. })
        ));
    }
}
