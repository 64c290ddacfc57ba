//! HTTP utilities for NBA API communication

use std::time::Instant;

use reqwest::{
    header::{HeaderMap, HeaderValue, ACCEPT},
    Client, Url,
};
use tracing::debug;

use crate::{core::config::ClientConfig, error::NbaError, Result};

const USER_AGENT: &str = concat!("nba-client/", env!("CARGO_PKG_VERSION"));

/// Headers sent with every request.
pub fn default_headers() -> HeaderMap {
    let mut h = HeaderMap::new();
    h.insert(ACCEPT, HeaderValue::from_static("application/json"));
    h
}

/// Thin GET-only client bound to one base endpoint.
///
/// Cloning is cheap and clones share the connection pool. Each call is
/// independent: no retries, no caching.
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: Url,
}

impl ApiClient {
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| NbaError::InvalidUrl {
            url: config.base_url.clone(),
            reason: e.to_string(),
        })?;
        if base_url.cannot_be_a_base() {
            return Err(NbaError::InvalidUrl {
                url: config.base_url.clone(),
                reason: "URL cannot carry a path".to_string(),
            });
        }

        let mut builder = Client::builder()
            .user_agent(USER_AGENT)
            .default_headers(default_headers());
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Join path segments onto the base URL and append query pairs.
    ///
    /// Segments and values are percent-encoded, so caller input such as a
    /// player name with spaces cannot produce a malformed URL.
    pub fn endpoint(&self, segments: &[&str], query: &[(&str, &str)]) -> Result<Url> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| NbaError::InvalidUrl {
                url: self.base_url.to_string(),
                reason: "URL cannot carry a path".to_string(),
            })?
            .pop_if_empty()
            .extend(segments);
        if !query.is_empty() {
            url.query_pairs_mut().extend_pairs(query);
        }
        Ok(url)
    }

    /// Single GET returning the body of a success response.
    pub async fn get_bytes(&self, url: Url) -> Result<Vec<u8>> {
        let started = Instant::now();
        debug!(%url, "GET");

        let body = self
            .http
            .get(url.clone())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        debug!(%url, elapsed = ?started.elapsed(), bytes = body.len(), "GET done");
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::{
        matchers::{header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ClientConfig::with_base_url(base_url)).unwrap()
    }

    #[test]
    fn test_default_headers_accept_json() {
        let headers = default_headers();
        assert_eq!(headers.get(ACCEPT).unwrap(), "application/json");
    }

    #[test]
    fn test_new_rejects_unparsable_base_url() {
        let result = ApiClient::new(&ClientConfig::with_base_url("not a url"));
        match result {
            Err(NbaError::InvalidUrl { url, .. }) => assert_eq!(url, "not a url"),
            other => panic!("Expected InvalidUrl, got {:?}", other),
        }
    }

    #[test]
    fn test_new_rejects_cannot_be_a_base_url() {
        let result = ApiClient::new(&ClientConfig::with_base_url("mailto:someone@example.com"));
        assert!(matches!(result, Err(NbaError::InvalidUrl { .. })));
    }

    #[test]
    fn test_endpoint_joins_segments_and_encodes_query() {
        let api = client("http://127.0.0.1:8000");
        let url = api
            .endpoint(&["games", "summary"], &[("date", "01/05/2024")])
            .unwrap();
        assert_eq!(
            url.as_str(),
            "http://127.0.0.1:8000/games/summary?date=01%2F05%2F2024"
        );
    }

    #[test]
    fn test_endpoint_keeps_base_path_prefix() {
        let api = client("http://example.com/api/");
        let url = api.endpoint(&["player", "2544", "career"], &[]).unwrap();
        assert_eq!(url.as_str(), "http://example.com/api/player/2544/career");
    }

    #[test]
    fn test_endpoint_encodes_special_characters() {
        let api = client("http://127.0.0.1:8000");
        let url = api
            .endpoint(&["players", "search"], &[("name", "O'Neal & co")])
            .unwrap();
        let (key, value) = url.query_pairs().next().unwrap();
        assert_eq!(key, "name");
        assert_eq!(value, "O'Neal & co");
        assert!(!url.as_str().contains(' '));
    }

    #[tokio::test]
    async fn test_get_bytes_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ping"))
            .and(header("accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
            .mount(&mock_server)
            .await;

        let api = client(&mock_server.uri());
        let url = api.endpoint(&["ping"], &[]).unwrap();
        let body = api.get_bytes(url).await.unwrap();
        assert_eq!(body, b"[]");
    }

    #[tokio::test]
    async fn test_get_bytes_error_status_is_transport_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = client(&mock_server.uri());
        let url = api.endpoint(&["games", "summary"], &[]).unwrap();
        let err = api.get_bytes(url).await.unwrap_err();
        assert!(err.is_transport());
    }

    #[tokio::test]
    async fn test_get_bytes_timeout_is_transport_error() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(std::time::Duration::from_secs(3)),
            )
            .mount(&mock_server)
            .await;

        let config = ClientConfig {
            base_url: mock_server.uri(),
            timeout_secs: Some(1),
        };
        let api = ApiClient::new(&config).unwrap();
        let url = api.endpoint(&["slow"], &[]).unwrap();
        let err = api.get_bytes(url).await.unwrap_err();
        assert!(err.is_transport());
    }
}
