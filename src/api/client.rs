//! Sannti HTTP client for API interactions

use log::debug;
use reqwest::{Client, Method};
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;

use crate::api::credentials::Credentials;
use crate::api::regions::RegionCache;
use crate::config::api;
use crate::error::{Result, SanntiError};

/// Sannti API client
///
/// Owns the credentials for one invocation and the region cache used by every
/// region-scoped operation. The cache sits behind an `Arc` so several clients
/// (or concurrent invocations in one process) can share it.
pub struct SanntiClient {
    client: Client,
    credentials: Credentials,
    base_url: String,
    regions: Arc<RegionCache>,
}

impl SanntiClient {
    /// Create a client against the public Sannti endpoint
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_base_url(credentials, api::BASE_URL)
    }

    /// Create a client against a custom base URL (mock servers, staging)
    pub fn with_base_url(credentials: Credentials, base_url: impl Into<String>) -> Result<Self> {
        Self::build(
            credentials,
            base_url,
            Duration::from_secs(api::TIMEOUT_SECS),
        )
    }

    fn build(
        credentials: Credentials,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(api::CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            // 3xx must surface as an API error, not be followed
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(concat!("sannti-cli/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            credentials,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            regions: Arc::new(RegionCache::new()),
        })
    }

    /// Replace the client's region cache with a shared one
    pub fn with_region_cache(mut self, cache: Arc<RegionCache>) -> Self {
        self.regions = cache;
        self
    }

    /// The region cache backing `resolve_zone_id`
    pub fn region_cache(&self) -> &RegionCache {
        &self.regions
    }

    /// Resolve region: explicit CLI value wins, then the configured default
    pub fn effective_region(&self, explicit: Option<&str>) -> Option<String> {
        explicit
            .map(str::trim)
            .filter(|r| !r.is_empty())
            .or_else(|| self.credentials.default_region())
            .map(str::to_string)
    }

    /// Base URL for API requests
    pub(crate) fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Add the authentication and content headers to a request builder
    fn with_headers(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", self.credentials.access_key())
            .header("secretkey", self.credentials.secret_key())
            .header("Content-Type", "application/json")
    }

    /// Issue one authenticated call and return the raw response body
    ///
    /// `path` already carries any query string. Any 2xx status returns the body
    /// untouched; everything else is an `Api` error with the body verbatim.
    pub async fn execute<B>(&self, method: Method, path: &str, body: Option<&B>) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        let payload = body
            .map(serde_json::to_vec)
            .transpose()
            .map_err(|e| SanntiError::Encoding(e.to_string()))?;

        let url = format!("{}{}", self.base_url(), path);
        debug!("{} {}", method, url);

        let mut request = self.with_headers(self.client.request(method.clone(), &url));
        if let Some(payload) = payload {
            request = request.body(payload);
        }

        let response = request.send().await?;
        let status = response.status();
        let bytes = response.bytes().await?;

        debug!("{} {} -> {} ({} bytes)", method, url, status, bytes.len());

        if !status.is_success() {
            return Err(SanntiError::Api {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        Ok(bytes.to_vec())
    }

    /// Perform a GET request
    pub async fn get(&self, path: &str) -> Result<Vec<u8>> {
        self.execute::<()>(Method::GET, path, None).await
    }

    /// Perform a POST request with a JSON body
    pub async fn post<B>(&self, path: &str, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::POST, path, Some(body)).await
    }

    /// Perform a PUT request with a JSON body
    pub async fn put<B>(&self, path: &str, body: &B) -> Result<Vec<u8>>
    where
        B: Serialize + ?Sized,
    {
        self.execute(Method::PUT, path, Some(body)).await
    }

    /// Perform a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Vec<u8>> {
        self.execute::<()>(Method::DELETE, path, None).await
    }
}

/// Append URL-encoded query parameters to a path
pub(crate) fn build_path(path: &str, params: &[(&str, &str)]) -> String {
    if params.is_empty() {
        return path.to_string();
    }

    let query = params
        .iter()
        .map(|(key, value)| format!("{}={}", key, urlencoding::encode(value)))
        .collect::<Vec<_>>()
        .join("&");

    let separator = if path.contains('?') { "&" } else { "?" };
    format!("{}{}{}", path, separator, query)
}

#[cfg(test)]
impl SanntiClient {
    /// Create a test client with mock base URL
    pub fn test_client(base_url: &str) -> Self {
        Self::test_client_with_region(base_url, None)
    }

    /// Create a test client with mock base URL and a default region
    pub fn test_client_with_region(base_url: &str, default_region: Option<&str>) -> Self {
        let credentials = Credentials::new(
            "test-access",
            "test-secret",
            default_region.map(str::to_string),
        )
        .unwrap();
        Self::with_base_url(credentials, base_url).unwrap()
    }

    /// Create a test client whose requests give up after `timeout`
    pub fn test_client_with_timeout(base_url: &str, timeout: Duration) -> Self {
        let credentials = Credentials::new("test-access", "test-secret", None).unwrap();
        Self::build(credentials, base_url, timeout).unwrap()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_base_url_strips_trailing_slash() {
        let client = SanntiClient::test_client("http://localhost:8080/restapi/");
        assert_eq!(client.base_url(), "http://localhost:8080/restapi");
    }

    #[test]
    fn test_default_base_url() {
        let creds = Credentials::new("a", "s", None).unwrap();
        let client = SanntiClient::new(creds).unwrap();
        assert_eq!(client.base_url(), api::BASE_URL);
    }

    #[test]
    fn test_effective_region_precedence() {
        let client = SanntiClient::test_client_with_region("http://localhost", Some("default-1"));
        assert_eq!(
            client.effective_region(Some("explicit-1")),
            Some("explicit-1".to_string())
        );
        assert_eq!(client.effective_region(None), Some("default-1".to_string()));
        assert_eq!(client.effective_region(Some("")), Some("default-1".to_string()));

        let client = SanntiClient::test_client("http://localhost");
        assert_eq!(client.effective_region(None), None);
    }

    #[test]
    fn test_build_path_without_params() {
        assert_eq!(build_path("/zone/zonelist", &[]), "/zone/zonelist");
    }

    #[test]
    fn test_build_path_encodes_values() {
        assert_eq!(
            build_path("/instance/instanceList", &[("vmUuid", "a b&c"), ("zoneUuid", "z-1")]),
            "/instance/instanceList?vmUuid=a%20b%26c&zoneUuid=z-1"
        );
    }

    #[test]
    fn test_build_path_with_existing_query() {
        assert_eq!(
            build_path("/instance/stopInstance?forceStop=false", &[("uuid", "vm-1")]),
            "/instance/stopInstance?forceStop=false&uuid=vm-1"
        );
    }

    #[tokio::test]
    async fn test_execute_sends_auth_headers() {
        let mock_server = MockServer::start().await;
        let client = SanntiClient::test_client(&mock_server.uri());

        Mock::given(method("GET"))
            .and(path("/zone/zonelist"))
            .and(header("apikey", "test-access"))
            .and(header("secretkey", "test-secret"))
            .and(header("content-type", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client.get("/zone/zonelist").await.unwrap();
        assert_eq!(body, b"{}");
    }

    #[tokio::test]
    async fn test_success_status_codes_return_raw_body() {
        for status in [200u16, 201, 299] {
            let mock_server = MockServer::start().await;
            let client = SanntiClient::test_client(&mock_server.uri());

            Mock::given(method("GET"))
                .and(path("/probe"))
                .respond_with(ResponseTemplate::new(status).set_body_string("raw body, not json"))
                .mount(&mock_server)
                .await;

            let result = client.get("/probe").await;
            assert!(result.is_ok(), "status {} should succeed", status);
            assert_eq!(result.unwrap(), b"raw body, not json");
        }
    }

    #[tokio::test]
    async fn test_failure_status_codes_carry_body_verbatim() {
        for status in [300u16, 400, 404, 500] {
            let mock_server = MockServer::start().await;
            let client = SanntiClient::test_client(&mock_server.uri());
            let vendor_body = format!(r#"{{"errorCode":{},"errorMessage":"nope"}}"#, status);

            Mock::given(method("GET"))
                .and(path("/probe"))
                .respond_with(ResponseTemplate::new(status).set_body_string(vendor_body.clone()))
                .mount(&mock_server)
                .await;

            match client.get("/probe").await.unwrap_err() {
                SanntiError::Api { status: got, body } => {
                    assert_eq!(got, status);
                    assert_eq!(body, vendor_body);
                }
                other => panic!("Expected SanntiError::Api for {}, got {:?}", status, other),
            }
        }
    }

    #[tokio::test]
    async fn test_post_serializes_json_body() {
        let mock_server = MockServer::start().await;
        let client = SanntiClient::test_client(&mock_server.uri());

        Mock::given(method("POST"))
            .and(path("/things"))
            .and(body_json(serde_json::json!({"name": "thing-1", "size": 2})))
            .respond_with(ResponseTemplate::new(201).set_body_string("created"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client
            .post("/things", &serde_json::json!({"name": "thing-1", "size": 2}))
            .await
            .unwrap();
        assert_eq!(body, b"created");
    }

    #[tokio::test]
    async fn test_put_serializes_json_body() {
        let mock_server = MockServer::start().await;
        let client = SanntiClient::test_client(&mock_server.uri());

        Mock::given(method("PUT"))
            .and(path("/things/1"))
            .and(header("apikey", "test-access"))
            .and(body_json(serde_json::json!({"name": "renamed"})))
            .respond_with(ResponseTemplate::new(200).set_body_string("updated"))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client
            .put("/things/1", &serde_json::json!({"name": "renamed"}))
            .await
            .unwrap();
        assert_eq!(body, b"updated");
    }

    #[tokio::test]
    async fn test_slow_response_is_transport_timeout() {
        let mock_server = MockServer::start().await;
        let client =
            SanntiClient::test_client_with_timeout(&mock_server.uri(), Duration::from_millis(200));

        Mock::given(method("GET"))
            .and(path("/zone/zonelist"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string("{}")
                    .set_delay(Duration::from_secs(5)),
            )
            .mount(&mock_server)
            .await;

        let started = std::time::Instant::now();
        match client.get("/zone/zonelist").await.unwrap_err() {
            SanntiError::Transport(e) => assert!(e.is_timeout(), "expected timeout, got {}", e),
            other => panic!("Expected SanntiError::Transport, got {:?}", other),
        }
        assert!(started.elapsed() < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn test_unserializable_body_is_encoding_error_without_request() {
        let mock_server = MockServer::start().await;
        let client = SanntiClient::test_client(&mock_server.uri());

        // JSON object keys must be strings
        let mut body: HashMap<(u8, u8), u8> = HashMap::new();
        body.insert((1, 2), 3);

        let err = client.post("/things", &body).await.unwrap_err();
        assert!(matches!(err, SanntiError::Encoding(_)));

        let requests = mock_server.received_requests().await.unwrap();
        assert!(requests.is_empty());
    }

    #[tokio::test]
    async fn test_connection_failure_is_transport_error() {
        // Nothing listens on port 1
        let client = SanntiClient::test_client("http://127.0.0.1:1");

        let err = client.get("/zone/zonelist").await.unwrap_err();
        assert!(matches!(err, SanntiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_delete_uses_delete_verb() {
        let mock_server = MockServer::start().await;
        let client = SanntiClient::test_client(&mock_server.uri());

        Mock::given(method("DELETE"))
            .and(path("/things/1"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let body = client.delete("/things/1").await.unwrap();
        assert!(body.is_empty());
    }
}
