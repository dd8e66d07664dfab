//! Bunny API Client
//!
//! Sends built purge requests to the Bunny API. Every HTTP response is an
//! outcome; only failures to get a response at all are errors.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT, CONTENT_TYPE};
use reqwest::Client;
use tracing::debug;

use crate::config::PurgerSettings;
use crate::error::{PurgeError, PurgeOutcome};
use crate::request::{HttpMethod, PurgeRequest};

/// Sends one request to the provider
#[async_trait]
pub trait PurgeTransport: Send + Sync {
    async fn send(&self, request: &PurgeRequest) -> Result<PurgeOutcome, PurgeError>;
}

/// reqwest-backed transport for the Bunny API
pub struct BunnyClient {
    http_client: Client,
    endpoint: String,
}

impl BunnyClient {
    /// Build a client for `settings` using an already resolved access key
    pub fn new(settings: &PurgerSettings, access_key: &str) -> Result<Self, PurgeError> {
        let http_client = Client::builder()
            .user_agent(concat!("bunny-purge/", env!("CARGO_PKG_VERSION")))
            .default_headers(default_headers(access_key)?)
            .timeout(settings.timeout())
            .build()?;

        Ok(Self {
            http_client,
            endpoint: settings.api_endpoint.trim_end_matches('/').to_string(),
        })
    }

    fn url_for(&self, request: &PurgeRequest) -> String {
        format!("{}/{}", self.endpoint, request.path.trim_start_matches('/'))
    }
}

fn default_headers(access_key: &str) -> Result<HeaderMap, PurgeError> {
    let access_key = HeaderValue::from_str(access_key)
        .map_err(|e| PurgeError::InvalidHeader(format!("AccessKey: {}", e)))?;

    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
    headers.insert(HeaderName::from_static("accesskey"), access_key);
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    Ok(headers)
}

#[async_trait]
impl PurgeTransport for BunnyClient {
    async fn send(&self, request: &PurgeRequest) -> Result<PurgeOutcome, PurgeError> {
        let url = self.url_for(request);
        debug!(method = %request.method, url = %url, "Sending Bunny API request");

        let mut builder = match request.method {
            HttpMethod::Get => self.http_client.get(&url),
            HttpMethod::Post => self.http_client.post(&url),
        };
        if let Some((key, value)) = &request.query {
            builder = builder.query(&[(key, value)]);
        }

        let response = builder.send().await?;
        let status = response.status().as_u16();
        debug!(status, "Bunny API responded");

        Ok(PurgeOutcome::Success(status))
    }
}
