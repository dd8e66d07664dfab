//! Purge Request Builder
//!
//! Maps each purge action onto the Bunny API call that performs it.
//! Pure mapping, no I/O.

use std::fmt;

use crate::zones::ZoneId;

/// What the purger asks the provider to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PurgeAction {
    /// Purge a batch of URLs in one request
    PurgeUrls(Vec<String>),
    /// Purge every cached file in a pull zone
    PurgeZone(ZoneId),
    /// Fetch a pull zone to check that it exists and the key can reach it
    TestZone(ZoneId),
}

impl fmt::Display for PurgeAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PurgeAction::PurgeUrls(urls) => write!(f, "purge {} urls", urls.len()),
            PurgeAction::PurgeZone(zone) => write!(f, "purge zone {}", zone),
            PurgeAction::TestZone(zone) => write!(f, "test zone {}", zone),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HttpMethod::Get => write!(f, "GET"),
            HttpMethod::Post => write!(f, "POST"),
        }
    }
}

/// A request ready to send. `path` is relative to the API endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: Option<(String, String)>,
}

impl PurgeRequest {
    pub fn build(action: &PurgeAction) -> Self {
        match action {
            PurgeAction::PurgeUrls(urls) => Self {
                method: HttpMethod::Get,
                path: "purge".to_string(),
                query: Some(("url".to_string(), urls.join(","))),
            },
            PurgeAction::PurgeZone(zone) => Self {
                method: HttpMethod::Post,
                path: format!("pullzone/{}/purgeCache", zone),
                query: None,
            },
            PurgeAction::TestZone(zone) => Self {
                method: HttpMethod::Get,
                path: format!("pullzone/{}", zone),
                query: None,
            },
        }
    }

    /// Unencoded `key=value` form of the query, if any
    pub fn query_string(&self) -> Option<String> {
        self.query
            .as_ref()
            .map(|(key, value)| format!("{}={}", key, value))
    }
}
