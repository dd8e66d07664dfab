//! Site URIs and URL Resolution
//!
//! The host identifies cached pages by site and URI; the Bunny API wants
//! absolute URLs.

use std::collections::HashMap;

use tracing::debug;

/// One cached page as the host knows it
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SiteUri {
    pub site_id: u32,
    pub uri: String,
}

impl SiteUri {
    pub fn new(site_id: u32, uri: impl Into<String>) -> Self {
        Self {
            site_id,
            uri: uri.into(),
        }
    }
}

/// Maps site URIs to the absolute URLs to purge
pub trait UrlResolver: Send + Sync {
    fn urls_for(&self, site_uris: &[SiteUri]) -> Vec<String>;
}

/// Resolves URIs against a fixed base URL per site
#[derive(Debug, Clone, Default)]
pub struct SiteUrlMap {
    base_urls: HashMap<u32, String>,
}

impl SiteUrlMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_site(mut self, site_id: u32, base_url: impl Into<String>) -> Self {
        self.base_urls.insert(site_id, base_url.into());
        self
    }
}

impl UrlResolver for SiteUrlMap {
    fn urls_for(&self, site_uris: &[SiteUri]) -> Vec<String> {
        site_uris
            .iter()
            .filter_map(|site_uri| match self.base_urls.get(&site_uri.site_id) {
                Some(base) => Some(format!(
                    "{}/{}",
                    base.trim_end_matches('/'),
                    site_uri.uri.trim_start_matches('/')
                )),
                None => {
                    debug!(site_id = site_uri.site_id, uri = %site_uri.uri, "Skipping URI of unknown site");
                    None
                }
            })
            .collect()
    }
}
