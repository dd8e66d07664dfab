//! Purger Settings
//!
//! The static configuration a purger is built from. Values may still hold
//! environment placeholders; they are resolved when the purger is built.

use std::time::Duration;

use serde::Deserialize;

use crate::error::PurgeError;

/// Bunny API endpoint every request is sent to
pub const API_ENDPOINT: &str = "https://api.bunny.net/";

/// Progress label used when none is configured
pub const DEFAULT_PROGRESS_LABEL: &str = "Purging {total} pages.";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Settings owned by the host, read-only for the purger's lifetime
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurgerSettings {
    /// Bunny account access key, or a `$NAME` placeholder
    pub access_key: String,
    /// Comma-separated pull zone IDs; elements may be placeholders
    pub zone_ids: String,
    #[serde(default = "default_endpoint")]
    pub api_endpoint: String,
    /// HTTP timeout in milliseconds
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    #[serde(default = "default_progress_label")]
    pub progress_label: String,
}

fn default_endpoint() -> String {
    API_ENDPOINT.to_string()
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_progress_label() -> String {
    DEFAULT_PROGRESS_LABEL.to_string()
}

impl PurgerSettings {
    pub fn new(access_key: impl Into<String>, zone_ids: impl Into<String>) -> Self {
        Self {
            access_key: access_key.into(),
            zone_ids: zone_ids.into(),
            api_endpoint: default_endpoint(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            progress_label: default_progress_label(),
        }
    }

    /// Point the purger at another endpoint (mock servers, proxies)
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.api_endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout_ms = u64::try_from(timeout.as_millis()).unwrap_or(u64::MAX);
        self
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Name shown to users when picking a purger
    pub fn display_name() -> &'static str {
        "Bunny CDN Purger"
    }

    /// Human labels for the configurable attributes
    pub fn attribute_labels() -> [(&'static str, &'static str); 2] {
        [("accessKey", "Access Key"), ("zoneIds", "Zone IDs")]
    }

    /// Both the access key and the zone list are required
    pub fn validate(&self) -> Result<(), PurgeError> {
        if self.access_key.trim().is_empty() {
            return Err(PurgeError::Configuration("accessKey is required".to_string()));
        }
        if self.zone_ids.trim().is_empty() {
            return Err(PurgeError::Configuration("zoneIds is required".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(PurgeError::Configuration("timeout must be positive".to_string()));
        }
        if !(self.api_endpoint.starts_with("http://") || self.api_endpoint.starts_with("https://")) {
            return Err(PurgeError::Configuration(format!(
                "apiEndpoint must be an http(s) URL: {}",
                self.api_endpoint
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = PurgerSettings::new("key", "1,2");
        assert_eq!(settings.api_endpoint, API_ENDPOINT);
        assert_eq!(settings.timeout(), Duration::from_secs(30));
        assert_eq!(settings.progress_label, "Purging {total} pages.");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_missing_access_key_rejected() {
        let err = PurgerSettings::new("  ", "1").validate().unwrap_err();
        assert!(matches!(err, PurgeError::Configuration(_)));
        assert!(err.to_string().contains("accessKey"));
    }

    #[test]
    fn test_missing_zone_ids_rejected() {
        let err = PurgerSettings::new("key", "").validate().unwrap_err();
        assert!(err.to_string().contains("zoneIds"));
    }

    #[test]
    fn test_bad_endpoint_rejected() {
        let err = PurgerSettings::new("key", "1")
            .with_endpoint("ftp://example.com")
            .validate()
            .unwrap_err();
        assert!(err.to_string().contains("apiEndpoint"));
    }

    #[test]
    fn test_sub_second_timeout_kept() {
        let settings = PurgerSettings::new("key", "1").with_timeout(Duration::from_millis(500));
        assert_eq!(settings.timeout(), Duration::from_millis(500));
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let err = PurgerSettings::new("key", "1")
            .with_timeout(Duration::ZERO)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PurgeError::Configuration(_)));
        assert!(err.to_string().contains("timeout must be positive"));
    }

    #[test]
    fn test_deserialize_host_config() {
        let json = r#"{"accessKey": "$BUNNY_KEY", "zoneIds": "1,2", "timeoutMs": 5000}"#;
        let settings: PurgerSettings = serde_json::from_str(json).unwrap();

        assert_eq!(settings.access_key, "$BUNNY_KEY");
        assert_eq!(settings.zone_ids, "1,2");
        assert_eq!(settings.timeout(), Duration::from_secs(5));
        assert_eq!(settings.api_endpoint, API_ENDPOINT);
    }

    #[test]
    fn test_labels() {
        assert_eq!(PurgerSettings::display_name(), "Bunny CDN Purger");
        assert_eq!(PurgerSettings::attribute_labels()[1], ("zoneIds", "Zone IDs"));
    }
}
