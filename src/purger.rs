//! Bunny CDN Purger
//!
//! Coordinates a purge run: hooks, URL resolution, request building,
//! progress checkpoints and outcome recording.
//!
//! ## Failure policy
//!
//! Purges are best effort. A failed request is handed to the
//! [`OutcomeObserver`] and otherwise dropped, so one bad zone never stops
//! the others and never fails the host's cache refresh. Only [`test`]
//! reports failure, as a `false` result.
//!
//! ## Ordering
//!
//! Zone calls run one after another in configured order. `test` stops at
//! the first zone that fails.
//!
//! [`test`]: BunnyCdnPurger::test

use std::sync::Arc;

use tracing::{debug, info};

use crate::client::{BunnyClient, PurgeTransport};
use crate::config::PurgerSettings;
use crate::env::{EnvResolver, ProcessEnv};
use crate::error::{PurgeError, PurgeOutcome};
use crate::hooks::{PurgeEvent, PurgeHooks};
use crate::localize::{Localizer, TemplateLocalizer};
use crate::observer::{OutcomeObserver, TracingObserver};
use crate::progress::{NoProgress, ProgressReporter};
use crate::request::{PurgeAction, PurgeRequest};
use crate::urls::{SiteUri, SiteUrlMap, UrlResolver};
use crate::zones::ZoneIdSet;

/// Purges cached pages from one or more Bunny pull zones
pub struct BunnyCdnPurger {
    zones: ZoneIdSet,
    progress_label: String,
    transport: Arc<dyn PurgeTransport>,
    urls: Arc<dyn UrlResolver>,
    localizer: Arc<dyn Localizer>,
    observer: Arc<dyn OutcomeObserver>,
    hooks: PurgeHooks,
}

impl BunnyCdnPurger {
    pub fn builder(settings: PurgerSettings) -> PurgerBuilder {
        PurgerBuilder::new(settings)
    }

    pub fn zones(&self) -> &ZoneIdSet {
        &self.zones
    }

    /// Purge the given pages with a single URL purge request.
    ///
    /// Progress is reported twice, `(0, total)` before and `(total, total)`
    /// after, where `total` counts the input URIs.
    pub async fn purge_uris(&self, site_uris: &[SiteUri], progress: Option<&dyn ProgressReporter>) {
        let progress = progress.unwrap_or(&NoProgress);

        let mut event = PurgeEvent::new(site_uris.to_vec());
        if !self.hooks.before_purge(&mut event) {
            info!(uris = site_uris.len(), "Purge cancelled by before-purge hook");
            return;
        }

        let total = site_uris.len();
        let label = self.progress_label(total);
        progress.report(0, total, &label);

        let urls = self.urls.urls_for(site_uris);
        debug!(uris = total, urls = urls.len(), "Resolved purge URLs");
        if !urls.is_empty() {
            self.dispatch(PurgeAction::PurgeUrls(urls)).await;
        }

        progress.report(total, total, &label);

        if self.hooks.has_after_purge() {
            self.hooks.after_purge(&mut event);
        }
    }

    /// Purge every configured pull zone.
    ///
    /// `queue` tells the host whether to run this on its background queue;
    /// the purge itself is the same either way.
    pub async fn purge_all(&self, _progress: Option<&dyn ProgressReporter>, queue: bool) {
        let mut event = PurgeEvent::new(Vec::new());
        if !self.hooks.before_purge_all(&mut event) {
            info!("Purge all cancelled by before-purge-all hook");
            return;
        }

        debug!(zones = self.zones.len(), queue, "Purging all pull zones");
        for zone in &self.zones {
            self.dispatch(PurgeAction::PurgeZone(zone.clone())).await;
        }

        if self.hooks.has_after_purge_all() {
            self.hooks.after_purge_all(&mut event);
        }
    }

    /// Check that every configured zone answers with 200 for our access key.
    ///
    /// Vacuously true when no zones are configured.
    pub async fn test(&self) -> bool {
        for zone in &self.zones {
            let outcome = self.dispatch(PurgeAction::TestZone(zone.clone())).await;
            if !outcome.is_ok_200() {
                info!(zone_id = %zone, "Zone failed connectivity test");
                return false;
            }
        }

        true
    }

    async fn dispatch(&self, action: PurgeAction) -> PurgeOutcome {
        let request = PurgeRequest::build(&action);
        let outcome = PurgeOutcome::from_result(self.transport.send(&request).await);
        self.observer.record(&action, &outcome);
        outcome
    }

    fn progress_label(&self, total: usize) -> String {
        self.localizer
            .localize(&self.progress_label, &[("total", total.to_string())])
    }
}

impl std::fmt::Debug for BunnyCdnPurger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BunnyCdnPurger")
            .field("zones", &self.zones)
            .field("hooks", &self.hooks)
            .finish_non_exhaustive()
    }
}

/// Assembles a [`BunnyCdnPurger`] from settings and host collaborators.
///
/// Anything not supplied falls back to the defaults: process environment,
/// reqwest transport, `{name}` templating, tracing observer.
pub struct PurgerBuilder {
    settings: PurgerSettings,
    env: Option<Arc<dyn EnvResolver>>,
    transport: Option<Arc<dyn PurgeTransport>>,
    urls: Option<Arc<dyn UrlResolver>>,
    localizer: Option<Arc<dyn Localizer>>,
    observer: Option<Arc<dyn OutcomeObserver>>,
    hooks: PurgeHooks,
}

impl PurgerBuilder {
    pub fn new(settings: PurgerSettings) -> Self {
        Self {
            settings,
            env: None,
            transport: None,
            urls: None,
            localizer: None,
            observer: None,
            hooks: PurgeHooks::new(),
        }
    }

    pub fn env(mut self, env: impl EnvResolver + 'static) -> Self {
        self.env = Some(Arc::new(env));
        self
    }

    pub fn transport(mut self, transport: Arc<dyn PurgeTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn url_resolver(mut self, urls: impl UrlResolver + 'static) -> Self {
        self.urls = Some(Arc::new(urls));
        self
    }

    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.localizer = Some(Arc::new(localizer));
        self
    }

    pub fn observer(mut self, observer: Arc<dyn OutcomeObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn hooks(mut self, hooks: PurgeHooks) -> Self {
        self.hooks = hooks;
        self
    }

    /// Resolve placeholders and build the purger.
    ///
    /// Settings are not validated here; hosts call
    /// [`PurgerSettings::validate`] when the settings are saved.
    pub fn build(self) -> Result<BunnyCdnPurger, PurgeError> {
        let env = self.env.unwrap_or_else(|| Arc::new(ProcessEnv));
        let zones = ZoneIdSet::parse(&self.settings.zone_ids, env.as_ref());

        let transport: Arc<dyn PurgeTransport> = match self.transport {
            Some(transport) => transport,
            None => {
                let access_key = env.resolve(&self.settings.access_key);
                Arc::new(BunnyClient::new(&self.settings, &access_key)?)
            }
        };

        info!(zones = zones.len(), endpoint = %self.settings.api_endpoint, "Bunny CDN purger initialized");

        Ok(BunnyCdnPurger {
            zones,
            progress_label: self.settings.progress_label,
            transport,
            urls: self.urls.unwrap_or_else(|| Arc::new(SiteUrlMap::new())),
            localizer: self.localizer.unwrap_or_else(|| Arc::new(TemplateLocalizer)),
            observer: self.observer.unwrap_or_else(|| Arc::new(TracingObserver)),
            hooks: self.hooks,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::StaticEnv;

    #[test]
    fn test_builder_resolves_zone_placeholders() {
        let settings = PurgerSettings::new("key", "$ZONE_A,,42");
        let purger = BunnyCdnPurger::builder(settings)
            .env(StaticEnv::new().with("ZONE_A", "41"))
            .build()
            .unwrap();

        let zones: Vec<String> = purger.zones().iter().map(|z| z.to_string()).collect();
        assert_eq!(zones, vec!["41", "42"]);
    }

    #[test]
    fn test_builder_rejects_unencodable_key() {
        let settings = PurgerSettings::new("$KEY", "1");
        let result = BunnyCdnPurger::builder(settings)
            .env(StaticEnv::new().with("KEY", "line\nbreak"))
            .build();

        assert!(matches!(result, Err(PurgeError::InvalidHeader(_))));
    }

    #[test]
    fn test_progress_label_uses_localizer() {
        let purger = BunnyCdnPurger::builder(PurgerSettings::new("key", "1"))
            .build()
            .unwrap();
        assert_eq!(purger.progress_label(5), "Purging 5 pages.");
    }

    #[test]
    fn test_no_zones_tests_ok_without_network() {
        let settings = PurgerSettings::new("key", " , ").with_endpoint("http://127.0.0.1:1");
        let purger = BunnyCdnPurger::builder(settings).build().unwrap();

        assert!(purger.zones().is_empty());
        assert!(tokio_test::block_on(purger.test()));
    }
}
