//! Bunny CDN Purger
//!
//! Turns cache purge requests from a page-cache host into Bunny CDN API
//! calls: one bulk URL purge per batch of pages, one purge per pull zone
//! for "purge everything", and a per-zone connectivity test.
//!
//! ## Example
//!
//! ```no_run
//! use bunny_purge::{BunnyCdnPurger, PurgerSettings, SiteUri, SiteUrlMap};
//!
//! # async fn run() -> anyhow::Result<()> {
//! let settings = PurgerSettings::new("$BUNNY_ACCESS_KEY", "12345,67890");
//! let purger = BunnyCdnPurger::builder(settings)
//!     .url_resolver(SiteUrlMap::new().with_site(1, "https://example.com"))
//!     .build()?;
//!
//! purger.purge_uris(&[SiteUri::new(1, "blog")], None).await;
//! assert!(purger.test().await);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod env;
pub mod error;
pub mod hooks;
pub mod localize;
pub mod observer;
pub mod progress;
pub mod purger;
pub mod request;
pub mod urls;
pub mod zones;

pub use client::{BunnyClient, PurgeTransport};
pub use config::{PurgerSettings, API_ENDPOINT};
pub use env::{EnvResolver, ProcessEnv, StaticEnv};
pub use error::{PurgeError, PurgeOutcome};
pub use hooks::{PurgeEvent, PurgeHooks};
pub use localize::{Localizer, TemplateLocalizer};
pub use observer::{OutcomeObserver, TracingObserver};
pub use progress::{LogProgress, NoProgress, ProgressReporter};
pub use purger::{BunnyCdnPurger, PurgerBuilder};
pub use request::{HttpMethod, PurgeAction, PurgeRequest};
pub use urls::{SiteUri, SiteUrlMap, UrlResolver};
pub use zones::{ZoneId, ZoneIdSet};
