//! Purge Hooks
//!
//! Typed extension points around `purge_uris` and `purge_all`. "Before"
//! handlers can veto the whole operation by cancelling the event.

use crate::urls::SiteUri;

/// Event passed to every hook handler
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurgeEvent {
    /// Resources being purged; empty for purge-all
    pub site_uris: Vec<SiteUri>,
    pub is_valid: bool,
}

impl PurgeEvent {
    pub fn new(site_uris: Vec<SiteUri>) -> Self {
        Self {
            site_uris,
            is_valid: true,
        }
    }

    /// Veto the operation. Only honoured for "before" hooks.
    pub fn cancel(&mut self) {
        self.is_valid = false;
    }
}

pub type HookHandler = Box<dyn Fn(&mut PurgeEvent) + Send + Sync>;

/// Handler registrations, invoked in registration order
#[derive(Default)]
pub struct PurgeHooks {
    before_purge: Vec<HookHandler>,
    after_purge: Vec<HookHandler>,
    before_purge_all: Vec<HookHandler>,
    after_purge_all: Vec<HookHandler>,
}

impl PurgeHooks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_before_purge<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut PurgeEvent) + Send + Sync + 'static,
    {
        self.before_purge.push(Box::new(handler));
        self
    }

    pub fn on_after_purge<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut PurgeEvent) + Send + Sync + 'static,
    {
        self.after_purge.push(Box::new(handler));
        self
    }

    pub fn on_before_purge_all<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut PurgeEvent) + Send + Sync + 'static,
    {
        self.before_purge_all.push(Box::new(handler));
        self
    }

    pub fn on_after_purge_all<F>(&mut self, handler: F) -> &mut Self
    where
        F: Fn(&mut PurgeEvent) + Send + Sync + 'static,
    {
        self.after_purge_all.push(Box::new(handler));
        self
    }

    pub fn has_after_purge(&self) -> bool {
        !self.after_purge.is_empty()
    }

    pub fn has_after_purge_all(&self) -> bool {
        !self.after_purge_all.is_empty()
    }

    /// Run the "before purge" handlers; returns whether the purge may go ahead
    pub fn before_purge(&self, event: &mut PurgeEvent) -> bool {
        trigger(&self.before_purge, event);
        event.is_valid
    }

    pub fn after_purge(&self, event: &mut PurgeEvent) {
        trigger(&self.after_purge, event);
    }

    /// Run the "before purge all" handlers; returns whether the purge may go ahead
    pub fn before_purge_all(&self, event: &mut PurgeEvent) -> bool {
        trigger(&self.before_purge_all, event);
        event.is_valid
    }

    pub fn after_purge_all(&self, event: &mut PurgeEvent) {
        trigger(&self.after_purge_all, event);
    }
}

fn trigger(handlers: &[HookHandler], event: &mut PurgeEvent) {
    for handler in handlers {
        handler(event);
    }
}

impl std::fmt::Debug for PurgeHooks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PurgeHooks")
            .field("before_purge", &self.before_purge.len())
            .field("after_purge", &self.after_purge.len())
            .field("before_purge_all", &self.before_purge_all.len())
            .field("after_purge_all", &self.after_purge_all.len())
            .finish()
    }
}
