//! Pull Zone Identifiers
//!
//! Parses the configured comma-separated zone list into the zones a purge
//! or connectivity test runs against.

use std::fmt;

use crate::env::EnvResolver;

/// Identifier of one Bunny pull zone. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ZoneId(String);

impl ZoneId {
    /// Returns `None` for an empty identifier
    pub fn new(id: impl Into<String>) -> Option<Self> {
        let id = id.into();
        (!id.is_empty()).then_some(Self(id))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for ZoneId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered zone list. Duplicates are kept; the API tolerates them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ZoneIdSet {
    zones: Vec<ZoneId>,
}

impl ZoneIdSet {
    /// Split `raw` on commas, resolve each element and drop the empty ones.
    ///
    /// Unlike a raw split, elements are trimmed, so whitespace-only entries
    /// are dropped too. `"0"` is a valid zone ID.
    pub fn parse(raw: &str, env: &dyn EnvResolver) -> Self {
        let zones = raw
            .split(',')
            .map(|element| env.resolve(element.trim()))
            .filter_map(|resolved| ZoneId::new(resolved.trim()))
            .collect();

        Self { zones }
    }

    pub fn iter(&self) -> impl Iterator<Item = &ZoneId> {
        self.zones.iter()
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }
}

impl<'a> IntoIterator for &'a ZoneIdSet {
    type Item = &'a ZoneId;
    type IntoIter = std::slice::Iter<'a, ZoneId>;

    fn into_iter(self) -> Self::IntoIter {
        self.zones.iter()
    }
}
