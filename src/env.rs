//! Environment Placeholder Resolution
//!
//! Settings such as the access key may hold a `$NAME` reference instead of
//! the secret itself. Resolution is a host concern, so the purger only sees
//! the [`EnvResolver`] trait.

use std::collections::HashMap;
use std::env;

/// Resolves a raw configured value to its effective value
pub trait EnvResolver: Send + Sync {
    fn resolve(&self, raw: &str) -> String;
}

/// Resolves `$NAME` / `${NAME}` against the process environment.
///
/// Unset variables leave the raw value untouched.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnv;

impl EnvResolver for ProcessEnv {
    fn resolve(&self, raw: &str) -> String {
        match placeholder_name(raw) {
            Some(name) => env::var(name).unwrap_or_else(|_| raw.to_string()),
            None => raw.to_string(),
        }
    }
}

/// Map-backed resolver for hosts that already hold their secrets in memory
#[derive(Debug, Default, Clone)]
pub struct StaticEnv {
    values: HashMap<String, String>,
}

impl StaticEnv {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl EnvResolver for StaticEnv {
    fn resolve(&self, raw: &str) -> String {
        placeholder_name(raw)
            .and_then(|name| self.values.get(name).cloned())
            .unwrap_or_else(|| raw.to_string())
    }
}

fn placeholder_name(raw: &str) -> Option<&str> {
    let rest = raw.strip_prefix('$')?;
    let name = rest
        .strip_prefix('{')
        .and_then(|r| r.strip_suffix('}'))
        .unwrap_or(rest);

    let valid = !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
    valid.then_some(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholder_forms() {
        assert_eq!(placeholder_name("$BUNNY_KEY"), Some("BUNNY_KEY"));
        assert_eq!(placeholder_name("${BUNNY_KEY}"), Some("BUNNY_KEY"));
        assert_eq!(placeholder_name("plain-value"), None);
        assert_eq!(placeholder_name("$"), None);
        assert_eq!(placeholder_name("$not valid"), None);
    }

    #[test]
    fn test_static_env_substitutes_known_names() {
        let env = StaticEnv::new().with("ZONE_A", "12345");
        assert_eq!(env.resolve("$ZONE_A"), "12345");
        assert_eq!(env.resolve("${ZONE_A}"), "12345");
        assert_eq!(env.resolve("$ZONE_B"), "$ZONE_B");
        assert_eq!(env.resolve("67890"), "67890");
    }

    #[test]
    fn test_process_env_keeps_unset_placeholders() {
        // Only reads the environment; no test sets this name
        assert_eq!(
            ProcessEnv.resolve("$BUNNY_PURGE_UNSET_KEY"),
            "$BUNNY_PURGE_UNSET_KEY"
        );
        assert_eq!(ProcessEnv.resolve("literal-key"), "literal-key");
    }
}
