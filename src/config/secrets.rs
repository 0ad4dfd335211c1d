//! Credential lookup.
//!
//! The workflow identifier and API key are read on every request rather than
//! once at startup, so a rotated key takes effect without a restart. Lookup
//! goes through [`SecretSource`] so the handler can be driven from tests
//! without touching the process environment.

use std::collections::HashMap;

/// Source of string-valued secrets keyed by variable name.
pub trait SecretSource: Send + Sync {
    /// Returns the value for `name`, or `None` when unset or empty.
    fn get(&self, name: &str) -> Option<String>;
}

/// Reads secrets from the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl SecretSource for ProcessEnv {
    fn get(&self, name: &str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

/// Fixed in-memory secrets.
#[derive(Debug, Clone, Default)]
pub struct StaticSecrets {
    values: HashMap<String, String>,
}

impl StaticSecrets {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(name.into(), value.into());
        self
    }
}

impl SecretSource for StaticSecrets {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).filter(|value| !value.is_empty()).cloned()
    }
}
