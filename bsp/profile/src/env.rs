//!
//! Environment lookups used while resolving a build configuration
//!
//! The resolver never reads `std::env` directly, it only sees an
//! `Environment` handed to it by the caller
//!

use std::collections::BTreeMap;

/// Toolchain vendor override
pub const TOOLCHAIN_VAR: &str = "RTT_CC";

/// Toolchain install directory override
pub const EXEC_PATH_VAR: &str = "RTT_EXEC_PATH";

pub const OVERRIDE_VARS: [&str; 2] = [TOOLCHAIN_VAR, EXEC_PATH_VAR];

pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;

    /// An override only counts when it is set to something non-empty
    fn override_for(&self, key: &str) -> Option<String> {
        self.var(key).filter(|value| !value.is_empty())
    }
}

/// Reads the environment of the current process
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MapEnv {
    vars: BTreeMap<String, String>,
}

impl MapEnv {
    pub fn new() -> Self {
        Self::default()
    }

    ///
    /// Copy the given keys out of another environment
    ///
    /// Used to take one fixed snapshot of the process environment
    /// at startup
    ///
    pub fn snapshot<E: Environment>(env: &E, keys: &[&str]) -> Self {
        let vars = keys
            .iter()
            .filter_map(|key| env.var(key).map(|value| (key.to_string(), value)))
            .collect();

        Self { vars }
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}
