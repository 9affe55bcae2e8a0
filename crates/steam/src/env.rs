//! Environment variable lookup.

use std::collections::BTreeMap;
use std::ffi::{OsStr, OsString};

/// Read-only view of environment variables.
///
/// Empty values are reported as unset.
pub trait EnvLookup {
    /// Returns the value of `name`, or `None` if unset or empty.
    fn var(&self, name: &str) -> Option<OsString>;
}

impl<T: EnvLookup + ?Sized> EnvLookup for &T {
    fn var(&self, name: &str) -> Option<OsString> {
        (**self).var(name)
    }
}

/// Reads the real process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl EnvLookup for ProcessEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        std::env::var_os(name).filter(|v| !v.is_empty())
    }
}

/// In-memory environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: BTreeMap<String, OsString>,
}

impl MapEnv {
    /// Creates an empty environment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a variable, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl AsRef<OsStr>) -> Self {
        self.set(name, value);
        self
    }

    /// Sets a variable.
    pub fn set(&mut self, name: impl Into<String>, value: impl AsRef<OsStr>) {
        self.vars.insert(name.into(), value.as_ref().to_os_string());
    }
}

impl EnvLookup for MapEnv {
    fn var(&self, name: &str) -> Option<OsString> {
        self.vars.get(name).filter(|v| !v.is_empty()).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: AsRef<OsStr>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = MapEnv::new();
        for (k, v) in iter {
            env.set(k, v);
        }
        env
    }
}
