//! Environment accessors
//!
//! Every helper that reads the process environment goes through [`Environment`],
//! so tests can hand in a [`MapEnv`] instead of mutating process-wide state.

use std::collections::{BTreeMap, HashMap};

/// Read access to a set of environment variables
pub trait Environment: Send + Sync {
    /// Value of `key`, or `None` when unset
    fn var(&self, key: &str) -> Option<String>;

    /// Snapshot of every variable, sorted by name
    fn vars(&self) -> BTreeMap<String, String>;
}

/// The real process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnv;

impl Environment for ProcessEnv {
    fn var(&self, key: &str) -> Option<String> {
        // Non-UTF-8 values read as absent.
        std::env::var(key).ok()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }
}

/// In-memory environment, scoped to whoever owns it
#[derive(Debug, Clone, Default)]
pub struct MapEnv {
    vars: HashMap<String, String>,
}

impl MapEnv {
    /// Create an empty environment
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a variable
    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }

    /// Unset a variable
    pub fn without_var(mut self, key: &str) -> Self {
        self.vars.remove(key);
        self
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnv
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Environment for MapEnv {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }

    fn vars(&self) -> BTreeMap<String, String> {
        self.vars
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

impl<E: Environment + ?Sized> Environment for &E {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn vars(&self) -> BTreeMap<String, String> {
        (**self).vars()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_env_set_and_unset() {
        let env = MapEnv::new()
            .with_var("A", "1")
            .with_var("B", "2")
            .without_var("A");

        assert_eq!(env.var("A"), None);
        assert_eq!(env.var("B"), Some("2".to_string()));
    }

    #[test]
    fn test_map_env_vars_sorted() {
        let env: MapEnv = [("ZETA", "z"), ("ALPHA", "a")].into_iter().collect();
        let keys: Vec<_> = env.vars().into_keys().collect();
        assert_eq!(keys, vec!["ALPHA".to_string(), "ZETA".to_string()]);
    }

    #[test]
    fn test_process_env_reads_path() {
        // PATH is set in any sane test environment.
        assert!(ProcessEnv.var("PATH").is_some());
        assert!(ProcessEnv.vars().contains_key("PATH"));
    }
}
