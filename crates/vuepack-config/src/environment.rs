//! Explicit environment input for config construction.
//!
//! Nothing in this crate reads process-wide state on its own. Callers build an
//! [`Environment`] (usually once, at process start, via [`Environment::from_process`])
//! and pass it down.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Variable that selects between the production and development variants.
pub const NODE_ENV: &str = "NODE_ENV";

/// Ordered snapshot of environment variables.
///
/// # Example
///
/// ```
/// use vuepack_config::{Environment, Mode};
///
/// let env = Environment::new().with("NODE_ENV", "production");
/// assert_eq!(env.get("NODE_ENV"), Some("production"));
/// assert_eq!(Mode::from_env(&env), Mode::Production);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    vars: IndexMap<String, String>,
}

impl Environment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_process() -> Self {
        std::env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect()
    }

    /// Builder-style insert; a later value for the same key wins.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.vars.get(key).map(String::as_str)
    }

    /// Iterate over variables whose name starts with `prefix`, yielding the
    /// remainder of the name alongside the value.
    pub fn prefixed<'a>(&'a self, prefix: &'a str) -> impl Iterator<Item = (&'a str, &'a str)> + 'a {
        self.vars.iter().filter_map(move |(key, value)| {
            key.strip_prefix(prefix)
                .filter(|rest| !rest.is_empty())
                .map(|rest| (rest, value.as_str()))
        })
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Environment {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut env = Environment::new();
        for (key, value) in iter {
            env.set(key, value);
        }
        env
    }
}

/// Build variant selected by `NODE_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Production,
    /// Fallback for any value other than `production`, including absence.
    #[default]
    Development,
}

impl Mode {
    /// Exact, case-sensitive match on `"production"`; everything else is development.
    pub fn from_env(env: &Environment) -> Self {
        match env.get(NODE_ENV) {
            Some("production") => Mode::Production,
            _ => Mode::Development,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Mode::Production => "production",
            Mode::Development => "development",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn production_requires_exact_value() {
        for value in ["Production", "PRODUCTION", " production", "production ", "prod"] {
            let env = Environment::new().with(NODE_ENV, value);
            assert_eq!(Mode::from_env(&env), Mode::Development, "value {value:?}");
        }
    }

    #[test]
    fn missing_and_empty_fall_back_to_development() {
        assert_eq!(Mode::from_env(&Environment::new()), Mode::Development);
        let env = Environment::new().with(NODE_ENV, "");
        assert_eq!(Mode::from_env(&env), Mode::Development);
    }

    #[test]
    fn later_insert_wins() {
        let env: Environment = [(NODE_ENV, "development"), (NODE_ENV, "production")]
            .into_iter()
            .collect();
        assert_eq!(env.prefixed("").count(), 1);
        assert_eq!(Mode::from_env(&env), Mode::Production);
    }

    #[test]
    fn prefixed_strips_prefix_and_skips_bare_prefix() {
        let env = Environment::new()
            .with("VUEPACK_ENTRY", "./src/main.js")
            .with("VUEPACK_", "ignored")
            .with("OTHER", "x");
        let found: Vec<_> = env.prefixed("VUEPACK_").collect();
        assert_eq!(found, vec![("ENTRY", "./src/main.js")]);
    }

    #[test]
    fn mode_display_matches_node_env_values() {
        assert_eq!(Mode::Production.to_string(), "production");
        assert_eq!(Mode::Development.to_string(), "development");
    }
}
