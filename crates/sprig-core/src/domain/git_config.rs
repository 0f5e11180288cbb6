//! Flattened git configuration.
//!
//! A [`GitConfig`] is the already-parsed view of a git settings file: dotted
//! keys (`section.key` or `section.subsection.key`) mapped to their string
//! values. Parsing lives in `sprig-adapters`; the domain only reads it.

use std::collections::BTreeMap;

/// Local author name.
pub const USER_NAME: &str = "user.name";
/// Local author email.
pub const USER_EMAIL: &str = "user.email";
/// GitHub login.
pub const GITHUB_USER: &str = "github.user";
/// GitHub access token.
pub const GITHUB_TOKEN: &str = "github.token";

/// Read-only snapshot of git configuration entries.
///
/// Keys are stored exactly as given. The file adapter lower-cases section and
/// key names the way git does before they reach this map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GitConfig {
    entries: BTreeMap<String, String>,
}

impl GitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up a key. Returns `None` when the key is absent.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Look up a key, treating an empty (or all-whitespace) value as absent.
    pub fn get_non_empty(&self, key: &str) -> Option<&str> {
        self.get(key).filter(|v| !v.trim().is_empty())
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Insert or overwrite a key. Later values win, matching `git config --get`.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Fluent variant of [`Self::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Merge `other` on top of `self`.
    pub fn merge(&mut self, other: GitConfig) {
        self.entries.extend(other.entries);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for GitConfig
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut config = Self::new();
        for (k, v) in iter {
            config.insert(k, v);
        }
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_not_usable() {
        let config = GitConfig::new().with(USER_NAME, "  ").with(USER_EMAIL, "a@b.c");
        assert_eq!(config.get(USER_NAME), Some("  "));
        assert_eq!(config.get_non_empty(USER_NAME), None);
        assert_eq!(config.get_non_empty(USER_EMAIL), Some("a@b.c"));
    }

    #[test]
    fn merge_overrides_existing_keys() {
        let mut base = GitConfig::new().with(USER_NAME, "old").with(GITHUB_USER, "gh");
        base.merge(GitConfig::new().with(USER_NAME, "new"));

        assert_eq!(base.get(USER_NAME), Some("new"));
        assert_eq!(base.get(GITHUB_USER), Some("gh"));
        assert_eq!(base.len(), 2);
    }

    #[test]
    fn iterates_in_key_order() {
        let config: GitConfig = [("user.name", "x"), ("core.editor", "vim")]
            .into_iter()
            .collect();
        let keys: Vec<_> = config.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["core.editor", "user.name"]);
    }
}
