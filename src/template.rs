//! Placeholder substitution.
//! Replaces `{Settings:<Name>}` tokens in template text with the values
//! bound for the resolved environment.

use crate::config::EnvironmentRecord;
use crate::constants::{PLACEHOLDER_PREFIX, PLACEHOLDER_SUFFIX, TENANT_KEY};
use indexmap::IndexMap;
use log::warn;

/// Placeholder name to replacement value.
///
/// The tenant always sits first under [`TENANT_KEY`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bindings {
    values: IndexMap<String, String>,
}

impl Bindings {
    /// Creates bindings holding only the tenant.
    pub fn new<S: Into<String>>(tenant: S) -> Self {
        let mut values = IndexMap::new();
        values.insert(TENANT_KEY.to_string(), tenant.into());
        Self { values }
    }

    /// Adds a policy setting. The reserved tenant key cannot be rebound.
    pub fn with_setting<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.insert(key.into(), value.into());
        self
    }

    fn insert(&mut self, key: String, value: String) {
        if key == TENANT_KEY {
            warn!("Ignoring policy setting {}: the name is reserved for the tenant", key);
            return;
        }
        self.values.insert(key, value);
    }

    /// Builds bindings from an environment's tenant and policy settings.
    pub fn from_environment(record: &EnvironmentRecord) -> Self {
        let mut bindings = Self::new(record.tenant().unwrap_or_default());
        for (key, value) in &record.policy_settings {
            bindings.insert(key.clone(), value.clone());
        }
        bindings
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

/// Formats the placeholder token for a binding name.
pub fn placeholder(name: &str) -> String {
    format!("{}{}{}", PLACEHOLDER_PREFIX, name, PLACEHOLDER_SUFFIX)
}

/// Matcher for one set of bindings.
///
/// All bound placeholders are matched in a single left-to-right pass, so a
/// replacement value is never scanned again and the order of the bindings
/// has no influence on the result. Where several bound placeholders start
/// at the same position the longest one wins.
pub struct Substituter<'a> {
    bindings: &'a Bindings,
    longest_name: usize,
}

impl<'a> Substituter<'a> {
    pub fn new(bindings: &'a Bindings) -> Self {
        let longest_name = bindings.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
        Self {
            bindings,
            longest_name,
        }
    }

    /// Longest bound placeholder at the very start of `text`, as its token
    /// length and value.
    fn match_at(&self, text: &str) -> Option<(usize, &'a str)> {
        let after = text.strip_prefix(PLACEHOLDER_PREFIX)?;
        after
            .match_indices(PLACEHOLDER_SUFFIX)
            .map(|(end, _)| end)
            .take_while(|end| *end <= self.longest_name)
            .filter_map(|end| {
                self.bindings
                    .get(&after[..end])
                    .map(|value| (PLACEHOLDER_PREFIX.len() + end + PLACEHOLDER_SUFFIX.len(), value))
            })
            .last()
    }

    /// Replaces every bound placeholder in `content`.
    pub fn substitute(&self, content: &str) -> String {
        let mut output = String::with_capacity(content.len());
        let mut rest = content;
        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            output.push_str(&rest[..start]);
            let candidate = &rest[start..];
            match self.match_at(candidate) {
                Some((len, value)) => {
                    output.push_str(value);
                    rest = &candidate[len..];
                }
                None => {
                    // No placeholder can start inside the prefix itself.
                    output.push_str(PLACEHOLDER_PREFIX);
                    rest = &candidate[PLACEHOLDER_PREFIX.len()..];
                }
            }
        }
        output.push_str(rest);
        output
    }

    /// Lists placeholder names in `content` that have no binding, in order
    /// of first appearance. Placeholders resolved by the longest match are
    /// not reported.
    pub fn unresolved(&self, content: &str) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        let mut rest = content;
        while let Some(start) = rest.find(PLACEHOLDER_PREFIX) {
            let candidate = &rest[start..];
            if let Some((len, _)) = self.match_at(candidate) {
                rest = &candidate[len..];
                continue;
            }
            let after = &candidate[PLACEHOLDER_PREFIX.len()..];
            if let Some(end) = after.find(PLACEHOLDER_SUFFIX) {
                let name = &after[..end];
                if !name.is_empty()
                    && !name.contains(PLACEHOLDER_PREFIX)
                    && !names.iter().any(|n| n == name)
                {
                    names.push(name.to_string());
                }
            }
            rest = after;
        }
        names
    }
}

/// Replaces every bound placeholder in `content` with its value.
pub fn substitute(content: &str, bindings: &Bindings) -> String {
    Substituter::new(bindings).substitute(content)
}

/// Lists placeholder names in `content` that have no binding, in order of
/// first appearance.
pub fn unresolved_placeholders(content: &str, bindings: &Bindings) -> Vec<String> {
    Substituter::new(bindings).unresolved(content)
}
