// Copyright 2025 Lablup Inc. and Jeongkyu Shin
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Core data structures for SSH configuration

use serde::Serialize;
use std::fmt;

/// Keys whose repeated occurrences are all kept, in order of appearance
pub const ACCUMULATING_KEYS: &[&str] = &["identityfile", "localforward", "remoteforward"];

/// How a directive keyword is applied to the block being parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DirectiveKind {
    /// `Host` starts a new block
    Host,
    /// `ProxyCommand` keeps its whole value verbatim
    ProxyCommand,
    /// Every occurrence is appended to a list
    Accumulating,
    /// Only the first occurrence in a block is kept
    Single,
}

impl DirectiveKind {
    /// Classify a lowercased keyword
    pub fn of(keyword: &str) -> Self {
        match keyword {
            "host" => Self::Host,
            "proxycommand" => Self::ProxyCommand,
            k if ACCUMULATING_KEYS.contains(&k) => Self::Accumulating,
            _ => Self::Single,
        }
    }
}

/// Value of a single option: either one string or an ordered list
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum OptionValue {
    Single(String),
    List(Vec<String>),
}

impl OptionValue {
    /// Iterate over the value(s) in write order
    pub fn values(&self) -> impl Iterator<Item = &str> {
        let slice: &[String] = match self {
            Self::Single(value) => std::slice::from_ref(value),
            Self::List(values) => values,
        };
        slice.iter().map(String::as_str)
    }

    /// First value, if any
    pub fn first(&self) -> Option<&str> {
        self.values().next()
    }
}

impl From<&str> for OptionValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for OptionValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for OptionValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

/// Options attached to a host, keyed by lowercased directive name
///
/// Keys keep the order in which they were first inserted so that writing the
/// map back out is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OptionMap {
    entries: Vec<(String, OptionValue)>,
}

impl OptionMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a key (case-insensitive)
    pub fn get(&self, key: &str) -> Option<&OptionValue> {
        let key = key.to_lowercase();
        self.entries.iter().find(|(k, _)| *k == key).map(|(_, v)| v)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Set a key, replacing any previous value in place
    ///
    /// Values are stored in the shape the parser produces: accumulating keys
    /// always hold a list, other keys hold a single value (the first element
    /// of a list). An empty list removes the key.
    pub fn insert(&mut self, key: &str, value: impl Into<OptionValue>) {
        let key = key.to_lowercase();
        let Some(value) = normalize(&key, value.into()) else {
            self.entries.retain(|(k, _)| *k != key);
            return;
        };
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Set a key only when it has no value yet. Returns whether it was set.
    pub fn insert_if_absent(&mut self, key: &str, value: impl Into<OptionValue>) -> bool {
        if self.contains_key(key) {
            return false;
        }
        self.insert(key, value);
        true
    }

    /// Add one occurrence of `key`, the way a repeated directive line would
    ///
    /// Accumulating keys get the value appended to their list; any other key
    /// keeps its first value.
    pub fn append(&mut self, key: &str, value: impl Into<String>) {
        let key = key.to_lowercase();
        let value = value.into();
        if DirectiveKind::of(&key) != DirectiveKind::Accumulating {
            self.insert_if_absent(&key, value);
            return;
        }
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => {
                let mut values: Vec<String> = slot.values().map(str::to_string).collect();
                values.push(value);
                *slot = OptionValue::List(values);
            }
            None => self.entries.push((key, OptionValue::List(vec![value]))),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &OptionValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

fn normalize(key: &str, value: OptionValue) -> Option<OptionValue> {
    match (DirectiveKind::of(key), value) {
        (DirectiveKind::Accumulating, OptionValue::Single(value)) => {
            Some(OptionValue::List(vec![value]))
        }
        (DirectiveKind::Accumulating, OptionValue::List(values)) => {
            (!values.is_empty()).then_some(OptionValue::List(values))
        }
        (_, OptionValue::List(values)) => values.into_iter().next().map(OptionValue::Single),
        (_, single) => Some(single),
    }
}

impl<K: AsRef<str>, V: Into<OptionValue>> FromIterator<(K, V)> for OptionMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = Self::new();
        for (key, value) in iter {
            map.insert(key.as_ref(), value);
        }
        map
    }
}

impl Serialize for OptionMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A parsed `Host` block: one or more patterns sharing one option map
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostBlock {
    pub patterns: Vec<String>,
    pub options: OptionMap,
}

impl HostBlock {
    pub fn new(patterns: Vec<String>) -> Self {
        Self {
            patterns,
            options: OptionMap::new(),
        }
    }

    /// The implicit block that holds directives appearing before any `Host` line
    pub fn implicit() -> Self {
        Self::new(vec!["*".to_string()])
    }
}

/// A single host pattern with its options, as held by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostEntry {
    pub host: String,
    pub options: OptionMap,
}

impl HostEntry {
    pub fn new(host: impl Into<String>, options: OptionMap) -> Self {
        Self {
            host: host.into(),
            options,
        }
    }
}

impl fmt::Display for HostEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Host {}", self.host)?;
        if let Some(hostname) = self.options.get("hostname").and_then(OptionValue::first) {
            write!(f, " ({hostname})")?;
        }
        if let Some(user) = self.options.get("user").and_then(OptionValue::first) {
            write!(f, " user={user}")?;
        }
        if let Some(port) = self.options.get("port").and_then(OptionValue::first) {
            write!(f, " port={port}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_directive_kind_dispatch() {
        assert_eq!(DirectiveKind::of("host"), DirectiveKind::Host);
        assert_eq!(DirectiveKind::of("proxycommand"), DirectiveKind::ProxyCommand);
        assert_eq!(DirectiveKind::of("identityfile"), DirectiveKind::Accumulating);
        assert_eq!(DirectiveKind::of("localforward"), DirectiveKind::Accumulating);
        assert_eq!(DirectiveKind::of("remoteforward"), DirectiveKind::Accumulating);
        assert_eq!(DirectiveKind::of("hostname"), DirectiveKind::Single);
        assert_eq!(DirectiveKind::of("dynamicforward"), DirectiveKind::Single);
    }

    #[test]
    fn test_option_map_keeps_insertion_order() {
        let mut map = OptionMap::new();
        map.insert("User", "alice");
        map.insert("hostname", "example.com");
        map.insert("port", "22");
        map.insert("user", "bob");

        let keys: Vec<&str> = map.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["user", "hostname", "port"]);
        assert_eq!(map.get("USER"), Some(&OptionValue::from("bob")));
    }

    #[test]
    fn test_option_map_insert_if_absent() {
        let mut map = OptionMap::new();
        assert!(map.insert_if_absent("port", "22"));
        assert!(!map.insert_if_absent("Port", "2222"));
        assert_eq!(map.get("port"), Some(&OptionValue::from("22")));
    }

    #[test]
    fn test_option_map_append_accumulates() {
        let mut map = OptionMap::new();
        map.append("identityfile", "~/.ssh/a");
        map.append("IdentityFile", "~/.ssh/b");
        assert_eq!(
            map.get("identityfile"),
            Some(&OptionValue::List(vec![
                "~/.ssh/a".to_string(),
                "~/.ssh/b".to_string()
            ]))
        );

        map.insert("localforward", "8080 localhost:80");
        map.append("localforward", "8443 localhost:443");
        let values: Vec<&str> = map.get("localforward").unwrap().values().collect();
        assert_eq!(values, vec!["8080 localhost:80", "8443 localhost:443"]);
    }

    #[test]
    fn test_option_map_append_to_single_key_keeps_first() {
        let mut map = OptionMap::new();
        map.append("user", "alice");
        map.append("user", "bob");
        assert_eq!(map.get("user"), Some(&OptionValue::from("alice")));
    }

    #[test]
    fn test_insert_stores_accumulating_keys_as_list() {
        let map: OptionMap = [("IdentityFile", "~/.ssh/id"), ("remoteforward", "9000 h:9000")]
            .into_iter()
            .collect();
        assert_eq!(
            map.get("identityfile"),
            Some(&OptionValue::List(vec!["~/.ssh/id".to_string()]))
        );
        assert_eq!(
            map.get("remoteforward"),
            Some(&OptionValue::List(vec!["9000 h:9000".to_string()]))
        );
    }

    #[test]
    fn test_insert_list_into_single_key_keeps_first() {
        let mut map = OptionMap::new();
        map.insert("user", vec!["alice".to_string(), "bob".to_string()]);
        assert_eq!(map.get("user"), Some(&OptionValue::from("alice")));
    }

    #[test]
    fn test_insert_empty_list_removes_key() {
        let mut map = OptionMap::new();
        map.insert("identityfile", Vec::<String>::new());
        assert!(map.is_empty());

        map.insert("port", "22");
        map.append("identityfile", "~/.ssh/a");
        map.insert("identityfile", Vec::<String>::new());
        map.insert("user", Vec::<String>::new());
        assert_eq!(map.len(), 1);
        assert!(!map.contains_key("identityfile"));
    }

    #[test]
    fn test_option_map_serializes_as_object() {
        let mut map = OptionMap::new();
        map.insert("port", "22");
        map.append("identityfile", "~/.ssh/id");
        let json = serde_json::to_string(&map).unwrap();
        assert_eq!(json, r#"{"port":"22","identityfile":["~/.ssh/id"]}"#);
    }

    #[test]
    fn test_host_entry_display() {
        let options: OptionMap = [("hostname", "10.0.0.1"), ("user", "root"), ("port", "2222")]
            .into_iter()
            .collect();
        let entry = HostEntry::new("web", options);
        assert_eq!(entry.to_string(), "Host web (10.0.0.1) user=root port=2222");
    }
}
