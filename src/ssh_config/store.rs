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

//! In-memory store of host entries
//!
//! The store holds one [`HostEntry`] per host pattern, in file order. Blocks
//! that declare several patterns (`Host a b`) are flattened into one entry per
//! pattern, each with its own copy of the block's options.

use super::error::{Result, SshConfigError};
use super::parser;
use super::types::{HostBlock, HostEntry, OptionMap};
use super::writer;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostStore {
    entries: Vec<HostEntry>,
}

impl HostStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse `content` and replace the current entries with the result
    ///
    /// On a syntax error the store keeps its previous entries.
    pub fn load(&mut self, content: &str) -> Result<&[HostEntry]> {
        let blocks = parser::parse(content)?;
        self.entries = flatten(blocks);
        tracing::debug!("Loaded {} host entries", self.entries.len());
        Ok(&self.entries)
    }

    /// Append an entry. Existing entries with the same pattern are left alone.
    pub fn add(&mut self, host: impl Into<String>, options: OptionMap) -> &mut Self {
        self.entries.push(HostEntry::new(host, options));
        self
    }

    /// Replace the options of every entry whose pattern equals `host`
    ///
    /// Does nothing when no entry matches.
    pub fn update(&mut self, host: &str, options: OptionMap) -> &mut Self {
        let mut matched = 0;
        for entry in self.entries.iter_mut().filter(|e| e.host == host) {
            entry.options = options.clone();
            matched += 1;
        }
        if matched == 0 {
            tracing::debug!("update: no entry matches '{}'", host);
        }
        self
    }

    /// Remove every entry whose pattern equals `host`
    pub fn delete(&mut self, host: &str) -> Result<&mut Self> {
        let before = self.entries.len();
        self.entries.retain(|e| e.host != host);

        let removed = before - self.entries.len();
        if removed == 0 {
            return Err(SshConfigError::NotFound {
                pattern: host.to_string(),
            });
        }
        tracing::debug!("Removed {} entries for '{}'", removed, host);
        Ok(self)
    }

    /// Drop all entries
    pub fn clear(&mut self) -> &mut Self {
        self.entries.clear();
        self
    }

    pub fn entries(&self) -> &[HostEntry] {
        &self.entries
    }

    /// Entries whose pattern equals `host`
    pub fn find<'a>(&'a self, host: &'a str) -> impl Iterator<Item = &'a HostEntry> + 'a {
        self.entries.iter().filter(move |e| e.host == host)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Serialize the entries to SSH config text, `None` if there are none
    pub fn dump(&self) -> Option<String> {
        writer::serialize(&self.entries)
    }
}

/// One entry per pattern, skipping blocks that carry no options
fn flatten(blocks: Vec<HostBlock>) -> Vec<HostEntry> {
    blocks
        .into_iter()
        .filter(|block| !block.options.is_empty())
        .flat_map(|block| {
            let HostBlock { patterns, options } = block;
            patterns
                .into_iter()
                .map(move |pattern| HostEntry::new(pattern, options.clone()))
        })
        .collect()
}
