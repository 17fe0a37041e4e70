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

//! SSH configuration parsing and editing
//!
//! This module parses OpenSSH client configuration text into host entries,
//! lets callers add, update and delete entries, and writes the result back
//! in a form that parses to the same entries.
//!
//! ```rust
//! use sshconf::ssh_config::{MemorySource, OptionMap, SshConfigFile};
//!
//! let source = MemorySource::new("Host web\n    HostName 10.0.0.1\n");
//! let mut config = SshConfigFile::new(source);
//! config.load().unwrap();
//!
//! let options: OptionMap = [("hostname", "10.0.0.2")].into_iter().collect();
//! config.add("db", options);
//! config.persist().unwrap();
//!
//! assert_eq!(
//!     config.source().text(),
//!     "Host web\n    hostname 10.0.0.1\nHost db\n    hostname 10.0.0.2\n"
//! );
//! ```

mod error;
mod parser;
mod source;
mod store;
mod types;
mod writer;

pub use error::{Result, SshConfigError};
pub use source::{expand_tilde, ConfigSource, FileSource, MemorySource};
pub use store::HostStore;
pub use types::{DirectiveKind, HostBlock, HostEntry, OptionMap, OptionValue, ACCUMULATING_KEYS};
pub use writer::{serialize, OPTION_INDENT};

/// Parse SSH configuration text into host blocks
pub fn parse(content: &str) -> Result<Vec<HostBlock>> {
    parser::parse(content)
}

/// Parse SSH configuration from individual lines
pub fn parse_lines<I, L>(lines: I) -> Result<Vec<HostBlock>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    parser::parse_lines(lines)
}

/// A [`HostStore`] bound to the source it was loaded from
#[derive(Debug)]
pub struct SshConfigFile<S: ConfigSource> {
    source: S,
    store: HostStore,
}

impl SshConfigFile<FileSource> {
    /// Open `path`, creating an empty file if it does not exist yet
    pub fn open(path: impl Into<std::path::PathBuf>) -> Result<Self> {
        Ok(Self::new(FileSource::open_or_create(path)?))
    }
}

impl<S: ConfigSource> SshConfigFile<S> {
    /// Wrap a source. Nothing is read until [`load`](Self::load) is called.
    pub fn new(source: S) -> Self {
        Self {
            source,
            store: HostStore::new(),
        }
    }

    /// Read and parse the source, replacing the in-memory entries
    pub fn load(&mut self) -> Result<&[HostEntry]> {
        let text = self.source.read_all()?;
        self.store.load(&text)
    }

    pub fn add(&mut self, host: impl Into<String>, options: OptionMap) -> &mut Self {
        self.store.add(host, options);
        self
    }

    pub fn update(&mut self, host: &str, options: OptionMap) -> &mut Self {
        self.store.update(host, options);
        self
    }

    pub fn delete(&mut self, host: &str) -> Result<&mut Self> {
        self.store.delete(host)?;
        Ok(self)
    }

    /// Remove every entry and truncate the source
    pub fn delete_all(&mut self) -> Result<&mut Self> {
        self.store.clear();
        self.source.write_all("")?;
        Ok(self)
    }

    pub fn dump(&self) -> Option<String> {
        self.store.dump()
    }

    /// Write the serialized entries to the source
    ///
    /// When there are no entries the source is left untouched; use
    /// [`delete_all`](Self::delete_all) to empty it deliberately.
    pub fn persist(&mut self) -> Result<&mut Self> {
        match self.store.dump() {
            Some(text) => self.source.write_all(&text)?,
            None => tracing::debug!("No host entries to write, leaving config untouched"),
        }
        Ok(self)
    }

    pub fn entries(&self) -> &[HostEntry] {
        self.store.entries()
    }

    pub fn store(&self) -> &HostStore {
        &self.store
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
