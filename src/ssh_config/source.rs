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

//! Backing text sources for SSH configuration
//!
//! A [`ConfigSource`] supplies the whole config text on load and accepts the
//! whole serialized text on persist. Files are opened per call and closed when
//! the call returns.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use super::error::{Result, SshConfigError};

/// Where SSH configuration text is read from and written to
pub trait ConfigSource {
    /// Read the complete config text
    fn read_all(&self) -> Result<String>;

    /// Replace the complete config text
    fn write_all(&mut self, text: &str) -> Result<()>;
}

/// A config file on disk
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Use `path`, creating it (and its parent directory) as an empty file if missing
    pub fn open_or_create(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if !path.exists() {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| SshConfigError::io(parent, e))?;
            }
            fs::File::create(&path).map_err(|e| SshConfigError::io(&path, e))?;
            tracing::debug!("Created empty SSH config at {}", path.display());
        }
        Ok(Self { path })
    }

    /// The per-user config path, `~/.ssh/config`
    pub fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".ssh").join("config"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ConfigSource for FileSource {
    fn read_all(&self) -> Result<String> {
        match fs::read_to_string(&self.path) {
            Ok(text) => Ok(text),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(
                    "SSH config not found at {}, treating as empty",
                    self.path.display()
                );
                Ok(String::new())
            }
            Err(e) => Err(SshConfigError::io(&self.path, e)),
        }
    }

    fn write_all(&mut self, text: &str) -> Result<()> {
        let mut file =
            fs::File::create(&self.path).map_err(|e| SshConfigError::io(&self.path, e))?;
        file.write_all(text.as_bytes())
            .and_then(|_| file.flush())
            .map_err(|e| SshConfigError::io(&self.path, e))?;
        tracing::debug!("Wrote {} bytes to {}", text.len(), self.path.display());
        Ok(())
    }
}

/// An in-memory config text, useful for tests and embedding
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySource {
    text: String,
}

impl MemorySource {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

impl ConfigSource for MemorySource {
    fn read_all(&self) -> Result<String> {
        Ok(self.text.clone())
    }

    fn write_all(&mut self, text: &str) -> Result<()> {
        self.text = text.to_string();
        Ok(())
    }
}

/// Expand a leading `~/` to the user's home directory
pub fn expand_tilde(path: &Path) -> PathBuf {
    if let Ok(rest) = path.strip_prefix("~") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    path.to_path_buf()
}
