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

//! Error types for SSH configuration parsing and editing

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading, editing or writing an SSH config
#[derive(Debug, Error)]
pub enum SshConfigError {
    /// A directive line cannot be split into a key and a value
    ///
    /// This covers a keyword with neither `=` nor whitespace after it and a
    /// line with an empty keyword such as `=value`, which could not be
    /// written back as a directive.
    #[error("unparsable line {line_number}: {line:?}")]
    Syntax { line_number: usize, line: String },

    /// `delete` matched no entry
    #[error("no host found matching '{pattern}'")]
    NotFound { pattern: String },

    /// Reading or writing the backing config source failed
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl SshConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, SshConfigError>;
