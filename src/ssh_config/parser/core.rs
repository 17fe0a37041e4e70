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

//! Core SSH configuration parsing functionality
//!
//! Lines are folded into a sequence of [`HostBlock`]s. Directives that appear
//! before the first `Host` line land in an implicit `Host *` block.

use crate::ssh_config::error::{Result, SshConfigError};
use crate::ssh_config::types::{DirectiveKind, HostBlock};

use super::helpers::{split_directive, strip_comment};

/// Parse SSH configuration content
pub fn parse(content: &str) -> Result<Vec<HostBlock>> {
    parse_lines(content.lines())
}

/// Parse SSH configuration from a sequence of lines
pub fn parse_lines<I, L>(lines: I) -> Result<Vec<HostBlock>>
where
    I: IntoIterator<Item = L>,
    L: AsRef<str>,
{
    let mut blocks = Vec::new();
    let mut current = HostBlock::implicit();

    for (index, raw) in lines.into_iter().enumerate() {
        let line_number = index + 1;
        let line = raw.as_ref().trim_end_matches(['\n', '\r']).trim_start();
        let line = strip_comment(line);

        if line.trim().is_empty() {
            continue;
        }

        let (keyword, value) = split_directive(line).ok_or_else(|| SshConfigError::Syntax {
            line_number,
            line: line.trim().to_string(),
        })?;

        match DirectiveKind::of(&keyword) {
            DirectiveKind::Host => {
                let patterns: Vec<String> =
                    value.split_whitespace().map(str::to_string).collect();
                tracing::trace!("Host block {:?} starts at line {}", patterns, line_number);
                blocks.push(std::mem::replace(&mut current, HostBlock::new(patterns)));
            }
            DirectiveKind::Accumulating => current.options.append(&keyword, value),
            DirectiveKind::ProxyCommand | DirectiveKind::Single => {
                if !current.options.insert_if_absent(&keyword, value) {
                    tracing::trace!(
                        "Ignoring repeated '{}' at line {} (first value wins)",
                        keyword,
                        line_number
                    );
                }
            }
        }
    }

    // Don't forget the last block
    blocks.push(current);

    Ok(blocks)
}
