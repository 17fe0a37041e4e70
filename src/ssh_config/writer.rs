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

//! Serialization of host entries back into SSH config text

use super::types::HostEntry;

/// Indentation used for option lines under a `Host` line
pub const OPTION_INDENT: &str = "    ";

/// Render entries as SSH config text
///
/// Each entry becomes a `Host <pattern>` line followed by one indented
/// `<key> <value>` line per value. Returns `None` when there is nothing to
/// write. Values are written as stored, without quoting.
pub fn serialize(entries: &[HostEntry]) -> Option<String> {
    if entries.is_empty() {
        return None;
    }

    let mut out = String::new();
    for entry in entries {
        out.push_str("Host ");
        out.push_str(&entry.host);
        out.push('\n');
        for (key, value) in entry.options.iter() {
            for item in value.values() {
                out.push_str(OPTION_INDENT);
                out.push_str(key);
                out.push(' ');
                out.push_str(item);
                out.push('\n');
            }
        }
    }

    Some(out)
}
