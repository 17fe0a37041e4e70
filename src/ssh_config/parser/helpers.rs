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

//! Helper functions for SSH configuration parsing

/// Drop everything from the first `#` onwards
pub(super) fn strip_comment(line: &str) -> &str {
    match line.find('#') {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split a directive into its lowercased keyword and its value
///
/// Accepts both `Key Value` and `Key = Value` forms. The keyword ends at the
/// first whitespace or `=`; an `=` directly after the keyword (optionally
/// surrounded by whitespace) is consumed as the separator. Anything after
/// that, including further `=` and internal whitespace, belongs to the value.
///
/// Trailing whitespace after the keyword still counts as a separator, so
/// `User ` yields an empty value.
///
/// Returns `None` when the line is a single token with no separator, or
/// when the keyword itself is empty.
pub(super) fn split_directive(line: &str) -> Option<(String, &str)> {
    let line = line.trim_start();
    let key_end = line.find(|c: char| c.is_whitespace() || c == '=')?;
    let keyword = &line[..key_end];
    if keyword.is_empty() {
        return None;
    }

    let rest = line[key_end..].trim_start();
    let value = rest.strip_prefix('=').unwrap_or(rest).trim();

    Some((keyword.to_lowercase(), value))
}
