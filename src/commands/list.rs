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

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::ssh_config::{HostEntry, OptionValue};

pub fn list_hosts(entries: &[HostEntry], json: bool) -> Result<()> {
    if json {
        let out = serde_json::to_string_pretty(entries).context("Failed to encode entries")?;
        println!("{out}");
        return Ok(());
    }

    if entries.is_empty() {
        println!("{}", "No host entries configured".dimmed());
        return Ok(());
    }

    println!("\n{} {}\n", "▶".cyan(), "Host entries".bold());
    print_entries(entries.iter());
    Ok(())
}

pub fn search_hosts(entries: &[HostEntry], text: &str) {
    let found = search_results(entries, text);
    if found.is_empty() {
        println!("{}", format!("No host entries match '{text}'").dimmed());
        return;
    }

    println!(
        "\n{} {} ({} found)\n",
        "▶".cyan(),
        format!("Search results for '{text}'").bold(),
        found.len().to_string().yellow()
    );
    for line in found {
        println!("  {} {}", "●".blue(), line);
    }
    println!();
}

/// One summary line per matching entry, in file order
pub fn search_results(entries: &[HostEntry], text: &str) -> Vec<String> {
    entries
        .iter()
        .filter(|entry| matches_search(entry, text))
        .map(ToString::to_string)
        .collect()
}

/// Case-insensitive substring match against the pattern and `HostName`
pub fn matches_search(entry: &HostEntry, text: &str) -> bool {
    let needle = text.to_lowercase();
    if entry.host.to_lowercase().contains(&needle) {
        return true;
    }
    entry
        .options
        .get("hostname")
        .and_then(OptionValue::first)
        .is_some_and(|hostname| hostname.to_lowercase().contains(&needle))
}

fn print_entries<'a>(entries: impl Iterator<Item = &'a HostEntry>) {
    for entry in entries {
        println!("  {} {}", "●".blue(), entry.host.bold());
        for (key, value) in entry.options.iter() {
            for item in value.values() {
                println!("    {} {} {}", "•".dimmed(), key.dimmed(), item);
            }
        }
    }
    println!();
}
