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

//! Add, edit and delete commands
//!
//! Every command that changes the entry set persists the result before
//! returning.

use anyhow::{Context, Result};
use owo_colors::OwoColorize;

use crate::cli::HostArgs;
use crate::node::Node;
use crate::ssh_config::{ConfigSource, DirectiveKind, OptionMap, SshConfigFile};

/// Build the option map for `add`/`edit` from the command line
///
/// The connection target yields `hostname`, `user` and `port`; `--id-file`
/// values become `identityfile`; each `-o KEY=VALUE` is applied last, so it
/// overrides anything set before it. Accumulating keys given several times
/// are kept as a list. The parsed target is returned alongside the map.
pub fn build_options(args: &HostArgs) -> Result<(Node, OptionMap)> {
    check_single_line("host name", &args.name)?;
    if args.name.split_whitespace().count() != 1 {
        anyhow::bail!("Host name must be a single pattern: '{}'", args.name);
    }

    let node = Node::parse(&args.target)
        .with_context(|| format!("Invalid connection target '{}'", args.target))?;
    let mut options = node.to_options();

    for path in &args.id_files {
        check_single_line("identity file", path)?;
        options.append("identityfile", path.as_str());
    }

    for raw in &args.options {
        let (key, value) = raw
            .split_once('=')
            .with_context(|| format!("Option '{raw}' must be in KEY=VALUE form"))?;
        let key = key.trim().to_lowercase();
        let value = value.trim();

        if key.is_empty() || key.contains(char::is_whitespace) {
            anyhow::bail!("Invalid option name in '{raw}'");
        }
        check_single_line("option value", value)?;

        match DirectiveKind::of(&key) {
            DirectiveKind::Host => anyhow::bail!("'Host' cannot be set as an option"),
            DirectiveKind::Accumulating => options.append(&key, value),
            DirectiveKind::ProxyCommand | DirectiveKind::Single => options.insert(&key, value),
        }
    }

    Ok((node, options))
}

fn check_single_line(what: &str, value: &str) -> Result<()> {
    if value.contains(['\n', '\r']) {
        anyhow::bail!("The {what} must not contain line breaks");
    }
    if value.contains('#') {
        anyhow::bail!("The {what} must not contain '#' (it would be read back as a comment)");
    }
    Ok(())
}

pub fn add_host<S: ConfigSource>(config: &mut SshConfigFile<S>, args: &HostArgs) -> Result<()> {
    let (node, options) = build_options(args)?;
    if config.store().find(&args.name).next().is_some() {
        tracing::warn!("An entry named '{}' already exists; adding another", args.name);
    }

    config
        .add(args.name.as_str(), options)
        .persist()
        .context("Failed to write SSH config")?;

    println!("{} Added host {}", "✓".green(), describe(&args.name, &node));
    Ok(())
}

pub fn edit_host<S: ConfigSource>(config: &mut SshConfigFile<S>, args: &HostArgs) -> Result<()> {
    let (node, options) = build_options(args)?;
    let matched = config.store().find(&args.name).count();

    config
        .update(&args.name, options)
        .persist()
        .context("Failed to write SSH config")?;

    if matched == 0 {
        println!(
            "{} No host named {}; nothing changed",
            "!".yellow(),
            args.name.bold()
        );
    } else {
        println!("{} Updated host {}", "✓".green(), describe(&args.name, &node));
    }
    Ok(())
}

fn describe(name: &str, node: &Node) -> String {
    format!("{} → {node}", name.bold())
}

pub fn delete_host<S: ConfigSource>(config: &mut SshConfigFile<S>, name: &str) -> Result<()> {
    config
        .delete(name)?
        .persist()
        .context("Failed to write SSH config")?;

    // persist() leaves the file alone when nothing is left to write
    if config.entries().is_empty() {
        config.delete_all().context("Failed to write SSH config")?;
    }

    println!("{} Deleted host {}", "✓".green(), name.bold());
    Ok(())
}

pub fn delete_all_hosts<S: ConfigSource>(config: &mut SshConfigFile<S>) -> Result<()> {
    config
        .delete_all()
        .context("Failed to write SSH config")?;
    println!("{} Deleted all hosts", "✓".green());
    Ok(())
}
