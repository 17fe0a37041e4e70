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
use clap::Parser;
use std::path::PathBuf;

use sshconf::{
    cli::{Cli, Commands},
    commands::{
        edit::{add_host, delete_all_hosts, delete_host, edit_host},
        list::{list_hosts, search_hosts},
    },
    ssh_config::{expand_tilde, FileSource, SshConfigFile},
    utils::init_logging,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    let path = resolve_config_path(cli.config.as_deref())?;
    tracing::debug!("Using SSH config at {}", path.display());

    let mut config = SshConfigFile::open(&path)
        .with_context(|| format!("Failed to open SSH config {}", path.display()))?;
    config
        .load()
        .with_context(|| format!("Failed to parse SSH config {}", path.display()))?;

    match cli.command {
        Commands::List { json } => list_hosts(config.entries(), json)?,
        Commands::Search { text } => search_hosts(config.entries(), &text),
        Commands::Add(args) => add_host(&mut config, &args)?,
        Commands::Edit(args) => edit_host(&mut config, &args)?,
        Commands::Delete { name } => delete_host(&mut config, &name)?,
        Commands::DeleteAll => delete_all_hosts(&mut config)?,
        Commands::Dump => {
            if let Some(text) = config.dump() {
                print!("{text}");
            }
        }
    }

    Ok(())
}

fn resolve_config_path(explicit: Option<&std::path::Path>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(expand_tilde(path)),
        None => FileSource::default_path()
            .context("Could not determine the home directory; pass -F to choose a config file"),
    }
}
