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

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "sshconf",
    version,
    about = "Manage host entries in an OpenSSH client configuration file",
    long_about = "sshconf reads an OpenSSH client configuration (~/.ssh/config by default),\nlets you add, edit and delete Host entries, and writes the result back.\nOnly Host blocks and their options are kept; comments and blank lines are not preserved.",
    after_help = "EXAMPLES:\n  Add a host:              sshconf add web deploy@10.0.0.5:2222 --id-file ~/.ssh/deploy\n  Add with extra options:  sshconf add db db.internal -o ProxyJump=bastion\n  Change a host:           sshconf edit web deploy@10.0.0.6\n  Remove a host:           sshconf delete web\n  Show entries:            sshconf list\n  Print the config:        sshconf dump"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(
        short = 'F',
        long,
        help = "SSH config file to operate on [default: ~/.ssh/config]\nThe file is created if it does not exist"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        short = 'v',
        long,
        action = clap::ArgAction::Count,
        help = "Increase verbosity (-v, -vv, -vvv)"
    )]
    pub verbose: u8,
}

/// Options shared by `add` and `edit`
#[derive(clap::Args, Debug, Clone)]
pub struct HostArgs {
    #[arg(help = "Host pattern written on the Host line (e.g. web, *.internal)")]
    pub name: String,

    #[arg(help = "Connection target in [user@]hostname[:port] format")]
    pub target: String,

    #[arg(
        long = "id-file",
        value_name = "PATH",
        help = "IdentityFile to use (repeat for several keys)"
    )]
    pub id_files: Vec<String>,

    #[arg(
        short = 'o',
        long = "option",
        value_name = "KEY=VALUE",
        help = "Extra option, e.g. -o ProxyJump=bastion (repeatable)"
    )]
    pub options: Vec<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    #[command(about = "List all host entries")]
    List {
        #[arg(long, help = "Print entries as JSON")]
        json: bool,
    },

    #[command(about = "Show entries whose pattern or HostName contains the given text")]
    Search {
        #[arg(help = "Text to search for (case-insensitive)")]
        text: String,
    },

    #[command(about = "Add a host entry")]
    Add(HostArgs),

    #[command(about = "Replace the options of an existing host entry")]
    Edit(HostArgs),

    #[command(about = "Delete every entry with the given pattern")]
    Delete {
        #[arg(help = "Host pattern to delete (exact match)")]
        name: String,
    },

    #[command(name = "delete-all", about = "Delete all host entries")]
    DeleteAll,

    #[command(about = "Print the configuration as it would be written")]
    Dump,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_add_with_options() {
        let cli = Cli::try_parse_from([
            "sshconf",
            "-F",
            "/tmp/config",
            "add",
            "web",
            "deploy@10.0.0.5:2222",
            "--id-file",
            "~/.ssh/a",
            "--id-file",
            "~/.ssh/b",
            "-o",
            "ProxyJump=bastion",
        ])
        .unwrap();

        assert_eq!(cli.config, Some(PathBuf::from("/tmp/config")));
        match cli.command {
            Commands::Add(args) => {
                assert_eq!(args.name, "web");
                assert_eq!(args.target, "deploy@10.0.0.5:2222");
                assert_eq!(args.id_files, vec!["~/.ssh/a", "~/.ssh/b"]);
                assert_eq!(args.options, vec!["ProxyJump=bastion"]);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn test_parse_delete_all_and_verbosity() {
        let cli = Cli::try_parse_from(["sshconf", "-vv", "delete-all"]).unwrap();
        assert_eq!(cli.verbose, 2);
        assert!(matches!(cli.command, Commands::DeleteAll));
    }
}
