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

//! Parse, edit and write back OpenSSH client configuration files.
//!
//! The [`ssh_config`] module holds the grammar parser, the host store and
//! the serializer. The remaining modules make up the `sshconf` command-line
//! tool built on top of it.

pub mod cli;
pub mod commands;
pub mod node;
pub mod ssh_config;
pub mod utils;

pub use cli::Cli;
pub use node::Node;
pub use ssh_config::{
    HostEntry, HostStore, OptionMap, OptionValue, SshConfigError, SshConfigFile,
};
