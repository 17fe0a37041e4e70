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
use std::fmt;

use crate::ssh_config::OptionMap;

/// A connection target given on the command line as `[user@]host[:port]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub host: String,
    pub port: Option<u16>,
    pub username: Option<String>,
}

impl Node {
    pub fn parse(node_str: &str) -> Result<Self> {
        // Parse formats:
        // - host
        // - host:port
        // - user@host
        // - user@host:port
        // - [v6addr] / [v6addr]:port

        let (user_part, host_part) = match node_str.rfind('@') {
            Some(at_pos) => (Some(&node_str[..at_pos]), &node_str[at_pos + 1..]),
            None => (None, node_str),
        };

        let (host, port_str) = if let Some(rest) = host_part.strip_prefix('[') {
            let close = rest
                .find(']')
                .with_context(|| format!("Unclosed '[' in '{node_str}'"))?;
            let tail = &rest[close + 1..];
            let port_str = match tail.strip_prefix(':') {
                Some(port) => Some(port),
                None if tail.is_empty() => None,
                None => anyhow::bail!("Unexpected text after ']' in '{node_str}'"),
            };
            (&rest[..close], port_str)
        } else {
            match host_part.rfind(':') {
                Some(colon_pos) => (&host_part[..colon_pos], Some(&host_part[colon_pos + 1..])),
                None => (host_part, None),
            }
        };

        if host.is_empty() {
            anyhow::bail!("Missing host name in '{node_str}'");
        }

        let port = port_str
            .map(|p| {
                p.parse::<u16>()
                    .with_context(|| format!("Invalid port number '{p}'"))
            })
            .transpose()?;

        let username = user_part.filter(|u| !u.is_empty()).map(str::to_string);

        Ok(Node {
            host: host.to_string(),
            port,
            username,
        })
    }

    /// `hostname`, `user` and `port` options for this target
    pub fn to_options(&self) -> OptionMap {
        let mut options = OptionMap::new();
        options.insert("hostname", self.host.as_str());
        if let Some(ref user) = self.username {
            options.insert("user", user.as_str());
        }
        if let Some(port) = self.port {
            options.insert("port", port.to_string());
        }
        options
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(ref user) = self.username {
            write!(f, "{user}@")?;
        }
        if self.host.contains(':') {
            write!(f, "[{}]", self.host)?;
        } else {
            write!(f, "{}", self.host)?;
        }
        if let Some(port) = self.port {
            write!(f, ":{port}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ssh_config::OptionValue;

    #[test]
    fn test_parse_host_only() {
        let node = Node::parse("example.com").unwrap();
        assert_eq!(node.host, "example.com");
        assert_eq!(node.port, None);
        assert_eq!(node.username, None);
    }

    #[test]
    fn test_parse_host_with_port() {
        let node = Node::parse("example.com:2222").unwrap();
        assert_eq!(node.host, "example.com");
        assert_eq!(node.port, Some(2222));
    }

    #[test]
    fn test_parse_full_format() {
        let node = Node::parse("admin@example.com:2222").unwrap();
        assert_eq!(node.username.as_deref(), Some("admin"));
        assert_eq!(node.host, "example.com");
        assert_eq!(node.port, Some(2222));
    }

    #[test]
    fn test_parse_ipv6() {
        let node = Node::parse("root@[::1]:2200").unwrap();
        assert_eq!(node.host, "::1");
        assert_eq!(node.port, Some(2200));
        assert_eq!(node.to_string(), "root@[::1]:2200");

        let node = Node::parse("[fe80::1]").unwrap();
        assert_eq!(node.host, "fe80::1");
        assert_eq!(node.port, None);
    }

    #[test]
    fn test_parse_errors() {
        assert!(Node::parse("").is_err());
        assert!(Node::parse("user@").is_err());
        assert!(Node::parse("host:notaport").is_err());
        assert!(Node::parse("host:70000").is_err());
        assert!(Node::parse("[::1").is_err());
        assert!(Node::parse("[::1]x").is_err());
    }

    #[test]
    fn test_to_options() {
        let options = Node::parse("deploy@10.0.0.7:2022").unwrap().to_options();
        let keys: Vec<&str> = options.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["hostname", "user", "port"]);
        assert_eq!(options.get("port"), Some(&OptionValue::from("2022")));

        let options = Node::parse("example.com").unwrap().to_options();
        assert_eq!(options.len(), 1);
    }
}
