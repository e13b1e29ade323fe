/*
 * SPDX-FileCopyrightText: Copyright (c) 2025 NVIDIA CORPORATION & AFFILIATES. All rights reserved.
 * SPDX-License-Identifier: LicenseRef-NvidiaProprietary
 *
 * NVIDIA CORPORATION, its affiliates and licensors retain all intellectual
 * property and proprietary rights in and to this material, related
 * documentation and any modifications thereto. Any use, reproduction,
 * disclosure or distribution of this material and related documentation
 * without an express license agreement from NVIDIA CORPORATION or
 * its affiliates is strictly prohibited.
 */

// src/config.rs
// TOML configuration for named NATS connections.
//
// request_timeout = "5s"
//
// [connections.default]
// servers = ["nats://127.0.0.1:4222"]
//
// [connections.orders]
// servers = ["nats://orders-1:4222", "nats://orders-2:4222"]
// request_timeout = "500ms"
// headers = { source = "order-service" }

use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::client::ClientOptions;

pub const DEFAULT_CONNECTION_NAME: &str = "default";
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(5);
const DEFAULT_SERVER: &str = "nats://127.0.0.1:4222";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NatsConfig {
    // request_timeout bounds request/reply calls on every connection
    // that does not override it.
    #[serde(default = "Defaults::request_timeout", with = "humantime_serde")]
    pub request_timeout: Duration,
    #[serde(default = "Defaults::connections")]
    pub connections: BTreeMap<String, ConnectionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionConfig {
    #[serde(default = "Defaults::servers")]
    pub servers: Vec<String>,
    // client_name is reported to the server when connecting.
    #[serde(default)]
    pub client_name: Option<String>,
    #[serde(default, with = "humantime_serde")]
    pub request_timeout: Option<Duration>,
    // headers are added to every message published on this connection.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
}

pub struct Defaults;

impl Defaults {
    pub fn request_timeout() -> Duration {
        DEFAULT_REQUEST_TIMEOUT
    }

    pub fn servers() -> Vec<String> {
        vec![DEFAULT_SERVER.to_string()]
    }

    pub fn connections() -> BTreeMap<String, ConnectionConfig> {
        BTreeMap::from([(
            DEFAULT_CONNECTION_NAME.to_string(),
            ConnectionConfig::default(),
        )])
    }
}

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("Could not read config file: {path}: {error}")]
    CouldNotRead { path: String, error: std::io::Error },
    #[error("Invalid TOML in config file: {path}: {error}")]
    InvalidToml {
        path: String,
        error: toml::de::Error,
    },
    #[error("Connection '{0}' has no servers configured")]
    NoServers(String),
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self {
            servers: Defaults::servers(),
            client_name: None,
            request_timeout: None,
            headers: BTreeMap::new(),
        }
    }
}

impl Default for NatsConfig {
    fn default() -> Self {
        Self {
            request_timeout: Defaults::request_timeout(),
            connections: Defaults::connections(),
        }
    }
}

impl NatsConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let cfg = std::fs::read_to_string(path).map_err(|error| ConfigError::CouldNotRead {
            path: path.to_string_lossy().to_string(),
            error,
        })?;
        Self::parse(&cfg, &path.to_string_lossy())
    }

    // from_toml_str parses configuration that did not come from a file.
    pub fn from_toml_str(cfg: &str) -> Result<Self, ConfigError> {
        Self::parse(cfg, "<inline>")
    }

    fn parse(cfg: &str, path: &str) -> Result<Self, ConfigError> {
        let config = toml::from_str::<Self>(cfg).map_err(|error| ConfigError::InvalidToml {
            path: path.to_string(),
            error,
        })?;
        config.validate()?;
        Ok(config)
    }

    // validate rejects connections without any server to dial.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match self
            .connections
            .iter()
            .find(|(_, connection)| connection.servers.is_empty())
        {
            Some((name, _)) => Err(ConfigError::NoServers(name.clone())),
            None => Ok(()),
        }
    }

    // connection looks up a connection; the empty name is the
    // default connection.
    pub fn connection(&self, name: &str) -> Option<&ConnectionConfig> {
        let name = if name.is_empty() {
            DEFAULT_CONNECTION_NAME
        } else {
            name
        };
        self.connections.get(name)
    }

    // client_options derives ClientOptions for clients using the
    // named connection.
    pub fn client_options(&self, name: &str) -> ClientOptions {
        let connection = self.connection(name);
        let request_timeout = connection
            .and_then(|c| c.request_timeout)
            .unwrap_or(self.request_timeout);
        let options = ClientOptions::default().with_request_timeout(request_timeout);
        match connection {
            Some(c) if !c.headers.is_empty() => options.with_headers(c.headers.clone()),
            _ => options,
        }
    }
}
