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

// src/transport/connections.rs
// Named NATS connections.
//
// Clients pick the connection they publish on by name. The empty
// name always means the default connection, so clients that do not
// care about connections never have to know what it is called.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::debug;

use crate::client::ClientOptions;
use crate::config::{ConnectionConfig, DEFAULT_CONNECTION_NAME, NatsConfig};
use crate::errors::NatseaClientError;
use crate::traits::NatsTransport;

// Connection is one named transport plus the client options every
// dispatcher on it starts from.
#[derive(Clone)]
struct Connection {
    transport: Arc<dyn NatsTransport>,
    options: ClientOptions,
}

#[derive(Clone)]
pub struct NatsConnections {
    default_name: String,
    connections: BTreeMap<String, Connection>,
}

impl NatsConnections {
    pub fn new() -> Self {
        Self {
            default_name: DEFAULT_CONNECTION_NAME.to_string(),
            connections: BTreeMap::new(),
        }
    }

    // single creates a connection set with one default connection.
    pub fn single(transport: Arc<dyn NatsTransport>) -> Self {
        Self::new().with_connection(DEFAULT_CONNECTION_NAME, transport)
    }

    // from_config creates one transport per configured connection
    // using the supplied factory. Each connection keeps the client
    // options derived from config (request timeout, headers).
    pub fn from_config<F>(config: &NatsConfig, mut factory: F) -> Self
    where
        F: FnMut(&str, &ConnectionConfig) -> Arc<dyn NatsTransport>,
    {
        config
            .connections
            .iter()
            .fold(Self::new(), |connections, (name, connection)| {
                debug!(
                    "Creating connection '{}' for servers {:?}",
                    name, connection.servers
                );
                let transport = factory(name, connection);
                connections.with_connection_options(
                    name.clone(),
                    transport,
                    config.client_options(name),
                )
            })
    }

    pub fn with_connection(self, name: impl Into<String>, transport: Arc<dyn NatsTransport>) -> Self {
        self.with_connection_options(name, transport, ClientOptions::default())
    }

    // with_connection_options adds a connection whose dispatchers use
    // options unless they are given their own.
    pub fn with_connection_options(
        mut self,
        name: impl Into<String>,
        transport: Arc<dyn NatsTransport>,
        options: ClientOptions,
    ) -> Self {
        self.connections
            .insert(name.into(), Connection { transport, options });
        self
    }

    // with_default_name changes which connection the empty name
    // resolves to.
    pub fn with_default_name(mut self, name: impl Into<String>) -> Self {
        self.default_name = name.into();
        self
    }

    pub fn default_name(&self) -> &str {
        &self.default_name
    }

    // resolve_name maps the empty name onto the default connection.
    pub fn resolve_name<'a>(&'a self, name: &'a str) -> &'a str {
        if name.is_empty() {
            &self.default_name
        } else {
            name
        }
    }

    // get returns the transport for a connection name.
    pub fn get(&self, name: &str) -> Result<Arc<dyn NatsTransport>, NatseaClientError> {
        self.lookup(name)
            .map(|connection| connection.transport.clone())
    }

    // options returns the client options configured for a connection.
    pub fn options(&self, name: &str) -> Result<ClientOptions, NatseaClientError> {
        self.lookup(name)
            .map(|connection| connection.options.clone())
    }

    fn lookup(&self, name: &str) -> Result<&Connection, NatseaClientError> {
        let resolved = self.resolve_name(name);
        self.connections
            .get(resolved)
            .ok_or_else(|| NatseaClientError::unknown_connection(resolved))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.connections.contains_key(self.resolve_name(name))
    }

    pub fn names(&self) -> Vec<&str> {
        self.connections.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.connections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

impl Default for NatsConnections {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for NatsConnections {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NatsConnections")
            .field("default_name", &self.default_name)
            .field("connections", &self.names())
            .finish()
    }
}
