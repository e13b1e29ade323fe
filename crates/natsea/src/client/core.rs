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

// src/client/core.rs
// ClientDispatcher, the runtime behind generated NATS clients.
//
// A dispatcher binds a codec registry to one transport (one named
// connection). Every method of a client generated by nats_client!
// ends up here: the argument is encoded through the registry and
// handed to the transport, and for request methods the reply is
// decoded back through the same registry.

use std::any::Any;
use std::sync::Arc;

use tracing::{debug, warn};

use super::options::ClientOptions;
use super::subject::validate_publish_subject;
use crate::codec::{CodecRegistry, NatsPayload, PayloadType};
use crate::errors::NatseaClientError;
use crate::stats::{PublishStats, PublishStatsTracker};
use crate::traits::{NatsRecipient, NatsTransport};
use crate::transport::{Headers, NatsConnections, OutboundMessage};

#[derive(Clone)]
pub struct ClientDispatcher {
    // connection is the resolved name of the connection in use.
    connection: String,
    registry: Arc<CodecRegistry>,
    transport: Arc<dyn NatsTransport>,
    options: ClientOptions,
    // publish_stats is shared by clones of the dispatcher.
    publish_stats: Arc<PublishStatsTracker>,
}

impl ClientDispatcher {
    // new creates a dispatcher over an explicit transport.
    pub fn new(registry: Arc<CodecRegistry>, transport: Arc<dyn NatsTransport>) -> Self {
        Self {
            connection: crate::config::DEFAULT_CONNECTION_NAME.to_string(),
            registry,
            transport,
            options: ClientOptions::default(),
            publish_stats: Arc::new(PublishStatsTracker::new()),
        }
    }

    // from_connections creates a dispatcher for a named connection,
    // starting from the options stored with that connection. The
    // empty name selects the default connection.
    pub fn from_connections(
        connections: &NatsConnections,
        connection: &str,
        registry: Arc<CodecRegistry>,
    ) -> Result<Self, NatseaClientError> {
        let transport = connections.get(connection)?;
        let mut dispatcher =
            Self::new(registry, transport).with_options(connections.options(connection)?);
        dispatcher.connection = connections.resolve_name(connection).to_string();
        Ok(dispatcher)
    }

    pub fn with_options(mut self, options: ClientOptions) -> Self {
        self.options = options;
        self
    }

    pub fn connection(&self) -> &str {
        &self.connection
    }

    pub fn registry(&self) -> &Arc<CodecRegistry> {
        &self.registry
    }

    pub fn options(&self) -> &ClientOptions {
        &self.options
    }

    pub fn publish_stats(&self) -> PublishStats {
        self.publish_stats.to_stats()
    }

    pub fn reset_publish_stats(&self) {
        self.publish_stats.reset_counters();
    }

    // publish encodes message and publishes it to recipient.
    pub async fn publish<T: NatsPayload>(
        &self,
        recipient: impl NatsRecipient,
        message: &T,
    ) -> Result<(), NatseaClientError> {
        self.publish_with_headers(recipient, Headers::new(), message)
            .await
    }

    pub async fn publish_with_headers<T: NatsPayload>(
        &self,
        recipient: impl NatsRecipient,
        headers: Headers,
        message: &T,
    ) -> Result<(), NatseaClientError> {
        let payload_type = PayloadType::of::<T>();
        let outbound = self.outbound(recipient, headers, Some(message as &dyn Any), &payload_type)?;
        self.send(outbound, &payload_type).await
    }

    // publish_optional publishes an empty payload when message is None.
    pub async fn publish_optional<T: NatsPayload>(
        &self,
        recipient: impl NatsRecipient,
        message: Option<&T>,
    ) -> Result<(), NatseaClientError> {
        let payload_type = PayloadType::of::<T>();
        let outbound = self.outbound(
            recipient,
            Headers::new(),
            message.map(|m| m as &dyn Any),
            &payload_type,
        )?;
        self.send(outbound, &payload_type).await
    }

    // publish_as publishes a value using an explicit payload type,
    // e.g. PayloadType::protobuf for prost messages.
    pub async fn publish_as<T: Send + Sync + 'static>(
        &self,
        recipient: impl NatsRecipient,
        message: &T,
        payload_type: &PayloadType,
    ) -> Result<(), NatseaClientError> {
        let outbound =
            self.outbound(recipient, Headers::new(), Some(message as &dyn Any), payload_type)?;
        self.send(outbound, payload_type).await
    }

    async fn send(
        &self,
        outbound: OutboundMessage,
        payload_type: &PayloadType,
    ) -> Result<(), NatseaClientError> {
        let subject = outbound.subject.clone();
        let payload_size = outbound.payload_size();

        debug!(
            "Publishing {} bytes of '{}' to '{}' on connection '{}'",
            payload_size, payload_type, subject, self.connection
        );
        match self.transport.publish(outbound).await {
            Ok(()) => {
                self.publish_stats.increment_published(payload_size);
                Ok(())
            }
            Err(e) => {
                warn!("Failed to publish to '{}': {}", subject, e);
                self.publish_stats.increment_failed();
                Err(e)
            }
        }
    }

    // request encodes message, sends it as a request and decodes the
    // reply as R. An empty reply decodes to None.
    pub async fn request<T: NatsPayload, R: NatsPayload>(
        &self,
        recipient: impl NatsRecipient,
        message: &T,
    ) -> Result<Option<R>, NatseaClientError> {
        let outbound = self.outbound(
            recipient,
            Headers::new(),
            Some(message as &dyn Any),
            &PayloadType::of::<T>(),
        )?;
        let subject = outbound.subject.clone();
        let payload_size = outbound.payload_size();
        let timeout = self.options.effective_request_timeout();

        debug!(
            "Requesting '{}' with {} bytes (timeout {:?})",
            subject, payload_size, timeout
        );
        let reply = match tokio::time::timeout(timeout, self.transport.request(outbound)).await {
            Ok(Ok(reply)) => {
                self.publish_stats.increment_published(payload_size);
                reply
            }
            Ok(Err(e)) => {
                warn!("Request to '{}' failed: {}", subject, e);
                self.publish_stats.increment_failed();
                return Err(e);
            }
            Err(_) => {
                warn!("Request to '{}' timed out after {:?}", subject, timeout);
                self.publish_stats.increment_failed();
                return Err(NatseaClientError::RequestTimeout { subject, timeout });
            }
        };

        self.registry.decode_message::<R>(&reply)
    }

    // outbound builds the validated, encoded message for a publish.
    fn outbound(
        &self,
        recipient: impl NatsRecipient,
        headers: Headers,
        message: Option<&dyn Any>,
        payload_type: &PayloadType,
    ) -> Result<OutboundMessage, NatseaClientError> {
        let subject = recipient.to_nats_subject();
        validate_publish_subject(&subject)?;
        let payload = self.registry.encode(message, payload_type)?;
        Ok(OutboundMessage::new(subject, payload).with_headers(self.options.merged_headers(headers)))
    }
}

impl std::fmt::Debug for ClientDispatcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientDispatcher")
            .field("connection", &self.connection)
            .field("registry", &self.registry)
            .field("transport", &"<transport>")
            .field("options", &self.options)
            .finish()
    }
}
