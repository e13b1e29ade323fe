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

// src/traits.rs
// Core traits for NATS message publishing.
use async_trait::async_trait;

use crate::errors::NatseaClientError;
use crate::transport::{NatsMessage, OutboundMessage};

// NatsRecipient enables any type to specify which subject messages
// should be published to. Implement this trait to create strongly-typed
// addressing.
//
// Example: Device routing
// struct Device { id: String, priority: bool }
// impl NatsRecipient for Device {
//     fn to_nats_subject(&self) -> String {
//         if self.priority {
//             format!("priority.devices.{}.alerts", self.id)
//         } else {
//             format!("devices.{}.messages", self.id)
//         }
//     }
// }
//
// Usage:
// let device = Device { id: "sensor-01".to_string(), priority: true };
// dispatcher.publish(device, &my_message).await?;
pub trait NatsRecipient {
    // to_nats_subject converts recipient into a NATS subject string.
    fn to_nats_subject(&self) -> String;
}

impl NatsRecipient for String {
    fn to_nats_subject(&self) -> String {
        self.clone()
    }
}

impl NatsRecipient for &str {
    fn to_nats_subject(&self) -> String {
        self.to_string()
    }
}

impl NatsRecipient for &String {
    fn to_nats_subject(&self) -> String {
        (*self).clone()
    }
}

// NatsTransport is the seam to the actual NATS connection. The
// client dispatcher only ever talks to the broker through it, so a
// real network client, a test double or the InMemoryTransport can
// be plugged in without touching codec or client code.
#[async_trait]
pub trait NatsTransport: Send + Sync {
    // publish sends a message to its subject without waiting for
    // any reply.
    async fn publish(&self, message: OutboundMessage) -> Result<(), NatseaClientError>;

    // request publishes a message and waits for the single reply.
    // Transports should fail with NoResponders when nobody is
    // listening on the subject; timeouts are applied by the caller.
    async fn request(&self, message: OutboundMessage) -> Result<NatsMessage, NatseaClientError>;
}
