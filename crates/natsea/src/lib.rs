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

// src/lib.rs
// Main exports for the natsea NATS client library.

pub mod client;
pub mod codec;
pub mod config;
pub mod errors;
pub mod stats;
pub mod traits;
pub mod transport;

// Export some things for convenience.
pub use client::{ClientDispatcher, ClientOptions};
pub use codec::{CodecRegistry, CodecRegistryBuilder, MessageCodec, NatsPayload, PayloadType};
pub use config::{ConfigError, NatsConfig};
pub use errors::NatseaClientError;
pub use stats::PublishStats;
pub use traits::{NatsRecipient, NatsTransport};
pub use transport::{InMemoryTransport, NatsConnections, NatsMessage, OutboundMessage};
