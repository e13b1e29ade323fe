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

// src/codec/mod.rs
// Codec module coordination and re-exports for payload encoding
// and decoding.

mod basic;
mod core;
mod json;
mod protobuf;
pub mod traits;
pub mod types;
mod yaml;

pub use self::core::{CodecRegistry, CodecRegistryBuilder};

pub use basic::{PrimitiveCodec, RawBytesCodec, StringCodec};
pub use json::{JsonCodec, JsonMapper, SerdeJsonMapper};
pub use protobuf::ProtobufCodec;
pub use traits::MessageCodec;
pub use types::{NatsPayload, PayloadType, ProtobufBridge, SerdeBridge, WireKind};
pub use yaml::YamlCodec;
