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

// src/codec/protobuf.rs
// Protobuf codec for prost message types.
//
// Only types described with PayloadType::protobuf (or
// protobuf_with_serde) carry a prost bridge, so only those are
// claimed by this codec. Its priority sits between raw bytes and
// strings, which means a type that is both prost and serde goes out
// as protobuf rather than JSON.

use std::any::Any;

use super::traits::MessageCodec;
use super::types::PayloadType;
use crate::errors::NatseaClientError;

#[derive(Clone, Copy, Debug, Default)]
pub struct ProtobufCodec;

impl ProtobufCodec {
    pub const ORDER: i32 = 75;
}

impl MessageCodec for ProtobufCodec {
    fn name(&self) -> &str {
        "protobuf"
    }

    fn priority(&self) -> i32 {
        Self::ORDER
    }

    fn supports(&self, target: &PayloadType) -> bool {
        target.protobuf_bridge().is_some()
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        let bridge = target.protobuf_bridge().ok_or_else(|| {
            NatseaClientError::encoding_error(target.type_name(), "type is not a protobuf message")
        })?;
        bridge
            .encode(value)
            .map_err(|e| NatseaClientError::encoding_error(target.type_name(), e))
    }

    fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        let bridge = target.protobuf_bridge().ok_or_else(|| {
            NatseaClientError::decoding_error(target.type_name(), "type is not a protobuf message")
        })?;
        bridge
            .decode(bytes)
            .map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))
    }
}
