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

// src/codec/json.rs
// JSON codec, the generic fallback for structured payloads.
//
// JsonCodec has a high priority number (200) so any more specific
// codec is tried first. The byte-level work is done by a JsonMapper,
// which lets callers swap compact output for pretty-printed output
// (or wrap reads and writes) without a second codec.

use std::any::Any;
use std::sync::Arc;

use super::traits::MessageCodec;
use super::types::{NatsPayload, PayloadType, SerdeBridge};
use crate::errors::{BoxError, NatseaClientError};

// JsonMapper turns values into JSON bytes and back. The provided
// methods serialize the concrete type through its SerdeBridge;
// implementors pick the output style and may wrap either direction.
pub trait JsonMapper: Send + Sync {
    // pretty selects indented output.
    fn pretty(&self) -> bool {
        false
    }

    fn write_value_as_bytes(
        &self,
        value: &dyn Any,
        bridge: &SerdeBridge,
    ) -> Result<Vec<u8>, BoxError> {
        bridge.to_json(value, self.pretty())
    }

    fn read_value(
        &self,
        bytes: &[u8],
        bridge: &SerdeBridge,
    ) -> Result<Box<dyn Any + Send>, BoxError> {
        bridge.from_json(bytes)
    }
}

// SerdeJsonMapper is the serde_json backed JsonMapper.
#[derive(Clone, Copy, Debug, Default)]
pub struct SerdeJsonMapper {
    // pretty switches output to serde_json::to_vec_pretty.
    pub pretty: bool,
}

impl SerdeJsonMapper {
    pub fn new() -> Self {
        Self { pretty: false }
    }

    pub fn pretty() -> Self {
        Self { pretty: true }
    }
}

impl JsonMapper for SerdeJsonMapper {
    fn pretty(&self) -> bool {
        self.pretty
    }
}

// JsonCodec serializes any non-basic serde type to JSON.
#[derive(Clone)]
pub struct JsonCodec {
    mapper: Arc<dyn JsonMapper>,
}

impl JsonCodec {
    pub const ORDER: i32 = 200;

    pub fn new(mapper: impl JsonMapper + 'static) -> Self {
        Self {
            mapper: Arc::new(mapper),
        }
    }

    // serialize encodes a typed value directly, bypassing the
    // registry. None encodes to None.
    pub fn serialize<T: NatsPayload>(
        &self,
        data: Option<&T>,
    ) -> Result<Option<Vec<u8>>, NatseaClientError> {
        let Some(data) = data else {
            return Ok(None);
        };
        self.encode(data, &PayloadType::of::<T>()).map(Some)
    }

    // deserialize decodes a typed value directly, bypassing the
    // registry. An empty body decodes to None.
    pub fn deserialize<T: NatsPayload>(&self, body: &[u8]) -> Result<Option<T>, NatseaClientError> {
        if body.is_empty() {
            return Ok(None);
        }
        let target = PayloadType::of::<T>();
        let decoded = self.decode(body, &target)?;
        decoded
            .downcast::<T>()
            .map(|value| Some(*value))
            .map_err(|_| NatseaClientError::decoding_error(target.type_name(), "type mismatch"))
    }

    fn bridge<'a>(target: &'a PayloadType) -> Result<&'a SerdeBridge, BoxError> {
        target
            .serde_bridge()
            .ok_or_else(|| "type has no serde bridge".into())
    }
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self::new(SerdeJsonMapper::new())
    }
}

impl From<SerdeJsonMapper> for JsonCodec {
    fn from(mapper: SerdeJsonMapper) -> Self {
        Self::new(mapper)
    }
}

impl std::fmt::Debug for JsonCodec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("JsonCodec")
            .field("pretty", &self.mapper.pretty())
            .finish()
    }
}

impl MessageCodec for JsonCodec {
    fn name(&self) -> &str {
        "json"
    }

    fn priority(&self) -> i32 {
        Self::ORDER
    }

    fn supports(&self, target: &PayloadType) -> bool {
        !target.is_basic() && target.serde_bridge().is_some()
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        let bridge = Self::bridge(target)
            .map_err(|e| NatseaClientError::encoding_error(target.type_name(), e))?;
        self.mapper
            .write_value_as_bytes(value, bridge)
            .map_err(|e| {
                NatseaClientError::encoding_error_with_value(
                    target.type_name(),
                    bridge.describe(value),
                    e,
                )
            })
    }

    fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        Self::bridge(target)
            .and_then(|bridge| self.mapper.read_value(bytes, bridge))
            .map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))
    }
}
