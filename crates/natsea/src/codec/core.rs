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

// src/codec/core.rs
// CodecRegistry implementation for priority-based codec selection.
//
// Codecs are collected on a CodecRegistryBuilder during startup and
// frozen into an immutable CodecRegistry by build(). The registry is
// then shared (usually behind an Arc) by every client dispatcher and
// read concurrently without locking.

use std::any::Any;
use std::sync::Arc;

use tracing::debug;

use super::basic::{PrimitiveCodec, RawBytesCodec, StringCodec};
use super::json::JsonCodec;
use super::traits::MessageCodec;
use super::types::{NatsPayload, PayloadType};
use crate::errors::NatseaClientError;
use crate::transport::{NatsMessage, OutboundMessage};

// CodecRegistryBuilder collects codecs before the registry is frozen.
// Registration order is remembered and breaks priority ties.
#[derive(Default)]
pub struct CodecRegistryBuilder {
    codecs: Vec<Arc<dyn MessageCodec>>,
}

impl CodecRegistryBuilder {
    pub fn new() -> Self {
        Self { codecs: Vec::new() }
    }

    // register adds a codec.
    pub fn register<C: MessageCodec + 'static>(self, codec: C) -> Self {
        self.register_shared(Arc::new(codec))
    }

    // register_shared adds a codec that is already shared, e.g. one
    // instance used by several registries.
    pub fn register_shared(mut self, codec: Arc<dyn MessageCodec>) -> Self {
        debug!(
            "Registering codec '{}' with priority {}",
            codec.name(),
            codec.priority()
        );
        self.codecs.push(codec);
        self
    }

    // with_default_codecs registers the raw bytes, string, primitive
    // and JSON codecs.
    pub fn with_default_codecs(self) -> Self {
        self.register(RawBytesCodec)
            .register(StringCodec)
            .register(PrimitiveCodec)
            .register(JsonCodec::default())
    }

    // build freezes the registry. The sort is stable, so codecs with
    // equal priority stay in registration order.
    pub fn build(mut self) -> CodecRegistry {
        self.codecs.sort_by_key(|codec| codec.priority());
        CodecRegistry {
            codecs: self.codecs,
        }
    }
}

// CodecRegistry holds codecs in ascending priority order and
// dispatches encode/decode calls to the first one that supports the
// target type.
pub struct CodecRegistry {
    codecs: Vec<Arc<dyn MessageCodec>>,
}

impl CodecRegistry {
    pub fn builder() -> CodecRegistryBuilder {
        CodecRegistryBuilder::new()
    }

    // with_defaults builds a registry with the default codec set.
    pub fn with_defaults() -> Self {
        Self::builder().with_default_codecs().build()
    }

    // find_codec returns the codec that would handle the target type,
    // if any. Stops at the first codec whose supports() is true.
    pub fn find_codec(&self, target: &PayloadType) -> Option<&Arc<dyn MessageCodec>> {
        self.codecs.iter().find(|codec| codec.supports(target))
    }

    // select is find_codec, failing with NoCodecFound.
    pub fn select(&self, target: &PayloadType) -> Result<&Arc<dyn MessageCodec>, NatseaClientError> {
        match self.find_codec(target) {
            Some(codec) => {
                debug!(
                    "Selected codec '{}' (priority {}) for type '{}'",
                    codec.name(),
                    codec.priority(),
                    target
                );
                Ok(codec)
            }
            None => {
                debug!("No codec supports type '{}'", target);
                Err(NatseaClientError::no_codec_found(target.type_name()))
            }
        }
    }

    // encode serializes a type-erased value. An absent value encodes
    // to an empty payload without consulting any codec.
    pub fn encode(
        &self,
        value: Option<&dyn Any>,
        target: &PayloadType,
    ) -> Result<Vec<u8>, NatseaClientError> {
        let Some(value) = value else {
            return Ok(Vec::new());
        };
        self.select(target)?.encode(value, target)
    }

    // decode deserializes a payload into a type-erased value. An empty
    // payload decodes to None without consulting any codec.
    pub fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Option<Box<dyn Any + Send>>, NatseaClientError> {
        if bytes.is_empty() {
            return Ok(None);
        }
        self.select(target)?.decode(bytes, target).map(Some)
    }

    // encode_value serializes a serde value, routing it by its
    // PayloadType.
    pub fn encode_value<T: NatsPayload>(&self, value: &T) -> Result<Vec<u8>, NatseaClientError> {
        self.encode(Some(value as &dyn Any), &PayloadType::of::<T>())
    }

    // encode_optional is encode_value for a value that may be absent.
    pub fn encode_optional<T: NatsPayload>(
        &self,
        value: Option<&T>,
    ) -> Result<Vec<u8>, NatseaClientError> {
        self.encode(value.map(|v| v as &dyn Any), &PayloadType::of::<T>())
    }

    // decode_value deserializes a payload into a serde value.
    pub fn decode_value<T: NatsPayload>(&self, bytes: &[u8]) -> Result<Option<T>, NatseaClientError> {
        self.decode_as::<T>(bytes, &PayloadType::of::<T>())
    }

    // decode_as deserializes a payload with an explicit descriptor
    // (e.g. PayloadType::protobuf) and downcasts the result to T.
    pub fn decode_as<T: 'static>(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Option<T>, NatseaClientError> {
        let Some(decoded) = self.decode(bytes, target)? else {
            return Ok(None);
        };
        match decoded.downcast::<T>() {
            Ok(value) => Ok(Some(*value)),
            Err(_) => Err(NatseaClientError::decoding_error(
                target.type_name(),
                format!(
                    "codec produced a value that is not a {}",
                    std::any::type_name::<T>()
                ),
            )),
        }
    }

    // encode_message builds an outbound message for subject carrying
    // the encoded value.
    pub fn encode_message<T: NatsPayload>(
        &self,
        subject: impl Into<String>,
        value: &T,
    ) -> Result<OutboundMessage, NatseaClientError> {
        Ok(OutboundMessage::new(subject, self.encode_value(value)?))
    }

    // decode_message deserializes the payload of a received message.
    pub fn decode_message<T: NatsPayload>(
        &self,
        message: &NatsMessage,
    ) -> Result<Option<T>, NatseaClientError> {
        self.decode_value::<T>(message.payload())
    }

    // codecs returns the registered codecs in selection order.
    pub fn codecs(&self) -> &[Arc<dyn MessageCodec>] {
        &self.codecs
    }

    // codec_names returns codec names in selection order. Mostly
    // useful for logging the effective setup at startup.
    pub fn codec_names(&self) -> Vec<&str> {
        self.codecs.iter().map(|codec| codec.name()).collect()
    }

    pub fn codec_count(&self) -> usize {
        self.codecs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codecs.is_empty()
    }

    // supports checks whether any codec can handle the target type.
    pub fn supports(&self, target: &PayloadType) -> bool {
        self.find_codec(target).is_some()
    }
}

impl Default for CodecRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl std::fmt::Debug for CodecRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CodecRegistry")
            .field("codecs", &self.codec_names())
            .finish()
    }
}
