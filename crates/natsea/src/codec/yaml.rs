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

// src/codec/yaml.rs
// YAML codec for serde types.
//
// Claims the same types as JsonCodec. It is not part of the
// default set; register it with a priority below 200 to make YAML
// the preferred format for structured payloads, or above to keep it
// as a fallback that never wins.

use std::any::Any;

use super::traits::MessageCodec;
use super::types::PayloadType;
use crate::errors::NatseaClientError;

#[derive(Clone, Copy, Debug)]
pub struct YamlCodec {
    priority: i32,
}

impl YamlCodec {
    pub const ORDER: i32 = 250;

    pub fn new() -> Self {
        Self {
            priority: Self::ORDER,
        }
    }

    // with_priority overrides the default priority.
    pub fn with_priority(priority: i32) -> Self {
        Self { priority }
    }
}

impl Default for YamlCodec {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageCodec for YamlCodec {
    fn name(&self) -> &str {
        "yaml"
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, target: &PayloadType) -> bool {
        !target.is_basic() && target.serde_bridge().is_some()
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        let bridge = target.serde_bridge().ok_or_else(|| {
            NatseaClientError::encoding_error(target.type_name(), "type has no serde bridge")
        })?;
        bridge.to_yaml(value).map_err(|e| {
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
        let bridge = target.serde_bridge().ok_or_else(|| {
            NatseaClientError::decoding_error(target.type_name(), "type has no serde bridge")
        })?;
        bridge
            .from_yaml(bytes)
            .map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))
    }
}
