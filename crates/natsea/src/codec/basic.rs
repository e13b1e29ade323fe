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

// src/codec/basic.rs
// Codecs for the basic wire types.
//
// These sit ahead of the JSON fallback (lower priority numbers) so
// that strings, byte buffers and primitives travel as-is instead of
// being wrapped in JSON quoting.

use std::any::{Any, TypeId};

use super::traits::MessageCodec;
use super::types::{PayloadType, WireKind};
use crate::errors::{BoxError, NatseaClientError};

fn downcast<'a, T: 'static>(
    value: &'a dyn Any,
    target: &PayloadType,
) -> Result<&'a T, NatseaClientError> {
    value.downcast_ref::<T>().ok_or_else(|| {
        NatseaClientError::encoding_error(
            target.type_name(),
            format!("value is not a {}", std::any::type_name::<T>()),
        )
    })
}

// RawBytesCodec passes Vec<u8> payloads through untouched.
#[derive(Clone, Copy, Debug, Default)]
pub struct RawBytesCodec;

impl RawBytesCodec {
    pub const ORDER: i32 = 50;
}

impl MessageCodec for RawBytesCodec {
    fn name(&self) -> &str {
        "raw"
    }

    fn priority(&self) -> i32 {
        Self::ORDER
    }

    fn supports(&self, target: &PayloadType) -> bool {
        target.kind() == WireKind::Bytes
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        Ok(downcast::<Vec<u8>>(value, target)?.clone())
    }

    fn decode(
        &self,
        bytes: &[u8],
        _target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        Ok(Box::new(bytes.to_vec()))
    }
}

// StringCodec sends String payloads as their UTF-8 bytes.
#[derive(Clone, Copy, Debug, Default)]
pub struct StringCodec;

impl StringCodec {
    pub const ORDER: i32 = 100;
}

impl MessageCodec for StringCodec {
    fn name(&self) -> &str {
        "string"
    }

    fn priority(&self) -> i32 {
        Self::ORDER
    }

    fn supports(&self, target: &PayloadType) -> bool {
        target.kind() == WireKind::String
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        Ok(downcast::<String>(value, target)?.as_bytes().to_vec())
    }

    fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        let content = String::from_utf8(bytes.to_vec())
            .map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))?;
        Ok(Box::new(content))
    }
}

// PrimitiveCodec sends numbers, bools and chars as their textual
// representation, e.g. 42u32 travels as the two bytes "42".
#[derive(Clone, Copy, Debug, Default)]
pub struct PrimitiveCodec;

impl PrimitiveCodec {
    pub const ORDER: i32 = 150;
}

// render_primitive formats any of the primitive types as text.
fn render_primitive(value: &dyn Any) -> Option<String> {
    macro_rules! try_render {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(v) = value.downcast_ref::<$ty>() {
                    return Some(v.to_string());
                }
            )*
        };
    }

    try_render!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    );
    None
}

// parse_primitive parses text into the primitive type identified by
// type_id. Returns None when type_id is not a primitive type.
fn parse_primitive(text: &str, type_id: TypeId) -> Option<Result<Box<dyn Any + Send>, BoxError>> {
    macro_rules! try_parse {
        ($($ty:ty),* $(,)?) => {
            $(
                if type_id == TypeId::of::<$ty>() {
                    return Some(
                        text.parse::<$ty>()
                            .map(|v| Box::new(v) as Box<dyn Any + Send>)
                            .map_err(|e| Box::new(e) as BoxError),
                    );
                }
            )*
        };
    }

    try_parse!(
        bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
    );
    None
}

impl MessageCodec for PrimitiveCodec {
    fn name(&self) -> &str {
        "primitive"
    }

    fn priority(&self) -> i32 {
        Self::ORDER
    }

    fn supports(&self, target: &PayloadType) -> bool {
        target.kind().is_primitive()
    }

    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        render_primitive(value)
            .map(String::into_bytes)
            .ok_or_else(|| {
                NatseaClientError::encoding_error(target.type_name(), "value is not a primitive")
            })
    }

    fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        let text = std::str::from_utf8(bytes)
            .map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))?;

        // Surrounding whitespace is not part of the value.
        match parse_primitive(text.trim(), target.type_id()) {
            Some(result) => {
                result.map_err(|e| NatseaClientError::decoding_error(target.type_name(), e))
            }
            None => Err(NatseaClientError::decoding_error(
                target.type_name(),
                "not a primitive type",
            )),
        }
    }
}
