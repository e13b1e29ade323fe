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

// src/codec/traits.rs
// The MessageCodec trait that every payload codec implements.
//
// Codecs are stored in the CodecRegistry as trait objects, so
// values cross this boundary type-erased: encode receives the value
// as &dyn Any, decode hands back a Box<dyn Any + Send> that the
// registry downcasts to the caller's type.

use std::any::Any;

use super::types::PayloadType;
use crate::errors::NatseaClientError;

// MessageCodec is the registration-time contract for codecs.
//
// Example: a codec for a hand-rolled line format.
//
// struct CsvCodec;
//
// impl MessageCodec for CsvCodec {
//     fn name(&self) -> &str { "csv" }
//     fn priority(&self) -> i32 { 120 }
//     fn supports(&self, target: &PayloadType) -> bool { target.is::<CsvRow>() }
//     fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
//         let row = value.downcast_ref::<CsvRow>().ok_or_else(...)?;
//         Ok(row.to_line().into_bytes())
//     }
//     fn decode(&self, bytes: &[u8], target: &PayloadType) -> Result<Box<dyn Any + Send>, NatseaClientError> {
//         Ok(Box::new(CsvRow::parse(bytes)?))
//     }
// }
//
// Usage:
// let registry = CodecRegistry::builder().with_default_codecs().register(CsvCodec).build();
pub trait MessageCodec: Send + Sync {
    // name identifies the codec in logs and introspection.
    fn name(&self) -> &str;

    // priority ranks codecs for selection. Lower values are tried
    // first; equal priorities keep registration order.
    fn priority(&self) -> i32;

    // supports reports whether this codec can handle the target type.
    // It is called on every encode/decode until a codec matches, so
    // it must be cheap and free of side effects.
    fn supports(&self, target: &PayloadType) -> bool;

    // encode turns a value of the target type into bytes.
    fn encode(&self, value: &dyn Any, target: &PayloadType) -> Result<Vec<u8>, NatseaClientError>;

    // decode turns non-empty bytes back into a value of the
    // target type.
    fn decode(
        &self,
        bytes: &[u8],
        target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError>;
}
