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

// src/codec/types.rs
// Payload type descriptors used to select and drive codecs.
//
// A PayloadType is the target type argument of every encode and
// decode call. It is built from a concrete Rust type, and captures
// type-erased bridges (serde, prost) at that point so that codecs
// stored as trait objects can still work with the concrete type.

use std::any::{Any, TypeId};
use std::fmt;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::errors::BoxError;

// NatsPayload is the bound for values that can go through the
// serde-backed codecs. It is blanket implemented, so any type
// deriving Debug, Serialize and Deserialize qualifies.
pub trait NatsPayload: Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static {}

impl<T> NatsPayload for T where T: Serialize + DeserializeOwned + fmt::Debug + Send + Sync + 'static {}

// WireKind classifies a payload type. Everything except Structured
// is a "basic" wire type, handled by a dedicated codec ahead of
// the generic JSON fallback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WireKind {
    // Vec<u8>, passed through untouched.
    Bytes,
    // String, carried as UTF-8.
    String,
    Bool,
    Char,
    // i8 through i128, u8 through u128, isize and usize.
    Integer,
    // f32 and f64.
    Float,
    // Anything else.
    Structured,
}

impl WireKind {
    pub fn is_basic(self) -> bool {
        !matches!(self, Self::Structured)
    }

    // is_primitive is true for the kinds rendered as text by the
    // primitive codec.
    pub fn is_primitive(self) -> bool {
        matches!(self, Self::Bool | Self::Char | Self::Integer | Self::Float)
    }

    // classify maps a TypeId onto its WireKind. The set of basic
    // types is closed: a type is basic only if it is listed here.
    pub fn classify(type_id: TypeId) -> Self {
        if type_id == TypeId::of::<Vec<u8>>() {
            return Self::Bytes;
        }
        if type_id == TypeId::of::<String>() {
            return Self::String;
        }
        if type_id == TypeId::of::<bool>() {
            return Self::Bool;
        }
        if type_id == TypeId::of::<char>() {
            return Self::Char;
        }

        let integers = [
            TypeId::of::<i8>(),
            TypeId::of::<i16>(),
            TypeId::of::<i32>(),
            TypeId::of::<i64>(),
            TypeId::of::<i128>(),
            TypeId::of::<isize>(),
            TypeId::of::<u8>(),
            TypeId::of::<u16>(),
            TypeId::of::<u32>(),
            TypeId::of::<u64>(),
            TypeId::of::<u128>(),
            TypeId::of::<usize>(),
        ];
        if integers.contains(&type_id) {
            return Self::Integer;
        }

        if type_id == TypeId::of::<f32>() || type_id == TypeId::of::<f64>() {
            return Self::Float;
        }

        Self::Structured
    }
}

// SerdeBridge carries serde functions monomorphized for the concrete
// payload type, so the serde-backed codecs (JSON, YAML) write and read
// T directly. Output is exactly what serde_json or serde_yaml produce
// for T, including field order and 128-bit integers.
#[derive(Clone, Copy)]
pub struct SerdeBridge {
    to_json: fn(&dyn Any, bool) -> Result<Vec<u8>, BoxError>,
    from_json: fn(&[u8]) -> Result<Box<dyn Any + Send>, BoxError>,
    to_yaml: fn(&dyn Any) -> Result<Vec<u8>, BoxError>,
    from_yaml: fn(&[u8]) -> Result<Box<dyn Any + Send>, BoxError>,
    describe: fn(&dyn Any) -> Option<String>,
}

impl SerdeBridge {
    pub fn of<T: NatsPayload>() -> Self {
        Self {
            to_json: serde_to_json::<T>,
            from_json: serde_from_json::<T>,
            to_yaml: serde_to_yaml::<T>,
            from_yaml: serde_from_yaml::<T>,
            describe: debug_value::<T>,
        }
    }

    // to_json writes the value as JSON, indented when pretty is set.
    pub fn to_json(&self, value: &dyn Any, pretty: bool) -> Result<Vec<u8>, BoxError> {
        (self.to_json)(value, pretty)
    }

    pub fn from_json(&self, bytes: &[u8]) -> Result<Box<dyn Any + Send>, BoxError> {
        (self.from_json)(bytes)
    }

    pub fn to_yaml(&self, value: &dyn Any) -> Result<Vec<u8>, BoxError> {
        (self.to_yaml)(value)
    }

    pub fn from_yaml(&self, bytes: &[u8]) -> Result<Box<dyn Any + Send>, BoxError> {
        (self.from_yaml)(bytes)
    }

    // describe renders the value with Debug, for error messages.
    pub fn describe(&self, value: &dyn Any) -> Option<String> {
        (self.describe)(value)
    }
}

fn debug_value<T: NatsPayload>(value: &dyn Any) -> Option<String> {
    value.downcast_ref::<T>().map(|value| format!("{value:?}"))
}

fn serde_to_json<T: NatsPayload>(value: &dyn Any, pretty: bool) -> Result<Vec<u8>, BoxError> {
    let value = value
        .downcast_ref::<T>()
        .ok_or_else(type_mismatch::<T>)?;
    let bytes = if pretty {
        serde_json::to_vec_pretty(value)?
    } else {
        serde_json::to_vec(value)?
    };
    Ok(bytes)
}

fn serde_from_json<T: NatsPayload>(bytes: &[u8]) -> Result<Box<dyn Any + Send>, BoxError> {
    let decoded: T = serde_json::from_slice(bytes)?;
    Ok(Box::new(decoded))
}

fn serde_to_yaml<T: NatsPayload>(value: &dyn Any) -> Result<Vec<u8>, BoxError> {
    let value = value
        .downcast_ref::<T>()
        .ok_or_else(type_mismatch::<T>)?;
    Ok(serde_yaml::to_string(value)?.into_bytes())
}

fn serde_from_yaml<T: NatsPayload>(bytes: &[u8]) -> Result<Box<dyn Any + Send>, BoxError> {
    let decoded: T = serde_yaml::from_slice(bytes)?;
    Ok(Box::new(decoded))
}

// ProtobufBridge encodes and decodes a type-erased prost message.
#[derive(Clone, Copy)]
pub struct ProtobufBridge {
    encode: fn(&dyn Any) -> Result<Vec<u8>, BoxError>,
    decode: fn(&[u8]) -> Result<Box<dyn Any + Send>, BoxError>,
}

impl ProtobufBridge {
    fn of<T: prost::Message + Default + 'static>() -> Self {
        Self {
            encode: prost_encode::<T>,
            decode: prost_decode::<T>,
        }
    }

    pub fn encode(&self, value: &dyn Any) -> Result<Vec<u8>, BoxError> {
        (self.encode)(value)
    }

    pub fn decode(&self, bytes: &[u8]) -> Result<Box<dyn Any + Send>, BoxError> {
        (self.decode)(bytes)
    }
}

fn prost_encode<T: prost::Message + 'static>(value: &dyn Any) -> Result<Vec<u8>, BoxError> {
    let value = value
        .downcast_ref::<T>()
        .ok_or_else(type_mismatch::<T>)?;
    Ok(value.encode_to_vec())
}

fn prost_decode<T: prost::Message + Default + 'static>(
    bytes: &[u8],
) -> Result<Box<dyn Any + Send>, BoxError> {
    Ok(Box::new(T::decode(bytes)?))
}

fn type_mismatch<T>() -> BoxError {
    format!("value is not a {}", std::any::type_name::<T>()).into()
}

// PayloadType describes the target type of an encode or decode
// call: its name (for diagnostics), its TypeId, its WireKind, and
// whichever bridges the type was built with.
#[derive(Clone)]
pub struct PayloadType {
    type_name: &'static str,
    type_id: TypeId,
    kind: WireKind,
    serde: Option<SerdeBridge>,
    protobuf: Option<ProtobufBridge>,
}

impl PayloadType {
    // of describes a serde type. Basic types (String, u32, ...)
    // go through here too; their kind routes them to the basic
    // codecs.
    pub fn of<T: NatsPayload>() -> Self {
        Self {
            serde: Some(SerdeBridge::of::<T>()),
            ..Self::opaque::<T>()
        }
    }

    // protobuf describes a prost message type.
    pub fn protobuf<T: prost::Message + Default + 'static>() -> Self {
        Self {
            protobuf: Some(ProtobufBridge::of::<T>()),
            ..Self::opaque::<T>()
        }
    }

    // protobuf_with_serde describes a type that is both a prost
    // message and a serde type, so either codec family can take it.
    pub fn protobuf_with_serde<T: prost::Message + Default + NatsPayload>() -> Self {
        Self {
            serde: Some(SerdeBridge::of::<T>()),
            protobuf: Some(ProtobufBridge::of::<T>()),
            ..Self::opaque::<T>()
        }
    }

    // opaque describes a type without any bridge. Only custom
    // codecs that downcast the value themselves can handle it.
    pub fn opaque<T: Send + 'static>() -> Self {
        let type_id = TypeId::of::<T>();
        Self {
            type_name: std::any::type_name::<T>(),
            type_id,
            kind: WireKind::classify(type_id),
            serde: None,
            protobuf: None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    pub fn kind(&self) -> WireKind {
        self.kind
    }

    pub fn is_basic(&self) -> bool {
        self.kind.is_basic()
    }

    // is checks whether this descriptor was built for T.
    pub fn is<T: 'static>(&self) -> bool {
        self.type_id == TypeId::of::<T>()
    }

    pub fn serde_bridge(&self) -> Option<&SerdeBridge> {
        self.serde.as_ref()
    }

    pub fn protobuf_bridge(&self) -> Option<&ProtobufBridge> {
        self.protobuf.as_ref()
    }
}

impl PartialEq for PayloadType {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for PayloadType {}

impl fmt::Debug for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PayloadType")
            .field("type_name", &self.type_name)
            .field("kind", &self.kind)
            .field("serde", &self.serde.is_some())
            .field("protobuf", &self.protobuf.is_some())
            .finish()
    }
}

impl fmt::Display for PayloadType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}
