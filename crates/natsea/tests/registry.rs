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

// tests/registry.rs
// Unit tests for CodecRegistry: priority ordering, absent/empty
// short-circuits, codec selection failures and introspection.

use std::any::Any;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use natsea::codec::{
    CodecRegistry, JsonCodec, MessageCodec, PayloadType, PrimitiveCodec, RawBytesCodec,
    StringCodec, YamlCodec,
};
use natsea::errors::NatseaClientError;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct CatInfo {
    name: String,
    age: u8,
    indoor: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
struct Burrow {
    a: i32,
}

// SpyCodec claims every type and counts how often it is used. It
// encodes everything as its own tag so tests can tell which codec won.
struct SpyCodec {
    tag: &'static str,
    priority: i32,
    supports_calls: Arc<AtomicUsize>,
    encode_calls: Arc<AtomicUsize>,
    decode_calls: Arc<AtomicUsize>,
}

impl SpyCodec {
    fn new(tag: &'static str, priority: i32) -> Self {
        Self {
            tag,
            priority,
            supports_calls: Arc::new(AtomicUsize::new(0)),
            encode_calls: Arc::new(AtomicUsize::new(0)),
            decode_calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn total_calls(&self) -> usize {
        self.supports_calls.load(Ordering::SeqCst)
            + self.encode_calls.load(Ordering::SeqCst)
            + self.decode_calls.load(Ordering::SeqCst)
    }
}

impl MessageCodec for SpyCodec {
    fn name(&self) -> &str {
        self.tag
    }

    fn priority(&self) -> i32 {
        self.priority
    }

    fn supports(&self, _target: &PayloadType) -> bool {
        self.supports_calls.fetch_add(1, Ordering::SeqCst);
        true
    }

    fn encode(&self, _value: &dyn Any, _target: &PayloadType) -> Result<Vec<u8>, NatseaClientError> {
        self.encode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.tag.as_bytes().to_vec())
    }

    fn decode(
        &self,
        bytes: &[u8],
        _target: &PayloadType,
    ) -> Result<Box<dyn Any + Send>, NatseaClientError> {
        self.decode_calls.fetch_add(1, Ordering::SeqCst);
        Ok(Box::new(String::from_utf8_lossy(bytes).to_string()))
    }
}

fn shared_spy(tag: &'static str, priority: i32) -> Arc<SpyCodec> {
    Arc::new(SpyCodec::new(tag, priority))
}

// Tests for registry creation and introspection
#[test]
fn test_empty_registry() {
    let registry = CodecRegistry::builder().build();
    assert!(registry.is_empty());
    assert_eq!(registry.codec_count(), 0);
    assert!(!registry.supports(&PayloadType::of::<String>()));
}

#[test]
fn test_default_registry_codecs_in_priority_order() {
    let registry = CodecRegistry::with_defaults();
    assert_eq!(registry.codec_count(), 4);
    assert_eq!(
        registry.codec_names(),
        vec!["raw", "string", "primitive", "json"]
    );

    let default_registry = CodecRegistry::default();
    assert_eq!(default_registry.codec_names(), registry.codec_names());
}

#[test]
fn test_registration_order_does_not_affect_priority() {
    let registry = CodecRegistry::builder()
        .register(JsonCodec::default())
        .register(YamlCodec::new())
        .register(PrimitiveCodec)
        .register(StringCodec)
        .register(RawBytesCodec)
        .build();
    assert_eq!(
        registry.codec_names(),
        vec!["raw", "string", "primitive", "json", "yaml"]
    );
}

#[test]
fn test_lower_priority_number_wins() {
    let high = shared_spy("high", 200);
    let low = shared_spy("low", 100);
    // Registered high first, so order alone would pick it.
    let registry = CodecRegistry::builder()
        .register_shared(high.clone())
        .register_shared(low.clone())
        .build();

    let bytes = registry.encode_value(&"fox".to_string()).unwrap();
    assert_eq!(bytes, b"low");
    assert_eq!(low.encode_calls.load(Ordering::SeqCst), 1);
    assert_eq!(high.encode_calls.load(Ordering::SeqCst), 0);
    assert_eq!(registry.codec_names(), vec!["low", "high"]);
}

#[test]
fn test_equal_priority_first_registered_wins() {
    let first = shared_spy("first", 100);
    let second = shared_spy("second", 100);
    let registry = CodecRegistry::builder()
        .register_shared(first.clone())
        .register_shared(second.clone())
        .build();

    let bytes = registry.encode_value(&Burrow { a: 1 }).unwrap();
    assert_eq!(bytes, b"first");
    assert_eq!(second.total_calls(), 0);

    let codec = registry.find_codec(&PayloadType::of::<Burrow>()).unwrap();
    assert_eq!(codec.name(), "first");
}

// Tests for absent values and empty payloads
#[test]
fn test_absent_value_encodes_to_empty_without_codec() {
    let spy = shared_spy("spy", 10);
    let registry = CodecRegistry::builder().register_shared(spy.clone()).build();

    let bytes = registry
        .encode(None, &PayloadType::of::<CatInfo>())
        .unwrap();
    assert!(bytes.is_empty());

    let bytes = registry.encode_optional::<CatInfo>(None).unwrap();
    assert!(bytes.is_empty());
    assert_eq!(spy.total_calls(), 0);
}

#[test]
fn test_empty_payload_decodes_to_none_without_codec() {
    let spy = shared_spy("spy", 10);
    let registry = CodecRegistry::builder().register_shared(spy.clone()).build();

    let decoded = registry.decode(&[], &PayloadType::of::<CatInfo>()).unwrap();
    assert!(decoded.is_none());

    let decoded = registry.decode_value::<String>(&[]).unwrap();
    assert!(decoded.is_none());
    assert_eq!(spy.total_calls(), 0);
}

#[test]
fn test_absent_and_empty_on_empty_registry() {
    // No codec at all, but absent/empty never needs one.
    let registry = CodecRegistry::builder().build();
    assert!(registry.encode_optional::<CatInfo>(None).unwrap().is_empty());
    assert!(registry.decode_value::<CatInfo>(b"").unwrap().is_none());
}

// Tests for codec selection failures
#[test]
fn test_no_codec_found_on_encode() {
    let registry = CodecRegistry::builder().build();
    let err = registry.encode_value(&Burrow { a: 1 }).unwrap_err();

    assert!(matches!(err, NatseaClientError::NoCodecFound(_)));
    assert!(err.is_codec_error());
    assert!(err.type_name().unwrap().contains("Burrow"));
}

#[test]
fn test_no_codec_found_on_decode() {
    let registry = CodecRegistry::builder().build();
    let err = registry.decode_value::<CatInfo>(b"{}").unwrap_err();
    assert!(matches!(err, NatseaClientError::NoCodecFound(_)));
}

#[test]
fn test_string_with_json_only_registry_has_no_codec() {
    let registry = CodecRegistry::builder()
        .register(JsonCodec::default())
        .build();

    let err = registry.encode_value(&"raw".to_string()).unwrap_err();
    assert!(err.is_codec_error());
    assert!(err.to_string().contains("String"));

    let err = registry.encode_value(&42u32).unwrap_err();
    assert!(err.is_codec_error());
}

#[test]
fn test_opaque_type_without_custom_codec() {
    struct Opaque;
    let registry = CodecRegistry::with_defaults();
    let target = PayloadType::opaque::<Opaque>();

    assert!(!registry.supports(&target));
    assert!(registry.select(&target).is_err());
    let err = registry.encode(Some(&Opaque as &dyn Any), &target).unwrap_err();
    assert!(err.is_codec_error());
}

// Tests for routing through the default codec set
#[test]
fn test_default_codec_routing() {
    let registry = CodecRegistry::with_defaults();

    let name = |target: PayloadType| registry.find_codec(&target).unwrap().name().to_string();
    assert_eq!(name(PayloadType::of::<Vec<u8>>()), "raw");
    assert_eq!(name(PayloadType::of::<String>()), "string");
    assert_eq!(name(PayloadType::of::<u64>()), "primitive");
    assert_eq!(name(PayloadType::of::<bool>()), "primitive");
    assert_eq!(name(PayloadType::of::<char>()), "primitive");
    assert_eq!(name(PayloadType::of::<f32>()), "primitive");
    assert_eq!(name(PayloadType::of::<CatInfo>()), "json");
    assert_eq!(name(PayloadType::of::<Vec<CatInfo>>()), "json");
}

#[test]
fn test_json_round_trip_through_registry() {
    let registry = CodecRegistry::with_defaults();
    let bytes = registry.encode_value(&Burrow { a: 1 }).unwrap();
    assert_eq!(bytes, br#"{"a":1}"#);

    let decoded: Option<Burrow> = registry.decode_value(br#"{"a":1}"#).unwrap();
    assert_eq!(decoded, Some(Burrow { a: 1 }));
}

#[test]
fn test_basic_types_travel_unwrapped() {
    let registry = CodecRegistry::with_defaults();
    assert_eq!(registry.encode_value(&"otter".to_string()).unwrap(), b"otter");
    assert_eq!(registry.encode_value(&vec![0u8, 159, 146]).unwrap(), vec![0, 159, 146]);
    assert_eq!(registry.encode_value(&42i64).unwrap(), b"42");
    assert_eq!(registry.encode_value(&true).unwrap(), b"true");

    assert_eq!(
        registry.decode_value::<String>(b"otter").unwrap(),
        Some("otter".to_string())
    );
    assert_eq!(registry.decode_value::<i64>(b"-7").unwrap(), Some(-7));
}

#[test]
fn test_decode_as_with_wrong_type_is_decoding_error() {
    let registry = CodecRegistry::with_defaults();
    let err = registry
        .decode_as::<u32>(b"otter", &PayloadType::of::<String>())
        .unwrap_err();
    assert!(err.is_deserialization_error());
}

#[test]
fn test_yaml_preferred_when_ranked_ahead_of_json() {
    let registry = CodecRegistry::builder()
        .with_default_codecs()
        .register(YamlCodec::with_priority(190))
        .build();
    assert_eq!(
        registry.find_codec(&PayloadType::of::<CatInfo>()).unwrap().name(),
        "yaml"
    );

    let cat = CatInfo {
        name: "Whiskers".to_string(),
        age: 3,
        indoor: true,
    };
    let bytes = registry.encode_value(&cat).unwrap();
    assert!(String::from_utf8(bytes.clone()).unwrap().contains("name: Whiskers"));
    assert_eq!(registry.decode_value::<CatInfo>(&bytes).unwrap(), Some(cat));
}

#[test]
fn test_registry_debug_lists_codecs() {
    let registry = CodecRegistry::with_defaults();
    let debug = format!("{registry:?}");
    assert!(debug.contains("json"));
    assert!(debug.contains("raw"));
}

#[test]
fn test_encode_and_decode_messages() {
    let registry = CodecRegistry::with_defaults();
    let message = registry
        .encode_message("zoo.burrows", &Burrow { a: 5 })
        .unwrap();
    assert_eq!(message.subject, "zoo.burrows");
    assert_eq!(message.payload, br#"{"a":5}"#);

    let received = natsea::transport::NatsMessage::from(message);
    let decoded: Option<Burrow> = registry.decode_message(&received).unwrap();
    assert_eq!(decoded, Some(Burrow { a: 5 }));

    let empty = natsea::transport::NatsMessage::new("zoo.burrows", Vec::new());
    assert_eq!(registry.decode_message::<Burrow>(&empty).unwrap(), None);
}
