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

// tests/errors.rs
// Unit tests for NatseaClientError creation, messages and
// categorization.

use std::time::Duration;

use natsea::config::ConfigError;
use natsea::errors::{NatseaClientError, no_codec_found_error};

fn create_test_json_error() -> serde_json::Error {
    serde_json::from_str::<i32>("not a number").unwrap_err()
}

fn create_test_yaml_error() -> serde_yaml::Error {
    serde_yaml::from_str::<i32>("{ invalid: yaml: }}}").unwrap_err()
}

struct Gerbil;

// Tests for error creation
#[test]
fn test_no_codec_found_error() {
    let err = no_codec_found_error::<Gerbil>();
    assert!(matches!(err, NatseaClientError::NoCodecFound(_)));
    assert!(err.to_string().starts_with("No codec found for type ["));
    assert!(err.to_string().contains("Gerbil"));
    assert!(err.type_name().unwrap().ends_with("Gerbil"));
}

#[test]
fn test_encoding_error_keeps_source() {
    let err = NatseaClientError::encoding_error("zoo::Gerbil", create_test_json_error());

    assert!(err.is_serialization_error());
    assert!(!err.is_deserialization_error());
    assert!(err.is_data_error());
    assert_eq!(err.type_name(), Some("zoo::Gerbil"));
    assert!(
        err.to_string()
            .starts_with("Error encoding value of type [zoo::Gerbil]:")
    );

    let source = std::error::Error::source(&err).unwrap();
    assert!(source.to_string().contains("expected"));
}

#[test]
fn test_encoding_error_with_value() {
    let err = NatseaClientError::encoding_error_with_value(
        "zoo::Gerbil",
        Some("Gerbil { name: \"Pip\" }".to_string()),
        create_test_json_error(),
    );

    assert!(err.is_serialization_error());
    assert!(err.to_string().starts_with(
        "Error encoding value of type [zoo::Gerbil] (value: Gerbil { name: \"Pip\" }):"
    ));

    // Without a value the message matches encoding_error.
    let bare = NatseaClientError::encoding_error_with_value(
        "zoo::Gerbil",
        None,
        create_test_json_error(),
    );
    assert!(
        bare.to_string()
            .starts_with("Error encoding value of type [zoo::Gerbil]:")
    );
}

#[test]
fn test_encoding_error_truncates_long_values() {
    let long_value = "ü".repeat(1000);
    let err = NatseaClientError::encoding_error_with_value(
        "zoo::Gerbil",
        Some(long_value.clone()),
        create_test_json_error(),
    );

    let NatseaClientError::EncodingError { value, .. } = &err else {
        panic!("expected EncodingError, got {err:?}");
    };
    let value = value.as_deref().unwrap();
    assert!(value.ends_with("..."));
    assert!(value.len() < long_value.len());
    assert!(value.len() <= 256 + "...".len());
}

#[test]
fn test_decoding_error_from_yaml() {
    let err = NatseaClientError::decoding_error("zoo::Gerbil", create_test_yaml_error());
    assert!(err.is_deserialization_error());
    assert!(!err.is_serialization_error());
    assert!(
        err.to_string()
            .starts_with("Error decoding payload for type [zoo::Gerbil]:")
    );
}

#[test]
fn test_decoding_error_from_message() {
    let err = NatseaClientError::decoding_error("u8", "number too large");
    assert_eq!(
        err.to_string(),
        "Error decoding payload for type [u8]: number too large"
    );
}

#[test]
fn test_invalid_subject_error() {
    let err = NatseaClientError::invalid_subject("orders..created", "empty token");
    assert!(err.is_subject_error());
    assert!(!err.is_transport_error());
    assert_eq!(
        err.to_string(),
        "Invalid subject 'orders..created': empty token"
    );
    assert_eq!(err.type_name(), None);
}

#[test]
fn test_transport_errors() {
    let no_responders = NatseaClientError::no_responders("inventory.lookup");
    assert!(no_responders.is_transport_error());
    assert!(no_responders.to_string().contains("inventory.lookup"));

    let timeout = NatseaClientError::RequestTimeout {
        subject: "inventory.lookup".to_string(),
        timeout: Duration::from_millis(250),
    };
    assert!(timeout.is_transport_error());
    assert!(timeout.to_string().contains("250ms"));

    let transport = NatseaClientError::transport_error("connection reset");
    assert!(transport.is_transport_error());
    assert_eq!(transport.to_string(), "NATS transport error: connection reset");
}

#[test]
fn test_configuration_errors() {
    let unknown = NatseaClientError::unknown_connection("telemetry");
    assert!(unknown.is_configuration_error());
    assert_eq!(unknown.to_string(), "Unknown NATS connection: 'telemetry'");

    let config = NatseaClientError::from(ConfigError::NoServers("orders".to_string()));
    assert!(matches!(config, NatseaClientError::ConfigError(_)));
    assert!(config.is_configuration_error());
    assert!(config.to_string().contains("orders"));

    assert!(no_codec_found_error::<Gerbil>().is_configuration_error());
    assert!(!NatseaClientError::no_responders("x").is_configuration_error());
}

#[test]
fn test_categories_are_exclusive_for_data_errors() {
    let err = NatseaClientError::decoding_error("x", "bad");
    assert!(!err.is_codec_error());
    assert!(!err.is_transport_error());
    assert!(!err.is_subject_error());
    assert!(!err.is_configuration_error());
}

#[test]
fn test_default_error() {
    let err = NatseaClientError::default();
    assert!(err.is_codec_error());
    assert_eq!(err.to_string(), "No codec found for type [unknown]");
}

#[test]
fn test_error_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync + 'static>() {}
    assert_send_sync::<NatseaClientError>();
}
