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

// src/errors.rs
// Error types for the natsea client library.
//
// Everything the codec registry, the client dispatcher and the
// transports can fail with is folded into NatseaClientError, with
// helpers to categorize errors without matching every variant.

use std::time::Duration;

use thiserror::Error;

use crate::config::ConfigError;

// BoxError is the type-erased cause carried by encoding and
// decoding failures, since every codec wraps a different library.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Error, Debug)]
pub enum NatseaClientError {
    // No registered codec declared support for the requested type.
    #[error("No codec found for type [{0}]")]
    NoCodecFound(String),

    // The selected codec failed to turn a value into bytes. value is
    // the Debug rendering of the offending value, when the codec had one.
    #[error(
        "Error encoding value of type [{type_name}]{}: {source}",
        render_value(.value)
    )]
    EncodingError {
        type_name: String,
        value: Option<String>,
        #[source]
        source: BoxError,
    },

    // The selected codec failed to turn bytes back into a value.
    #[error("Error decoding payload for type [{type_name}]: {source}")]
    DecodingError {
        type_name: String,
        #[source]
        source: BoxError,
    },

    #[error("Invalid subject '{subject}': {reason}")]
    InvalidSubject { subject: String, reason: String },

    #[error("Unknown NATS connection: '{0}'")]
    UnknownConnection(String),

    #[error("No responders available for subject: {0}")]
    NoResponders(String),

    #[error("Request on subject {subject} timed out after {timeout:?}")]
    RequestTimeout { subject: String, timeout: Duration },

    #[error("NATS transport error: {0}")]
    TransportError(String),

    #[error("Configuration error: {0}")]
    ConfigError(#[from] ConfigError),
}

impl NatseaClientError {
    pub fn no_codec_found(type_name: impl Into<String>) -> Self {
        Self::NoCodecFound(type_name.into())
    }

    pub fn encoding_error(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::EncodingError {
            type_name: type_name.into(),
            value: None,
            source: source.into(),
        }
    }

    // encoding_error_with_value also records the rendered value.
    pub fn encoding_error_with_value(
        type_name: impl Into<String>,
        value: Option<String>,
        source: impl Into<BoxError>,
    ) -> Self {
        Self::EncodingError {
            type_name: type_name.into(),
            value: value.map(truncate_value),
            source: source.into(),
        }
    }

    pub fn decoding_error(type_name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::DecodingError {
            type_name: type_name.into(),
            source: source.into(),
        }
    }

    pub fn invalid_subject(subject: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidSubject {
            subject: subject.into(),
            reason: reason.into(),
        }
    }

    pub fn unknown_connection(name: impl Into<String>) -> Self {
        Self::UnknownConnection(name.into())
    }

    pub fn no_responders(subject: impl Into<String>) -> Self {
        Self::NoResponders(subject.into())
    }

    pub fn transport_error(msg: impl Into<String>) -> Self {
        Self::TransportError(msg.into())
    }

    // type_name returns the payload type an encoding, decoding or
    // codec selection error was raised for.
    pub fn type_name(&self) -> Option<&str> {
        match self {
            Self::NoCodecFound(type_name)
            | Self::EncodingError { type_name, .. }
            | Self::DecodingError { type_name, .. } => Some(type_name),
            _ => None,
        }
    }

    // is_codec_error is true when codec selection itself failed,
    // which means a codec registration is missing.
    pub fn is_codec_error(&self) -> bool {
        matches!(self, Self::NoCodecFound(_))
    }

    pub fn is_serialization_error(&self) -> bool {
        matches!(self, Self::EncodingError { .. })
    }

    pub fn is_deserialization_error(&self) -> bool {
        matches!(self, Self::DecodingError { .. })
    }

    // is_data_error covers failures caused by the value or bytes
    // handed to a codec, as opposed to the registry setup.
    pub fn is_data_error(&self) -> bool {
        self.is_serialization_error() || self.is_deserialization_error()
    }

    pub fn is_subject_error(&self) -> bool {
        matches!(self, Self::InvalidSubject { .. })
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            Self::NoResponders(_) | Self::RequestTimeout { .. } | Self::TransportError(_)
        )
    }

    pub fn is_configuration_error(&self) -> bool {
        matches!(
            self,
            Self::NoCodecFound(_) | Self::UnknownConnection(_) | Self::ConfigError(_)
        )
    }
}

impl Default for NatseaClientError {
    fn default() -> Self {
        Self::NoCodecFound("unknown".to_string())
    }
}

// MAX_RENDERED_VALUE bounds how much of a value ends up in an
// error message.
const MAX_RENDERED_VALUE: usize = 256;

fn truncate_value(mut value: String) -> String {
    if value.len() > MAX_RENDERED_VALUE {
        let mut end = MAX_RENDERED_VALUE;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        value.truncate(end);
        value.push_str("...");
    }
    value
}

fn render_value(value: &Option<String>) -> String {
    match value {
        Some(value) => format!(" (value: {value})"),
        None => String::new(),
    }
}

// no_codec_found_error builds a NoCodecFound error for a Rust type.
pub fn no_codec_found_error<T: 'static>() -> NatseaClientError {
    NatseaClientError::NoCodecFound(std::any::type_name::<T>().to_string())
}
