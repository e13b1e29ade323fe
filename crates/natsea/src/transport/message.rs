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

// src/transport/message.rs
// NATS message envelopes exchanged with transports.
//
// OutboundMessage is what the client dispatcher hands to a
// transport; NatsMessage is what comes back (request replies, or
// deliveries to subscribers). Payloads are never modified once a
// message is built.

use std::collections::BTreeMap;

// Headers are NATS message headers. A BTreeMap keeps them in a
// stable order for logging and comparisons.
pub type Headers = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutboundMessage {
    // subject is the NATS subject the message is published to.
    pub subject: String,
    // headers are sent along with the payload; empty means the
    // message is sent without a header block.
    pub headers: Headers,
    // payload contains the encoded message bytes.
    pub payload: Vec<u8>,
}

impl OutboundMessage {
    pub fn new(subject: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            subject: subject.into(),
            headers: Headers::new(),
            payload,
        }
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.extend(headers);
        self
    }

    pub fn payload_size(&self) -> usize {
        self.payload.len()
    }
}

// NatsMessage is a message received from a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NatsMessage {
    pub subject: String,
    // reply is the inbox subject a responder should answer on.
    pub reply: Option<String>,
    pub headers: Headers,
    pub payload: Vec<u8>,
}

impl NatsMessage {
    pub fn new(subject: impl Into<String>, payload: Vec<u8>) -> Self {
        Self {
            subject: subject.into(),
            reply: None,
            headers: Headers::new(),
            payload,
        }
    }

    pub fn with_reply(mut self, reply: impl Into<String>) -> Self {
        self.reply = Some(reply.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers = headers;
        self
    }

    // payload returns the raw message bytes.
    pub fn payload(&self) -> &[u8] {
        &self.payload
    }

    pub fn header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.payload.is_empty()
    }
}

impl From<OutboundMessage> for NatsMessage {
    fn from(message: OutboundMessage) -> Self {
        Self {
            subject: message.subject,
            reply: None,
            headers: message.headers,
            payload: message.payload,
        }
    }
}
