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

// src/transport/memory.rs
// In-process NATS transport.
//
// InMemoryTransport behaves like a single NATS server shared by
// everyone holding it: published messages are recorded, delivered
// to matching subscriptions (with NATS '*' and '>' wildcards), and
// requests are answered by responders registered per subject. It
// backs the tests and the example binary.
//
// The record of published messages is bounded. Once it holds
// record_limit messages the oldest one is dropped for each new one.

use std::collections::{HashMap, VecDeque};
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use async_trait::async_trait;
use regex::Regex;
use tokio::sync::{Mutex, RwLock, mpsc};
use tracing::{debug, warn};

use super::message::{NatsMessage, OutboundMessage};
use crate::errors::NatseaClientError;
use crate::traits::NatsTransport;

// Responder answers a request with the reply payload. An empty
// payload is a valid (empty) reply.
pub type Responder = Arc<dyn Fn(&NatsMessage) -> Vec<u8> + Send + Sync>;

// Subscription pairs a compiled subject pattern with the channel
// matching messages are delivered to.
struct Subscription {
    pattern: String,
    regex: Regex,
    sender: mpsc::UnboundedSender<NatsMessage>,
}

// DEFAULT_RECORD_LIMIT is how many published messages are kept
// unless with_record_limit says otherwise.
pub const DEFAULT_RECORD_LIMIT: usize = 10_000;

pub struct InMemoryTransport {
    // published stores the most recent messages in publish order.
    published: Mutex<VecDeque<OutboundMessage>>,
    // record_limit caps published. Zero disables recording.
    record_limit: usize,
    subscriptions: RwLock<Vec<Subscription>>,
    // responders maps exact request subjects to their responder.
    responders: RwLock<HashMap<String, Responder>>,
    // inbox_counter numbers reply inboxes.
    inbox_counter: AtomicU64,
}

impl Default for InMemoryTransport {
    fn default() -> Self {
        Self {
            published: Mutex::new(VecDeque::new()),
            record_limit: DEFAULT_RECORD_LIMIT,
            subscriptions: RwLock::new(Vec::new()),
            responders: RwLock::new(HashMap::new()),
            inbox_counter: AtomicU64::new(0),
        }
    }
}

impl InMemoryTransport {
    pub fn new() -> Self {
        Self::default()
    }

    // with_record_limit sets how many published messages are kept.
    // Subscribers still receive every message when the limit is 0.
    pub fn with_record_limit(mut self, limit: usize) -> Self {
        self.record_limit = limit;
        self
    }

    pub fn record_limit(&self) -> usize {
        self.record_limit
    }

    // shared is a convenience for the common Arc<InMemoryTransport> case.
    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    // subscribe registers interest in a subject pattern and returns
    // the receiving end of the delivery channel. Dropping the
    // receiver ends the subscription on the next delivery attempt.
    pub async fn subscribe(
        &self,
        pattern: &str,
    ) -> Result<mpsc::UnboundedReceiver<NatsMessage>, NatseaClientError> {
        let regex = subject_pattern_to_regex(pattern)?;
        let (sender, receiver) = mpsc::unbounded_channel();
        self.subscriptions.write().await.push(Subscription {
            pattern: pattern.to_string(),
            regex,
            sender,
        });
        debug!("Subscribed to pattern '{}'", pattern);
        Ok(receiver)
    }

    // respond_with registers the responder for requests on subject,
    // replacing any previous one.
    pub async fn respond_with<F>(&self, subject: impl Into<String>, responder: F)
    where
        F: Fn(&NatsMessage) -> Vec<u8> + Send + Sync + 'static,
    {
        let subject = subject.into();
        debug!("Registered responder for subject '{}'", subject);
        self.responders
            .write()
            .await
            .insert(subject, Arc::new(responder));
    }

    // published returns a copy of the recorded messages, oldest first.
    pub async fn published(&self) -> Vec<OutboundMessage> {
        self.published.lock().await.iter().cloned().collect()
    }

    // published_to returns the messages published to one subject.
    pub async fn published_to(&self, subject: &str) -> Vec<OutboundMessage> {
        self.published
            .lock()
            .await
            .iter()
            .filter(|message| message.subject == subject)
            .cloned()
            .collect()
    }

    pub async fn published_count(&self) -> usize {
        self.published.lock().await.len()
    }

    // clear forgets recorded messages. Subscriptions and responders
    // stay in place.
    pub async fn clear(&self) {
        self.published.lock().await.clear();
    }

    pub async fn subscription_count(&self) -> usize {
        self.subscriptions.read().await.len()
    }

    async fn record_and_deliver(&self, message: &OutboundMessage, reply: Option<&str>) {
        self.record(message).await;

        let mut delivered = 0;
        let mut subscriptions = self.subscriptions.write().await;
        subscriptions.retain(|subscription| {
            if !subscription.regex.is_match(&message.subject) {
                return true;
            }
            let mut delivery = NatsMessage::from(message.clone());
            delivery.reply = reply.map(str::to_string);
            if subscription.sender.send(delivery).is_err() {
                debug!(
                    "Dropping closed subscription for pattern '{}'",
                    subscription.pattern
                );
                return false;
            }
            delivered += 1;
            true
        });
        debug!(
            "Delivered message on '{}' to {} subscriber(s)",
            message.subject, delivered
        );
    }

    async fn record(&self, message: &OutboundMessage) {
        if self.record_limit == 0 {
            return;
        }
        let mut published = self.published.lock().await;
        while published.len() >= self.record_limit {
            published.pop_front();
        }
        published.push_back(message.clone());
    }

    fn next_inbox(&self) -> String {
        let id = self.inbox_counter.fetch_add(1, Ordering::Relaxed);
        format!("_INBOX.{id}")
    }
}

#[async_trait]
impl NatsTransport for InMemoryTransport {
    async fn publish(&self, message: OutboundMessage) -> Result<(), NatseaClientError> {
        self.record_and_deliver(&message, None).await;
        Ok(())
    }

    async fn request(&self, message: OutboundMessage) -> Result<NatsMessage, NatseaClientError> {
        let inbox = self.next_inbox();
        self.record_and_deliver(&message, Some(&inbox)).await;

        let responder = self.responders.read().await.get(&message.subject).cloned();
        let Some(responder) = responder else {
            warn!("No responders for request on '{}'", message.subject);
            return Err(NatseaClientError::no_responders(message.subject));
        };

        let request = NatsMessage::from(message).with_reply(inbox.clone());
        let reply_payload = responder(&request);
        Ok(NatsMessage::new(inbox, reply_payload))
    }
}

// subject_pattern_to_regex compiles a NATS subscription subject into
// an anchored regex. '*' matches exactly one token, '>' matches one
// or more trailing tokens and is only valid as the last token.
pub fn subject_pattern_to_regex(pattern: &str) -> Result<Regex, NatseaClientError> {
    if pattern.is_empty() {
        return Err(NatseaClientError::invalid_subject(pattern, "empty subject"));
    }

    let tokens: Vec<&str> = pattern.split('.').collect();
    let last = tokens.len() - 1;
    let mut parts = Vec::with_capacity(tokens.len());
    for (i, token) in tokens.iter().enumerate() {
        match *token {
            "" => {
                return Err(NatseaClientError::invalid_subject(pattern, "empty token"));
            }
            "*" => parts.push("[^.]+".to_string()),
            ">" if i == last => parts.push(".+".to_string()),
            ">" => {
                return Err(NatseaClientError::invalid_subject(
                    pattern,
                    "'>' must be the last token",
                ));
            }
            literal => parts.push(regex::escape(literal)),
        }
    }

    Regex::new(&format!("^{}$", parts.join(r"\.")))
        .map_err(|e| NatseaClientError::invalid_subject(pattern, e.to_string()))
}
