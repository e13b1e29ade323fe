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

// src/client/options.rs
// Configuration options for natsea client dispatchers.
use std::time::Duration;

use crate::config::DEFAULT_REQUEST_TIMEOUT;
use crate::transport::Headers;

// ClientOptions are optional parameters that can be passed to a
// dispatcher, all of which have default fallbacks.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ClientOptions {
    // request_timeout bounds how long request/reply methods wait for
    // an answer. Defaults to DEFAULT_REQUEST_TIMEOUT.
    pub request_timeout: Option<Duration>,
    // headers are added to every outgoing message. Headers passed
    // explicitly on a publish call win over these.
    pub headers: Option<Headers>,
}

impl ClientOptions {
    // Builder methods that consume and return Self
    pub fn with_request_timeout(mut self, request_timeout: Duration) -> Self {
        self.request_timeout = Some(request_timeout);
        self
    }

    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers
            .get_or_insert_with(Headers::new)
            .insert(key.into(), value.into());
        self
    }

    pub fn with_headers(mut self, headers: Headers) -> Self {
        self.headers.get_or_insert_with(Headers::new).extend(headers);
        self
    }

    pub fn effective_request_timeout(&self) -> Duration {
        self.request_timeout.unwrap_or(DEFAULT_REQUEST_TIMEOUT)
    }

    // merged_headers layers per-call headers over the default ones.
    pub fn merged_headers(&self, headers: Headers) -> Headers {
        match &self.headers {
            Some(defaults) => {
                let mut merged = defaults.clone();
                merged.extend(headers);
                merged
            }
            None => headers,
        }
    }
}
