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

// src/stats/publish.rs
// Counters for messages handed to a NATS transport.
//
// Requests count as publishes: a request that got a reply is a
// success, one that failed or timed out is a failure.

use std::sync::atomic::{AtomicUsize, Ordering};

// PublishStats is a point-in-time copy of a PublishStatsTracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PublishStats {
    pub total_published: usize,
    pub total_failed: usize,
    // total_bytes_published only counts payloads of successful sends.
    pub total_bytes_published: usize,
}

impl PublishStats {
    pub fn total_attempts(&self) -> usize {
        self.total_published + self.total_failed
    }

    // success_rate is 1.0 until something has been attempted.
    pub fn success_rate(&self) -> f64 {
        match self.total_attempts() {
            0 => 1.0,
            attempts => self.total_published as f64 / attempts as f64,
        }
    }
}

// PublishStatsTracker is updated from any number of tasks without
// locking. Dispatchers share one tracker behind an Arc.
#[derive(Debug, Default)]
pub struct PublishStatsTracker {
    published_count: AtomicUsize,
    failed_count: AtomicUsize,
    published_bytes: AtomicUsize,
}

impl PublishStatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    // increment_published records one accepted message of `bytes` bytes.
    pub fn increment_published(&self, bytes: usize) {
        self.published_count.fetch_add(1, Ordering::Relaxed);
        self.published_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn increment_failed(&self) {
        self.failed_count.fetch_add(1, Ordering::Relaxed);
    }

    pub fn reset_counters(&self) {
        self.published_count.store(0, Ordering::Relaxed);
        self.failed_count.store(0, Ordering::Relaxed);
        self.published_bytes.store(0, Ordering::Relaxed);
    }

    pub fn to_stats(&self) -> PublishStats {
        PublishStats {
            total_published: self.published_count.load(Ordering::Relaxed),
            total_failed: self.failed_count.load(Ordering::Relaxed),
            total_bytes_published: self.published_bytes.load(Ordering::Relaxed),
        }
    }
}
