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

// src/client/mod.rs
// Client side of natsea: the dispatcher generated clients delegate
// to, its options, subject validation and the nats_client! macro.

mod core;
mod macros;
mod options;
mod subject;

pub use self::core::ClientDispatcher;
pub use options::ClientOptions;
pub use subject::validate_publish_subject;
