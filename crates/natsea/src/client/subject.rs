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

// src/client/subject.rs
// Validation of subjects messages are published to.
//
// Publish subjects are dot-separated, non-empty tokens without
// whitespace. Wildcards only make sense when subscribing, so '*' and
// '>' tokens are rejected here.

use crate::errors::NatseaClientError;

pub fn validate_publish_subject(subject: &str) -> Result<(), NatseaClientError> {
    if subject.is_empty() {
        return Err(NatseaClientError::invalid_subject(subject, "empty subject"));
    }
    if subject.chars().any(char::is_whitespace) {
        return Err(NatseaClientError::invalid_subject(
            subject,
            "subjects cannot contain whitespace",
        ));
    }
    for token in subject.split('.') {
        match token {
            "" => {
                return Err(NatseaClientError::invalid_subject(subject, "empty token"));
            }
            "*" | ">" => {
                return Err(NatseaClientError::invalid_subject(
                    subject,
                    "wildcards are not allowed when publishing",
                ));
            }
            _ => {}
        }
    }
    Ok(())
}
