// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fmt;

/// Errors found while validating a generated pipeline definition
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Two tasks resolve to the same qualified task id
    DuplicateTaskId {
        /// The duplicated `<group>.<task>` id
        task_id: String,
    },
    /// An identifier the host runtime would reject
    InvalidIdentifier {
        /// What kind of identifier this is (pipeline, group, task)
        kind: &'static str,
        /// The rejected identifier
        identifier: String,
        /// Why it was rejected
        reason: String,
    },
    /// The task graph is not a single linear chain
    BrokenChain {
        /// Description of where the chain breaks
        detail: String,
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::DuplicateTaskId { task_id } => {
                write!(f, "Duplicate task ID: '{}'", task_id)
            }
            ValidationError::InvalidIdentifier {
                kind,
                identifier,
                reason,
            } => {
                write!(f, "Invalid {} id '{}': {}", kind, identifier, reason)
            }
            ValidationError::BrokenChain { detail } => {
                write!(f, "Task graph is not a single linear chain: {}", detail)
            }
        }
    }
}

impl std::error::Error for ValidationError {}
