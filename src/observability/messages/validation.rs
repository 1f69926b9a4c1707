// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for problems found while validating a generated pipeline.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// An identifier the host runtime would reject.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use snowflake_objects_dag::observability::messages::validation::InvalidIdentifierDetected;
///
/// let msg = InvalidIdentifierDetected {
///     kind: "task",
///     identifier: "create table",
///     reason: "contains unsupported characters: ' '",
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct InvalidIdentifierDetected<'a> {
    pub kind: &'a str,
    pub identifier: &'a str,
    pub reason: &'a str,
}

impl Display for InvalidIdentifierDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Invalid {} id '{}': {}", self.kind, self.identifier, self.reason)
    }
}

impl StructuredLog for InvalidIdentifierDetected<'_> {
    fn log(&self) {
        tracing::error!(
            kind = self.kind,
            identifier = self.identifier,
            reason = self.reason,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            kind = self.kind,
            identifier = self.identifier,
        )
    }
}

/// The generated task graph is not a single linear chain.
///
/// # Log Level
/// `error!` - Failure requiring attention
pub struct BrokenChainDetected<'a> {
    pub pipeline_id: &'a str,
    pub detail: &'a str,
}

impl Display for BrokenChainDetected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' is not a single linear chain: {}",
            self.pipeline_id, self.detail
        )
    }
}

impl StructuredLog for BrokenChainDetected<'_> {
    fn log(&self) {
        tracing::error!(
            pipeline_id = self.pipeline_id,
            detail = self.detail,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::span!(
            tracing::Level::ERROR,
            "span_name",
            name = name,
            pipeline_id = self.pipeline_id,
        )
    }
}
