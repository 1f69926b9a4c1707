// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! Each message type implements `Display` for human-readable output and
//! [`StructuredLog`] to emit itself as a `tracing` event (or open a span) with its
//! fields attached as structured key/value pairs at the right level.
//!
//! # Usage Pattern
//!
//! ```rust
//! use snowflake_objects_dag::observability::messages::generator::GenerationCompleted;
//! use snowflake_objects_dag::observability::messages::StructuredLog;
//!
//! let msg = GenerationCompleted {
//!     pipeline_id: "warehouse_core",
//!     group_count: 3,
//!     task_count: 12,
//! };
//!
//! tracing::info!("{}", msg);
//! msg.log();
//! ```

use tracing::Span;

pub mod generator;
pub mod sink;
pub mod validation;

/// A log message that knows its own level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a `tracing` event.
    fn log(&self);

    /// Build a span carrying the message's fields.
    fn span(&self, name: &str) -> Span;
}
