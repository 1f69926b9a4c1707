// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! This module provides centralized message types for all diagnostic and operational
//! logging in the generator. Message types follow a struct-based pattern with a
//! `Display` implementation, so log text lives in one place instead of being
//! scattered through the code as format strings.
//!
//! # Architecture
//!
//! Messages are organized by subsystem:
//! * `messages::generator` - Pipeline generation lifecycle: config, schema, tasks
//! * `messages::validation` - Problems found in a generated definition
//! * `messages::sink` - Handing definitions to the host runtime
//!
//! # Usage
//!
//! ```rust
//! use snowflake_objects_dag::observability::messages::generator::CategorySkipped;
//! use snowflake_objects_dag::observability::messages::StructuredLog;
//!
//! let msg = CategorySkipped {
//!     category: "streams",
//!     reason: "directory not found",
//! };
//!
//! msg.log();
//! ```

pub mod messages;
