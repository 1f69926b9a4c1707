// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for the pipeline generation lifecycle.
//!
//! This module contains message types for logging events related to:
//! * Generation start and completion
//! * Configuration loading and schema resolution
//! * Parameter resolution
//! * Category discovery and task creation

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use std::path::Path;
use tracing::Span;

/// Generation started for a base directory.
///
/// # Log Level
/// `info!` - Important operational event
///
/// # Example
/// ```
/// use snowflake_objects_dag::observability::messages::generator::GenerationStarted;
/// use std::path::Path;
///
/// let msg = GenerationStarted {
///     pipeline_id: "warehouse_core",
///     base_dir: Path::new("/srv/warehouse/core"),
/// };
///
/// tracing::info!("{}", msg);
/// ```
pub struct GenerationStarted<'a> {
    pub pipeline_id: &'a str,
    pub base_dir: &'a Path,
}

impl Display for GenerationStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generating pipeline '{}' from {}",
            self.pipeline_id,
            self.base_dir.display()
        )
    }
}

impl StructuredLog for GenerationStarted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline_id = self.pipeline_id,
            base_dir = %self.base_dir.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "generation",
            span_name = name,
            pipeline_id = self.pipeline_id,
            base_dir = %self.base_dir.display(),
        )
    }
}

/// Configuration file loaded.
///
/// # Log Level
/// `debug!` - Detailed diagnostic information
pub struct ConfigLoaded<'a> {
    pub path: &'a Path,
    pub conn_id: &'a str,
    pub owner: &'a str,
    pub tag_count: usize,
    pub param_count: usize,
}

impl Display for ConfigLoaded<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Loaded config {}: connection={}, owner={}, {} tags, {} params",
            self.path.display(),
            self.conn_id,
            self.owner,
            self.tag_count,
            self.param_count
        )
    }
}

impl StructuredLog for ConfigLoaded<'_> {
    fn log(&self) {
        tracing::debug!(
            path = %self.path.display(),
            conn_id = self.conn_id,
            owner = self.owner,
            tag_count = self.tag_count,
            param_count = self.param_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "config",
            span_name = name,
            path = %self.path.display(),
            conn_id = self.conn_id,
        )
    }
}

/// Target schema resolved from the connection's database.
///
/// # Log Level
/// `info!` - Important operational event
pub struct SchemaResolved<'a> {
    pub conn_id: &'a str,
    pub schema: &'a str,
}

impl Display for SchemaResolved<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Resolved target schema '{}' via connection '{}'",
            self.schema, self.conn_id
        )
    }
}

impl StructuredLog for SchemaResolved<'_> {
    fn log(&self) {
        tracing::info!(conn_id = self.conn_id, schema = self.schema, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "schema",
            span_name = name,
            conn_id = self.conn_id,
            schema = self.schema,
        )
    }
}

/// A configured parameter has no value and resolves to an empty string.
///
/// # Log Level
/// `debug!` - Expected for optional parameters
pub struct ParameterUnset<'a> {
    pub name: &'a str,
}

impl Display for ParameterUnset<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Parameter '{}' is not set, using empty string", self.name)
    }
}

impl StructuredLog for ParameterUnset<'_> {
    fn log(&self) {
        tracing::debug!(param = self.name, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!("parameter", span_name = name, param = self.name)
    }
}

/// A configured parameter collides with the reserved schema parameter and is dropped.
///
/// # Log Level
/// `warn!` - Configuration mistake that generation works around
pub struct ReservedParameterIgnored<'a> {
    pub name: &'a str,
    pub schema: &'a str,
}

impl Display for ReservedParameterIgnored<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Parameter '{}' is reserved; keeping resolved schema '{}' and ignoring the configured value",
            self.name, self.schema
        )
    }
}

impl StructuredLog for ReservedParameterIgnored<'_> {
    fn log(&self) {
        tracing::warn!(param = self.name, schema = self.schema, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!(
            "parameter",
            span_name = name,
            param = self.name,
            schema = self.schema,
        )
    }
}

/// A category contributes no tasks.
///
/// # Log Level
/// `debug!` - Most projects use only a few categories
pub struct CategorySkipped<'a> {
    pub category: &'a str,
    pub reason: &'a str,
}

impl Display for CategorySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Skipping category '{}': {}", self.category, self.reason)
    }
}

impl StructuredLog for CategorySkipped<'_> {
    fn log(&self) {
        tracing::debug!(category = self.category, reason = self.reason, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "category",
            span_name = name,
            category = self.category,
            reason = self.reason,
        )
    }
}

/// One SQL file turned into a task.
///
/// # Log Level
/// `debug!` - Per-file detail
pub struct SqlTaskCreated<'a> {
    pub category: &'a str,
    pub task_id: &'a str,
    pub source: &'a Path,
    pub schema_injected: bool,
}

impl Display for SqlTaskCreated<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(f, "Created task '{}.{}' from {}", self.category, self.task_id, self.source.display())?;
        if self.schema_injected {
            write!(f, " (schema selection added)")?;
        }
        Ok(())
    }
}

impl StructuredLog for SqlTaskCreated<'_> {
    fn log(&self) {
        tracing::debug!(
            category = self.category,
            task_id = self.task_id,
            source = %self.source.display(),
            schema_injected = self.schema_injected,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "task",
            span_name = name,
            category = self.category,
            task_id = self.task_id,
        )
    }
}

/// Generation produced a pipeline with no tasks at all.
///
/// # Log Level
/// `warn!` - Almost always a wrong base directory
pub struct EmptyPipeline<'a> {
    pub pipeline_id: &'a str,
    pub base_dir: &'a Path,
}

impl Display for EmptyPipeline<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Pipeline '{}' has no tasks: no SQL files under any category of {}",
            self.pipeline_id,
            self.base_dir.display()
        )
    }
}

impl StructuredLog for EmptyPipeline<'_> {
    fn log(&self) {
        tracing::warn!(
            pipeline_id = self.pipeline_id,
            base_dir = %self.base_dir.display(),
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::warn_span!("generation", span_name = name, pipeline_id = self.pipeline_id)
    }
}

/// Generation finished and the definition passed validation.
///
/// # Log Level
/// `info!` - Important operational event
pub struct GenerationCompleted<'a> {
    pub pipeline_id: &'a str,
    pub group_count: usize,
    pub task_count: usize,
}

impl Display for GenerationCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Generated pipeline '{}': {} tasks in {} groups",
            self.pipeline_id, self.task_count, self.group_count
        )
    }
}

impl StructuredLog for GenerationCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline_id = self.pipeline_id,
            group_count = self.group_count,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "generation",
            span_name = name,
            pipeline_id = self.pipeline_id,
            group_count = self.group_count,
            task_count = self.task_count,
        )
    }
}
