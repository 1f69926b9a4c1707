// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for handing pipeline definitions to the host runtime.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A definition was written out by a sink.
///
/// # Log Level
/// `info!` - Important operational event
pub struct PipelineRegistered<'a> {
    pub pipeline_id: &'a str,
    pub format: &'a str,
    pub task_count: usize,
}

impl Display for PipelineRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Registered pipeline '{}' ({} tasks) as {}",
            self.pipeline_id, self.task_count, self.format
        )
    }
}

impl StructuredLog for PipelineRegistered<'_> {
    fn log(&self) {
        tracing::info!(
            pipeline_id = self.pipeline_id,
            format = self.format,
            task_count = self.task_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "sink",
            span_name = name,
            pipeline_id = self.pipeline_id,
            format = self.format,
        )
    }
}
