// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Sinks that write a pipeline definition out as text.

use std::io::Write;

use crate::errors::SinkError;
use crate::observability::messages::sink::PipelineRegistered;
use crate::observability::messages::StructuredLog;
use crate::pipeline::PipelineDefinition;
use crate::traits::PipelineSink;

/// How a [`WriterSink`] encodes a definition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON
    Json,
    /// YAML document
    Yaml,
    /// Qualified task ids in execution order, one per line
    Order,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Order => "order",
        }
    }
}

/// Encodes a definition and writes it to any `Write` target
pub struct WriterSink<W: Write> {
    writer: W,
    format: OutputFormat,
}

impl<W: Write> WriterSink<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self { writer, format }
    }
}

/// Encode `definition` in `format`.
pub fn render(definition: &PipelineDefinition, format: OutputFormat) -> Result<String, SinkError> {
    let pipeline_id = || definition.pipeline_id.clone();

    match format {
        OutputFormat::Json => serde_json::to_string_pretty(definition)
            .map(|mut s| {
                s.push('\n');
                s
            })
            .map_err(|source| SinkError::Json {
                pipeline_id: pipeline_id(),
                source,
            }),
        OutputFormat::Yaml => serde_yaml::to_string(definition).map_err(|source| SinkError::Yaml {
            pipeline_id: pipeline_id(),
            source,
        }),
        OutputFormat::Order => Ok(definition
            .execution_order()
            .into_iter()
            .map(|id| id + "\n")
            .collect()),
    }
}

impl<W: Write> PipelineSink for WriterSink<W> {
    fn register(&mut self, definition: &PipelineDefinition) -> Result<(), SinkError> {
        let encoded = render(definition, self.format)?;

        self.writer
            .write_all(encoded.as_bytes())
            .and_then(|_| self.writer.flush())
            .map_err(|source| SinkError::Write {
                pipeline_id: definition.pipeline_id.clone(),
                source,
            })?;

        PipelineRegistered {
            pipeline_id: &definition.pipeline_id,
            format: self.format.as_str(),
            task_count: definition.task_count(),
        }
        .log();

        Ok(())
    }
}
