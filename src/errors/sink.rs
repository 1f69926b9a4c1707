// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use thiserror::Error;

/// Errors raised while handing a pipeline definition to the host runtime
#[derive(Debug, Error)]
pub enum SinkError {
    #[error("failed to encode pipeline '{pipeline_id}' as JSON: {source}")]
    Json {
        pipeline_id: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to encode pipeline '{pipeline_id}' as YAML: {source}")]
    Yaml {
        pipeline_id: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to write pipeline '{pipeline_id}': {source}")]
    Write {
        pipeline_id: String,
        #[source]
        source: std::io::Error,
    },
}
