// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! The umbrella error returned by pipeline generation.

use std::path::PathBuf;
use thiserror::Error;

use super::{ConfigError, ResolveError, SinkError, ValidationError};

/// Result type for pipeline generation.
pub type Result<T> = std::result::Result<T, GenerationError>;

/// Every failure that aborts generation. None of them is recoverable; no partial
/// pipeline is ever returned.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The base directory is missing or has no named parent
    #[error("invalid base directory '{}': {reason}", .path.display())]
    InvalidBaseDirectory { path: PathBuf, reason: String },

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("failed to resolve target schema: {0}")]
    Resolve(#[from] ResolveError),

    /// The README used as pipeline documentation could not be read
    #[error("failed to read description file '{}': {source}", .path.display())]
    ReadDescription {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A category directory could not be listed
    #[error("failed to list category directory '{}': {source}", .path.display())]
    ListCategory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A SQL file could not be read
    #[error("failed to read SQL file '{}': {source}", .path.display())]
    ReadSql {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A file name under a category directory is not valid UTF-8
    #[error("file name '{}' is not valid UTF-8", .path.display())]
    NonUtf8FileName { path: PathBuf },

    /// The host adapter refused the generated pipeline
    #[error("failed to register pipeline: {0}")]
    Register(#[from] SinkError),

    /// The assembled pipeline failed validation
    #[error("generated pipeline is invalid:\n{}", format_validation_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn format_validation_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| format!("  - {}", e))
        .collect::<Vec<_>>()
        .join("\n")
}
