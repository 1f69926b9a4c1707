// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors for connection and variable lookups.

use std::path::PathBuf;
use thiserror::Error;

/// Errors returned by connection and variable resolvers
#[derive(Debug, Error)]
pub enum ResolveError {
    /// No connection is registered under the requested id
    #[error("connection '{conn_id}' is not defined")]
    ConnectionNotFound { conn_id: String },

    /// The connection exists but carries no usable `database` extra
    #[error("connection '{conn_id}' has no string 'database' field in its extras")]
    MissingDatabase { conn_id: String },

    /// The connection definition could not be decoded
    #[error("connection '{conn_id}' is malformed: {reason}")]
    MalformedConnection { conn_id: String, reason: String },

    /// A connections or variables file could not be read
    #[error("failed to read '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A connections or variables file could not be parsed
    #[error("failed to parse '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },
}
