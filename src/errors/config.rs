// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors raised while loading the pipeline configuration file.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading `snowflake_ci.yml`
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read (most often: it does not exist)
    #[error("failed to read config file '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid YAML for the expected record
    #[error("failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// The configuration file holds no document at all
    #[error("config file '{}' is empty", .path.display())]
    Empty { path: PathBuf },
}
