// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod config;
mod generation;
mod resolve;
mod sink;
mod validation;

pub use config::ConfigError;
pub use generation::{GenerationError, Result};
pub use resolve::ResolveError;
pub use sink::SinkError;
pub use validation::ValidationError;
