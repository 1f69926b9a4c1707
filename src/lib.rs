// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod backends;   // resolvers and sinks
pub mod config;     // config, layout, validation
pub mod errors;     // error handling
pub mod generator;  // SQL tree -> pipeline
pub mod observability;
pub mod pipeline;   // host-agnostic pipeline model
pub mod traits;     // collaborator seams
