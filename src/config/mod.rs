// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod dependency_graph;
mod entry_points;
mod layout;
mod loader;
mod validation;

#[cfg(test)]
mod integration_tests;
pub mod consts;

pub use dependency_graph::DependencyGraph;
pub use entry_points::EntryPoints;
pub use layout::{ProjectLayout, ResolvedLayout};
pub use loader::{load_config, PipelineConfig};
pub use validation::{identifier_problem, validate_pipeline};
