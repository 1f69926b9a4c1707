// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Pipeline generation.
//!
//! Generation walks the fixed category directories under a base directory in
//! order, turns every `.sql` file into a task and chains the tasks into a single
//! line:
//!
//! ```text
//! file_formats/csv.sql -> tables/01_a.sql -> tables/02_b.sql -> views/v.sql -> dml/load.sql
//! ```
//!
//! Categories without SQL files are left out entirely. Generation is synchronous,
//! reads only, and is deterministic: the same files, configuration and resolver
//! state always give the same definition.

pub mod discovery;
pub mod params;
mod pipeline_generator;
pub mod schema;


pub use pipeline_generator::{build_groups, PipelineGenerator};
