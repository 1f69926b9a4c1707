// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Host-agnostic model of a generated pipeline.
//!
//! A [`PipelineDefinition`] is an ordered list of [`TaskGroup`]s, one per non-empty
//! [`Category`], each holding an ordered list of [`SqlTask`]s. Dependencies are
//! implicit in that ordering: every task depends on the one before it, and every
//! group's first task depends on the previous group's last task. Translating this
//! into a specific orchestrator's objects is the job of a
//! [`PipelineSink`](crate::traits::PipelineSink).

mod category;
pub(crate) mod definition;

pub use category::Category;
pub use definition::{
    DefaultArgs, Dependency, PipelineDefinition, Schedule, SqlTask, StartDate, TaskGroup,
};
