// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config::{DependencyGraph, EntryPoints};
use crate::pipeline::Category;

/// One SQL file turned into one executable step.
///
/// Tasks are created once during generation and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SqlTask {
    /// File name without the `.sql` suffix; unique within its group
    pub task_id: String,
    /// Path of the SQL file the statement text was read from
    pub source: PathBuf,
    /// Statement text, with `USE <schema>;` prepended when it had none
    pub sql: String,
    /// Warehouse connection the host runs the statement through
    pub conn_id: String,
    /// Template parameters: `schema_name` plus every configured parameter
    pub params: BTreeMap<String, String>,
    /// Whether `sql` was rewritten to select the target schema
    pub schema_injected: bool,
}

impl SqlTask {
    /// `<group>.<task>`, the id the host runtime sees for a grouped task.
    pub fn qualified_id(&self, group: Category) -> String {
        format!("{}.{}", group.dir_name(), self.task_id)
    }
}

/// The tasks of one category, in execution order. Never empty in a generated
/// pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskGroup {
    pub group_id: Category,
    pub tasks: Vec<SqlTask>,
}

impl TaskGroup {
    pub fn first(&self) -> Option<&SqlTask> {
        self.tasks.first()
    }

    pub fn last(&self) -> Option<&SqlTask> {
        self.tasks.last()
    }

    pub fn qualified_ids(&self) -> impl Iterator<Item = String> + '_ {
        self.tasks.iter().map(|t| t.qualified_id(self.group_id))
    }
}

/// Trigger policy. Generated pipelines never run on a timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Schedule {
    Manual,
}

/// Start date policy, kept symbolic so the definition does not depend on the
/// wall clock at generation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StartDate {
    pub days_ago: u32,
}

/// Arguments the host applies to every task of the pipeline
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DefaultArgs {
    pub owner: String,
    pub snowflake_conn_id: String,
}

/// A single upstream -> downstream edge between qualified task ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dependency {
    pub upstream: String,
    pub downstream: String,
}

/// The complete generated pipeline handed to the host runtime.
///
/// # Example
/// ```yaml
/// pipeline_id: analytics_core
/// description: Run SQL files in Snowflake, organized by subdirectories
/// schedule: manual
/// start_date:
///   days_ago: 1
/// tags: [snowflake, data-eng]
/// default_args:
///   owner: data-eng
///   snowflake_conn_id: snowflake_default
/// groups:
///   - group_id: tables
///     tasks:
///       - task_id: 01_customers
///         sql: "USE ANALYTICS.core;\nCREATE TABLE ..."
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineDefinition {
    pub pipeline_id: String,
    pub description: String,
    /// README content, verbatim
    pub doc_md: String,
    pub schedule: Schedule,
    pub start_date: StartDate,
    pub tags: Vec<String>,
    pub default_args: DefaultArgs,
    /// Directory the host resolves templated file references against
    pub template_searchpath: PathBuf,
    pub groups: Vec<TaskGroup>,
}

impl PipelineDefinition {
    pub fn task_count(&self) -> usize {
        self.groups.iter().map(|g| g.tasks.len()).sum()
    }

    /// Every task with its group, in execution order.
    pub fn tasks(&self) -> impl Iterator<Item = (Category, &SqlTask)> + '_ {
        self.groups
            .iter()
            .flat_map(|g| g.tasks.iter().map(move |t| (g.group_id, t)))
    }

    /// Qualified task ids in the order the host will run them.
    pub fn execution_order(&self) -> Vec<String> {
        self.tasks()
            .map(|(group, task)| task.qualified_id(group))
            .collect()
    }

    /// Edges of the chain: consecutive tasks inside a group, then the last task
    /// of each group to the first task of the next.
    pub fn dependencies(&self) -> Vec<Dependency> {
        let mut edges = Vec::new();
        let mut previous_tail: Option<String> = None;

        for group in &self.groups {
            let ids: Vec<String> = group.qualified_ids().collect();
            if ids.is_empty() {
                continue;
            }

            if let Some(tail) = previous_tail.take() {
                edges.push(Dependency {
                    upstream: tail,
                    downstream: ids[0].clone(),
                });
            }

            for pair in ids.windows(2) {
                edges.push(Dependency {
                    upstream: pair[0].clone(),
                    downstream: pair[1].clone(),
                });
            }

            previous_tail = ids.last().cloned();
        }

        edges
    }

    /// Forward graph (task -> dependents) with an entry for every task.
    pub fn dependency_graph(&self) -> DependencyGraph {
        let mut graph = DependencyGraph::new();
        for id in self.execution_order() {
            graph.add_task(id);
        }
        for edge in self.dependencies() {
            graph.add_dependent(&edge.upstream, edge.downstream);
        }
        graph
    }

    /// Tasks nothing else points at. A valid pipeline has exactly one.
    pub fn entry_points(&self) -> EntryPoints {
        let downstream: std::collections::HashSet<String> = self
            .dependencies()
            .into_iter()
            .map(|d| d.downstream)
            .collect();

        self.execution_order()
            .into_iter()
            .filter(|id| !downstream.contains(id))
            .collect::<Vec<_>>()
            .into()
    }
}
