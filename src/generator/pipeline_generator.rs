// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::fs;

use crate::config::consts::{PIPELINE_DESCRIPTION, START_DAYS_AGO};
use crate::config::{load_config, validate_pipeline, PipelineConfig, ProjectLayout, ResolvedLayout};
use crate::errors::{GenerationError, Result};
use crate::generator::discovery::discover_sql_files;
use crate::generator::params::{merge_params, resolve_params};
use crate::generator::schema::with_schema;
use crate::observability::messages::generator::{
    CategorySkipped, ConfigLoaded, EmptyPipeline, GenerationCompleted, GenerationStarted,
    SchemaResolved, SqlTaskCreated,
};
use crate::observability::messages::StructuredLog;
use crate::pipeline::{
    Category, DefaultArgs, PipelineDefinition, Schedule, SqlTask, StartDate, TaskGroup,
};
use crate::traits::{ConnectionResolver, PipelineSink, VariableResolver};

/// Turns a directory of SQL files into a [`PipelineDefinition`].
///
/// The generator owns its collaborators: a [`ConnectionResolver`] to find the
/// target database and a [`VariableResolver`] for configured parameters. Pass
/// references to share them.
///
/// # Example
/// ```no_run
/// use snowflake_objects_dag::backends::env::EnvResolver;
/// use snowflake_objects_dag::config::ProjectLayout;
/// use snowflake_objects_dag::generator::PipelineGenerator;
///
/// let env = EnvResolver::from_process();
/// let generator = PipelineGenerator::new(&env, &env);
/// let definition = generator.generate(&ProjectLayout::new("warehouse/core"))?;
/// println!("{}", definition.execution_order().join(" -> "));
/// # Ok::<(), snowflake_objects_dag::errors::GenerationError>(())
/// ```
pub struct PipelineGenerator<C, V> {
    connections: C,
    variables: V,
}

impl<C: ConnectionResolver, V: VariableResolver> PipelineGenerator<C, V> {
    pub fn new(connections: C, variables: V) -> Self {
        Self {
            connections,
            variables,
        }
    }

    /// Generate the pipeline for `layout`.
    ///
    /// Either the complete, validated definition is returned or nothing is: every
    /// failure aborts generation.
    pub fn generate(&self, layout: &ProjectLayout) -> Result<PipelineDefinition> {
        let resolved = layout.resolve()?;
        let pipeline_id = resolved.pipeline_id();

        let start_msg = GenerationStarted {
            pipeline_id: &pipeline_id,
            base_dir: &resolved.base_dir,
        };
        let span = start_msg.span("generate_pipeline");
        let _guard = span.enter();
        start_msg.log();

        let config = load_config(&resolved.config_path)?;
        ConfigLoaded {
            path: &resolved.config_path,
            conn_id: config.conn_id(),
            owner: config.owner(),
            tag_count: config.tags().len(),
            param_count: config.param_names().len(),
        }
        .log();

        let schema = self.resolve_schema(config.conn_id(), &resolved.leaf_name)?;
        let resolved_params = resolve_params(config.param_names(), &self.variables);
        let params = merge_params(&schema, &resolved_params);

        let doc_md = fs::read_to_string(&resolved.description_path).map_err(|source| {
            GenerationError::ReadDescription {
                path: resolved.description_path.clone(),
                source,
            }
        })?;

        let groups = build_groups(&resolved, &schema, config.conn_id(), &params)?;
        let definition = assemble(pipeline_id, &resolved, &config, doc_md, groups);

        validate_pipeline(&definition).map_err(GenerationError::Validation)?;

        if definition.groups.is_empty() {
            EmptyPipeline {
                pipeline_id: &definition.pipeline_id,
                base_dir: &resolved.base_dir,
            }
            .log();
        }

        GenerationCompleted {
            pipeline_id: &definition.pipeline_id,
            group_count: definition.groups.len(),
            task_count: definition.task_count(),
        }
        .log();

        Ok(definition)
    }

    /// Generate the pipeline and hand it to `sink`. The sink is not called when
    /// generation fails.
    pub fn generate_into<S: PipelineSink + ?Sized>(
        &self,
        layout: &ProjectLayout,
        sink: &mut S,
    ) -> Result<PipelineDefinition> {
        let definition = self.generate(layout)?;
        sink.register(&definition)?;
        Ok(definition)
    }

    /// `<database>.<leaf>`, where the database comes from the connection's extras.
    pub fn resolve_schema(&self, conn_id: &str, leaf_name: &str) -> Result<String> {
        let connection = self.connections.connection(conn_id)?;
        let schema = format!("{}.{}", connection.database()?, leaf_name);

        SchemaResolved {
            conn_id,
            schema: &schema,
        }
        .log();

        Ok(schema)
    }
}

/// One group per category that has at least one SQL file, in category order.
pub fn build_groups(
    layout: &ResolvedLayout,
    schema: &str,
    conn_id: &str,
    params: &BTreeMap<String, String>,
) -> Result<Vec<TaskGroup>> {
    let mut groups = Vec::new();

    for category in Category::ALL {
        let dir = layout.category_dir(category);
        if !dir.is_dir() {
            CategorySkipped {
                category: category.dir_name(),
                reason: "directory not found",
            }
            .log();
            continue;
        }

        let mut tasks = Vec::new();
        for file in discover_sql_files(&dir)? {
            let content = fs::read_to_string(&file.path).map_err(|source| {
                GenerationError::ReadSql {
                    path: file.path.clone(),
                    source,
                }
            })?;
            let (sql, schema_injected) = with_schema(content, schema);

            SqlTaskCreated {
                category: category.dir_name(),
                task_id: &file.task_id,
                source: &file.path,
                schema_injected,
            }
            .log();

            tasks.push(SqlTask {
                task_id: file.task_id,
                source: file.path,
                sql,
                conn_id: conn_id.to_string(),
                params: params.clone(),
                schema_injected,
            });
        }

        if tasks.is_empty() {
            CategorySkipped {
                category: category.dir_name(),
                reason: "no .sql files",
            }
            .log();
            continue;
        }

        groups.push(TaskGroup {
            group_id: category,
            tasks,
        });
    }

    Ok(groups)
}

fn assemble(
    pipeline_id: String,
    layout: &ResolvedLayout,
    config: &PipelineConfig,
    doc_md: String,
    groups: Vec<TaskGroup>,
) -> PipelineDefinition {
    PipelineDefinition {
        pipeline_id,
        description: PIPELINE_DESCRIPTION.to_string(),
        doc_md,
        schedule: Schedule::Manual,
        start_date: StartDate {
            days_ago: START_DAYS_AGO,
        },
        tags: config.tags(),
        default_args: DefaultArgs {
            owner: config.owner().to_string(),
            snowflake_conn_id: config.conn_id().to_string(),
        },
        template_searchpath: layout.base_dir.clone(),
        groups,
    }
}
