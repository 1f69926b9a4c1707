// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use snowflake_objects_dag::backends::env::EnvResolver;
use snowflake_objects_dag::backends::file::{FileConnections, FileVariables};
use snowflake_objects_dag::backends::render::{OutputFormat, WriterSink};
use snowflake_objects_dag::config::ProjectLayout;
use snowflake_objects_dag::generator::PipelineGenerator;
use snowflake_objects_dag::traits::{ConnectionResolver, PipelineSink, VariableResolver};

/// Generate a pipeline definition that runs a tree of Snowflake SQL files in order
#[derive(Parser)]
#[command(name = "snowflake-objects-dag")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base directory holding the category subdirectories (tables/, views/, ...)
    base_dir: PathBuf,

    /// Configuration file (default: snowflake_ci.yml next to the base directory)
    #[arg(long, env = "SNOWFLAKE_CI_CONFIG")]
    config: Option<PathBuf>,

    /// Documentation file (default: README.md inside the base directory)
    #[arg(long)]
    readme: Option<PathBuf>,

    /// YAML file of connections (default: AIRFLOW_CONN_* environment variables)
    #[arg(long)]
    connections: Option<PathBuf>,

    /// YAML file of parameter values (default: AIRFLOW_VAR_* environment variables)
    #[arg(long)]
    variables: Option<PathBuf>,

    /// Output encoding
    #[arg(long, value_enum, default_value_t = Format::Json)]
    format: Format,

    /// Write the definition here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Format {
    Json,
    Yaml,
    /// Qualified task ids in execution order
    Order,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => OutputFormat::Json,
            Format::Yaml => OutputFormat::Yaml,
            Format::Order => OutputFormat::Order,
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "snowflake_objects_dag=debug,info"
    } else {
        "snowflake_objects_dag=info,warn"
    };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter));

    // stdout carries the definition, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let connections: Box<dyn ConnectionResolver> = match &cli.connections {
        Some(path) => Box::new(
            FileConnections::load(path)
                .with_context(|| format!("loading connections from {}", path.display()))?,
        ),
        None => Box::new(EnvResolver::from_process()),
    };
    let variables: Box<dyn VariableResolver> = match &cli.variables {
        Some(path) => Box::new(
            FileVariables::load(path)
                .with_context(|| format!("loading variables from {}", path.display()))?,
        ),
        None => Box::new(EnvResolver::from_process()),
    };

    let mut layout = ProjectLayout::new(&cli.base_dir);
    if let Some(config) = &cli.config {
        layout = layout.with_config_path(config);
    }
    if let Some(readme) = &cli.readme {
        layout = layout.with_description_path(readme);
    }

    let generator = PipelineGenerator::new(connections, variables);
    let definition = generator
        .generate(&layout)
        .with_context(|| format!("generating pipeline from {}", cli.base_dir.display()))?;

    // Only open the output once generation has succeeded
    let writer: Box<dyn Write> = match &cli.output {
        Some(path) => Box::new(BufWriter::new(
            File::create(path).with_context(|| format!("creating {}", path.display()))?,
        )),
        None => Box::new(io::stdout().lock()),
    };

    let mut sink = WriterSink::new(writer, cli.format.into());
    sink.register(&definition)
        .with_context(|| format!("writing pipeline '{}'", definition.pipeline_id))?;

    Ok(())
}
