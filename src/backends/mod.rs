// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Implementations of the generator's collaborator seams.
//!
//! # Resolvers
//!
//! ## Environment
//! Connections and variables from `AIRFLOW_CONN_*` / `AIRFLOW_VAR_*` environment
//! variables. The default for the command line tool.
//!
//! ## File
//! Connections and variables from YAML (or JSON) files, for local runs and CI
//! where no orchestrator metadata is available.
//!
//! ## Memory
//! Plain maps, for embedding the generator in another program and for tests.
//!
//! # Sinks
//!
//! The host runtime adapter is a [`PipelineSink`](crate::traits::PipelineSink):
//! - **WriterSink**: encodes the definition as JSON, YAML or a plain execution
//!   order and writes it to any `std::io::Write`
//! - **MemorySink**: keeps registered definitions in a `Vec`
//!
//! # Examples
//!
//! ```rust
//! use snowflake_objects_dag::backends::memory::{StaticConnections, StaticVariables};
//! use snowflake_objects_dag::traits::{ConnectionResolver, VariableResolver};
//!
//! let connections = StaticConnections::new().with_database("snowflake_default", "ANALYTICS");
//! let variables = StaticVariables::new().with("env", "prod");
//!
//! let conn = connections.connection("snowflake_default")?;
//! assert_eq!(conn.database()?, "ANALYTICS");
//! assert_eq!(variables.variable("env").as_deref(), Some("prod"));
//! # Ok::<(), snowflake_objects_dag::errors::ResolveError>(())
//! ```

mod connection;
pub mod env;
pub mod file;
pub mod memory;
pub mod render;
