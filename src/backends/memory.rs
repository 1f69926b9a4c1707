// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! In-memory resolvers and sink, for embedding the generator and for tests.

use std::collections::HashMap;

use crate::errors::{ResolveError, SinkError};
use crate::pipeline::PipelineDefinition;
use crate::traits::{Connection, ConnectionResolver, PipelineSink, VariableResolver};

/// Connections held in a map
#[derive(Debug, Clone, Default)]
pub struct StaticConnections {
    connections: HashMap<String, Connection>,
}

impl StaticConnections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, connection: Connection) -> Self {
        self.connections.insert(connection.conn_id.clone(), connection);
        self
    }

    /// Shorthand for a connection whose only extra is its database
    pub fn with_database(self, conn_id: &str, database: &str) -> Self {
        self.with(Connection::new(conn_id).with_extra("database", database))
    }
}

impl ConnectionResolver for StaticConnections {
    fn connection(&self, conn_id: &str) -> Result<Connection, ResolveError> {
        self.connections
            .get(conn_id)
            .cloned()
            .ok_or_else(|| ResolveError::ConnectionNotFound {
                conn_id: conn_id.to_string(),
            })
    }
}

/// Variables held in a map
#[derive(Debug, Clone, Default)]
pub struct StaticVariables {
    variables: HashMap<String, String>,
}

impl StaticVariables {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: &str, value: &str) -> Self {
        self.variables.insert(name.to_string(), value.to_string());
        self
    }
}

impl VariableResolver for StaticVariables {
    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}

/// Records every definition it is given
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    pub registered: Vec<PipelineDefinition>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PipelineSink for MemorySink {
    fn register(&mut self, definition: &PipelineDefinition) -> Result<(), SinkError> {
        self.registered.push(definition.clone());
        Ok(())
    }
}
