// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::config::consts::DATABASE_EXTRA;
use crate::errors::ResolveError;

/// Stored metadata for a named warehouse connection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    #[serde(default)]
    pub conn_id: String,
    #[serde(default)]
    pub conn_type: Option<String>,
    #[serde(default)]
    pub extra: Map<String, Value>,
}

impl Connection {
    pub fn new(conn_id: impl Into<String>) -> Self {
        Self {
            conn_id: conn_id.into(),
            ..Default::default()
        }
    }

    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The database generated SQL targets.
    pub fn database(&self) -> Result<&str, ResolveError> {
        self.extra
            .get(DATABASE_EXTRA)
            .and_then(Value::as_str)
            .ok_or_else(|| ResolveError::MissingDatabase {
                conn_id: self.conn_id.clone(),
            })
    }
}

/// Looks up stored connection metadata by connection id.
pub trait ConnectionResolver {
    fn connection(&self, conn_id: &str) -> Result<Connection, ResolveError>;
}

/// Looks up the current value of a named parameter. `None` means unset.
pub trait VariableResolver {
    fn variable(&self, name: &str) -> Option<String>;
}

impl<T: ConnectionResolver + ?Sized> ConnectionResolver for &T {
    fn connection(&self, conn_id: &str) -> Result<Connection, ResolveError> {
        (**self).connection(conn_id)
    }
}

impl<T: VariableResolver + ?Sized> VariableResolver for &T {
    fn variable(&self, name: &str) -> Option<String> {
        (**self).variable(name)
    }
}

impl<T: ConnectionResolver + ?Sized> ConnectionResolver for Box<T> {
    fn connection(&self, conn_id: &str) -> Result<Connection, ResolveError> {
        (**self).connection(conn_id)
    }
}

impl<T: VariableResolver + ?Sized> VariableResolver for Box<T> {
    fn variable(&self, name: &str) -> Option<String> {
        (**self).variable(name)
    }
}
