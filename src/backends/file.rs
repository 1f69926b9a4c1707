// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Connections and variables loaded from YAML (or JSON) files.
//!
//! # Connections file
//! ```yaml
//! snowflake_default:
//!   conn_type: snowflake
//!   extra:
//!     database: ANALYTICS
//!     warehouse: COMPUTE_WH
//! ```
//!
//! # Variables file
//! ```yaml
//! env: prod
//! retention_days: 30
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::backends::connection::StoredConnection;
use crate::errors::ResolveError;
use crate::traits::{Connection, ConnectionResolver, VariableResolver};

fn load_yaml<T: DeserializeOwned + Default>(path: &Path) -> Result<T, ResolveError> {
    let content = fs::read_to_string(path).map_err(|source| ResolveError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_yaml::from_str(&content).map_err(|source| ResolveError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Connections keyed by connection id, loaded once from a file.
#[derive(Debug, Clone, Default)]
pub struct FileConnections {
    connections: HashMap<String, StoredConnection>,
}

impl FileConnections {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResolveError> {
        let connections = load_yaml(path.as_ref())?;
        Ok(Self { connections })
    }
}

impl ConnectionResolver for FileConnections {
    fn connection(&self, conn_id: &str) -> Result<Connection, ResolveError> {
        self.connections
            .get(conn_id)
            .cloned()
            .ok_or_else(|| ResolveError::ConnectionNotFound {
                conn_id: conn_id.to_string(),
            })?
            .into_connection(conn_id)
    }
}

/// Variables keyed by name, loaded once from a file. Scalar values of any type
/// are kept in their textual form; `null` counts as unset.
#[derive(Debug, Clone, Default)]
pub struct FileVariables {
    variables: HashMap<String, String>,
}

impl FileVariables {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResolveError> {
        let path = path.as_ref();
        let raw: HashMap<String, serde_yaml::Value> = load_yaml(path)?;

        let mut variables = HashMap::new();
        for (name, value) in raw {
            let text = match value {
                serde_yaml::Value::Null => continue,
                serde_yaml::Value::String(s) => s,
                serde_yaml::Value::Bool(b) => b.to_string(),
                serde_yaml::Value::Number(n) => n.to_string(),
                other => serde_yaml::to_string(&other)
                    .map(|s| s.trim_end().to_string())
                    .map_err(|source| ResolveError::Parse {
                        path: path.to_path_buf(),
                        source,
                    })?,
            };
            variables.insert(name, text);
        }

        Ok(Self { variables })
    }
}

impl VariableResolver for FileVariables {
    fn variable(&self, name: &str) -> Option<String> {
        self.variables.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_connections() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("connections.yml");
        fs::write(
            &path,
            r#"
snowflake_default:
  conn_type: snowflake
  extra:
    database: ANALYTICS
legacy:
  extra: '{"database": "LEGACY"}'
"#,
        )
        .unwrap();

        let connections = FileConnections::load(&path).unwrap();
        assert_eq!(
            connections.connection("snowflake_default").unwrap().database().unwrap(),
            "ANALYTICS"
        );
        assert_eq!(connections.connection("legacy").unwrap().database().unwrap(), "LEGACY");
        assert!(matches!(
            connections.connection("missing"),
            Err(ResolveError::ConnectionNotFound { .. })
        ));
    }

    #[test]
    fn test_load_connections_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = FileConnections::load(dir.path().join("nope.yml")).unwrap_err();
        assert!(matches!(err, ResolveError::Read { .. }));
    }

    #[test]
    fn test_load_variables_stringifies_scalars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variables.yml");
        fs::write(&path, "env: prod\nretention_days: 30\nenabled: true\nunset: ~\n").unwrap();

        let variables = FileVariables::load(&path).unwrap();
        assert_eq!(variables.variable("env"), Some("prod".to_string()));
        assert_eq!(variables.variable("retention_days"), Some("30".to_string()));
        assert_eq!(variables.variable("enabled"), Some("true".to_string()));
        assert_eq!(variables.variable("unset"), None);
    }

    #[test]
    fn test_load_variables_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("variables.yml");
        fs::write(&path, "").unwrap();

        let variables = FileVariables::load(&path).unwrap();
        assert_eq!(variables.variable("anything"), None);
    }
}
