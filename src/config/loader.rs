// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::{DEFAULT_CONNECTION, DEFAULT_OWNER};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Pipeline configuration loaded from `snowflake_ci.yml`.
///
/// Every key is optional. A key that is absent, or present with a `null` value,
/// falls back to its documented default through the accessor methods. Unknown
/// keys are ignored.
///
/// # Fields
/// * `snowflake_conn_id` - Warehouse connection id (defaults to `DEFAULT_CONNECTION`)
/// * `owner` - Pipeline owner, also added to the tags (defaults to `DEFAULT_OWNER`)
/// * `tags` - Tags attached to the pipeline (defaults to none)
/// * `params` - Names of externally resolved parameters (defaults to none)
///
/// # Example
/// ```yaml
/// SNOWFLAKE_CONN_ID: snowflake_prod
/// OWNER: data-eng
/// TAGS:
///   - snowflake
///   - objects
/// PARAMS:
///   - env
///   - warehouse
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PipelineConfig {
    #[serde(rename = "SNOWFLAKE_CONN_ID", default)]
    pub snowflake_conn_id: Option<String>,
    #[serde(rename = "OWNER", default)]
    pub owner: Option<String>,
    #[serde(rename = "TAGS", default)]
    pub tags: Option<Vec<String>>,
    #[serde(rename = "PARAMS", default)]
    pub params: Option<Vec<String>>,
}

impl PipelineConfig {
    /// Get the connection id, using the built-in default if not configured.
    pub fn conn_id(&self) -> &str {
        self.snowflake_conn_id.as_deref().unwrap_or(DEFAULT_CONNECTION)
    }

    /// Get the owner, using the built-in default if not configured.
    pub fn owner(&self) -> &str {
        self.owner.as_deref().unwrap_or(DEFAULT_OWNER)
    }

    /// Configured tags followed by the owner. The owner is not repeated when the
    /// tags already name it.
    pub fn tags(&self) -> Vec<String> {
        let mut tags = self.tags.clone().unwrap_or_default();
        let owner = self.owner();
        if !tags.iter().any(|t| t == owner) {
            tags.push(owner.to_string());
        }
        tags
    }

    /// Names of the parameters to resolve, in configured order.
    pub fn param_names(&self) -> &[String] {
        self.params.as_deref().unwrap_or(&[])
    }
}

/// Load the pipeline configuration from a YAML file.
///
/// A missing file, invalid YAML, a document of the wrong shape and an empty
/// document are all errors.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<PipelineConfig, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    if content.trim().is_empty() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    let parse_error = |source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    };

    let value: serde_yaml::Value = serde_yaml::from_str(&content).map_err(parse_error)?;
    if value.is_null() {
        return Err(ConfigError::Empty {
            path: path.to_path_buf(),
        });
    }

    serde_yaml::from_value(value).map_err(parse_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn parse_full_config() {
        let yaml = r#"
SNOWFLAKE_CONN_ID: snowflake_prod
OWNER: data-eng
TAGS: [snowflake, objects]
PARAMS: [env, warehouse]
"#;

        let cfg: PipelineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.conn_id(), "snowflake_prod");
        assert_eq!(cfg.owner(), "data-eng");
        assert_eq!(cfg.tags(), vec!["snowflake", "objects", "data-eng"]);
        assert_eq!(cfg.param_names(), ["env", "warehouse"]);
    }

    #[test]
    fn test_defaults_when_keys_absent() {
        let cfg: PipelineConfig = serde_yaml::from_str("UNRELATED: 1").unwrap();

        assert_eq!(cfg.conn_id(), DEFAULT_CONNECTION);
        assert_eq!(cfg.owner(), DEFAULT_OWNER);
        assert_eq!(cfg.tags(), vec![DEFAULT_OWNER]);
        assert!(cfg.param_names().is_empty());
    }

    #[test]
    fn test_null_values_fall_back_to_defaults() {
        let yaml = r#"
SNOWFLAKE_CONN_ID:
OWNER: ~
TAGS:
PARAMS: null
"#;

        let cfg: PipelineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(cfg.conn_id(), DEFAULT_CONNECTION);
        assert_eq!(cfg.owner(), DEFAULT_OWNER);
        assert_eq!(cfg.tags(), vec![DEFAULT_OWNER]);
        assert!(cfg.param_names().is_empty());
    }

    #[test]
    fn test_owner_not_duplicated_in_tags() {
        let cfg: PipelineConfig =
            serde_yaml::from_str("OWNER: alice\nTAGS: [alice, etl]").unwrap();

        assert_eq!(cfg.tags(), vec!["alice", "etl"]);
    }

    #[test]
    fn test_load_config_from_file() {
        let file = write_config("SNOWFLAKE_CONN_ID: sf\nPARAMS: [p1]\n");

        let cfg = load_config(file.path()).unwrap();
        assert_eq!(cfg.conn_id(), "sf");
        assert_eq!(cfg.param_names(), ["p1"]);
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("snowflake_ci.yml");

        let err = load_config(&missing).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
        assert!(err.to_string().contains("snowflake_ci.yml"));
    }

    #[test]
    fn test_load_config_empty_file() {
        let file = write_config("");

        let err = load_config(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Empty { .. }));
    }

    #[test]
    fn test_load_config_wrong_shape() {
        let cases = [
            "- just\n- a\n- list\n",
            "TAGS: not-a-list\n",
            "PARAMS: {nested: map}\n",
            "OWNER: [a, b]\n",
        ];

        for yaml in cases {
            let file = write_config(yaml);
            let err = load_config(file.path()).unwrap_err();
            assert!(
                matches!(err, ConfigError::Parse { .. }),
                "expected parse error for {:?}, got {:?}",
                yaml,
                err
            );
        }
    }
}
