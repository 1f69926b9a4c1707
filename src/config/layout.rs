// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::{Path, PathBuf};

use crate::config::consts::{CONFIG_FILE_NAME, DESCRIPTION_FILE_NAME};
use crate::errors::GenerationError;
use crate::pipeline::Category;

/// Where a project's files live on disk.
///
/// By default the configuration file is `snowflake_ci.yml` in the parent of the
/// base directory and the description is `README.md` inside it:
///
/// ```text
/// project/
/// ├── snowflake_ci.yml
/// └── schema/            <- base directory
///     ├── README.md
///     ├── tables/*.sql
///     └── views/*.sql
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectLayout {
    pub base_dir: PathBuf,
    pub config_path: Option<PathBuf>,
    pub description_path: Option<PathBuf>,
}

impl ProjectLayout {
    pub fn new<P: Into<PathBuf>>(base_dir: P) -> Self {
        Self {
            base_dir: base_dir.into(),
            config_path: None,
            description_path: None,
        }
    }

    pub fn with_config_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.config_path = Some(path.into());
        self
    }

    pub fn with_description_path<P: Into<PathBuf>>(mut self, path: P) -> Self {
        self.description_path = Some(path.into());
        self
    }

    /// Make the base directory absolute and derive the names generation needs.
    pub fn resolve(&self) -> Result<ResolvedLayout, GenerationError> {
        let invalid = |reason: &str| GenerationError::InvalidBaseDirectory {
            path: self.base_dir.clone(),
            reason: reason.to_string(),
        };

        let base_dir = self
            .base_dir
            .canonicalize()
            .map_err(|e| invalid(&e.to_string()))?;
        if !base_dir.is_dir() {
            return Err(invalid("not a directory"));
        }

        let leaf_name = file_name(&base_dir).ok_or_else(|| invalid("has no name"))?;
        let parent_dir = base_dir
            .parent()
            .ok_or_else(|| invalid("has no parent directory"))?
            .to_path_buf();
        let parent_name = file_name(&parent_dir)
            .ok_or_else(|| invalid("parent directory has no name"))?;

        let config_path = self
            .config_path
            .clone()
            .unwrap_or_else(|| parent_dir.join(CONFIG_FILE_NAME));
        let description_path = self
            .description_path
            .clone()
            .unwrap_or_else(|| base_dir.join(DESCRIPTION_FILE_NAME));

        Ok(ResolvedLayout {
            base_dir,
            parent_name,
            leaf_name,
            config_path,
            description_path,
        })
    }
}

fn file_name(path: &Path) -> Option<String> {
    path.file_name()
        .and_then(|n| n.to_str())
        .filter(|n| !n.is_empty())
        .map(str::to_string)
}

/// A [`ProjectLayout`] with every path made concrete.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedLayout {
    pub base_dir: PathBuf,
    pub parent_name: String,
    pub leaf_name: String,
    pub config_path: PathBuf,
    pub description_path: PathBuf,
}

impl ResolvedLayout {
    /// `<parent>_<leaf>`: the two innermost segments of the base directory.
    pub fn pipeline_id(&self) -> String {
        format!("{}_{}", self.parent_name, self.leaf_name)
    }

    pub fn category_dir(&self, category: Category) -> PathBuf {
        self.base_dir.join(category.dir_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_resolve_defaults() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("warehouse").join("core");
        fs::create_dir_all(&base).unwrap();

        let resolved = ProjectLayout::new(&base).resolve().unwrap();

        assert_eq!(resolved.pipeline_id(), "warehouse_core");
        assert_eq!(resolved.leaf_name, "core");
        assert!(resolved.config_path.ends_with("warehouse/snowflake_ci.yml"));
        assert!(resolved.description_path.ends_with("core/README.md"));
        assert!(resolved.category_dir(Category::Views).ends_with("core/views"));
    }

    #[test]
    fn test_resolve_relative_segments() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("warehouse").join("core");
        fs::create_dir_all(&base).unwrap();

        let dotted = base.join("..").join("core");
        let resolved = ProjectLayout::new(dotted).resolve().unwrap();

        assert_eq!(resolved.pipeline_id(), "warehouse_core");
    }

    #[test]
    fn test_resolve_overrides() {
        let root = tempfile::tempdir().unwrap();
        let base = root.path().join("p").join("s");
        fs::create_dir_all(&base).unwrap();

        let resolved = ProjectLayout::new(&base)
            .with_config_path("/etc/pipelines/ci.yml")
            .with_description_path("/etc/pipelines/DOC.md")
            .resolve()
            .unwrap();

        assert_eq!(resolved.config_path, PathBuf::from("/etc/pipelines/ci.yml"));
        assert_eq!(resolved.description_path, PathBuf::from("/etc/pipelines/DOC.md"));
    }

    #[test]
    fn test_resolve_missing_directory() {
        let root = tempfile::tempdir().unwrap();

        let err = ProjectLayout::new(root.path().join("nope"))
            .resolve()
            .unwrap_err();
        assert!(matches!(err, GenerationError::InvalidBaseDirectory { .. }));
    }

    #[test]
    fn test_resolve_file_is_rejected() {
        let root = tempfile::tempdir().unwrap();
        let file = root.path().join("file.sql");
        fs::write(&file, "SELECT 1;").unwrap();

        let err = ProjectLayout::new(&file).resolve().unwrap_err();
        assert!(err.to_string().contains("not a directory"));
    }
}
