// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::consts::SQL_EXTENSION;
use crate::errors::GenerationError;

/// A SQL file found in a category directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SqlFile {
    /// File name, the sort key
    pub file_name: String,
    /// File name without the `.sql` suffix
    pub task_id: String,
    pub path: PathBuf,
}

/// List the `.sql` files directly inside `dir`, sorted by file name.
///
/// The suffix match is case-sensitive. Subdirectories (even ones named `*.sql`)
/// and a bare `.sql` file are ignored.
pub fn discover_sql_files(dir: &Path) -> Result<Vec<SqlFile>, GenerationError> {
    let list_error = |source| GenerationError::ListCategory {
        path: dir.to_path_buf(),
        source,
    };

    let mut files = Vec::new();
    for entry in fs::read_dir(dir).map_err(list_error)? {
        let entry = entry.map_err(list_error)?;
        let path = entry.path();

        let raw_name = entry.file_name();
        if !raw_name.to_string_lossy().ends_with(SQL_EXTENSION) {
            continue;
        }
        let file_name = raw_name
            .to_str()
            .ok_or_else(|| GenerationError::NonUtf8FileName { path: path.clone() })?
            .to_string();

        let task_id = match file_name.strip_suffix(SQL_EXTENSION) {
            Some(stem) if !stem.is_empty() => stem.to_string(),
            _ => continue,
        };

        if !path.is_file() {
            continue;
        }

        files.push(SqlFile {
            file_name,
            task_id,
            path,
        });
    }

    files.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), "SELECT 1;").unwrap();
    }

    #[test]
    fn test_sorted_by_file_name() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["2.sql", "10.sql", "1.sql", "a.sql", "B.sql"] {
            touch(dir.path(), name);
        }

        let names: Vec<String> = discover_sql_files(dir.path())
            .unwrap()
            .into_iter()
            .map(|f| f.file_name)
            .collect();

        assert_eq!(names, vec!["1.sql", "10.sql", "2.sql", "B.sql", "a.sql"]);
    }

    #[test]
    fn test_ignores_other_entries() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "create.sql");
        touch(dir.path(), "notes.md");
        touch(dir.path(), "upper.SQL");
        touch(dir.path(), "backup.sql.bak");
        touch(dir.path(), ".sql");
        fs::create_dir(dir.path().join("nested.sql")).unwrap();

        let files = discover_sql_files(dir.path()).unwrap();

        assert_eq!(files.len(), 1);
        assert_eq!(files[0].task_id, "create");
        assert!(files[0].path.ends_with("create.sql"));
    }

    #[test]
    fn test_task_id_strips_only_trailing_suffix() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "v1.sql_helpers.sql");

        let files = discover_sql_files(dir.path()).unwrap();
        assert_eq!(files[0].task_id, "v1.sql_helpers");
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(discover_sql_files(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn test_missing_directory_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = discover_sql_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, GenerationError::ListCategory { .. }));
    }
}
