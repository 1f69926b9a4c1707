// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::config::consts::USE_KEYWORD;

/// Whether `sql` already selects its own schema.
///
/// This is a case-insensitive substring test for `USE`, so identifiers such as
/// `USERS` also count as a schema selection and suppress injection.
pub fn selects_schema(sql: &str) -> bool {
    sql.to_uppercase().contains(USE_KEYWORD)
}

/// The statement prepended to files that do not select a schema.
pub fn use_statement(schema: &str) -> String {
    format!("{} {};\n", USE_KEYWORD, schema)
}

/// Prepend a schema selection unless `sql` already has one. Returns the
/// resulting text and whether it was rewritten.
pub fn with_schema(sql: String, schema: &str) -> (String, bool) {
    if selects_schema(&sql) {
        (sql, false)
    } else {
        (use_statement(schema) + &sql, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_injects_when_missing() {
        let (sql, injected) = with_schema("CREATE TABLE t (id INT);".to_string(), "DB.core");

        assert!(injected);
        assert_eq!(sql, "USE DB.core;\nCREATE TABLE t (id INT);");
    }

    #[test]
    fn test_existing_statement_left_alone() {
        for original in [
            "USE SCHEMA DB.other;\nCREATE VIEW v AS SELECT 1;",
            "use db.other;\nselect 1;",
            "  Use Warehouse WH;\nSELECT 1;",
        ] {
            let (sql, injected) = with_schema(original.to_string(), "DB.core");
            assert!(!injected, "{}", original);
            assert_eq!(sql, original);
        }
    }

    #[test]
    fn test_substring_match_counts() {
        assert!(selects_schema("GRANT SELECT ON users TO ROLE r;"));
        assert!(!selects_schema("SELECT 1;"));
    }

    #[test]
    fn test_injects_exactly_once_into_empty_file() {
        let (sql, injected) = with_schema(String::new(), "DB.core");

        assert!(injected);
        assert_eq!(sql.matches("USE ").count(), 1);
        assert_eq!(sql, "USE DB.core;\n");
    }
}
