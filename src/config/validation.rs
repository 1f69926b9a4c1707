//! Validation of generated pipeline definitions.
//!
//! Generation builds its graph from a fixed category list and sorted file names,
//! so a well-behaved run always yields a single linear chain. Validation checks
//! that invariant, and the identifier rules of the host runtime, before a
//! definition is handed on. All checks run; every error found is reported.
//!
//! # Checks
//!
//! 1. **Identifiers**: pipeline and task ids must be non-empty, at most 250
//!    characters, and use only word characters, `-` and `.`. The qualified id
//!    `<group>.<task>` is held to the same length limit.
//! 2. **Uniqueness**: qualified task ids must be unique.
//! 3. **Linearity**: exactly one entry point, at most one dependent and one
//!    upstream per task, and every task reachable from the entry point.
//!
//! # Example
//!
//! ```rust
//! use snowflake_objects_dag::config::validate_pipeline;
//! use snowflake_objects_dag::pipeline::{
//!     Category, DefaultArgs, PipelineDefinition, Schedule, StartDate, TaskGroup,
//! };
//! use std::path::PathBuf;
//!
//! let definition = PipelineDefinition {
//!     pipeline_id: "project_schema".to_string(),
//!     description: String::new(),
//!     doc_md: String::new(),
//!     schedule: Schedule::Manual,
//!     start_date: StartDate { days_ago: 1 },
//!     tags: vec![],
//!     default_args: DefaultArgs {
//!         owner: "owner".to_string(),
//!         snowflake_conn_id: "conn".to_string(),
//!     },
//!     template_searchpath: PathBuf::from("/srv/project/schema"),
//!     groups: vec![TaskGroup { group_id: Category::Tables, tasks: vec![] }],
//! };
//!
//! assert!(validate_pipeline(&definition).is_ok());
//! ```

use std::collections::HashSet;

use crate::config::consts::MAX_IDENTIFIER_LENGTH;
use crate::errors::ValidationError;
use crate::observability::messages::validation::{BrokenChainDetected, InvalidIdentifierDetected};
use crate::observability::messages::StructuredLog;
use crate::pipeline::PipelineDefinition;

/// Run every check against `definition`.
///
/// # Returns
///
/// * `Ok(())` - the definition is a single valid chain
/// * `Err(Vec<ValidationError>)` - every problem found
pub fn validate_pipeline(definition: &PipelineDefinition) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    errors.extend(validate_identifiers(definition));
    errors.extend(validate_unique_task_ids(definition));

    // Linearity is only meaningful once ids are unique
    if errors
        .iter()
        .all(|e| !matches!(e, ValidationError::DuplicateTaskId { .. }))
    {
        if let Err(e) = validate_linear_chain(definition) {
            errors.push(e);
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_identifiers(definition: &PipelineDefinition) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut check = |kind: &'static str, identifier: &str| {
        if let Some(reason) = identifier_problem(identifier) {
            InvalidIdentifierDetected {
                kind,
                identifier,
                reason: &reason,
            }
            .log();
            errors.push(ValidationError::InvalidIdentifier {
                kind,
                identifier: identifier.to_string(),
                reason,
            });
        }
    };

    check("pipeline", &definition.pipeline_id);
    for group in &definition.groups {
        for task in &group.tasks {
            check("task", &task.task_id);
            let qualified = task.qualified_id(group.group_id);
            if qualified.chars().count() > MAX_IDENTIFIER_LENGTH {
                check("qualified task", &qualified);
            }
        }
    }

    errors
}

/// Why the host runtime would reject `identifier`, if it would.
pub fn identifier_problem(identifier: &str) -> Option<String> {
    if identifier.is_empty() {
        return Some("must not be empty".to_string());
    }

    let length = identifier.chars().count();
    if length > MAX_IDENTIFIER_LENGTH {
        return Some(format!(
            "is {} characters long, the limit is {}",
            length, MAX_IDENTIFIER_LENGTH
        ));
    }

    let bad: Vec<char> = identifier
        .chars()
        .filter(|&c| !(c.is_alphanumeric() || c == '_' || c == '-' || c == '.'))
        .collect();
    if !bad.is_empty() {
        let shown: String = bad.iter().map(|c| format!("{:?}", c)).collect::<Vec<_>>().join(", ");
        return Some(format!("contains unsupported characters: {}", shown));
    }

    None
}

fn validate_unique_task_ids(definition: &PipelineDefinition) -> Vec<ValidationError> {
    let mut seen = HashSet::new();
    let mut reported = HashSet::new();
    let mut errors = Vec::new();

    for id in definition.execution_order() {
        if !seen.insert(id.clone()) && reported.insert(id.clone()) {
            errors.push(ValidationError::DuplicateTaskId { task_id: id });
        }
    }

    errors
}

fn validate_linear_chain(definition: &PipelineDefinition) -> Result<(), ValidationError> {
    let graph = definition.dependency_graph();
    if graph.is_empty() {
        return Ok(());
    }

    let broken = |detail: String| {
        BrokenChainDetected {
            pipeline_id: &definition.pipeline_id,
            detail: &detail,
        }
        .log();
        ValidationError::BrokenChain { detail }
    };

    let entry_points = definition.entry_points();
    if entry_points.len() != 1 {
        return Err(broken(format!(
            "expected exactly one entry point, found {}: [{}]",
            entry_points.len(),
            entry_points.iter().cloned().collect::<Vec<_>>().join(", ")
        )));
    }

    for id in definition.execution_order() {
        let dependents = graph.get_dependents(&id).map(Vec::len).unwrap_or(0);
        if dependents > 1 {
            return Err(broken(format!("'{}' fans out to {} tasks", id, dependents)));
        }
        let upstream = graph.upstream_count(&id);
        if upstream > 1 {
            return Err(broken(format!("'{}' has {} upstream tasks", id, upstream)));
        }
    }

    // Walk from the entry point; a chain visits every task exactly once
    let mut visited = HashSet::new();
    let mut current = entry_points.iter().next().cloned();
    while let Some(id) = current {
        if !visited.insert(id.clone()) {
            return Err(broken(format!("cycle through '{}'", id)));
        }
        current = graph
            .get_dependents(&id)
            .and_then(|dependents| dependents.first())
            .cloned();
    }

    if visited.len() != graph.len() {
        let mut unreachable: Vec<&String> = graph.keys().filter(|k| !visited.contains(*k)).collect();
        unreachable.sort();
        return Err(broken(format!(
            "unreachable tasks: [{}]",
            unreachable.iter().map(|s| s.as_str()).collect::<Vec<_>>().join(", ")
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pipeline::definition::tests::definition;
    use crate::pipeline::Category;

    #[test]
    fn test_valid_chain_passes() {
        let def = definition(vec![
            (Category::FileFormats, vec!["csv"]),
            (Category::Tables, vec!["01_a", "02_b"]),
            (Category::Dml, vec!["load"]),
        ]);

        assert_eq!(validate_pipeline(&def), Ok(()));
    }

    #[test]
    fn test_empty_pipeline_passes() {
        let def = definition(vec![]);
        assert_eq!(validate_pipeline(&def), Ok(()));
    }

    #[test]
    fn test_duplicate_task_ids() {
        let def = definition(vec![(Category::Tables, vec!["a", "b", "a"])]);

        let errors = validate_pipeline(&def).unwrap_err();
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateTaskId {
                task_id: "tables.a".to_string()
            }]
        );
    }

    #[test]
    fn test_same_task_id_in_different_groups_is_fine() {
        let def = definition(vec![
            (Category::Tables, vec!["orders"]),
            (Category::Views, vec!["orders"]),
        ]);

        assert!(validate_pipeline(&def).is_ok());
    }

    #[test]
    fn test_invalid_identifiers_table_driven() {
        struct TestCase {
            name: &'static str,
            task_id: String,
            reason_fragment: &'static str,
        }

        let test_cases = vec![
            TestCase {
                name: "empty",
                task_id: String::new(),
                reason_fragment: "must not be empty",
            },
            TestCase {
                name: "space",
                task_id: "create table".to_string(),
                reason_fragment: "unsupported characters: ' '",
            },
            TestCase {
                name: "slash",
                task_id: "v1/orders".to_string(),
                reason_fragment: "unsupported characters: '/'",
            },
            TestCase {
                name: "too long",
                task_id: "x".repeat(MAX_IDENTIFIER_LENGTH + 1),
                reason_fragment: "the limit is 250",
            },
        ];

        for case in test_cases {
            let def = definition(vec![(Category::Tables, vec![case.task_id.as_str()])]);
            let errors = validate_pipeline(&def).unwrap_err();

            assert!(
                errors.iter().any(|e| matches!(
                    e,
                    ValidationError::InvalidIdentifier { kind: "task", reason, .. }
                        if reason.contains(case.reason_fragment)
                )),
                "case '{}' produced {:?}",
                case.name,
                errors
            );
        }
    }

    #[test]
    fn test_identifier_problem_accepts_common_names() {
        for id in [
            "01_create_customers",
            "stage-raw",
            "Ünïcode_ok",
            "V2",
            "V1.1__create_orders",
            "2024.01.01_seed",
            "project.schema",
        ] {
            assert_eq!(identifier_problem(id), None, "{}", id);
        }
    }

    #[test]
    fn test_invalid_pipeline_id() {
        let mut def = definition(vec![(Category::Tables, vec!["a"])]);
        def.pipeline_id = "my project_schema".to_string();

        let errors = validate_pipeline(&def).unwrap_err();
        assert!(matches!(
            &errors[0],
            ValidationError::InvalidIdentifier { kind: "pipeline", .. }
        ));
    }

    #[test]
    fn test_empty_group_does_not_break_chain() {
        let def = definition(vec![
            (Category::Tables, vec!["a"]),
            (Category::Views, vec![]),
            (Category::Dml, vec!["d"]),
        ]);

        assert!(validate_pipeline(&def).is_ok());
        assert_eq!(def.dependencies().len(), 1);
    }
}
