// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;

use crate::config::consts::SCHEMA_NAME_PARAM;
use crate::observability::messages::generator::{ParameterUnset, ReservedParameterIgnored};
use crate::observability::messages::StructuredLog;
use crate::traits::VariableResolver;

/// Look up every configured parameter. Unset parameters resolve to `""`.
pub fn resolve_params<V: VariableResolver + ?Sized>(
    names: &[String],
    variables: &V,
) -> BTreeMap<String, String> {
    names
        .iter()
        .map(|name| {
            let value = variables.variable(name).unwrap_or_else(|| {
                ParameterUnset { name: name.as_str() }.log();
                String::new()
            });
            (name.clone(), value)
        })
        .collect()
}

/// The parameter map every task receives: the resolved parameters plus
/// `schema_name`. A configured parameter named `schema_name` never overrides the
/// resolved schema.
pub fn merge_params(schema: &str, resolved: &BTreeMap<String, String>) -> BTreeMap<String, String> {
    if resolved.contains_key(SCHEMA_NAME_PARAM) {
        ReservedParameterIgnored {
            name: SCHEMA_NAME_PARAM,
            schema,
        }
        .log();
    }

    let mut merged = resolved.clone();
    merged.insert(SCHEMA_NAME_PARAM.to_string(), schema.to_string());
    merged
}
