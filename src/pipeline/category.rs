// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed grouping of SQL objects. The declaration order is the execution order:
/// objects a later category refers to are always created by an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    FileFormats,
    Stages,
    Tables,
    Views,
    Sequences,
    Streams,
    Functions,
    Procedures,
    Tasks,
    Dml,
}

impl Category {
    /// All categories in execution order.
    pub const ALL: [Category; 10] = [
        Category::FileFormats,
        Category::Stages,
        Category::Tables,
        Category::Views,
        Category::Sequences,
        Category::Streams,
        Category::Functions,
        Category::Procedures,
        Category::Tasks,
        Category::Dml,
    ];

    /// Subdirectory name under the base directory, also used as the group id.
    pub fn dir_name(&self) -> &'static str {
        match self {
            Category::FileFormats => "file_formats",
            Category::Stages => "stages",
            Category::Tables => "tables",
            Category::Views => "views",
            Category::Sequences => "sequences",
            Category::Streams => "streams",
            Category::Functions => "functions",
            Category::Procedures => "procedures",
            Category::Tasks => "tasks",
            Category::Dml => "dml",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dir_name())
    }
}
