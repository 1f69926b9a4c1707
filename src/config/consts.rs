/// Configuration file looked up next to the base directory
pub const CONFIG_FILE_NAME: &str = "snowflake_ci.yml";
/// Documentation file looked up inside the base directory
pub const DESCRIPTION_FILE_NAME: &str = "README.md";
/// Connection id used when the config does not name one
pub const DEFAULT_CONNECTION: &str = "DEFAULT_CONNECTION";
/// Owner used when the config does not name one
pub const DEFAULT_OWNER: &str = "DEFAULT_OWNER";
/// Template parameter carrying the resolved `<database>.<schema>`
pub const SCHEMA_NAME_PARAM: &str = "schema_name";
/// Connection extra holding the target database
pub const DATABASE_EXTRA: &str = "database";
/// Suffix a file must carry to become a task
pub const SQL_EXTENSION: &str = ".sql";
/// Keyword whose presence (case-insensitive) marks a file as selecting its own schema
pub const USE_KEYWORD: &str = "USE";
/// Description attached to every generated pipeline
pub const PIPELINE_DESCRIPTION: &str = "Run SQL files in Snowflake, organized by subdirectories";
/// Generated pipelines become eligible to run this many days before generation
pub const START_DAYS_AGO: u32 = 1;
/// Longest identifier the host runtime accepts
pub const MAX_IDENTIFIER_LENGTH: usize = 250;
