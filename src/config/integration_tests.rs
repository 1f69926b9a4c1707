#[cfg(test)]
mod integration_tests {
    use crate::backends::file::{FileConnections, FileVariables};
    use crate::config::{load_config, ProjectLayout};
    use crate::generator::PipelineGenerator;

    /// Test that the demo project configuration loads with its documented values
    #[test]
    fn test_demo_config_loading() {
        let config = load_config("demos/warehouse/snowflake_ci.yml").unwrap();

        assert_eq!(config.conn_id(), "snowflake_default");
        assert_eq!(config.owner(), "data-platform");
        assert_eq!(config.tags(), vec!["snowflake", "objects", "data-platform"]);
        assert_eq!(config.param_names(), ["env", "retention_days"]);
    }

    /// Test the demo connections and variables files
    #[test]
    fn test_demo_resolver_files() {
        use crate::traits::{ConnectionResolver, VariableResolver};

        let connections = FileConnections::load("demos/connections.yml").unwrap();
        let variables = FileVariables::load("demos/variables.yml").unwrap();

        let conn = connections.connection("snowflake_default").unwrap();
        assert_eq!(conn.database().unwrap(), "ANALYTICS");
        assert_eq!(variables.variable("env"), Some("dev".to_string()));
        assert_eq!(variables.variable("retention_days"), Some("30".to_string()));
    }

    /// Test generating the whole demo project end to end
    #[test]
    fn test_demo_project_generation() {
        let connections = FileConnections::load("demos/connections.yml").unwrap();
        let variables = FileVariables::load("demos/variables.yml").unwrap();
        let generator = PipelineGenerator::new(connections, variables);

        let definition = generator
            .generate(&ProjectLayout::new("demos/warehouse/core"))
            .unwrap();

        assert_eq!(definition.pipeline_id, "warehouse_core");
        assert_eq!(
            definition.execution_order(),
            vec![
                "file_formats.csv_format",
                "stages.raw_stage",
                "tables.01_customers",
                "tables.02_orders",
                "views.customer_orders",
                "procedures.refresh_orders",
                "dml.seed_customers",
            ]
        );

        let (_, first) = definition.tasks().next().unwrap();
        assert!(first.sql.starts_with("USE ANALYTICS.core;\n"));
        assert_eq!(first.params["env"], "dev");
        assert_eq!(first.params["schema_name"], "ANALYTICS.core");

        let (_, procedure) = definition
            .tasks()
            .find(|(_, t)| t.task_id == "refresh_orders")
            .unwrap();
        assert!(!procedure.schema_injected);
    }
}
