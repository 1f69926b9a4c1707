use std::collections::HashMap;

/// Newtype wrapper for a task graph: qualified task id -> ids of its dependents
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DependencyGraph(pub HashMap<String, Vec<String>>);

impl DependencyGraph {
    /// Create a new empty dependency graph
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Register a task with no dependents yet
    pub fn add_task(&mut self, task_id: String) {
        self.0.entry(task_id).or_default();
    }

    /// Record that `downstream` runs after `upstream`
    pub fn add_dependent(&mut self, upstream: &str, downstream: String) {
        self.0.entry(upstream.to_string()).or_default().push(downstream);
    }

    /// Get dependents for a task
    pub fn get_dependents(&self, task_id: &str) -> Option<&Vec<String>> {
        self.0.get(task_id)
    }

    /// Number of tasks that list `task_id` as a dependent
    pub fn upstream_count(&self, task_id: &str) -> usize {
        self.0
            .values()
            .filter(|dependents| dependents.iter().any(|d| d == task_id))
            .count()
    }

    /// Get all task IDs in the graph
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<HashMap<String, Vec<String>>> for DependencyGraph {
    fn from(graph: HashMap<String, Vec<String>>) -> Self {
        Self(graph)
    }
}

impl From<DependencyGraph> for HashMap<String, Vec<String>> {
    fn from(graph: DependencyGraph) -> Self {
        graph.0
    }
}
