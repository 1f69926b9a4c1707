/// A type-safe wrapper for the tasks of a pipeline that depend on nothing.
///
/// Entry points are the tasks the host runtime can start immediately. A generated
/// pipeline is a single chain, so it has exactly one entry point (or none, when no
/// SQL files were found); validation relies on that.
///
/// # Examples
///
/// ```
/// use snowflake_objects_dag::config::EntryPoints;
///
/// let entry_points = EntryPoints::from(vec!["file_formats.csv_format".to_string()]);
///
/// assert_eq!(entry_points.len(), 1);
/// let ids: Vec<String> = entry_points.into();
/// assert_eq!(ids, vec!["file_formats.csv_format".to_string()]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryPoints(pub Vec<String>);

impl EntryPoints {
    /// Get iterator over entrypoints
    pub fn iter(&self) -> impl Iterator<Item = &String> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for EntryPoints {
    fn from(entrypoints: Vec<String>) -> Self {
        Self(entrypoints)
    }
}

impl From<EntryPoints> for Vec<String> {
    fn from(value: EntryPoints) -> Self {
        value.0
    }
}
