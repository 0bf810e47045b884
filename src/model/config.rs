use serde::{Deserialize, Serialize};

use super::sort::SortKey;

/// Settings from tasktrack.toml. Every key is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub tasks: TasksConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TasksConfig {
    /// Task file, relative to the working directory
    #[serde(default = "default_tasks_file")]
    pub file: String,
}

impl Default for TasksConfig {
    fn default() -> Self {
        TasksConfig {
            file: default_tasks_file(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_title")]
    pub title: String,
    /// Starting sort key until the view is changed with `tt sort`
    #[serde(default = "default_sort_by")]
    pub sort_by: SortKey,
    #[serde(default = "default_true")]
    pub grouped: bool,
    #[serde(default)]
    pub reversed: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            title: default_title(),
            sort_by: default_sort_by(),
            grouped: true,
            reversed: false,
        }
    }
}

fn default_tasks_file() -> String {
    "tasks.csv".to_string()
}

fn default_title() -> String {
    "TaskTracker".to_string()
}

fn default_sort_by() -> SortKey {
    SortKey::Priority
}

fn default_true() -> bool {
    true
}
