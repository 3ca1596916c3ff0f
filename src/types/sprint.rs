//! Sprint task records and their closed classification enums

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Agile work item classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum TaskType {
    Epic,
    Story,
    Task,
    Bug,
}

impl fmt::Display for TaskType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Epic => "Epic",
            Self::Story => "Story",
            Self::Task => "Task",
            Self::Bug => "Bug",
        };
        write!(f, "{name}")
    }
}

/// Board column for a sprint task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
pub enum TaskStatus {
    #[default]
    Todo,
    #[serde(rename = "In Progress")]
    InProgress,
    Review,
    Done,
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Todo => "Todo",
            Self::InProgress => "In Progress",
            Self::Review => "Review",
            Self::Done => "Done",
        };
        write!(f, "{name}")
    }
}

/// A flat sprint work item. No parent/child epic linkage is enforced.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SprintTask {
    pub id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub task_type: TaskType,
    pub status: TaskStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignee: Option<String>,
}

/// Wire record for one sprint task as produced by the model.
///
/// The id is optional on the wire; the orchestrator guarantees batch-unique
/// ids before handing tasks to callers. The schema of this struct is
/// embedded in the sprint-planning prompt.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SprintTaskRecord {
    /// Stable id within the generated batch, e.g. "1"
    #[serde(default)]
    pub id: Option<String>,
    /// Short imperative task title
    pub title: String,
    /// Work item classification
    #[serde(rename = "type")]
    pub task_type: TaskType,
    /// Board column; defaults to Todo when omitted
    #[serde(default)]
    pub status: TaskStatus,
    /// Story point estimate
    #[serde(default)]
    pub points: Option<u32>,
    /// Suggested assignee
    #[serde(default)]
    pub assignee: Option<String>,
}

/// Sum of point estimates across a task list
pub fn total_points(tasks: &[SprintTask]) -> u32 {
    tasks.iter().filter_map(|t| t.points).sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_wire_names() {
        let json = serde_json::to_string(&TaskStatus::InProgress).expect("serialize");
        assert_eq!(json, "\"In Progress\"");
        let back: TaskStatus = serde_json::from_str("\"Todo\"").expect("deserialize");
        assert_eq!(back, TaskStatus::Todo);
    }

    #[test]
    fn test_record_defaults() {
        let record: SprintTaskRecord =
            serde_json::from_str(r#"{"title":"Build login","type":"Story"}"#).expect("parse");
        assert_eq!(record.status, TaskStatus::Todo);
        assert!(record.id.is_none());
        assert!(record.points.is_none());
    }

    #[test]
    fn test_total_points_skips_unestimated() {
        let tasks = vec![
            SprintTask {
                id: "1".to_string(),
                title: "a".to_string(),
                task_type: TaskType::Story,
                status: TaskStatus::Todo,
                points: Some(5),
                assignee: None,
            },
            SprintTask {
                id: "2".to_string(),
                title: "b".to_string(),
                task_type: TaskType::Bug,
                status: TaskStatus::Todo,
                points: None,
                assignee: None,
            },
        ];
        assert_eq!(total_points(&tasks), 5);
    }
}
