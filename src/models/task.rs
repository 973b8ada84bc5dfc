use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The five board columns, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaskStatus {
    Todo,
    InProgress,
    InQa,
    Done,
    Deployed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::InQa => "In QA",
            TaskStatus::Done => "Done",
            TaskStatus::Deployed => "Deployed",
        }
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Todo,
            TaskStatus::InProgress,
            TaskStatus::InQa,
            TaskStatus::Done,
            TaskStatus::Deployed,
        ]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(title: String, description: String, status: TaskStatus) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            status,
            created_at: Utc::now(),
        }
    }

    pub fn update_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}
