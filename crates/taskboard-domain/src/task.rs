use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::{attachment::Attachment, comment::Comment, field_update::FieldUpdate, user::UserId};

pub type TaskId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Review,
    Done,
}

impl TaskStatus {
    /// Board columns in display order.
    pub const ALL: [TaskStatus; 4] = [
        TaskStatus::Todo,
        TaskStatus::InProgress,
        TaskStatus::Review,
        TaskStatus::Done,
    ];
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskStatus::Todo => "To Do",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Review => "Review",
            TaskStatus::Done => "Done",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskPriority {
    Low,
    Medium,
    High,
    Urgent,
}

impl fmt::Display for TaskPriority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TaskPriority::Low => "Low",
            TaskPriority::Medium => "Medium",
            TaskPriority::High => "High",
            TaskPriority::Urgent => "Urgent",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<UserId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub comments: Vec<Comment>,
    pub attachments: Vec<Attachment>,
    pub labels: Vec<String>,
}

/// Caller-supplied fields for a new task. Identifier, timestamps, and
/// the comment/attachment lists are generated at creation.
#[derive(Debug, Clone)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: TaskPriority,
    pub assignee_id: Option<UserId>,
    pub due_date: Option<NaiveDate>,
    pub labels: Vec<String>,
}

impl TaskDraft {
    pub fn new(title: impl Into<String>, status: TaskStatus, priority: TaskPriority) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            status,
            priority,
            assignee_id: None,
            due_date: None,
            labels: Vec::new(),
        }
    }
}

/// Partial update for a task. Fields left at their defaults are not
/// touched; the statically enumerable field set replaces the source's
/// open-ended merge map.
#[derive(Debug, Clone, Default)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<TaskPriority>,
    pub assignee_id: FieldUpdate<UserId>,
    pub due_date: FieldUpdate<NaiveDate>,
    pub labels: Option<Vec<String>>,
    pub comments: Option<Vec<Comment>>,
    pub attachments: Option<Vec<Attachment>>,
}

impl TaskUpdate {
    pub fn status(status: TaskStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }
}

impl Task {
    pub fn new(draft: TaskDraft) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title: draft.title,
            description: draft.description,
            status: draft.status,
            priority: draft.priority,
            assignee_id: draft.assignee_id,
            due_date: draft.due_date,
            created_at: now,
            updated_at: now,
            comments: Vec::new(),
            attachments: Vec::new(),
            labels: draft.labels,
        }
    }

    /// Apply a partial update. `updated_at` is refreshed on every call;
    /// `created_at` never changes after construction.
    pub fn update(&mut self, updates: TaskUpdate) {
        if let Some(title) = updates.title {
            self.title = title;
        }
        if let Some(description) = updates.description {
            self.description = description;
        }
        if let Some(status) = updates.status {
            self.status = status;
        }
        if let Some(priority) = updates.priority {
            self.priority = priority;
        }
        updates.assignee_id.apply_to(&mut self.assignee_id);
        updates.due_date.apply_to(&mut self.due_date);
        if let Some(labels) = updates.labels {
            self.labels = labels;
        }
        if let Some(comments) = updates.comments {
            self.comments = comments;
        }
        if let Some(attachments) = updates.attachments {
            self.attachments = attachments;
        }
        self.updated_at = Utc::now();
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        match self.due_date {
            Some(due) => due < today,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task() -> Task {
        Task::new(TaskDraft::new(
            "Design wireframes",
            TaskStatus::Todo,
            TaskPriority::High,
        ))
    }

    #[test]
    fn test_update_applies_fields_and_bumps_updated_at() {
        let mut task = task();
        let before = task.updated_at;
        let created = task.created_at;

        task.update(TaskUpdate {
            title: Some("Revise wireframes".to_string()),
            priority: Some(TaskPriority::Urgent),
            ..Default::default()
        });

        assert_eq!(task.title, "Revise wireframes");
        assert_eq!(task.priority, TaskPriority::Urgent);
        assert_eq!(task.status, TaskStatus::Todo);
        assert!(task.updated_at >= before);
        assert_eq!(task.created_at, created);
    }

    #[test]
    fn test_update_clears_assignee_and_due_date() {
        let mut task = task();
        task.assignee_id = Some(Uuid::new_v4());
        task.due_date = NaiveDate::from_ymd_opt(2024, 1, 20);

        task.update(TaskUpdate {
            assignee_id: FieldUpdate::Clear,
            due_date: FieldUpdate::Clear,
            ..Default::default()
        });

        assert_eq!(task.assignee_id, None);
        assert_eq!(task.due_date, None);
    }

    #[test]
    fn test_status_update_shorthand() {
        let mut task = task();
        task.update(TaskUpdate::status(TaskStatus::Done));
        assert_eq!(task.status, TaskStatus::Done);
    }

    #[test]
    fn test_is_overdue() {
        let mut task = task();
        let today = NaiveDate::from_ymd_opt(2024, 1, 25).unwrap();

        assert!(!task.is_overdue(today));

        task.due_date = NaiveDate::from_ymd_opt(2024, 1, 20);
        assert!(task.is_overdue(today));

        task.due_date = NaiveDate::from_ymd_opt(2024, 1, 25);
        assert!(!task.is_overdue(today));
    }

    #[test]
    fn test_status_serializes_kebab_case() {
        let status = TaskStatus::InProgress;
        let json = serde_json::to_string(&status).unwrap();
        assert_eq!(json, "\"in-progress\"");

        let parsed: TaskStatus = serde_json::from_str("\"todo\"").unwrap();
        assert_eq!(parsed, TaskStatus::Todo);
    }

    #[test]
    fn test_display_labels() {
        assert_eq!(TaskStatus::Todo.to_string(), "To Do");
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
        assert_eq!(TaskPriority::Urgent.to_string(), "Urgent");
    }
}
