use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{task::Task, task::TaskId, user::UserId};

pub type ProjectId = Uuid;

/// Top-level container of tasks and members. A project exclusively owns
/// its tasks; a task never outlives or leaves its project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub members: Vec<UserId>,
    pub tasks: Vec<Task>,
}

impl Project {
    /// New project with an empty task list and the owner as sole member.
    pub fn new(name: String, description: String, color: String, owner: UserId) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            color,
            created_at: Utc::now(),
            members: vec![owner],
            tasks: Vec::new(),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn contains_task(&self, id: TaskId) -> bool {
        self.tasks.iter().any(|t| t.id == id)
    }

    /// Remove and return the task with the given id, if present.
    pub fn remove_task(&mut self, id: TaskId) -> Option<Task> {
        let position = self.tasks.iter().position(|t| t.id == id)?;
        Some(self.tasks.remove(position))
    }
}
