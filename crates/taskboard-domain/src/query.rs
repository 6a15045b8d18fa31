//! Read-side helpers for laying a project out as board columns.

use crate::{
    project::Project,
    task::{Task, TaskStatus},
};

/// Tasks in the given status column, in stored order.
pub fn tasks_by_status(project: &Project, status: TaskStatus) -> Vec<&Task> {
    project
        .tasks
        .iter()
        .filter(|task| task.status == status)
        .collect()
}

/// Task count per column, in board order.
pub fn status_counts(project: &Project) -> [(TaskStatus, usize); 4] {
    TaskStatus::ALL.map(|status| {
        let count = project
            .tasks
            .iter()
            .filter(|task| task.status == status)
            .count();
        (status, count)
    })
}
