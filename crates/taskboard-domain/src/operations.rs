use taskboard_core::TaskboardResult;

use crate::{
    comment::Comment,
    project::{Project, ProjectId},
    task::{Task, TaskDraft, TaskId, TaskStatus, TaskUpdate},
    user::{User, UserId},
};

/// Mutation and read contract between the store and its views.
/// Adding a method here forces every implementation to add it.
///
/// Reads return owned snapshots: a view renders from the clone it was
/// handed and never observes a mutation half-applied. Mutators return
/// the created or updated record, or `NotFound` for an unknown id —
/// the store itself is left untouched on a miss.
pub trait StoreOperations {
    // Project operations
    fn create_project(
        &mut self,
        name: String,
        description: String,
        color: String,
        owner: UserId,
    ) -> TaskboardResult<Project>;
    fn list_projects(&self) -> Vec<Project>;
    fn get_project(&self, id: ProjectId) -> Option<Project>;

    // Task operations
    fn create_task(&mut self, project_id: ProjectId, draft: TaskDraft) -> TaskboardResult<Task>;
    fn get_task(&self, id: TaskId) -> Option<Task>;
    fn update_task(&mut self, id: TaskId, updates: TaskUpdate) -> TaskboardResult<Task>;
    fn delete_task(&mut self, id: TaskId) -> TaskboardResult<()>;
    fn move_task(&mut self, id: TaskId, new_status: TaskStatus) -> TaskboardResult<Task>;

    // Comment operations
    fn add_comment(
        &mut self,
        task_id: TaskId,
        content: String,
        author: &User,
    ) -> TaskboardResult<Comment>;
}
