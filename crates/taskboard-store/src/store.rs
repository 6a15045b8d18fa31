use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{
    Comment, Project, ProjectId, StoreOperations, Task, TaskDraft, TaskId, TaskStatus, TaskUpdate,
    User, UserId,
};

/// The authoritative owner of all project and task state.
///
/// There is no ambient or global instance: callers hold the store and
/// pass it by reference. All mutation enters through [`StoreOperations`]
/// and runs to completion before control returns, so every reader
/// observes either the prior snapshot or the new one, never a partial
/// application.
#[derive(Debug, Default)]
pub struct ProjectStore {
    projects: Vec<Project>,
}

impl ProjectStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_projects(projects: Vec<Project>) -> Self {
        Self { projects }
    }

    fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.projects.iter_mut().find_map(|p| p.task_mut(id))
    }

    fn task_ref(&self, id: TaskId) -> Option<&Task> {
        self.projects.iter().find_map(|p| p.task(id))
    }
}

impl StoreOperations for ProjectStore {
    fn create_project(
        &mut self,
        name: String,
        description: String,
        color: String,
        owner: UserId,
    ) -> TaskboardResult<Project> {
        let project = Project::new(name, description, color, owner);
        tracing::info!("Creating project: {} (id: {})", project.name, project.id);
        self.projects.push(project.clone());
        Ok(project)
    }

    fn list_projects(&self) -> Vec<Project> {
        self.projects.clone()
    }

    fn get_project(&self, id: ProjectId) -> Option<Project> {
        self.projects.iter().find(|p| p.id == id).cloned()
    }

    fn create_task(&mut self, project_id: ProjectId, draft: TaskDraft) -> TaskboardResult<Task> {
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id == project_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("Project {}", project_id)))?;

        let task = Task::new(draft);
        tracing::info!(
            "Creating task: {} (id: {}) in project {}",
            task.title,
            task.id,
            project.name
        );
        project.tasks.push(task.clone());
        Ok(task)
    }

    fn get_task(&self, id: TaskId) -> Option<Task> {
        self.task_ref(id).cloned()
    }

    fn update_task(&mut self, id: TaskId, updates: TaskUpdate) -> TaskboardResult<Task> {
        let task = self
            .task_mut(id)
            .ok_or_else(|| TaskboardError::NotFound(format!("Task {}", id)))?;
        task.update(updates);
        tracing::debug!("Updated task {}", id);
        Ok(task.clone())
    }

    fn delete_task(&mut self, id: TaskId) -> TaskboardResult<()> {
        for project in &mut self.projects {
            if let Some(task) = project.remove_task(id) {
                tracing::info!("Deleted task: {} (id: {})", task.title, task.id);
                return Ok(());
            }
        }
        Err(TaskboardError::NotFound(format!("Task {}", id)))
    }

    fn move_task(&mut self, id: TaskId, new_status: TaskStatus) -> TaskboardResult<Task> {
        tracing::debug!("Moving task {} to {}", id, new_status);
        self.update_task(id, TaskUpdate::status(new_status))
    }

    fn add_comment(
        &mut self,
        task_id: TaskId,
        content: String,
        author: &User,
    ) -> TaskboardResult<Comment> {
        let task = self
            .task_ref(task_id)
            .ok_or_else(|| TaskboardError::NotFound(format!("Task {}", task_id)))?;

        let comment = Comment::new(content, author.id, author.name.clone());
        let mut comments = task.comments.clone();
        comments.push(comment.clone());

        // Routed through update_task so the updated_at refresh happens
        // in exactly one place.
        self.update_task(
            task_id,
            TaskUpdate {
                comments: Some(comments),
                ..Default::default()
            },
        )?;
        Ok(comment)
    }
}
