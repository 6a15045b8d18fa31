use taskboard_core::{TaskboardError, TaskboardResult};
use taskboard_domain::{seed, Comment, Project, StoreOperations, TaskId};

use crate::{
    selection::BoardSelection,
    session::{AuthSession, DemoAuthenticator},
    store::ProjectStore,
};

/// Session-aware facade over the store, auth session, and board
/// selection. Operations that need an identity (project creation,
/// commenting) take it from the session here, so the store contract
/// stays explicit about whose identity it stamps.
pub struct Workspace {
    pub store: ProjectStore,
    pub session: AuthSession,
    pub selection: BoardSelection,
}

impl Workspace {
    pub fn new(store: ProjectStore, session: AuthSession) -> Self {
        Self {
            store,
            session,
            selection: BoardSelection::new(),
        }
    }

    /// Seeded workspace: demo projects loaded, first project selected,
    /// demo user already logged in.
    pub fn demo() -> Self {
        let team = seed::demo_team();
        let user = team[0].clone();
        let projects = seed::demo_projects(&team);

        let mut selection = BoardSelection::new();
        selection.select_project(projects.first().map(|p| p.id));

        Self {
            store: ProjectStore::with_projects(projects),
            session: AuthSession::with_user(
                Box::new(DemoAuthenticator::new(user.clone())),
                user,
            ),
            selection,
        }
    }

    pub async fn login(&mut self, email: &str, password: &str) -> TaskboardResult<()> {
        self.session.login(email, password).await?;
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.logout();
    }

    pub fn current_project(&self) -> Option<Project> {
        self.selection
            .current_project()
            .and_then(|id| self.store.get_project(id))
    }

    /// Create a project owned by the session user.
    pub fn create_project(
        &mut self,
        name: String,
        description: String,
        color: String,
    ) -> TaskboardResult<Project> {
        let owner = self.session.user().ok_or(TaskboardError::NoSession)?.id;
        self.store.create_project(name, description, color, owner)
    }

    /// Add a comment stamped with the session user's identity.
    /// Whitespace-only content is rejected here, not in the store; the
    /// store appends whatever it is handed.
    pub fn add_comment(&mut self, task_id: TaskId, content: &str) -> TaskboardResult<Comment> {
        let content = content.trim();
        if content.is_empty() {
            return Err(TaskboardError::Validation(
                "comment content is empty".to_string(),
            ));
        }
        let author = self
            .session
            .user()
            .ok_or(TaskboardError::NoSession)?
            .clone();
        self.store.add_comment(task_id, content.to_string(), &author)
    }

    /// Delete-task confirmation gate. Declining leaves state untouched
    /// and returns `Ok(false)`; confirming deletes and closes the
    /// task's detail modal if it was open.
    pub fn delete_task_confirmed(
        &mut self,
        task_id: TaskId,
        confirmed: bool,
    ) -> TaskboardResult<bool> {
        if !confirmed {
            return Ok(false);
        }
        self.store.delete_task(task_id)?;
        if self.selection.open_task() == Some(task_id) {
            self.selection.close_task_detail();
        }
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_demo_workspace_starts_logged_in_with_selection() {
        let workspace = Workspace::demo();

        assert!(workspace.session.is_authenticated());
        let current = workspace.current_project().unwrap();
        assert_eq!(current.name, "Website Redesign");
        assert_eq!(current.tasks.len(), 4);
    }

    #[test]
    fn test_create_project_uses_session_user_as_owner() {
        let mut workspace = Workspace::demo();
        let owner = workspace.session.user().unwrap().id;

        let project = workspace
            .create_project("Ops".to_string(), "desc".to_string(), "#000000".to_string())
            .unwrap();

        assert_eq!(project.members, vec![owner]);
        assert!(project.tasks.is_empty());
    }

    #[test]
    fn test_create_project_without_session_fails() {
        let mut workspace = Workspace::demo();
        workspace.logout();

        let result = workspace.create_project(
            "Ops".to_string(),
            String::new(),
            "#000000".to_string(),
        );
        assert!(matches!(result, Err(TaskboardError::NoSession)));
    }

    #[test]
    fn test_blank_comment_is_rejected_before_the_store() {
        let mut workspace = Workspace::demo();
        let task_id = workspace.current_project().unwrap().tasks[0].id;

        let result = workspace.add_comment(task_id, "   \n  ");
        assert!(matches!(result, Err(TaskboardError::Validation(_))));

        let task = workspace.store.get_task(task_id).unwrap();
        assert!(task.comments.is_empty());
    }

    #[test]
    fn test_comment_is_stamped_with_session_identity() {
        let mut workspace = Workspace::demo();
        let task_id = workspace.current_project().unwrap().tasks[0].id;
        let user = workspace.session.user().unwrap().clone();

        let comment = workspace.add_comment(task_id, "  hello  ").unwrap();

        assert_eq!(comment.content, "hello");
        assert_eq!(comment.author_id, user.id);
        assert_eq!(comment.author_name, user.name);
    }

    #[test]
    fn test_declined_delete_leaves_state_untouched() {
        let mut workspace = Workspace::demo();
        let task_id = workspace.current_project().unwrap().tasks[0].id;
        workspace.selection.open_task_detail(task_id);

        let deleted = workspace.delete_task_confirmed(task_id, false).unwrap();

        assert!(!deleted);
        assert!(workspace.store.get_task(task_id).is_some());
        assert_eq!(workspace.selection.open_task(), Some(task_id));
    }

    #[test]
    fn test_confirmed_delete_closes_open_modal() {
        let mut workspace = Workspace::demo();
        let task_id = workspace.current_project().unwrap().tasks[0].id;
        workspace.selection.open_task_detail(task_id);

        let deleted = workspace.delete_task_confirmed(task_id, true).unwrap();

        assert!(deleted);
        assert!(workspace.store.get_task(task_id).is_none());
        assert_eq!(workspace.selection.open_task(), None);
    }

    #[tokio::test]
    async fn test_login_after_logout_restores_a_session() {
        let mut workspace = Workspace::demo();
        workspace.logout();
        assert!(!workspace.session.is_authenticated());

        workspace.login("emaya@company", "password").await.unwrap();
        assert!(workspace.session.is_authenticated());
    }

    #[test]
    fn test_no_project_selected_is_a_valid_state() {
        let mut workspace = Workspace::demo();
        workspace.selection.select_project(None);
        assert!(workspace.current_project().is_none());
    }

    #[test]
    fn test_unknown_task_comment_reports_not_found() {
        let mut workspace = Workspace::demo();
        let result = workspace.add_comment(Uuid::new_v4(), "hello");
        assert!(matches!(result, Err(TaskboardError::NotFound(_))));
    }
}
