use taskboard_core::TaskboardResult;
use taskboard_domain::{ProjectId, StoreOperations, Task, TaskId, TaskStatus};

/// UI-facing selection state: which project is current, which task's
/// detail modal is open, which column's create-task modal is open, and
/// which task is mid-drag. The four slots are independent; nothing here
/// enforces mutual exclusion beyond what callers choose to do.
#[derive(Debug, Clone, Default)]
pub struct BoardSelection {
    current_project: Option<ProjectId>,
    open_task: Option<TaskId>,
    create_task_column: Option<TaskStatus>,
    drag: Option<TaskId>,
}

impl BoardSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current_project(&self) -> Option<ProjectId> {
        self.current_project
    }

    /// `None` is a valid state, rendered as an empty-state placeholder.
    pub fn select_project(&mut self, project: Option<ProjectId>) {
        self.current_project = project;
    }

    pub fn open_task(&self) -> Option<TaskId> {
        self.open_task
    }

    pub fn open_task_detail(&mut self, task: TaskId) {
        self.open_task = Some(task);
    }

    pub fn close_task_detail(&mut self) {
        self.open_task = None;
    }

    pub fn create_task_column(&self) -> Option<TaskStatus> {
        self.create_task_column
    }

    pub fn open_create_task(&mut self, column: TaskStatus) {
        self.create_task_column = Some(column);
    }

    pub fn close_create_task(&mut self) {
        self.create_task_column = None;
    }

    pub fn dragging(&self) -> Option<TaskId> {
        self.drag
    }

    /// Remember the dragged task. A second drag-start before a drop
    /// silently overwrites the slot; only one pointer gesture can be
    /// active at a time.
    pub fn begin_drag(&mut self, task: TaskId) {
        self.drag = Some(task);
    }

    /// Dropping outside a column abandons the gesture.
    pub fn cancel_drag(&mut self) {
        self.drag = None;
    }

    /// Finish the drag gesture on a column: read and clear the slot,
    /// then move the remembered task. With an empty slot this is a
    /// no-op returning `Ok(None)`.
    pub fn complete_drop(
        &mut self,
        ops: &mut dyn StoreOperations,
        column: TaskStatus,
    ) -> TaskboardResult<Option<Task>> {
        match self.drag.take() {
            Some(task_id) => ops.move_task(task_id, column).map(Some),
            None => Ok(None),
        }
    }
}
