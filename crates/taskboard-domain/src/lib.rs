pub mod attachment;
pub mod comment;
pub mod field_update;
pub mod operations;
pub mod project;
pub mod query;
pub mod seed;
pub mod task;
pub mod user;

pub use attachment::{Attachment, AttachmentId};
pub use comment::{Comment, CommentId};
pub use field_update::FieldUpdate;
pub use operations::StoreOperations;
pub use project::{Project, ProjectId};
pub use task::{Task, TaskDraft, TaskId, TaskPriority, TaskStatus, TaskUpdate};
pub use user::{User, UserId, UserRole};
