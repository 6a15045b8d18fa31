use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::user::UserId;

pub type CommentId = Uuid;

/// A comment on a task. Immutable once created; there is no edit or
/// delete operation. The author name is denormalized so rendering does
/// not need a user lookup.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub content: String,
    pub author_id: UserId,
    pub author_name: String,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(content: String, author_id: UserId, author_name: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            content,
            author_id,
            author_name,
            created_at: Utc::now(),
        }
    }
}
