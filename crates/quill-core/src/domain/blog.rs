use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RepoError;

/// BlogPost entity - the persisted unit of data.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlogPost {
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl BlogPost {
    /// Create a new post with a fresh id and timestamps.
    pub fn new(title: String, body: String, author: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            title,
            body,
            author,
            created_at: now,
            updated_at: now,
        }
    }

    /// Merge a patch into this post. Fields absent from the patch keep their
    /// stored value; `updated_at` is touched, `id` and `created_at` never change.
    pub fn merge(&mut self, patch: BlogPatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(body) = patch.body {
            self.body = body;
        }
        if let Some(author) = patch.author {
            self.author = Some(author);
        }
        self.updated_at = Utc::now();
    }
}

/// Partial update over a post - any subset of the mutable fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BlogPatch {
    pub title: Option<String>,
    pub body: Option<String>,
    pub author: Option<String>,
}

impl BlogPatch {
    /// Re-check the required-field constraints for the fields this patch
    /// provides. A provided-but-empty `title` or `body` would leave the
    /// merged record invalid.
    pub fn validate(&self) -> Result<(), RepoError> {
        if matches!(self.title.as_deref(), Some("")) {
            return Err(RepoError::Constraint("title cannot be empty".to_string()));
        }
        if matches!(self.body.as_deref(), Some("")) {
            return Err(RepoError::Constraint("body cannot be empty".to_string()));
        }
        Ok(())
    }
}
