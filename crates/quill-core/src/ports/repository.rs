use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{BlogPatch, BlogPost};
use crate::error::RepoError;

/// Blog repository - the store operations the HTTP layer consumes.
#[async_trait]
pub trait BlogRepository: Send + Sync {
    /// Persist a new post and return the stored record.
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError>;

    /// Return every stored post, in store order.
    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError>;

    /// Find a post by its unique id.
    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;

    /// Merge the provided fields into an existing post and return the
    /// post-update record. Provided required fields are re-validated.
    async fn update_by_id(
        &self,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Option<BlogPost>, RepoError>;

    /// Remove a post and return the removed record.
    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError>;
}
