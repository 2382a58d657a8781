//! In-memory repository implementation - used as a test double when the
//! document store is not in play.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use quill_core::domain::{BlogPatch, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

/// In-memory blog repository using a simple HashMap with async RwLock.
///
/// Note: Data is lost on process restart.
pub struct InMemoryBlogRepository {
    store: RwLock<HashMap<Uuid, BlogPost>>,
}

impl InMemoryBlogRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(HashMap::new()),
        }
    }
}

impl Default for InMemoryBlogRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BlogRepository for InMemoryBlogRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let mut store = self.store.write().await;
        store.insert(post.id, post.clone());
        Ok(post)
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.values().cloned().collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let store = self.store.read().await;
        Ok(store.get(&id).cloned())
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        patch.validate()?;

        let mut store = self.store.write().await;
        match store.get_mut(&id) {
            Some(post) => {
                post.merge(patch);
                Ok(Some(post.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let mut store = self.store.write().await;
        Ok(store.remove(&id))
    }
}
