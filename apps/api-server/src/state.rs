//! Application state - shared across all handlers.

use std::sync::Arc;

use quill_core::domain::{BlogPatch, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;
use quill_infra::{MongoBlogRepository, Store, StoreConfig};

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub blogs: Arc<dyn BlogRepository>,
}

/// Repository installed when the store client cannot be built at startup.
/// Every call fails with a connection error; the process stays up.
pub struct UnavailableBlogRepository {
    reason: String,
}

impl UnavailableBlogRepository {
    fn unavailable(&self) -> RepoError {
        tracing::warn!("Store client unavailable - failing request");
        RepoError::Connection(self.reason.clone())
    }
}

#[async_trait::async_trait]
impl BlogRepository for UnavailableBlogRepository {
    async fn create(&self, _post: BlogPost) -> Result<BlogPost, RepoError> {
        Err(self.unavailable())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        Err(self.unavailable())
    }

    async fn find_by_id(&self, _id: uuid::Uuid) -> Result<Option<BlogPost>, RepoError> {
        Err(self.unavailable())
    }

    async fn update_by_id(
        &self,
        _id: uuid::Uuid,
        _patch: BlogPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        Err(self.unavailable())
    }

    async fn delete_by_id(&self, _id: uuid::Uuid) -> Result<Option<BlogPost>, RepoError> {
        Err(self.unavailable())
    }
}

impl AppState {
    /// Build the application state with the configured store.
    pub async fn new(store_config: &StoreConfig) -> Self {
        let blogs: Arc<dyn BlogRepository> = match Store::init(store_config).await {
            Ok(store) => Arc::new(MongoBlogRepository::new(&store)),
            Err(e) => {
                tracing::error!(
                    "Failed to build store client: {}. Requests will fail until the store configuration is fixed.",
                    e
                );
                Arc::new(UnavailableBlogRepository {
                    reason: e.to_string(),
                })
            }
        };

        tracing::info!("Application state initialized");

        Self { blogs }
    }
}
