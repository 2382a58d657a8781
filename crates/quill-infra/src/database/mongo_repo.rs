//! MongoDB repository implementation.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use mongodb::Collection;
use mongodb::bson::{self, Bson, Document, doc};
use mongodb::options::ReturnDocument;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use quill_core::domain::{BlogPatch, BlogPost};
use quill_core::error::RepoError;
use quill_core::ports::BlogRepository;

use super::connections::Store;

const COLLECTION: &str = "blogs";

/// Wire representation of a post in the `blogs` collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct BlogDocument {
    #[serde(rename = "_id", with = "bson::serde_helpers::uuid_1_as_binary")]
    pub id: Uuid,
    pub title: String,
    pub body: String,
    pub author: Option<String>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "bson::serde_helpers::chrono_datetime_as_bson_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Conversion from stored document to domain post.
impl From<BlogDocument> for BlogPost {
    fn from(document: BlogDocument) -> Self {
        Self {
            id: document.id,
            title: document.title,
            body: document.body,
            author: document.author,
            created_at: document.created_at,
            updated_at: document.updated_at,
        }
    }
}

/// Conversion from domain post to stored document.
impl From<BlogPost> for BlogDocument {
    fn from(post: BlogPost) -> Self {
        Self {
            id: post.id,
            title: post.title,
            body: post.body,
            author: post.author,
            created_at: post.created_at,
            updated_at: post.updated_at,
        }
    }
}

/// MongoDB blog repository.
pub struct MongoBlogRepository {
    collection: Collection<BlogDocument>,
}

impl MongoBlogRepository {
    pub fn new(store: &Store) -> Self {
        Self {
            collection: store.collection(COLLECTION),
        }
    }

    fn id_filter(id: Uuid) -> Document {
        doc! { "_id": bson::Uuid::from_uuid_1(id) }
    }
}

#[async_trait]
impl BlogRepository for MongoBlogRepository {
    async fn create(&self, post: BlogPost) -> Result<BlogPost, RepoError> {
        let document = BlogDocument::from(post);

        self.collection
            .insert_one(&document)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(document.into())
    }

    async fn find_all(&self) -> Result<Vec<BlogPost>, RepoError> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        let documents: Vec<BlogDocument> = cursor
            .try_collect()
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(documents.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = self
            .collection
            .find_one(Self::id_filter(id))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn update_by_id(
        &self,
        id: Uuid,
        patch: BlogPatch,
    ) -> Result<Option<BlogPost>, RepoError> {
        patch.validate()?;

        let mut set = Document::new();
        if let Some(title) = patch.title {
            set.insert("title", title);
        }
        if let Some(body) = patch.body {
            set.insert("body", body);
        }
        if let Some(author) = patch.author {
            set.insert("author", author);
        }
        set.insert(
            "updated_at",
            Bson::DateTime(bson::DateTime::from_chrono(Utc::now())),
        );

        let result = self
            .collection
            .find_one_and_update(Self::id_filter(id), doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<Option<BlogPost>, RepoError> {
        let result = self
            .collection
            .find_one_and_delete(Self::id_filter(id))
            .await
            .map_err(|e| RepoError::Query(e.to_string()))?;

        Ok(result.map(Into::into))
    }
}
