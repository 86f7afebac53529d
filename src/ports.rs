//! Repository ports consumed by the domain services.
//!
//! Services depend on these traits only; the sea-orm implementation lives in
//! [`crate::store`] and test fakes in [`crate::testing`]. Composition is
//! explicit: each service receives the ports it needs as `Arc<dyn …>`
//! constructor arguments.

use async_trait::async_trait;
use thiserror::Error;

use crate::entities::{favorite, lang, media, user};

/// Storage-level failure as seen by the services.
///
/// `Conflict` is raised when a unique index rejects an insert; everything
/// else is opaque and gets wrapped into a domain `Unexpected` variant.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("unique constraint violated")]
    Conflict,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

#[derive(Clone, Debug)]
pub struct NewFavorite {
    pub user_id: i32,
    pub media_id: i32,
}

#[derive(Clone, Debug)]
pub struct NewMedia {
    pub title: String,
    pub description: Option<String>,
    pub media_type: String,
    pub release_year: i32,
    pub genre: String,
    pub genre_id: Option<i32>,
    pub lang_code: Option<String>,
    pub image_url: Option<String>,
    pub trailer_url: Option<String>,
    pub release_date: Option<String>,
}

#[async_trait]
pub trait FavoriteRepository: Send + Sync {
    async fn create(&self, favorite: NewFavorite) -> Result<(), StoreError>;

    async fn find_all_by_user_id(&self, user_id: i32)
    -> Result<Vec<favorite::Model>, StoreError>;

    async fn find_by_user_id_and_media_id(
        &self,
        user_id: i32,
        media_id: i32,
    ) -> Result<Option<favorite::Model>, StoreError>;

    async fn remove(&self, user_id: i32, media_id: i32) -> Result<(), StoreError>;
}

#[async_trait]
pub trait MediaRepository: Send + Sync {
    async fn create(&self, media: NewMedia) -> Result<media::Model, StoreError>;

    async fn find_all(&self) -> Result<Vec<media::Model>, StoreError>;

    async fn find_by_id(&self, id: i32) -> Result<Option<media::Model>, StoreError>;

    /// Batch load for the favorites listing.
    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<media::Model>, StoreError>;

    async fn find_all_by_lang(&self, lang_code: &str) -> Result<Vec<media::Model>, StoreError>;
}

#[async_trait]
pub trait LangRepository: Send + Sync {
    async fn find_by_lang_code(&self, lang_code: &str)
    -> Result<Option<lang::Model>, StoreError>;

    async fn find_all(&self) -> Result<Vec<lang::Model>, StoreError>;

    async fn create(&self, lang: lang::Model) -> Result<lang::Model, StoreError>;
}

#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, StoreError>;
}
