//! Favorite orchestration: create/list/remove with cross-entity checks.

use std::collections::HashMap;
use std::sync::Arc;

use crate::{
    error::{DomainError, FavoriteError, MediaError, UserError},
    models::CreateFavorite,
    ports::{FavoriteRepository, MediaRepository, NewFavorite, StoreError, UserRepository},
    responses::{self, MediaList, SuccessResponse},
};

#[derive(Clone)]
pub struct FavoriteService {
    favorites: Arc<dyn FavoriteRepository>,
    medias: Arc<dyn MediaRepository>,
    users: Arc<dyn UserRepository>,
}

impl FavoriteService {
    pub fn new(
        favorites: Arc<dyn FavoriteRepository>,
        medias: Arc<dyn MediaRepository>,
        users: Arc<dyn UserRepository>,
    ) -> Self {
        Self { favorites, medias, users }
    }

    pub async fn create(
        &self,
        user_id: i32,
        req: CreateFavorite,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<()>, DomainError> {
        let media_id = req.media_id;
        self.require_user(user_id).await?;

        match self.medias.find_by_id(media_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let err = MediaError::NotFound { id: media_id };
                tracing::warn!(user_id, media_id, code = err.code(), "media not found");
                return Err(err.into());
            }
            Err(err) => {
                return Err(self.unexpected(user_id, Some(media_id), "media lookup failed", err));
            }
        }

        match self.favorites.find_by_user_id_and_media_id(user_id, media_id).await {
            Ok(None) => {}
            Ok(Some(_)) => {
                let err = FavoriteError::AlreadyExists;
                tracing::warn!(user_id, media_id, code = err.code(), "favorite already exists");
                return Err(err.into());
            }
            Err(err) => {
                return Err(self.unexpected(
                    user_id,
                    Some(media_id),
                    "favorite lookup failed",
                    err,
                ));
            }
        }

        match self.favorites.create(NewFavorite { user_id, media_id }).await {
            Ok(()) => {
                tracing::info!(user_id, media_id, "favorite created");
                Ok(responses::favorite_created(user_id, path, method))
            }
            // the unique index caught a concurrent create between the
            // pre-check and the insert
            Err(StoreError::Conflict) => {
                let err = FavoriteError::AlreadyExists;
                tracing::warn!(user_id, media_id, code = err.code(), "favorite already exists");
                Err(err.into())
            }
            Err(err) => {
                Err(self.unexpected(user_id, Some(media_id), "favorite insert failed", err))
            }
        }
    }

    pub async fn find_all(
        &self,
        user_id: i32,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<MediaList>, DomainError> {
        tracing::info!(user_id, "listing favorites");
        self.require_user(user_id).await?;

        let favorites = match self.favorites.find_all_by_user_id(user_id).await {
            Ok(rows) => rows,
            Err(err) => return Err(self.unexpected(user_id, None, "favorite listing failed", err)),
        };

        let media_ids: Vec<i32> = favorites.iter().map(|f| f.media_id).collect();
        let loaded = match self.medias.find_by_ids(&media_ids).await {
            Ok(rows) => rows,
            Err(err) => return Err(self.unexpected(user_id, None, "media batch load failed", err)),
        };

        // the listing follows the favorite rows' order, not storage order
        let mut by_id: HashMap<i32, _> = loaded.into_iter().map(|m| (m.id, m)).collect();
        let medias: Vec<_> = media_ids.iter().filter_map(|id| by_id.remove(id)).collect();

        tracing::info!(user_id, count = medias.len(), "favorites retrieved");
        Ok(responses::favorite_retrieved_all(user_id, medias, path, method))
    }

    pub async fn remove(
        &self,
        user_id: i32,
        media_id: i32,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<()>, DomainError> {
        self.require_user(user_id).await?;

        match self.favorites.find_by_user_id_and_media_id(user_id, media_id).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let err = FavoriteError::NotFound;
                tracing::warn!(user_id, media_id, code = err.code(), "favorite not found");
                return Err(err.into());
            }
            Err(err) => {
                return Err(self.unexpected(
                    user_id,
                    Some(media_id),
                    "favorite lookup failed",
                    err,
                ));
            }
        }

        match self.favorites.remove(user_id, media_id).await {
            Ok(()) => {
                tracing::info!(user_id, media_id, "favorite removed");
                Ok(responses::favorite_removed(user_id, media_id, path, method))
            }
            Err(err) => {
                Err(self.unexpected(user_id, Some(media_id), "favorite delete failed", err))
            }
        }
    }

    async fn require_user(&self, user_id: i32) -> Result<(), DomainError> {
        match self.users.find_by_id(user_id).await {
            Ok(Some(_)) => Ok(()),
            Ok(None) => {
                let err = UserError::NotFound { id: user_id };
                tracing::warn!(user_id, code = err.code(), "user not found");
                Err(err.into())
            }
            Err(err) => Err(self.unexpected(user_id, None, "user lookup failed", err)),
        }
    }

    fn unexpected(
        &self,
        user_id: i32,
        media_id: Option<i32>,
        what: &str,
        err: StoreError,
    ) -> DomainError {
        let wrapped = FavoriteError::Unexpected;
        tracing::error!(user_id, media_id, error = %err, code = wrapped.code(), "{what}");
        wrapped.into()
    }
}
