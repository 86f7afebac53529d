//! sea-orm implementation of the repository ports.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, Set, SqlErr};

use crate::{
    entities::{favorite, lang, media, user},
    ports::{
        FavoriteRepository, LangRepository, MediaRepository, NewFavorite, NewMedia, StoreError,
        UserRepository,
    },
};

#[derive(Clone)]
pub struct Store {
    db: DatabaseConnection,
}

impl Store {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

fn map_db_err(err: DbErr) -> StoreError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => StoreError::Conflict,
        _ => StoreError::Other(anyhow::Error::new(err)),
    }
}

#[async_trait]
impl FavoriteRepository for Store {
    async fn create(&self, new: NewFavorite) -> Result<(), StoreError> {
        let model = favorite::ActiveModel {
            id: Default::default(),
            user_id: Set(new.user_id),
            media_id: Set(new.media_id),
            created_at: Set(now_sec()),
        };

        favorite::Entity::insert(model).exec(&self.db).await.map_err(map_db_err)?;
        Ok(())
    }

    async fn find_all_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<favorite::Model>, StoreError> {
        favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn find_by_user_id_and_media_id(
        &self,
        user_id: i32,
        media_id: i32,
    ) -> Result<Option<favorite::Model>, StoreError> {
        favorite::Entity::find()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::MediaId.eq(media_id))
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn remove(&self, user_id: i32, media_id: i32) -> Result<(), StoreError> {
        favorite::Entity::delete_many()
            .filter(favorite::Column::UserId.eq(user_id))
            .filter(favorite::Column::MediaId.eq(media_id))
            .exec(&self.db)
            .await
            .map_err(map_db_err)?;
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for Store {
    async fn create(&self, new: NewMedia) -> Result<media::Model, StoreError> {
        use sea_orm::ActiveModelTrait;

        let now = now_sec();
        let model = media::ActiveModel {
            id: Default::default(),
            title: Set(new.title),
            description: Set(new.description),
            media_type: Set(new.media_type),
            release_year: Set(new.release_year),
            genre: Set(new.genre),
            genre_id: Set(new.genre_id),
            lang_code: Set(new.lang_code),
            image_url: Set(new.image_url),
            trailer_url: Set(new.trailer_url),
            release_date: Set(new.release_date),
            created_at: Set(now),
            updated_at: Set(now),
        };

        model.insert(&self.db).await.map_err(map_db_err)
    }

    async fn find_all(&self) -> Result<Vec<media::Model>, StoreError> {
        media::Entity::find().all(&self.db).await.map_err(map_db_err)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<media::Model>, StoreError> {
        media::Entity::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<media::Model>, StoreError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        media::Entity::find()
            .filter(media::Column::Id.is_in(ids.to_vec()))
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn find_all_by_lang(&self, lang_code: &str) -> Result<Vec<media::Model>, StoreError> {
        media::Entity::find()
            .filter(media::Column::LangCode.eq(lang_code))
            .all(&self.db)
            .await
            .map_err(map_db_err)
    }
}

#[async_trait]
impl LangRepository for Store {
    async fn find_by_lang_code(
        &self,
        lang_code: &str,
    ) -> Result<Option<lang::Model>, StoreError> {
        lang::Entity::find_by_id(lang_code.to_string())
            .one(&self.db)
            .await
            .map_err(map_db_err)
    }

    async fn find_all(&self) -> Result<Vec<lang::Model>, StoreError> {
        lang::Entity::find().all(&self.db).await.map_err(map_db_err)
    }

    async fn create(&self, new: lang::Model) -> Result<lang::Model, StoreError> {
        use sea_orm::ActiveModelTrait;

        let model = lang::ActiveModel {
            lang_code: Set(new.lang_code),
            description: Set(new.description),
        };

        model.insert(&self.db).await.map_err(map_db_err)
    }
}

#[async_trait]
impl UserRepository for Store {
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, StoreError> {
        user::Entity::find_by_id(id).one(&self.db).await.map_err(map_db_err)
    }
}

fn now_sec() -> i64 {
    jiff::Timestamp::now().as_second()
}
