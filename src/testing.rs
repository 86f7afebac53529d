//! In-memory fakes of the repository ports for unit tests.

use std::sync::{
    Mutex,
    atomic::{AtomicBool, AtomicUsize, Ordering},
};

use async_trait::async_trait;

use crate::{
    entities::{favorite, lang, media, user},
    ports::{
        FavoriteRepository, LangRepository, MediaRepository, NewFavorite, NewMedia, StoreError,
        UserRepository,
    },
};

#[derive(Default)]
pub struct FakeStore {
    pub users: Mutex<Vec<user::Model>>,
    pub langs: Mutex<Vec<lang::Model>>,
    pub medias: Mutex<Vec<media::Model>>,
    pub favorites: Mutex<Vec<favorite::Model>>,
    /// When set, every port call fails with an opaque storage error.
    pub fail: AtomicBool,
    /// Simulates the unique index winning a check-then-insert race: the
    /// pre-check sees no favorite, but the insert still conflicts.
    pub conflict_on_insert: AtomicBool,
    pub media_reads: AtomicUsize,
    pub writes: AtomicUsize,
}

impl FakeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_user(self, id: i32) -> Self {
        self.users.lock().unwrap().push(user(id));
        self
    }

    pub fn with_media(self, id: i32) -> Self {
        self.medias.lock().unwrap().push(media(id));
        self
    }

    pub fn with_lang(self, code: &str) -> Self {
        self.langs.lock().unwrap().push(lang(code));
        self
    }

    pub fn with_favorite(self, user_id: i32, media_id: i32) -> Self {
        {
            let mut favorites = self.favorites.lock().unwrap();
            let id = favorites.len() as i32 + 1;
            favorites.push(favorite::Model { id, user_id, media_id, created_at: 0 });
        }
        self
    }

    fn check_fail(&self) -> Result<(), StoreError> {
        if self.fail.load(Ordering::SeqCst) {
            Err(StoreError::Other(anyhow::anyhow!("storage offline")))
        } else {
            Ok(())
        }
    }
}

pub fn user(id: i32) -> user::Model {
    user::Model {
        id,
        full_name: format!("user {id}"),
        email: format!("user{id}@example.com"),
        password: "secret".to_string(),
        cpf: format!("{id:011}"),
        lang_code: None,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn media(id: i32) -> media::Model {
    media::Model {
        id,
        title: format!("media {id}"),
        description: None,
        media_type: "movie".to_string(),
        release_year: 2020,
        genre: "drama".to_string(),
        genre_id: None,
        lang_code: Some("en".to_string()),
        image_url: None,
        trailer_url: None,
        release_date: None,
        created_at: 0,
        updated_at: 0,
    }
}

pub fn lang(code: &str) -> lang::Model {
    lang::Model { lang_code: code.to_string(), description: format!("language {code}") }
}

#[async_trait]
impl FavoriteRepository for FakeStore {
    async fn create(&self, new: NewFavorite) -> Result<(), StoreError> {
        self.check_fail()?;
        if self.conflict_on_insert.swap(false, Ordering::SeqCst) {
            return Err(StoreError::Conflict);
        }

        let mut favorites = self.favorites.lock().unwrap();
        if favorites.iter().any(|f| f.user_id == new.user_id && f.media_id == new.media_id) {
            return Err(StoreError::Conflict);
        }

        self.writes.fetch_add(1, Ordering::SeqCst);
        let id = favorites.len() as i32 + 1;
        favorites.push(favorite::Model {
            id,
            user_id: new.user_id,
            media_id: new.media_id,
            created_at: 0,
        });
        Ok(())
    }

    async fn find_all_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<favorite::Model>, StoreError> {
        self.check_fail()?;
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites.iter().filter(|f| f.user_id == user_id).cloned().collect())
    }

    async fn find_by_user_id_and_media_id(
        &self,
        user_id: i32,
        media_id: i32,
    ) -> Result<Option<favorite::Model>, StoreError> {
        self.check_fail()?;
        let favorites = self.favorites.lock().unwrap();
        Ok(favorites.iter().find(|f| f.user_id == user_id && f.media_id == media_id).cloned())
    }

    async fn remove(&self, user_id: i32, media_id: i32) -> Result<(), StoreError> {
        self.check_fail()?;
        let mut favorites = self.favorites.lock().unwrap();
        favorites.retain(|f| !(f.user_id == user_id && f.media_id == media_id));
        Ok(())
    }
}

#[async_trait]
impl MediaRepository for FakeStore {
    async fn create(&self, new: NewMedia) -> Result<media::Model, StoreError> {
        self.check_fail()?;
        self.writes.fetch_add(1, Ordering::SeqCst);
        let mut medias = self.medias.lock().unwrap();
        let created = media::Model {
            id: medias.len() as i32 + 1,
            title: new.title,
            description: new.description,
            media_type: new.media_type,
            release_year: new.release_year,
            genre: new.genre,
            genre_id: new.genre_id,
            lang_code: new.lang_code,
            image_url: new.image_url,
            trailer_url: new.trailer_url,
            release_date: new.release_date,
            created_at: 0,
            updated_at: 0,
        };
        medias.push(created.clone());
        Ok(created)
    }

    async fn find_all(&self) -> Result<Vec<media::Model>, StoreError> {
        self.check_fail()?;
        self.media_reads.fetch_add(1, Ordering::SeqCst);
        Ok(self.medias.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<media::Model>, StoreError> {
        self.check_fail()?;
        self.media_reads.fetch_add(1, Ordering::SeqCst);
        let medias = self.medias.lock().unwrap();
        Ok(medias.iter().find(|m| m.id == id).cloned())
    }

    async fn find_by_ids(&self, ids: &[i32]) -> Result<Vec<media::Model>, StoreError> {
        self.check_fail()?;
        self.media_reads.fetch_add(1, Ordering::SeqCst);
        let medias = self.medias.lock().unwrap();
        // storage order, not request order, like a SQL `IN` lookup
        Ok(medias.iter().filter(|m| ids.contains(&m.id)).cloned().collect())
    }

    async fn find_all_by_lang(&self, lang_code: &str) -> Result<Vec<media::Model>, StoreError> {
        self.check_fail()?;
        self.media_reads.fetch_add(1, Ordering::SeqCst);
        let medias = self.medias.lock().unwrap();
        Ok(medias.iter().filter(|m| m.lang_code.as_deref() == Some(lang_code)).cloned().collect())
    }
}

#[async_trait]
impl LangRepository for FakeStore {
    async fn find_by_lang_code(
        &self,
        lang_code: &str,
    ) -> Result<Option<lang::Model>, StoreError> {
        self.check_fail()?;
        let langs = self.langs.lock().unwrap();
        Ok(langs.iter().find(|l| l.lang_code == lang_code).cloned())
    }

    async fn find_all(&self) -> Result<Vec<lang::Model>, StoreError> {
        self.check_fail()?;
        Ok(self.langs.lock().unwrap().clone())
    }

    async fn create(&self, new: lang::Model) -> Result<lang::Model, StoreError> {
        self.check_fail()?;
        let mut langs = self.langs.lock().unwrap();
        if langs.iter().any(|l| l.lang_code == new.lang_code) {
            return Err(StoreError::Conflict);
        }
        langs.push(new.clone());
        Ok(new)
    }
}

#[async_trait]
impl UserRepository for FakeStore {
    async fn find_by_id(&self, id: i32) -> Result<Option<user::Model>, StoreError> {
        self.check_fail()?;
        let users = self.users.lock().unwrap();
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
