//! Media orchestration: create/list/get and the per-language listing.

use std::sync::Arc;

use crate::{
    error::{DomainError, LangError, MediaError},
    models::CreateMedia,
    ports::{LangRepository, MediaRepository, NewMedia, StoreError},
    responses::{self, MediaItem, MediaList, SuccessResponse},
};

const MIN_RELEASE_YEAR: i32 = 1900;

#[derive(Clone)]
pub struct MediaService {
    medias: Arc<dyn MediaRepository>,
    langs: Arc<dyn LangRepository>,
}

impl MediaService {
    pub fn new(medias: Arc<dyn MediaRepository>, langs: Arc<dyn LangRepository>) -> Self {
        Self { medias, langs }
    }

    pub async fn create(
        &self,
        req: CreateMedia,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<MediaItem>, DomainError> {
        let media_type = match req.media_type {
            Some(media_type) if !req.title.trim().is_empty() => media_type,
            _ => {
                let err = MediaError::InvalidData;
                tracing::warn!(title = %req.title, code = err.code(), "missing title or type");
                return Err(err.into());
            }
        };

        if !(MIN_RELEASE_YEAR..=current_year() + 1).contains(&req.release_year) {
            let err = MediaError::InvalidData;
            tracing::warn!(
                release_year = req.release_year,
                code = err.code(),
                "release year out of range"
            );
            return Err(err.into());
        }

        let new = NewMedia {
            title: req.title,
            description: req.description,
            media_type: media_type.as_str().to_string(),
            release_year: req.release_year,
            genre: req.genre,
            genre_id: req.genre_id,
            lang_code: req.lang_code,
            image_url: req.image_url,
            trailer_url: req.trailer_url,
            release_date: req.release_date,
        };

        match self.medias.create(new).await {
            Ok(created) => {
                tracing::info!(media_id = created.id, "media created");
                Ok(responses::media_created(created, path, method))
            }
            Err(err) => Err(self.unexpected("media insert failed", err)),
        }
    }

    pub async fn find_all(
        &self,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<MediaList>, DomainError> {
        tracing::info!("listing all media");
        match self.medias.find_all().await {
            Ok(medias) => Ok(responses::media_retrieved_all(medias, path, method)),
            Err(err) => Err(self.unexpected("media listing failed", err)),
        }
    }

    pub async fn find_one(
        &self,
        id: i32,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<MediaItem>, DomainError> {
        tracing::info!(media_id = id, "fetching media");
        match self.medias.find_by_id(id).await {
            Ok(Some(media)) => Ok(responses::media_retrieved_one(media, path, method)),
            Ok(None) => {
                let err = MediaError::NotFound { id };
                tracing::warn!(media_id = id, code = err.code(), "media not found");
                Err(err.into())
            }
            Err(err) => Err(self.unexpected("media lookup failed", err)),
        }
    }

    /// Lists media in a language. A missing language surfaces as a
    /// Lang-domain error so the transport routes it to the lang mapper, and
    /// no media query is issued in that case.
    pub async fn find_all_by_lang(
        &self,
        lang_code: &str,
        path: &str,
        method: &str,
    ) -> Result<SuccessResponse<MediaList>, DomainError> {
        tracing::info!(lang_code, "listing media by language");
        match self.langs.find_by_lang_code(lang_code).await {
            Ok(Some(_)) => {}
            Ok(None) => {
                let err = LangError::NotFound { code: lang_code.to_string() };
                tracing::warn!(lang_code, code = err.code(), "language not found");
                return Err(err.into());
            }
            Err(err) => return Err(self.unexpected("language lookup failed", err)),
        }

        match self.medias.find_all_by_lang(lang_code).await {
            Ok(medias) => Ok(responses::media_retrieved_by_lang(lang_code, medias, path, method)),
            Err(err) => Err(self.unexpected("media listing by language failed", err)),
        }
    }

    fn unexpected(&self, what: &str, err: StoreError) -> DomainError {
        let wrapped = MediaError::Unexpected;
        tracing::error!(error = %err, code = wrapped.code(), "{what}");
        wrapped.into()
    }
}

fn current_year() -> i32 {
    let today: jiff::civil::Date = jiff::Zoned::now().into();
    i32::from(today.year())
}
