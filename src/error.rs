//! Domain error taxonomy.
//!
//! Each domain owns a closed set of failures, every variant carrying a
//! stable machine code. Services never let a storage or other foreign
//! failure escape untyped: it is logged and converted to the owning
//! domain's `Unexpected` variant at the service boundary, so callers only
//! ever observe a [`DomainError`].

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum FavoriteError {
    #[error("favorite not found")]
    NotFound,
    #[error("favorite already exists")]
    AlreadyExists,
    #[error("unexpected error while processing the favorite")]
    Unexpected,
}

impl FavoriteError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound => "FAVORITE_NOT_FOUND",
            Self::AlreadyExists => "FAVORITE_ALREADY_EXISTS",
            Self::Unexpected => "FAVORITE_UNEXPECTED_ERROR",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum MediaError {
    #[error("media with id {id} not found")]
    NotFound { id: i32 },
    #[error("invalid media data")]
    InvalidData,
    #[error("unexpected error while processing the media")]
    Unexpected,
}

impl MediaError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "MEDIA_NOT_FOUND",
            Self::InvalidData => "MEDIA_INVALID_DATA",
            Self::Unexpected => "MEDIA_UNEXPECTED_ERROR",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum LangError {
    #[error("language with code '{code}' not found")]
    NotFound { code: String },
    #[error("language already exists")]
    AlreadyExists,
    #[error("invalid language data")]
    InvalidData,
    #[error("unexpected error while processing the language")]
    Unexpected,
}

impl LangError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "LANG_NOT_FOUND",
            Self::AlreadyExists => "LANG_ALREADY_EXISTS",
            Self::InvalidData => "LANG_INVALID_DATA",
            Self::Unexpected => "LANG_UNEXPECTED_ERROR",
        }
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum UserError {
    #[error("user with id {id} not found")]
    NotFound { id: i32 },
}

impl UserError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound { .. } => "USER_NOT_FOUND",
        }
    }
}

/// The only error type that crosses a service boundary.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Favorite(#[from] FavoriteError),
    #[error(transparent)]
    Media(#[from] MediaError),
    #[error(transparent)]
    Lang(#[from] LangError),
    #[error(transparent)]
    User(#[from] UserError),
}

impl DomainError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::Favorite(err) => err.code(),
            Self::Media(err) => err.code(),
            Self::Lang(err) => err.code(),
            Self::User(err) => err.code(),
        }
    }
}
