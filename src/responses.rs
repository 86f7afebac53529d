//! Transport-facing response envelopes.
//!
//! Success descriptors are built by the services; the per-domain error
//! mappers are pure functions converting a caught [`DomainError`] into a
//! status/body pair. Each mapper handles its own domain's variants (plus the
//! cross-domain lookups the favorite flow can raise) and falls back to a
//! plain 500 without a `code` for anything foreign to it, mirroring how the
//! HTTP layer routes errors to exactly one mapper.

use axum::http::StatusCode;
use serde::Serialize;

use crate::{
    entities::media,
    error::{DomainError, FavoriteError, LangError, MediaError, UserError},
};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SuccessResponse<T> {
    pub success: bool,
    pub status_code: u16,
    pub message: String,
    pub data: Option<T>,
    pub timestamp: String,
    pub path: String,
    pub method: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub success: bool,
    pub status_code: u16,
    pub error: &'static str,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<&'static str>,
    pub timestamp: String,
    pub path: String,
    pub method: String,
}

#[derive(Debug, Serialize)]
pub struct MediaList {
    pub medias: Vec<media::Model>,
}

#[derive(Debug, Serialize)]
pub struct MediaItem {
    pub media: media::Model,
}

fn success<T>(
    status: StatusCode,
    message: String,
    data: Option<T>,
    path: &str,
    method: &str,
) -> SuccessResponse<T> {
    SuccessResponse {
        success: true,
        status_code: status.as_u16(),
        message,
        data,
        timestamp: now_iso(),
        path: path.to_string(),
        method: method.to_string(),
    }
}

pub fn favorite_created(user_id: i32, path: &str, method: &str) -> SuccessResponse<()> {
    success(
        StatusCode::NO_CONTENT,
        format!("favorite added for user {user_id}"),
        None,
        path,
        method,
    )
}

pub fn favorite_retrieved_all(
    user_id: i32,
    medias: Vec<media::Model>,
    path: &str,
    method: &str,
) -> SuccessResponse<MediaList> {
    success(
        StatusCode::OK,
        format!("favorites retrieved for user {user_id}"),
        Some(MediaList { medias }),
        path,
        method,
    )
}

pub fn favorite_removed(
    user_id: i32,
    media_id: i32,
    path: &str,
    method: &str,
) -> SuccessResponse<()> {
    success(
        StatusCode::NO_CONTENT,
        format!("favorite removed for user {user_id} and media {media_id}"),
        None,
        path,
        method,
    )
}

pub fn media_created(created: media::Model, path: &str, method: &str) -> SuccessResponse<MediaItem> {
    success(
        StatusCode::CREATED,
        format!("media created with id {}", created.id),
        Some(MediaItem { media: created }),
        path,
        method,
    )
}

pub fn media_retrieved_all(
    medias: Vec<media::Model>,
    path: &str,
    method: &str,
) -> SuccessResponse<MediaList> {
    success(
        StatusCode::OK,
        "all media retrieved".to_string(),
        Some(MediaList { medias }),
        path,
        method,
    )
}

pub fn media_retrieved_one(media: media::Model, path: &str, method: &str) -> SuccessResponse<MediaItem> {
    success(
        StatusCode::OK,
        format!("media with id {} retrieved", media.id),
        Some(MediaItem { media }),
        path,
        method,
    )
}

pub fn media_retrieved_by_lang(
    lang_code: &str,
    medias: Vec<media::Model>,
    path: &str,
    method: &str,
) -> SuccessResponse<MediaList> {
    success(
        StatusCode::OK,
        format!("media in language '{lang_code}' retrieved"),
        Some(MediaList { medias }),
        path,
        method,
    )
}

/// Maps errors raised by the favorite flow: the favorite taxonomy plus the
/// user and media existence checks it performs.
pub fn favorite_error_response(err: &DomainError, path: &str, method: &str) -> ErrorResponse {
    let (status, label) = match err {
        DomainError::Favorite(FavoriteError::NotFound) => (StatusCode::NOT_FOUND, "Not Found"),
        DomainError::Favorite(FavoriteError::AlreadyExists) => (StatusCode::CONFLICT, "Conflict"),
        DomainError::Media(MediaError::NotFound { .. }) => (StatusCode::NOT_FOUND, "Not Found"),
        DomainError::User(UserError::NotFound { .. }) => (StatusCode::NOT_FOUND, "Not Found"),
        DomainError::Favorite(FavoriteError::Unexpected) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
        _ => return foreign_error_response(err, path, method),
    };
    domain_error_response(err, status, label, path, method)
}

pub fn media_error_response(err: &DomainError, path: &str, method: &str) -> ErrorResponse {
    let (status, label) = match err {
        DomainError::Media(MediaError::NotFound { .. }) => (StatusCode::NOT_FOUND, "Not Found"),
        DomainError::Media(MediaError::InvalidData) => (StatusCode::BAD_REQUEST, "Bad Request"),
        DomainError::Media(MediaError::Unexpected) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
        _ => return foreign_error_response(err, path, method),
    };
    domain_error_response(err, status, label, path, method)
}

pub fn lang_error_response(err: &DomainError, path: &str, method: &str) -> ErrorResponse {
    let (status, label) = match err {
        DomainError::Lang(LangError::NotFound { .. }) => (StatusCode::NOT_FOUND, "Not Found"),
        DomainError::Lang(LangError::AlreadyExists) => (StatusCode::CONFLICT, "Conflict"),
        DomainError::Lang(LangError::InvalidData) => (StatusCode::BAD_REQUEST, "Bad Request"),
        DomainError::Lang(LangError::Unexpected) => {
            (StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
        }
        _ => return foreign_error_response(err, path, method),
    };
    domain_error_response(err, status, label, path, method)
}

fn domain_error_response(
    err: &DomainError,
    status: StatusCode,
    label: &'static str,
    path: &str,
    method: &str,
) -> ErrorResponse {
    ErrorResponse {
        success: false,
        status_code: status.as_u16(),
        error: label,
        message: err.to_string(),
        code: Some(err.code()),
        timestamp: now_iso(),
        path: path.to_string(),
        method: method.to_string(),
    }
}

fn foreign_error_response(err: &DomainError, path: &str, method: &str) -> ErrorResponse {
    ErrorResponse {
        success: false,
        status_code: StatusCode::INTERNAL_SERVER_ERROR.as_u16(),
        error: "Internal Server Error",
        message: err.to_string(),
        code: None,
        timestamp: now_iso(),
        path: path.to_string(),
        method: method.to_string(),
    }
}

fn now_iso() -> String {
    jiff::Timestamp::now().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mapped(f: fn(&DomainError, &str, &str) -> ErrorResponse, err: DomainError) -> ErrorResponse {
        f(&err, "/x", "GET")
    }

    #[test]
    fn favorite_mapper_covers_every_entry() {
        let cases = [
            (FavoriteError::NotFound, 404, "Not Found", "FAVORITE_NOT_FOUND"),
            (FavoriteError::AlreadyExists, 409, "Conflict", "FAVORITE_ALREADY_EXISTS"),
            (FavoriteError::Unexpected, 500, "Internal Server Error", "FAVORITE_UNEXPECTED_ERROR"),
        ];
        for (err, status, label, code) in cases {
            let body = mapped(favorite_error_response, err.clone().into());
            assert!(!body.success);
            assert_eq!(body.status_code, status);
            assert_eq!(body.error, label);
            assert_eq!(body.code, Some(code));
            assert_eq!(body.message, err.to_string());
        }

        let body = mapped(favorite_error_response, MediaError::NotFound { id: 7 }.into());
        assert_eq!((body.status_code, body.code), (404, Some("MEDIA_NOT_FOUND")));

        let body = mapped(favorite_error_response, UserError::NotFound { id: 3 }.into());
        assert_eq!((body.status_code, body.code), (404, Some("USER_NOT_FOUND")));
    }

    #[test]
    fn media_mapper_covers_every_entry() {
        let cases = [
            (MediaError::NotFound { id: 1 }, 404, "Not Found", "MEDIA_NOT_FOUND"),
            (MediaError::InvalidData, 400, "Bad Request", "MEDIA_INVALID_DATA"),
            (MediaError::Unexpected, 500, "Internal Server Error", "MEDIA_UNEXPECTED_ERROR"),
        ];
        for (err, status, label, code) in cases {
            let body = mapped(media_error_response, err.into());
            assert_eq!(body.status_code, status);
            assert_eq!(body.error, label);
            assert_eq!(body.code, Some(code));
        }
    }

    #[test]
    fn lang_mapper_covers_every_entry() {
        let cases = [
            (LangError::NotFound { code: "xx".into() }, 404, "Not Found", "LANG_NOT_FOUND"),
            (LangError::AlreadyExists, 409, "Conflict", "LANG_ALREADY_EXISTS"),
            (LangError::InvalidData, 400, "Bad Request", "LANG_INVALID_DATA"),
            (LangError::Unexpected, 500, "Internal Server Error", "LANG_UNEXPECTED_ERROR"),
        ];
        for (err, status, label, code) in cases {
            let body = mapped(lang_error_response, err.into());
            assert_eq!(body.status_code, status);
            assert_eq!(body.error, label);
            assert_eq!(body.code, Some(code));
        }
    }

    #[test]
    fn foreign_errors_fall_back_to_500_without_a_code() {
        // A lang failure is foreign to the media mapper, and media invalid
        // data is foreign to the favorite mapper (only the media existence
        // check is in its table).
        let body = mapped(media_error_response, FavoriteError::NotFound.into());
        assert_eq!(body.status_code, 500);
        assert_eq!(body.error, "Internal Server Error");
        assert_eq!(body.code, None);

        let body = mapped(favorite_error_response, MediaError::InvalidData.into());
        assert_eq!((body.status_code, body.code), (500, None));

        let body = mapped(lang_error_response, MediaError::Unexpected.into());
        assert_eq!((body.status_code, body.code), (500, None));
    }

    #[test]
    fn envelopes_serialize_camel_case() {
        let body = favorite_created(1, "/users/1/favorites", "POST");
        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["statusCode"], 204);
        assert_eq!(json["data"], serde_json::Value::Null);
        assert!(json["timestamp"].as_str().unwrap().contains('T'));
        assert_eq!(json["path"], "/users/1/favorites");
        assert_eq!(json["method"], "POST");

        let err = mapped(lang_error_response, LangError::NotFound { code: "xx".into() }.into());
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["statusCode"], 404);
        assert_eq!(json["code"], "LANG_NOT_FOUND");
        assert_eq!(json["message"], "language with code 'xx' not found");
    }
}
