use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Path, State},
    http::{Method, StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use serde::Serialize;

use crate::{
    AppState,
    error::DomainError,
    models::{CreateFavorite, CreateMedia},
    responses::{self, ErrorResponse, SuccessResponse},
};

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/media", post(create_media).get(list_media))
        .route("/media/{id}", get(get_media))
        .route("/media/lang/{lang_code}", get(list_media_by_lang))
        .route("/users/{user_id}/favorites", post(create_favorite).get(list_favorites))
        .route("/users/{user_id}/favorites/{media_id}", delete(remove_favorite))
        .with_state(state)
}

async fn create_media(
    State(state): State<Arc<AppState>>,
    method: Method,
    uri: Uri,
    Json(req): Json<CreateMedia>,
) -> Response {
    match state.medias.create(req, uri.path(), method.as_str()).await {
        Ok(body) => json_success(body),
        Err(err) => media_error(&err, uri.path(), method.as_str()),
    }
}

async fn list_media(State(state): State<Arc<AppState>>, method: Method, uri: Uri) -> Response {
    match state.medias.find_all(uri.path(), method.as_str()).await {
        Ok(body) => json_success(body),
        Err(err) => media_error(&err, uri.path(), method.as_str()),
    }
}

async fn get_media(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i32>,
    method: Method,
    uri: Uri,
) -> Response {
    match state.medias.find_one(id, uri.path(), method.as_str()).await {
        Ok(body) => json_success(body),
        Err(err) => media_error(&err, uri.path(), method.as_str()),
    }
}

async fn list_media_by_lang(
    State(state): State<Arc<AppState>>,
    Path(lang_code): Path<String>,
    method: Method,
    uri: Uri,
) -> Response {
    match state.medias.find_all_by_lang(&lang_code, uri.path(), method.as_str()).await {
        Ok(body) => json_success(body),
        Err(err) => media_error(&err, uri.path(), method.as_str()),
    }
}

async fn create_favorite(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    method: Method,
    uri: Uri,
    Json(req): Json<CreateFavorite>,
) -> Response {
    match state.favorites.create(user_id, req, uri.path(), method.as_str()).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => favorite_error(&err, uri.path(), method.as_str()),
    }
}

async fn list_favorites(
    State(state): State<Arc<AppState>>,
    Path(user_id): Path<i32>,
    method: Method,
    uri: Uri,
) -> Response {
    match state.favorites.find_all(user_id, uri.path(), method.as_str()).await {
        Ok(body) => json_success(body),
        Err(err) => favorite_error(&err, uri.path(), method.as_str()),
    }
}

async fn remove_favorite(
    State(state): State<Arc<AppState>>,
    Path((user_id, media_id)): Path<(i32, i32)>,
    method: Method,
    uri: Uri,
) -> Response {
    match state.favorites.remove(user_id, media_id, uri.path(), method.as_str()).await {
        Ok(_) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => favorite_error(&err, uri.path(), method.as_str()),
    }
}

fn json_success<T: Serialize>(body: SuccessResponse<T>) -> Response {
    let status = StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::OK);
    (status, Json(body)).into_response()
}

fn json_error(body: ErrorResponse) -> Response {
    let status =
        StatusCode::from_u16(body.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (status, Json(body)).into_response()
}

// Lang failures raised by the per-language listing are routed to the lang
// mapper instead of being folded into the media taxonomy.
fn media_error(err: &DomainError, path: &str, method: &str) -> Response {
    let body = match err {
        DomainError::Lang(_) => responses::lang_error_response(err, path, method),
        _ => responses::media_error_response(err, path, method),
    };
    json_error(body)
}

fn favorite_error(err: &DomainError, path: &str, method: &str) -> Response {
    json_error(responses::favorite_error_response(err, path, method))
}
