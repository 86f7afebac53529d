use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Movie,
    Series,
}

impl MediaType {
    pub fn as_str(self) -> &'static str {
        match self {
            MediaType::Movie => "movie",
            MediaType::Series => "series",
        }
    }
}

/// Body of `POST /media`. Fields the service validates itself default to
/// empty/absent instead of failing deserialization, so a missing `title` or
/// `type` surfaces as `MEDIA_INVALID_DATA` rather than a bare 422.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateMedia {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default, rename = "type")]
    pub media_type: Option<MediaType>,
    #[serde(default)]
    pub release_year: i32,
    #[serde(default)]
    pub genre: String,
    #[serde(default)]
    pub genre_id: Option<i32>,
    #[serde(default)]
    pub lang_code: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub trailer_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<String>,
}

/// Body of `POST /users/{user_id}/favorites`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateFavorite {
    pub media_id: i32,
}
