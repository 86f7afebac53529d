pub mod favorite;
pub mod lang;
pub mod media;
pub mod user;
