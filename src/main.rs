mod config;
mod db;
mod entities;
mod error;
mod favorites;
mod medias;
mod models;
mod ports;
mod responses;
mod routes;
mod store;
#[cfg(test)]
mod testing;

use std::sync::Arc;

use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::{config::Config, favorites::FavoriteService, medias::MediaService, store::Store};

#[derive(Clone)]
pub struct AppState {
    pub medias: MediaService,
    pub favorites: FavoriteService,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,mediateca=debug,sqlx=warn".to_string()),
        )
        .init();

    let config = Config::from_env()?;

    let db = db::connect_and_migrate(&config.database_url).await?;
    let store = Arc::new(Store::new(db));
    db::seed_langs(store.as_ref()).await?;

    let state = Arc::new(AppState {
        medias: MediaService::new(store.clone(), store.clone()),
        favorites: FavoriteService::new(store.clone(), store.clone(), store.clone()),
    });

    let app = routes::router(state)
        .layer(CorsLayer::new().allow_origin(Any).allow_headers(Any))
        .layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    tracing::info!(addr = %config.addr, "listening");
    axum::serve(listener, app).await?;

    Ok(())
}
