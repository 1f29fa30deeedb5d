use axum::{middleware::from_fn_with_state, routing::get, Router};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub mod config;
pub mod docs;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod services;
pub mod utils;

use config::Config;
use services::{ban_check::BanCheckService, player_info::PlayerInfoService};

// Application State
pub struct AppState {
    pub config: Config,
    pub player_info: PlayerInfoService,
    pub ban_check: BanCheckService,
}

impl AppState {
    pub fn new(config: Config) -> anyhow::Result<Self> {
        let client = services::build_http_client(&config)?;
        Ok(Self {
            player_info: PlayerInfoService::new(client.clone(), &config),
            ban_check: BanCheckService::new(client, &config)?,
            config,
        })
    }
}

pub fn create_app(config: Config) -> anyhow::Result<Router> {
    let state = Arc::new(AppState::new(config)?);

    let protected_routes = Router::new()
        .route("/check", get(handlers::check::check))
        .route_layer(from_fn_with_state(state.clone(), middleware::api_key_middleware));

    Ok(Router::new()
        .route("/", get(handlers::home::home))
        .route("/api-docs/openapi.json", get(docs::openapi_json))
        .merge(protected_routes)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state))
}
