pub mod api;
pub mod card;
pub mod config;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod teams;
pub mod webhook;

use axum::{Router, extract::DefaultBodyLimit, routing};
use std::sync::Arc;

use crate::config::RelayConfig;
use crate::error::Result;
use crate::teams::TeamsClient;

pub struct AppState {
    pub config: RelayConfig,
    pub teams: TeamsClient,
}

impl AppState {
    pub fn from_config(config: RelayConfig) -> Result<Self> {
        let teams = TeamsClient::from_config(&config)?;
        Ok(Self { config, teams })
    }
}

pub type SharedState = Arc<AppState>;

/// Routes: health check, request dump and the Netlify notification hook.
///
/// `/deploy_created` accepts every method; the event header decides. Only
/// `/dump` lifts axum's 2 MiB body limit.
pub fn build_router(state: SharedState) -> Router {
    Router::new()
        .route("/", routing::get(handlers::root))
        .route(
            "/dump",
            routing::any(handlers::dump).layer(DefaultBodyLimit::disable()),
        )
        .route("/deploy_created", routing::any(api::handle_deploy_created))
        .with_state(state)
}
