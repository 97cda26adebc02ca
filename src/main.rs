use netlify_teams_relay::config::RelayConfig;
use netlify_teams_relay::error::RelayError;
use netlify_teams_relay::logging::setup_logging;
use netlify_teams_relay::{AppState, build_router};
use std::sync::Arc;
use tracing::{error, info};

async fn run(config: RelayConfig) -> Result<(), RelayError> {
    let bind_address = config.bind_address();
    let state = Arc::new(AppState::from_config(config)?);
    let app = build_router(state.clone());

    info!(
        "Sending Netlify notification to MS Teams Webhook at {}",
        state.config.teams_webhook_url
    );

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    info!("Server running on http://localhost:{}", state.config.port);
    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    dotenv::dotenv().ok();

    // Nothing is bound until the config is known to be valid.
    let config = match RelayConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("{}", e);
            std::process::exit(1);
        }
    };

    let log_guard = match setup_logging(config.log_dir.clone()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to set up logging: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        error!("could not run the server: {}", e);
        drop(log_guard);
        std::process::exit(1);
    }
}
