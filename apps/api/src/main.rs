//! Catalog API - REST server with JWT authentication

use axum_helpers::create_app;
use catalog_api::config::Config;
use catalog_api::state::AppState;
use core_config::tracing::{init_tracing, install_color_eyre};
use tracing::info;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::from_env()?;
    init_tracing(&config.environment);

    let state = AppState::new(config);
    state.seed_categories().await;

    let app = catalog_api::build_app(&state).await?;

    info!(
        "Starting catalog API on {}",
        state.config.server.address()
    );

    create_app(app, &state.config.server)
        .await
        .map_err(|e| eyre::eyre!("Server error: {}", e))?;

    info!("Catalog API shutdown complete");
    Ok(())
}
