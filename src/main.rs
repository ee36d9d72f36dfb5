use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use api_rest::AppState;
use cookbook_core::{open_repository, store_kind_from_env_value, CoreConfig};

/// Main entry point for the cookbook service
///
/// Resolves configuration from the environment (and `.env`, if present), opens the selected
/// document store and serves the REST API.
///
/// # Environment Variables
/// - `COOKBOOK_REST_ADDR`: REST server address (default: "0.0.0.0:3000")
/// - `COOKBOOK_STORE`: `file` (default) or `memory`
/// - `RECIPE_DATA_DIR`: root directory of the file store (default: "recipe_data"); must exist
///
/// # Errors
/// Returns an error if:
/// - the logging/tracing configuration cannot be initialised,
/// - the configuration is invalid or the store cannot be opened,
/// - the server address cannot be bound, or
/// - the HTTP server fails while running.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("cookbook=info".parse()?)
                .add_directive("api_rest=info".parse()?),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rest_addr =
        std::env::var("COOKBOOK_REST_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".into());
    let store_kind = store_kind_from_env_value(std::env::var("COOKBOOK_STORE").ok())?;
    let recipe_data_dir = std::env::var("RECIPE_DATA_DIR")
        .unwrap_or_else(|_| cookbook_core::DEFAULT_RECIPE_DATA_DIR.into());

    let cfg = CoreConfig::new(PathBuf::from(recipe_data_dir), store_kind)?;
    let repository = open_repository(&cfg)?;
    let app = api_rest::router(AppState::new(repository));

    tracing::info!("++ Starting Cookbook REST on {}", rest_addr);

    let listener = tokio::net::TcpListener::bind(&rest_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
