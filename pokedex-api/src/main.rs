use std::sync::Arc;

use pokedex_api::{
    catalog::CatalogClient,
    pokedex::Pokedex,
    server,
    types::{Environment, ServerConfig},
};
use tracing_subscriber::{filter::LevelFilter, fmt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let environment = Environment::from_env();

    // JSON logs for staging/production, human-readable output for development
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(environment.tracing_level()).into())
        .from_env_lossy();
    if environment.json_logs() {
        fmt().json().with_env_filter(filter).init();
    } else {
        fmt().with_env_filter(filter).init();
    }

    let config = ServerConfig::from_env(environment);
    tracing::info!("Starting Pokedex API in {environment:?} environment");

    let catalog = Arc::new(CatalogClient::new(
        config.catalog_base_url(),
        config.upstream_timeout,
    )?);
    let pokedex = Arc::new(Pokedex::new(
        catalog,
        config.detail_concurrency,
        config.description_locale.clone(),
    ));

    server::start(environment, config, pokedex).await
}
