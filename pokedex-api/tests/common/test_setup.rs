use std::sync::Arc;
use std::time::Duration;

use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use httpmock::MockServer;
use pokedex_api::{
    catalog::{CatalogApi, CatalogClient},
    pokedex::Pokedex,
    server,
    types::{Environment, ServerConfig},
};
use tower::ServiceExt;

/// Path of the catalog collection on the mock server
pub const CATALOG_PATH: &str = "/api/v2/pokemon";

/// Setup test environment variables with all the required configuration
pub fn setup_test_env() {
    // Load test environment variables
    dotenvy::from_path(".env.test").ok();

    // Initialize tracing for tests
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init()
        .ok();
}

/// Router wired to a mock catalog server
pub struct TestSetup {
    pub router: Router,
    pub catalog: MockServer,
    pub config: ServerConfig,
}

impl TestSetup {
    pub fn new() -> Self {
        Self::with_environment(Environment::Development, ServerConfig::default())
    }

    pub fn with_environment(environment: Environment, config: ServerConfig) -> Self {
        setup_test_env();

        let catalog = MockServer::start();
        let config = ServerConfig {
            base_url_override: Some(catalog.url(CATALOG_PATH)),
            upstream_timeout: Duration::from_secs(5),
            ..config
        };

        let client = CatalogClient::new(config.catalog_base_url(), config.upstream_timeout)
            .expect("Failed to create catalog client");
        let router = build_router(environment, &config, Arc::new(client));

        Self {
            router,
            catalog,
            config,
        }
    }

    pub async fn send_get_request(
        &self,
        route: &str,
    ) -> Result<Response, Box<dyn std::error::Error>> {
        let request = Request::builder()
            .uri(route)
            .method("GET")
            .body(Body::empty())?;
        let response = self.router.clone().oneshot(request).await?;
        Ok(response)
    }
}

/// Builds the application router on top of any catalog implementation
pub fn build_router(
    environment: Environment,
    config: &ServerConfig,
    catalog: Arc<dyn CatalogApi>,
) -> Router {
    let pokedex = Arc::new(Pokedex::new(
        catalog,
        config.detail_concurrency,
        config.description_locale.clone(),
    ));
    server::router(environment, config, pokedex)
}

/// Parse response body to JSON
pub async fn parse_response_body(response: Response) -> serde_json::Value {
    let body = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&body).unwrap()
}

/// Raw response body
pub async fn response_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}
