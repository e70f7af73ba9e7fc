use std::sync::Arc;

use aide::openapi::{Info, OpenApi};
use axum::{
    error_handling::HandleErrorLayer,
    http::{Method, StatusCode},
    BoxError, Extension, Router,
};
use tokio::net::TcpListener;
use tower::{timeout::error::Elapsed, timeout::TimeoutLayer, ServiceBuilder};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::routes;
use crate::{
    pokedex::Pokedex,
    types::{AppError, Environment, ServerConfig},
};

/// Builds the application router with its documentation and layers
pub fn router(environment: Environment, config: &ServerConfig, pokedex: Arc<Pokedex>) -> Router {
    let mut openapi = OpenApi {
        info: Info {
            title: "Pokedex API".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            ..Info::default()
        },
        ..OpenApi::default()
    };

    routes::handler(config)
        .finish_api(&mut openapi)
        .layer(Extension(openapi))
        .layer(Extension(environment))
        .layer(Extension(pokedex))
        .layer(cors_layer(config.dev_mode))
        .layer(TraceLayer::new_for_http())
        .layer(
            ServiceBuilder::new()
                .layer(HandleErrorLayer::new(handle_middleware_error))
                .layer(TimeoutLayer::new(config.request_timeout)),
        )
}

/// Turns middleware failures into the regular error body
async fn handle_middleware_error(err: BoxError) -> AppError {
    if err.is::<Elapsed>() {
        AppError::new(StatusCode::REQUEST_TIMEOUT, "request timed out")
    } else {
        AppError::new(
            StatusCode::INTERNAL_SERVER_ERROR,
            format!("unhandled middleware error: {err}"),
        )
    }
}

fn cors_layer(dev_mode: bool) -> CorsLayer {
    if dev_mode {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods([Method::GET])
    }
}

/// Starts the server with the given environment and dependencies
///
/// # Errors
///
/// Returns an error if the server fails to start or bind to the port
pub async fn start(
    environment: Environment,
    config: ServerConfig,
    pokedex: Arc<Pokedex>,
) -> anyhow::Result<()> {
    let router = router(environment, &config, pokedex);

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(
        "🔄 Pokedex API started on http://{addr}, catalog at {}",
        config.catalog_base_url()
    );
    if environment.show_api_docs() {
        tracing::info!("API docs available at http://{addr}{}", config.docs_path);
    }

    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(anyhow::Error::from)
}

/// Resolves once SIGINT or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {err}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to listen for SIGTERM: {err}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutting down Pokedex API...");
}
