use aide::{axum::ApiRouter, openapi::OpenApi, scalar::Scalar};
use axum::http::StatusCode;
use axum::{response::IntoResponse, routing::get, Extension, Json};

use crate::types::{Environment, ServerConfig};

pub fn handler(config: &ServerConfig) -> ApiRouter {
    let openapi_path = config.openapi_path();
    let scalar = Scalar::new(openapi_path.clone()).with_title("Pokedex API Docs");

    ApiRouter::new()
        .route(&config.docs_path, scalar.axum_route())
        .route(&openapi_path, get(openapi_schema))
}

#[allow(clippy::unused_async)]
async fn openapi_schema(
    Extension(environment): Extension<Environment>,
    Extension(openapi): Extension<OpenApi>,
) -> impl IntoResponse {
    if !environment.show_api_docs() {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(openapi).into_response()
}
