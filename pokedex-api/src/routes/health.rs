use aide::axum::IntoApiResponse;
use axum::Json;
use schemars::JsonSchema;
use serde::Serialize;

/// Liveness report of the proxy
///
/// Does not call the catalog; an upstream outage shows up on `/list` and
/// `/details` as the forwarded status instead.
#[derive(Debug, Serialize, JsonSchema)]
pub struct HealthResponse {
    status: &'static str,
    /// Crate version the binary was built from
    version: &'static str,
    /// `GIT_REV` at build time
    rev: Option<&'static str>,
}

/// Liveness check
pub async fn handler() -> impl IntoApiResponse {
    Json(HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        rev: option_env!("GIT_REV"),
    })
}
