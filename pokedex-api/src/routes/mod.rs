mod docs;
mod health;
pub mod pokemon;

use aide::axum::{routing::get, ApiRouter};

use crate::types::ServerConfig;

/// Creates the router with all handler routes
pub fn handler(config: &ServerConfig) -> ApiRouter {
    ApiRouter::new()
        .merge(docs::handler(config))
        .api_route("/health", get(health::handler))
        .api_route("/list", get(pokemon::list))
        .api_route("/details/{name}", get(pokemon::details))
}
