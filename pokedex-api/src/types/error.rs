//! Universal error handling for the API
//!
//! Every failure raised by a handler ends up here and is turned into exactly
//! one JSON response of the shape `{ "message": ... }`.

use aide::OperationOutput;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{catalog::CatalogError, pokedex::PokedexError};

/// Error body returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ApiErrorResponse {
    /// Human-readable error message
    pub message: String,
}

/// Application error type that wraps the API error response
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    inner: ApiErrorResponse,
}

impl AppError {
    /// Create a new application error
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            inner: ApiErrorResponse {
                message: message.into(),
            },
        }
    }

    /// Caller input failed a local precondition
    ///
    /// Reported as a server error, which is what existing clients of this API
    /// expect for missing query parameters.
    #[must_use]
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
    }

    /// Status code that will be sent
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        self.status
    }

    /// Message that will be sent
    #[must_use]
    pub fn message(&self) -> &str {
        &self.inner.message
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error based on status code
        match self.status.as_u16() {
            400..=499 => tracing::warn!("Client error: {} - {}", self.status, self.inner.message),
            500..=599 => tracing::error!("Server error: {} - {}", self.status, self.inner.message),
            _ => {}
        }

        (self.status, Json(self.inner)).into_response()
    }
}

/// Convert catalog errors to application errors
impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Upstream {
                status,
                status_text,
            } => {
                tracing::debug!("Catalog upstream error: {status}");
                // Non-standard codes (or ones axum cannot represent) fall back to 500
                let status = StatusCode::from_u16(status)
                    .ok()
                    .filter(|code| code.is_client_error() || code.is_server_error())
                    .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                let message = status_text
                    .or_else(|| status.canonical_reason().map(ToString::to_string))
                    .unwrap_or_else(|| status.to_string());
                Self::new(status, message)
            }
            CatalogError::Network(_)
            | CatalogError::InvalidBaseUrl { .. }
            | CatalogError::Decode(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        }
    }
}

/// Convert aggregation errors to application errors
impl From<PokedexError> for AppError {
    fn from(err: PokedexError) -> Self {
        match err {
            PokedexError::Catalog(err) => err.into(),
            PokedexError::MissingPageParams => Self::validation(err.to_string()),
            PokedexError::MissingDescription { .. } => {
                Self::new(StatusCode::NOT_FOUND, err.to_string())
            }
        }
    }
}

impl OperationOutput for AppError {
    type Inner = ApiErrorResponse;

    fn operation_response(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Option<aide::openapi::Response> {
        Json::<ApiErrorResponse>::operation_response(ctx, operation)
    }
}
