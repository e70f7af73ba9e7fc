//! Custom extractors for request validation

use aide::operation::OperationInput;
use axum::{
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;

use crate::types::error::AppError;

/// Query string extractor whose rejections go through [`AppError`]
///
/// A query that cannot be deserialized into `T` (for instance a repeated
/// `limit`) is reported as a validation failure with the same error body as
/// every other failure.
pub struct QueryParams<T>(pub T);

impl<T, S> FromRequestParts<S> for QueryParams<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(params) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::validation(rejection.body_text()))?;

        Ok(Self(params))
    }
}

impl<T> OperationInput for QueryParams<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        // Same parameters as a plain query extractor
        Query::<T>::operation_input(ctx, operation);
    }
}

/// Path parameter extractor whose rejections go through [`AppError`]
///
/// Keeps the rejection status (a path segment that is not valid UTF-8 is a
/// `400`) but answers with the usual JSON error body.
pub struct PathParams<T>(pub T);

impl<T, S> FromRequestParts<S> for PathParams<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(params) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| AppError::new(rejection.status(), rejection.body_text()))?;

        Ok(Self(params))
    }
}

impl<T> OperationInput for PathParams<T>
where
    T: JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        Path::<T>::operation_input(ctx, operation);
    }
}
