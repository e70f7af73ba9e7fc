use std::sync::Arc;

use axum::{Extension, Json};
use schemars::JsonSchema;
use serde::Deserialize;
use tracing::instrument;

use crate::{
    pokedex::{PageParams, Pokedex, PokemonDetails, PokemonList},
    types::{AppError, PathParams, QueryParams},
};

/// Path parameters of the details endpoint
#[derive(Debug, Deserialize, JsonSchema)]
pub struct DetailsPath {
    /// Name or numeric id of the pokemon
    pub name: String,
}

/// List pokemon
///
/// Returns one page of the catalog where every entry carries its photo,
/// types, weight and abilities. Entries keep the catalog order.
///
/// # Errors
///
/// Returns an error if:
/// - `500 INTERNAL_SERVER_ERROR` - `limit` or `offset` is missing or malformed
/// - Catalog status (e.g. `404`, `503`) - the page or one of its details failed upstream
#[instrument(skip(pokedex))]
pub async fn list(
    Extension(pokedex): Extension<Arc<Pokedex>>,
    QueryParams(params): QueryParams<PageParams>,
) -> Result<Json<PokemonList>, AppError> {
    let list = pokedex.list(&params).await?;
    Ok(Json(list))
}

/// Pokemon details
///
/// Returns the basic information of one pokemon together with its moves and
/// its description in the configured locale.
///
/// # Errors
///
/// Returns an error if:
/// - `400 BAD_REQUEST` - the name is not valid UTF-8
/// - `404 NOT_FOUND` - no description exists in the configured locale
/// - Catalog status (usually `404`) - the pokemon does not exist upstream
#[instrument(skip(pokedex))]
pub async fn details(
    Extension(pokedex): Extension<Arc<Pokedex>>,
    PathParams(path): PathParams<DetailsPath>,
) -> Result<Json<PokemonDetails>, AppError> {
    let details = pokedex.details(&path.name).await?;
    Ok(Json(details))
}
