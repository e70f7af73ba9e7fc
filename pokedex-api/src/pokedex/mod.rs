//! Aggregation of catalog responses into the pokedex views
//!
//! The list view fans out one detail request per entry of the requested
//! page and merges the summary fields back in page order. The detail view
//! chains the detail and species requests (the species id comes from the
//! detail record) and picks the flavor text of the configured locale.

mod error;
mod models;

use std::sync::Arc;

use futures::{stream, StreamExt, TryStreamExt};
use tracing::instrument;

use crate::catalog::{types::ListEntry, CatalogApi, CatalogError};

pub use error::PokedexError;
pub use models::{PageParams, PokemonDetails, PokemonList, PokemonSummary};

use models::join_names;

/// Locale used for descriptions when none is configured
pub const DEFAULT_DESCRIPTION_LOCALE: &str = "es";

/// Builds pokedex responses on top of a catalog
pub struct Pokedex {
    catalog: Arc<dyn CatalogApi>,
    detail_concurrency: usize,
    description_locale: String,
}

impl Pokedex {
    /// Creates an aggregator
    ///
    /// `detail_concurrency` bounds the number of detail requests in flight for
    /// one page; `1` fetches them strictly one after another. Zero is treated
    /// as one.
    #[must_use]
    pub fn new(
        catalog: Arc<dyn CatalogApi>,
        detail_concurrency: usize,
        description_locale: impl Into<String>,
    ) -> Self {
        Self {
            catalog,
            detail_concurrency: detail_concurrency.max(1),
            description_locale: description_locale.into(),
        }
    }

    /// Fetches a catalog page and enriches every entry with its detail fields
    ///
    /// Results keep the page order regardless of the configured concurrency.
    ///
    /// # Errors
    ///
    /// - `PokedexError::MissingPageParams` if `limit` or `offset` is absent;
    ///   no catalog call is made in that case
    /// - `PokedexError::Catalog` if the page or any detail request fails
    #[instrument(skip(self))]
    pub async fn list(&self, params: &PageParams) -> Result<PokemonList, PokedexError> {
        let (Some(limit), Some(offset)) = (params.limit.as_deref(), params.offset.as_deref())
        else {
            return Err(PokedexError::MissingPageParams);
        };

        let page = self.catalog.fetch_list_page(limit, offset).await?;

        let results: Vec<PokemonSummary> = stream::iter(page.results)
            .map(|entry| async move { self.summarize(&entry).await })
            .buffered(self.detail_concurrency)
            .try_collect()
            .await?;

        tracing::debug!("Aggregated {} list entries", results.len());

        Ok(PokemonList {
            count: page.count,
            next: page.next,
            previous: page.previous,
            results,
        })
    }

    /// Fetches one pokemon with its moves and localized description
    ///
    /// # Errors
    ///
    /// - `PokedexError::Catalog` if the detail or species request fails,
    ///   including the catalog's 404 for unknown names
    /// - `PokedexError::MissingDescription` if the species has no flavor text
    ///   in the configured locale
    #[instrument(skip(self))]
    pub async fn details(&self, name: &str) -> Result<PokemonDetails, PokedexError> {
        let detail = self.catalog.fetch_item_detail(name).await?;
        let species = self.catalog.fetch_item_species(detail.id).await?;

        let description = species
            .flavor_text_entries
            .into_iter()
            .find(|entry| entry.language.name == self.description_locale)
            .map(|entry| entry.flavor_text)
            .ok_or_else(|| PokedexError::MissingDescription {
                locale: self.description_locale.clone(),
            })?;

        Ok(PokemonDetails {
            basic_information: PokemonSummary::from_detail(&detail.name, &detail),
            movements: join_names(detail.moves.iter().map(|slot| slot.movement.name.as_str())),
            description,
        })
    }

    async fn summarize(&self, entry: &ListEntry) -> Result<PokemonSummary, CatalogError> {
        let detail = self.catalog.fetch_item_detail(&entry.name).await?;
        Ok(PokemonSummary::from_detail(&entry.name, &detail))
    }
}
