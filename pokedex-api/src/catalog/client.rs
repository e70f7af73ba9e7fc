use std::time::Duration;

use reqwest::{Client, Url};
use reqwest_middleware::{ClientBuilder, ClientWithMiddleware};
use reqwest_tracing::TracingMiddleware;
use serde::de::DeserializeOwned;

use super::{
    error::CatalogError,
    types::{CatalogPage, ItemDetail, Species},
    CatalogApi,
};

/// Maximum number of idle connections to maintain per host
const MAX_IDLE_CONNECTIONS_PER_HOST: usize = 10;

/// HTTP client for the upstream catalog service
///
/// The base URL points at the item collection (e.g.
/// `https://pokeapi.co/api/v2/pokemon`); species live next to it under the
/// `-species` suffix.
pub struct CatalogClient {
    items_url: Url,
    species_url: Url,
    http_client: ClientWithMiddleware,
}

impl CatalogClient {
    /// Creates a new catalog client with a per-request timeout
    ///
    /// # Errors
    ///
    /// - `CatalogError::InvalidBaseUrl` if `base_url` is not an absolute
    ///   http(s) URL
    /// - `CatalogError::Network` if the underlying HTTP client cannot be built
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, CatalogError> {
        let base_url = base_url.trim_end_matches('/');
        let items_url = parse_collection_url(base_url)?;
        let species_url = parse_collection_url(&format!("{base_url}-species"))?;

        let reqwest_client = Client::builder()
            .timeout(timeout)
            .pool_max_idle_per_host(MAX_IDLE_CONNECTIONS_PER_HOST)
            .user_agent(format!("pokedex-api/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(reqwest_middleware::Error::from)?;

        let http_client = ClientBuilder::new(reqwest_client)
            .with(TracingMiddleware::default())
            .build();

        Ok(Self {
            items_url,
            species_url,
            http_client,
        })
    }

    /// Base URL of the item collection, without trailing slash
    #[must_use]
    pub fn base_url(&self) -> &str {
        self.items_url.as_str()
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: Url,
        query: &[(&str, &str)],
    ) -> Result<T, CatalogError> {
        let response = self.http_client.get(url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!("Catalog returned {status} for {}", response.url());
            return Err(CatalogError::from_status(status));
        }

        let body = response
            .bytes()
            .await
            .map_err(reqwest_middleware::Error::from)?;

        Ok(serde_json::from_slice(&body)?)
    }
}

/// Parses a collection URL that single segments can be appended to
fn parse_collection_url(url: &str) -> Result<Url, CatalogError> {
    let parsed = Url::parse(url).map_err(|err| CatalogError::InvalidBaseUrl {
        url: url.to_string(),
        reason: err.to_string(),
    })?;

    if parsed.cannot_be_a_base() {
        return Err(CatalogError::InvalidBaseUrl {
            url: url.to_string(),
            reason: "not a hierarchical URL".to_string(),
        });
    }

    Ok(parsed)
}

/// Appends `segment` as exactly one path segment
///
/// Slashes, `?` and `#` inside the segment are percent-encoded, so a caller
/// supplied name can never leave the collection or add a query string.
fn member_url(collection: &Url, segment: &str) -> Result<Url, CatalogError> {
    let mut url = collection.clone();
    url.path_segments_mut()
        .map_err(|()| CatalogError::InvalidBaseUrl {
            url: collection.to_string(),
            reason: "not a hierarchical URL".to_string(),
        })?
        .push(segment);
    Ok(url)
}

#[async_trait::async_trait]
impl CatalogApi for CatalogClient {
    async fn fetch_list_page(&self, limit: &str, offset: &str) -> Result<CatalogPage, CatalogError> {
        self.get_json(
            self.items_url.clone(),
            &[("limit", limit), ("offset", offset)],
        )
        .await
    }

    async fn fetch_item_detail(&self, name_or_id: &str) -> Result<ItemDetail, CatalogError> {
        let url = member_url(&self.items_url, name_or_id)?;
        self.get_json(url, &[]).await
    }

    async fn fetch_item_species(&self, id: u32) -> Result<Species, CatalogError> {
        let url = member_url(&self.species_url, &id.to_string())?;
        self.get_json(url, &[]).await
    }
}
