//! Upstream catalog integration
//!
//! Wraps the three read-only endpoints of the public creature catalog that the
//! aggregation needs: the paginated listing, the per-item detail record, and
//! the species record holding localized descriptions. Calls are plain
//! request/response mappings; there is no retry and no caching.

mod client;
mod error;
pub mod types;

pub use client::CatalogClient;
pub use error::CatalogError;

use types::{CatalogPage, ItemDetail, Species};

/// Default catalog collection used when no override is configured
pub const DEFAULT_CATALOG_URL: &str = "https://pokeapi.co/api/v2/pokemon";

/// Read access to the upstream catalog
#[async_trait::async_trait]
pub trait CatalogApi: Send + Sync {
    /// Fetches one page of the listing, `GET {base}?limit&offset`
    async fn fetch_list_page(&self, limit: &str, offset: &str) -> Result<CatalogPage, CatalogError>;

    /// Fetches the detail record, `GET {base}/{name_or_id}`
    async fn fetch_item_detail(&self, name_or_id: &str) -> Result<ItemDetail, CatalogError>;

    /// Fetches the species record, `GET {base}-species/{id}`
    async fn fetch_item_species(&self, id: u32) -> Result<Species, CatalogError>;
}

#[cfg(any(test, feature = "test-utils"))]
pub mod mock {
    use std::collections::HashMap;
    use std::sync::Mutex;

    use super::{
        types::{CatalogPage, ItemDetail, Species},
        CatalogApi, CatalogError,
    };

    /// In-memory catalog that records every call it receives
    #[derive(Default)]
    pub struct MockCatalogClient {
        page: Option<CatalogPage>,
        details: HashMap<String, ItemDetail>,
        species: HashMap<u32, Species>,
        calls: Mutex<Vec<String>>,
    }

    impl MockCatalogClient {
        #[must_use]
        pub fn new() -> Self {
            Self::default()
        }

        /// Serves `page` for every listing request
        #[must_use]
        pub fn with_page(mut self, page: CatalogPage) -> Self {
            self.page = Some(page);
            self
        }

        /// Registers an item, reachable by name and by id
        #[must_use]
        pub fn with_item(mut self, detail: ItemDetail) -> Self {
            self.details.insert(detail.id.to_string(), detail.clone());
            self.details.insert(detail.name.clone(), detail);
            self
        }

        #[must_use]
        pub fn with_species(mut self, id: u32, species: Species) -> Self {
            self.species.insert(id, species);
            self
        }

        /// Calls received so far, in order, e.g. `detail:bulbasaur`
        ///
        /// # Panics
        ///
        /// Panics if the call log mutex is poisoned
        #[must_use]
        pub fn calls(&self) -> Vec<String> {
            self.calls.lock().unwrap().clone()
        }

        fn record(&self, call: String) {
            self.calls.lock().unwrap().push(call);
        }
    }

    fn not_found() -> CatalogError {
        CatalogError::Upstream {
            status: 404,
            status_text: Some("Not Found".to_string()),
        }
    }

    #[async_trait::async_trait]
    impl CatalogApi for MockCatalogClient {
        async fn fetch_list_page(
            &self,
            limit: &str,
            offset: &str,
        ) -> Result<CatalogPage, CatalogError> {
            self.record(format!("list:{limit}:{offset}"));
            self.page.clone().ok_or_else(not_found)
        }

        async fn fetch_item_detail(&self, name_or_id: &str) -> Result<ItemDetail, CatalogError> {
            self.record(format!("detail:{name_or_id}"));
            self.details.get(name_or_id).cloned().ok_or_else(not_found)
        }

        async fn fetch_item_species(&self, id: u32) -> Result<Species, CatalogError> {
            self.record(format!("species:{id}"));
            self.species.get(&id).cloned().ok_or_else(not_found)
        }
    }
}
