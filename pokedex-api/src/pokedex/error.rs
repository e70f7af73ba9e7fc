use thiserror::Error;

use crate::catalog::CatalogError;

/// Errors produced while assembling a pokedex response
#[derive(Debug, Error)]
pub enum PokedexError {
    /// `limit` or `offset` was not supplied by the caller
    #[error("missing limit/offset params")]
    MissingPageParams,

    /// An upstream catalog call failed; the whole aggregation is aborted
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    /// The species record has no flavor text in the configured locale
    #[error("no description available in the requested locale ({locale})")]
    MissingDescription {
        /// Locale code that was looked up
        locale: String,
    },
}
