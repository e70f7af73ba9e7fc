use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::catalog::types::ItemDetail;

/// Query parameters of the list endpoint
///
/// Both values are forwarded verbatim to the catalog; they are optional here
/// so that a missing one is reported as a validation failure instead of an
/// extractor rejection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
pub struct PageParams {
    /// Maximum number of entries to return
    pub limit: Option<String>,
    /// Index of the first entry to return
    pub offset: Option<String>,
}

/// Simplified view of one pokemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonSummary {
    pub name: String,
    /// URL of the default front sprite
    pub photo: Option<String>,
    /// Comma-separated type names, in catalog slot order
    #[serde(rename = "type")]
    pub types: String,
    /// Weight in hectograms, as reported by the catalog
    pub weight: u32,
    /// Comma-separated ability names, in catalog slot order
    pub abilities: String,
}

impl PokemonSummary {
    /// Builds a summary from a detail record, keeping the name given by the caller
    #[must_use]
    pub fn from_detail(name: &str, detail: &ItemDetail) -> Self {
        Self {
            name: name.to_string(),
            photo: detail.sprites.front_default.clone(),
            types: join_names(detail.types.iter().map(|slot| slot.kind.name.as_str())),
            weight: detail.weight,
            abilities: join_names(detail.abilities.iter().map(|slot| slot.ability.name.as_str())),
        }
    }
}

/// One page of the pokedex
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct PokemonList {
    /// Total number of pokemon in the catalog
    pub count: u64,
    /// Catalog URL of the next page
    pub next: Option<String>,
    /// Catalog URL of the previous page
    pub previous: Option<String>,
    /// Summaries in catalog order
    pub results: Vec<PokemonSummary>,
}

/// Detailed view of a single pokemon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct PokemonDetails {
    pub basic_information: PokemonSummary,
    /// Comma-separated move names, in catalog order
    pub movements: String,
    /// Flavor text in the configured locale
    pub description: String,
}

pub(crate) fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(",")
}
