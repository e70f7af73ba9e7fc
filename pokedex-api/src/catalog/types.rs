//! Upstream catalog payloads
//!
//! Only the fields the aggregation reads are modelled; everything else in the
//! catalog responses is ignored during deserialization.

use serde::{Deserialize, Serialize};

/// One page of the catalog listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogPage {
    /// Total number of items in the catalog
    pub count: u64,
    /// URL of the next page, if any
    pub next: Option<String>,
    /// URL of the previous page, if any
    pub previous: Option<String>,
    /// Entries of this page, in catalog order
    pub results: Vec<ListEntry>,
}

/// Minimal reference to a catalog item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListEntry {
    pub name: String,
    pub url: String,
}

/// A `{ name, url }` pair as used throughout the catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Sprites {
    /// Default front-facing sprite; the catalog sends `null` for some forms
    pub front_default: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbilitySlot {
    pub ability: NamedResource,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSlot {
    #[serde(rename = "move")]
    pub movement: NamedResource,
}

/// Full detail record of a single item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDetail {
    pub id: u32,
    pub name: String,
    pub sprites: Sprites,
    pub types: Vec<TypeSlot>,
    pub weight: u32,
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub moves: Vec<MoveSlot>,
}

/// Species record, used only for its localized flavor texts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Species {
    pub flavor_text_entries: Vec<FlavorTextEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
}
