use httpmock::{prelude::*, Mock};
use serde_json::{json, Value};

use super::CATALOG_PATH;

/// Catalog detail payload trimmed to the fields the service reads, plus noise
pub fn detail_json(
    id: u32,
    name: &str,
    types: &[&str],
    weight: u32,
    abilities: &[&str],
    moves: &[&str],
) -> Value {
    json!({
        "id": id,
        "name": name,
        "base_experience": 64,
        "sprites": {
            "front_default": format!("https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/{id}.png"),
            "back_default": null
        },
        "types": types.iter().enumerate().map(|(i, t)| json!({
            "slot": i + 1,
            "type": { "name": t, "url": format!("https://pokeapi.co/api/v2/type/{t}/") }
        })).collect::<Vec<_>>(),
        "weight": weight,
        "abilities": abilities.iter().enumerate().map(|(i, a)| json!({
            "slot": i + 1,
            "is_hidden": false,
            "ability": { "name": a, "url": format!("https://pokeapi.co/api/v2/ability/{a}/") }
        })).collect::<Vec<_>>(),
        "moves": moves.iter().map(|m| json!({
            "move": { "name": m, "url": format!("https://pokeapi.co/api/v2/move/{m}/") },
            "version_group_details": []
        })).collect::<Vec<_>>()
    })
}

/// Catalog species payload with the given `(text, locale)` flavor entries
pub fn species_json(id: u32, entries: &[(&str, &str)]) -> Value {
    json!({
        "id": id,
        "flavor_text_entries": entries.iter().map(|(text, locale)| json!({
            "flavor_text": text,
            "language": { "name": locale, "url": format!("https://pokeapi.co/api/v2/language/{locale}/") },
            "version": { "name": "red", "url": "https://pokeapi.co/api/v2/version/1/" }
        })).collect::<Vec<_>>()
    })
}

/// Catalog list payload for the given names
pub fn page_json(count: u64, names: &[&str], next: Option<&str>, previous: Option<&str>) -> Value {
    json!({
        "count": count,
        "next": next,
        "previous": previous,
        "results": names.iter().map(|n| json!({
            "name": n,
            "url": format!("https://pokeapi.co/api/v2/pokemon/{n}/")
        })).collect::<Vec<_>>()
    })
}

pub fn mock_page<'a>(
    server: &'a MockServer,
    limit: &str,
    offset: &str,
    body: Value,
) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET)
            .path(CATALOG_PATH)
            .query_param("limit", limit)
            .query_param("offset", offset);
        then.status(200).json_body(body);
    })
}

pub fn mock_detail<'a>(server: &'a MockServer, name: &str, body: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("{CATALOG_PATH}/{name}"));
        then.status(200).json_body(body);
    })
}

pub fn mock_species<'a>(server: &'a MockServer, id: u32, body: Value) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(format!("{CATALOG_PATH}-species/{id}"));
        then.status(200).json_body(body);
    })
}

pub fn mock_status<'a>(server: &'a MockServer, path: &str, status: u16) -> Mock<'a> {
    server.mock(|when, then| {
        when.method(GET).path(path);
        then.status(status);
    })
}
