//! PokeAPI client - the Record Source

use std::sync::OnceLock;

use serde::Deserialize;

use crate::state::{PokemonRecord, PokemonStat};

pub const API_BASE: &str = "https://pokeapi.co/api/v2";

static API_BASE_OVERRIDE: OnceLock<String> = OnceLock::new();

/// Fetch failure: transport error, non-success status or malformed body.
#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("No Pokémon found for id={id}")]
    NotFound { id: u32 },
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("response parse error: {0}")]
    Decode(#[from] serde_json::Error),
}

// Every field defaults so a partial payload still renders.

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct PokemonResponse {
    id: u32,
    name: String,
    height: u32,
    weight: u32,
    sprites: Sprites,
    types: Vec<TypeSlot>,
    stats: Vec<StatSlot>,
    moves: Vec<MoveSlot>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct NamedResource {
    name: String,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct Sprites {
    front_default: Option<String>,
    other: OtherSprites,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct OtherSprites {
    #[serde(rename = "official-artwork")]
    official_artwork: Artwork,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct Artwork {
    front_default: Option<String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct TypeSlot {
    #[serde(rename = "type")]
    type_info: NamedResource,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct StatSlot {
    base_stat: u32,
    stat: NamedResource,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
struct MoveSlot {
    #[serde(rename = "move")]
    move_info: NamedResource,
}

impl Sprites {
    /// Official artwork first, then the default sprite. Empty strings count as missing.
    fn artwork_url(self) -> Option<String> {
        self.other
            .official_artwork
            .front_default
            .filter(|url| !url.is_empty())
            .or(self.front_default.filter(|url| !url.is_empty()))
    }
}

impl From<PokemonResponse> for PokemonRecord {
    fn from(response: PokemonResponse) -> Self {
        PokemonRecord {
            id: response.id,
            name: response.name,
            artwork_url: response.sprites.artwork_url(),
            types: response
                .types
                .into_iter()
                .map(|slot| slot.type_info.name)
                .collect(),
            stats: response
                .stats
                .into_iter()
                .map(|slot| PokemonStat {
                    name: slot.stat.name,
                    value: slot.base_stat,
                })
                .collect(),
            moves: response
                .moves
                .into_iter()
                .map(|slot| slot.move_info.name)
                .collect(),
            height: response.height,
            weight: response.weight,
        }
    }
}

/// Override the base URL. Only the first call wins; returns false afterwards.
pub fn configure(base_url: &str) -> bool {
    API_BASE_OVERRIDE
        .set(base_url.trim_end_matches('/').to_string())
        .is_ok()
}

pub fn api_base() -> &'static str {
    API_BASE_OVERRIDE
        .get()
        .map(String::as_str)
        .unwrap_or(API_BASE)
}

pub fn pokemon_url(base: &str, id: u32) -> String {
    format!("{base}/pokemon/{id}/")
}

pub async fn fetch_pokemon(id: u32) -> Result<PokemonRecord, FetchError> {
    let url = pokemon_url(api_base(), id);
    let response = http_client().get(&url).send().await?;
    check_status(id, response.status())?;
    let bytes = response.bytes().await?;
    parse_pokemon(&bytes)
}

/// Any non-success status means there is no record for `id`.
pub fn check_status(id: u32, status: reqwest::StatusCode) -> Result<(), FetchError> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FetchError::NotFound { id })
    }
}

pub fn parse_pokemon(bytes: &[u8]) -> Result<PokemonRecord, FetchError> {
    let response: PokemonResponse = serde_json::from_slice(bytes)?;
    Ok(response.into())
}

fn http_client() -> &'static reqwest::Client {
    static CLIENT: OnceLock<reqwest::Client> = OnceLock::new();
    CLIENT.get_or_init(reqwest::Client::new)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn parse(value: serde_json::Value) -> PokemonRecord {
        parse_pokemon(value.to_string().as_bytes()).expect("valid payload")
    }

    #[test]
    fn test_parse_full_payload() {
        let record = parse(json!({
            "id": 132,
            "name": "ditto",
            "height": 3,
            "weight": 40,
            "sprites": {
                "front_default": "https://img/sprite/132.png",
                "other": {
                    "official-artwork": { "front_default": "https://img/art/132.png" }
                }
            },
            "types": [{ "slot": 1, "type": { "name": "normal", "url": "" } }],
            "stats": [
                { "base_stat": 48, "effort": 1, "stat": { "name": "hp", "url": "" } },
                { "base_stat": 48, "effort": 0, "stat": { "name": "attack", "url": "" } }
            ],
            "moves": [{ "move": { "name": "transform", "url": "" }, "version_group_details": [] }]
        }));

        assert_eq!(
            record,
            PokemonRecord {
                id: 132,
                name: "ditto".into(),
                artwork_url: Some("https://img/art/132.png".into()),
                types: vec!["normal".into()],
                stats: vec![
                    PokemonStat {
                        name: "hp".into(),
                        value: 48,
                    },
                    PokemonStat {
                        name: "attack".into(),
                        value: 48,
                    },
                ],
                moves: vec!["transform".into()],
                height: 3,
                weight: 40,
            }
        );
    }

    #[test]
    fn test_artwork_falls_back_to_default_sprite() {
        let record = parse(json!({
            "name": "missingno",
            "sprites": {
                "front_default": "https://img/sprite/0.png",
                "other": { "official-artwork": { "front_default": null } }
            }
        }));
        assert_eq!(record.artwork_url.as_deref(), Some("https://img/sprite/0.png"));

        let record = parse(json!({
            "sprites": {
                "front_default": "https://img/sprite/1.png",
                "other": { "official-artwork": { "front_default": "" } }
            }
        }));
        assert_eq!(record.artwork_url.as_deref(), Some("https://img/sprite/1.png"));
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let record = parse(json!({ "name": "ditto" }));

        assert_eq!(record.name, "ditto");
        assert_eq!(record.artwork_url, None);
        assert!(record.types.is_empty());
        assert!(record.stats.is_empty());
        assert!(record.moves.is_empty());
        assert_eq!((record.height, record.weight), (0, 0));
    }

    #[test]
    fn test_malformed_body_is_decode_error() {
        let err = parse_pokemon(b"<html>oops</html>").unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }

    #[test]
    fn test_not_found_message() {
        let err = FetchError::NotFound { id: 99999 };
        assert_eq!(err.to_string(), "No Pokémon found for id=99999");
    }

    #[test]
    fn test_non_success_status_is_not_found() {
        assert!(check_status(132, reqwest::StatusCode::OK).is_ok());

        for status in [
            reqwest::StatusCode::NOT_FOUND,
            reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        ] {
            let err = check_status(100000, status).unwrap_err();
            assert!(matches!(err, FetchError::NotFound { id: 100000 }));
            assert_eq!(err.to_string(), "No Pokémon found for id=100000");
        }
    }

    #[test]
    fn test_pokemon_url() {
        assert_eq!(
            pokemon_url(API_BASE, 132),
            "https://pokeapi.co/api/v2/pokemon/132/"
        );
    }
}
