use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Numeric identifier Genius assigns to every artist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ArtistId(pub u64);

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Outcome of turning a search term into an artist id. Transport failures
/// are reported separately through `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Found(ArtistId),
    NotFound,
}

impl Resolution {
    pub fn artist_id(self) -> Option<ArtistId> {
        match self {
            Resolution::Found(id) => Some(id),
            Resolution::NotFound => None,
        }
    }
}

impl From<Option<ArtistId>> for Resolution {
    fn from(id: Option<ArtistId>) -> Self {
        id.map_or(Resolution::NotFound, Resolution::Found)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Artist {
    pub id: Option<ArtistId>,
    pub name: String,
    pub followers_count: u64,
    pub url: Option<String>,
    pub image_url: Option<String>,
    pub is_verified: bool,
}

impl Artist {
    /// Reads the `response.artist` envelope of an `/artists/{id}` payload.
    /// Absent or mistyped fields fall back to their defaults.
    pub fn from_payload(payload: &Value) -> Self {
        let artist = payload.pointer("/response/artist").unwrap_or(&Value::Null);

        Self {
            id: artist.get("id").and_then(Value::as_u64).map(ArtistId),
            name: string_field(artist, "name").unwrap_or_default(),
            followers_count: artist
                .get("followers_count")
                .and_then(Value::as_u64)
                .unwrap_or_default(),
            url: string_field(artist, "url"),
            image_url: string_field(artist, "image_url"),
            is_verified: artist
                .get("is_verified")
                .and_then(Value::as_bool)
                .unwrap_or_default(),
        }
    }
}

fn string_field(value: &Value, key: &str) -> Option<String> {
    value.get(key).and_then(Value::as_str).map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_profile_from_envelope() {
        let payload = json!({
            "response": {
                "artist": {
                    "id": 431,
                    "name": "Radiohead",
                    "followers_count": 500000,
                    "url": "https://genius.com/artists/Radiohead",
                    "is_verified": true
                }
            }
        });

        let artist = Artist::from_payload(&payload);
        assert_eq!(artist.id, Some(ArtistId(431)));
        assert_eq!(artist.name, "Radiohead");
        assert_eq!(artist.followers_count, 500_000);
        assert_eq!(
            artist.url.as_deref(),
            Some("https://genius.com/artists/Radiohead")
        );
        assert_eq!(artist.image_url, None);
        assert!(artist.is_verified);
    }

    #[test]
    fn missing_envelope_yields_defaults() {
        assert_eq!(Artist::from_payload(&json!({})), Artist::default());
        assert_eq!(
            Artist::from_payload(&json!({ "response": null })),
            Artist::default()
        );
    }

    #[test]
    fn mistyped_fields_are_treated_as_absent() {
        let payload = json!({
            "response": { "artist": { "id": "431", "name": 7, "followers_count": -3 } }
        });

        let artist = Artist::from_payload(&payload);
        assert_eq!(artist.id, None);
        assert_eq!(artist.name, "");
        assert_eq!(artist.followers_count, 0);
    }

    #[test]
    fn resolution_from_option() {
        assert_eq!(
            Resolution::from(Some(ArtistId(1))),
            Resolution::Found(ArtistId(1))
        );
        assert_eq!(Resolution::from(None), Resolution::NotFound);
        assert_eq!(Resolution::Found(ArtistId(9)).artist_id(), Some(ArtistId(9)));
    }
}
