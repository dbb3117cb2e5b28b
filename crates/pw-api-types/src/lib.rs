use serde::{Deserialize, Serialize};

/// A single catalog entry as returned by `GET /api/v2/pokemon/{id}`.
///
/// Only the fields the site renders are modelled; everything else in the
/// response is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogItem {
    pub id: u32,
    pub name: String,
    /// Tenths of a metre.
    pub height: u32,
    /// Tenths of a kilogram.
    pub weight: u32,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub sprites: Sprites,
}

impl CatalogItem {
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.types.iter().map(|slot| slot.kind.name.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u8,
    #[serde(rename = "type")]
    pub kind: NamedResource,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Sprites {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub other: Option<OtherSprites>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<Artwork>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Artwork {
    #[serde(default)]
    pub front_default: Option<String>,
}

impl Sprites {
    pub fn artwork_url(&self) -> Option<&str> {
        self.other
            .as_ref()?
            .official_artwork
            .as_ref()?
            .front_default
            .as_deref()
    }

    pub fn sprite_url(&self) -> Option<&str> {
        self.front_default.as_deref()
    }
}

/// Values collected from a contact form that passed validation.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactSubmission {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    const PIKACHU: &str = r#"{
        "abilities": [],
        "base_experience": 112,
        "height": 4,
        "id": 25,
        "name": "pikachu",
        "order": 35,
        "sprites": {
            "back_default": null,
            "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/25.png",
            "other": {
                "dream_world": { "front_default": null },
                "official-artwork": {
                    "front_default": "https://raw.githubusercontent.com/PokeAPI/sprites/master/sprites/pokemon/other/official-artwork/25.png",
                    "front_shiny": null
                }
            }
        },
        "types": [
            { "slot": 1, "type": { "name": "electric", "url": "https://pokeapi.co/api/v2/type/13/" } }
        ],
        "weight": 60
    }"#;

    #[test]
    fn decodes_catalog_response() -> anyhow::Result<()> {
        let item: CatalogItem = serde_json::from_str(PIKACHU)?;
        assert_eq!(item.id, 25);
        assert_eq!(item.name, "pikachu");
        assert_eq!(item.height, 4);
        assert_eq!(item.weight, 60);
        assert_eq!(item.type_names().collect::<Vec<_>>(), vec!["electric"]);
        assert!(item.sprites.artwork_url().unwrap().ends_with("official-artwork/25.png"));
        assert!(item.sprites.sprite_url().unwrap().ends_with("pokemon/25.png"));
        Ok(())
    }

    #[test]
    fn missing_sprites_decode_as_absent() -> anyhow::Result<()> {
        let item: CatalogItem = serde_json::from_str(
            r#"{"id": 1, "name": "x", "height": 1, "weight": 1,
                "sprites": {"front_default": null, "other": {}}, "types": []}"#,
        )?;
        assert_eq!(item.sprites.artwork_url(), None);
        assert_eq!(item.sprites.sprite_url(), None);

        let bare: CatalogItem =
            serde_json::from_str(r#"{"id": 2, "name": "y", "height": 1, "weight": 1}"#)?;
        assert_eq!(bare.sprites, Sprites::default());
        assert!(bare.types.is_empty());
        Ok(())
    }

    #[test]
    fn missing_required_field_is_an_error() {
        let result = serde_json::from_str::<CatalogItem>(r#"{"id": 3, "name": "z"}"#);
        assert!(result.is_err());
    }
}
