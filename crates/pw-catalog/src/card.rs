//! Card projection of a catalog item.
//!
//! Everything the renderer shows is computed here so the DOM layer only
//! creates nodes and copies strings.

use pw_api_types::{CatalogItem, Sprites};

pub const LOADING_TITLE: &str = "Loading Pokémon...";
pub const LOADING_BODY: &str = "Fetching data from the PokéAPI.";
pub const ERROR_TITLE: &str = "Connection Error";
pub const ERROR_BODY: &str = "Could not load the PokéAPI. Try again.";
pub const IMAGE_ERROR_TITLE: &str = "Error loading the API image.";

pub const IMAGE_WIDTH: u32 = 300;
pub const IMAGE_HEIGHT: u32 = 220;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    pub id: u32,
    pub display_name: String,
    pub padded_id: String,
    pub types: String,
    pub height: String,
    pub weight: String,
    pub image_url: String,
}

impl CardView {
    pub fn from_item(item: &CatalogItem, placeholder_url: &str) -> Self {
        Self {
            id: item.id,
            display_name: capitalize(&item.name),
            padded_id: pad_id(item.id),
            types: join_types(item.type_names()),
            height: format_tenths(item.height),
            weight: format_tenths(item.weight),
            image_url: resolve_image_url(&item.sprites, placeholder_url),
        }
    }

    pub fn heading(&self) -> String {
        format!("#{} - {}", self.padded_id, self.display_name)
    }

    pub fn height_line(&self) -> String {
        format!("Height: {} m", self.height)
    }

    pub fn weight_line(&self) -> String {
        format!("Weight: {} kg", self.weight)
    }
}

/// Upper-case the first character, leave the rest untouched.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

pub fn pad_id(id: u32) -> String {
    format!("{id:03}")
}

pub fn join_types<'a>(names: impl IntoIterator<Item = &'a str>) -> String {
    names
        .into_iter()
        .map(str::to_uppercase)
        .collect::<Vec<_>>()
        .join(" / ")
}

/// Render an API value measured in tenths as whole units, dropping a
/// trailing `.0` (`70` → `7`, `7` → `0.7`).
pub fn format_tenths(value: u32) -> String {
    let whole = value / 10;
    match value % 10 {
        0 => whole.to_string(),
        frac => format!("{whole}.{frac}"),
    }
}

/// Artwork, then sprite, then placeholder. Empty URLs count as missing.
pub fn resolve_image_url(sprites: &Sprites, placeholder_url: &str) -> String {
    sprites
        .artwork_url()
        .filter(|url| !url.is_empty())
        .or_else(|| sprites.sprite_url().filter(|url| !url.is_empty()))
        .unwrap_or(placeholder_url)
        .to_owned()
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFallback {
    pub src: String,
    pub title: &'static str,
}

/// What to do when an image fails to load at runtime.
///
/// Returns `None` once the placeholder itself is showing so a broken
/// placeholder cannot retrigger the handler forever.
pub fn fallback_on_error(current_src: &str, placeholder_url: &str) -> Option<ImageFallback> {
    if current_src == placeholder_url {
        return None;
    }
    Some(ImageFallback {
        src: placeholder_url.to_owned(),
        title: IMAGE_ERROR_TITLE,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pw_api_types::{Artwork, NamedResource, OtherSprites, TypeSlot};

    const PLACEHOLDER: &str = "https://placehold.test/none";

    fn sprites(artwork: Option<&str>, sprite: Option<&str>) -> Sprites {
        Sprites {
            front_default: sprite.map(str::to_owned),
            other: Some(OtherSprites {
                official_artwork: Some(Artwork {
                    front_default: artwork.map(str::to_owned),
                }),
            }),
        }
    }

    fn item(id: u32, name: &str, types: &[&str]) -> CatalogItem {
        CatalogItem {
            id,
            name: name.to_owned(),
            height: 4,
            weight: 60,
            types: types
                .iter()
                .enumerate()
                .map(|(i, t)| TypeSlot {
                    slot: i as u8 + 1,
                    kind: NamedResource {
                        name: (*t).to_owned(),
                        url: String::new(),
                    },
                })
                .collect(),
            sprites: sprites(Some("https://img.test/art.png"), Some("https://img.test/sprite.png")),
        }
    }

    #[test]
    fn padded_id_always_has_three_digits() {
        for id in 1..=1025 {
            let padded = pad_id(id);
            if id < 1000 {
                assert_eq!(padded.len(), 3, "id {id} -> {padded}");
            }
            assert!(padded.chars().all(|c| c.is_ascii_digit()));
            assert_eq!(padded.parse::<u32>().unwrap(), id);
        }
        assert_eq!(pad_id(7), "007");
        assert_eq!(pad_id(25), "025");
        assert_eq!(pad_id(151), "151");
    }

    #[test]
    fn capitalizes_only_the_first_letter() {
        assert_eq!(capitalize("pikachu"), "Pikachu");
        assert_eq!(capitalize("Pikachu"), "Pikachu");
        assert_eq!(capitalize("mr-mime"), "Mr-mime");
        assert_eq!(capitalize("pIKACHU"), "PIKACHU");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn tenths_are_rendered_as_whole_units() {
        assert_eq!(format_tenths(70), "7");
        assert_eq!(format_tenths(7), "0.7");
        assert_eq!(format_tenths(1), "0.1");
        assert_eq!(format_tenths(905), "90.5");
        assert_eq!(format_tenths(0), "0");
    }

    #[test]
    fn types_are_uppercased_and_joined() {
        assert_eq!(join_types(["grass", "poison"]), "GRASS / POISON");
        assert_eq!(join_types(["electric"]), "ELECTRIC");
        assert_eq!(join_types(Vec::<&str>::new()), "");
    }

    #[test]
    fn image_prefers_artwork_then_sprite_then_placeholder() {
        let both = sprites(Some("https://img.test/art.png"), Some("https://img.test/sprite.png"));
        assert_eq!(resolve_image_url(&both, PLACEHOLDER), "https://img.test/art.png");

        let sprite_only = sprites(None, Some("https://img.test/sprite.png"));
        assert_eq!(resolve_image_url(&sprite_only, PLACEHOLDER), "https://img.test/sprite.png");

        let empty_artwork = sprites(Some(""), Some("https://img.test/sprite.png"));
        assert_eq!(resolve_image_url(&empty_artwork, PLACEHOLDER), "https://img.test/sprite.png");

        let none = sprites(None, None);
        assert_eq!(resolve_image_url(&none, PLACEHOLDER), PLACEHOLDER);
        assert_eq!(resolve_image_url(&Sprites::default(), PLACEHOLDER), PLACEHOLDER);
    }

    #[test]
    fn failed_image_swaps_to_placeholder_once() {
        let fallback = fallback_on_error("https://img.test/art.png", PLACEHOLDER).unwrap();
        assert_eq!(fallback.src, PLACEHOLDER);
        assert_eq!(fallback.title, IMAGE_ERROR_TITLE);

        assert_eq!(fallback_on_error(PLACEHOLDER, PLACEHOLDER), None);
    }

    #[test]
    fn card_lines_match_the_rendered_layout() {
        let card = CardView::from_item(&item(25, "pikachu", &["electric"]), PLACEHOLDER);
        assert_eq!(card.heading(), "#025 - Pikachu");
        assert_eq!(card.types, "ELECTRIC");
        assert_eq!(card.height_line(), "Height: 0.4 m");
        assert_eq!(card.weight_line(), "Weight: 6 kg");
        assert_eq!(card.image_url, "https://img.test/art.png");
    }
}
