//! Sprite selection across art styles

use crate::records::Sprites;

/// Sprite art style preference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArtStyle {
    #[default]
    Official,
    Home,
    Nds,
    Animated,
}

impl ArtStyle {
    pub fn from_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "official" => Some(ArtStyle::Official),
            "home" => Some(ArtStyle::Home),
            "nds" => Some(ArtStyle::Nds),
            "animated" => Some(ArtStyle::Animated),
            _ => None,
        }
    }
}

/// Which side of the creature the sprite shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteView {
    #[default]
    Front,
    Back,
}

/// Pick a sprite URL for the requested style, falling back across styles.
///
/// Official artwork has no back sprites, so back views skip straight to
/// the HOME and in-game sets. Returns an empty string when nothing matches.
pub fn select_sprite(
    sprites: Option<&Sprites>,
    art_style: ArtStyle,
    shiny: bool,
    view: SpriteView,
) -> String {
    let Some(sprites) = sprites else {
        return String::new();
    };
    let back = view == SpriteView::Back;

    let official = sprites
        .other
        .as_ref()
        .and_then(|o| o.official_artwork.as_ref())
        .and_then(|set| set.get(back, shiny));
    let home = sprites
        .other
        .as_ref()
        .and_then(|o| o.home.as_ref())
        .and_then(|set| set.get(back, shiny));
    let nds = sprites.base.get(back, shiny);
    let animated = sprites
        .versions
        .as_ref()
        .and_then(|v| v.generation_v.as_ref())
        .and_then(|g| g.black_white.as_ref())
        .and_then(|bw| bw.animated.as_ref())
        .and_then(|set| set.get(back, shiny));

    let chosen = match art_style {
        ArtStyle::Official if back => home.or(nds),
        ArtStyle::Official => official.or(home).or(nds),
        ArtStyle::Home => home.or(official).or(nds),
        ArtStyle::Animated => animated.or(nds).or(official),
        ArtStyle::Nds => nds.or(official).or(home),
    };

    chosen.unwrap_or_default().to_string()
}
