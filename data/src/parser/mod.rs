//! Display mapping for creature payloads
//!
//! Turns a [`PokemonBundle`] (creature + species + known alternate forms)
//! into the localized records a Pokédex front end renders.

mod display;
mod locale;
mod sprites;
mod variant;

use serde::{Deserialize, Serialize};

use crate::records::{AbilitySlot, CreatureRecord, SpeciesRecord, TypeSlot};

pub use display::{
    FeaturedAbility, SignatureMove, StatDisplay, format_move_label, format_pokemon_id,
    format_pokemon_name, map_stats, normalize_identifier, select_featured_ability,
    select_signature_moves,
};
pub use locale::{
    Locale, extract_description, extract_genus, extract_localized_display_name,
    extract_native_name, find_by_language, language_priority,
};
pub use sprites::{ArtStyle, SpriteView, select_sprite};
pub use variant::{VariantClassification, VariantKind, classify_variant};

/// Options for [`parse_pokemon`]
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonParserOptions {
    pub locale: Locale,
    /// Replaces the automatically selected featured ability
    pub featured_ability_override: Option<FeaturedAbility>,
    pub art_style: ArtStyle,
}

/// An alternate form (mega, regional, ...) of a species
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlternateForm {
    pub id: u32,
    pub name: String,
    pub formatted_id: String,
    pub sprite: String,
    pub sprite_shiny: Option<String>,
    pub primary_type: String,
    pub variant_kind: Option<VariantKind>,
    pub region: Option<String>,
}

impl AlternateForm {
    /// Build a form entry from the form's own creature payload
    pub fn from_creature(data: &CreatureRecord, art_style: ArtStyle) -> Self {
        let variant = classify_variant(&data.name);
        let shiny = select_sprite(Some(&data.sprites), art_style, true, SpriteView::Front);
        Self {
            id: data.id,
            name: format_pokemon_name(&data.name),
            formatted_id: format_pokemon_id(data.id),
            sprite: select_sprite(Some(&data.sprites), art_style, false, SpriteView::Front),
            sprite_shiny: Some(shiny).filter(|url| !url.is_empty()),
            primary_type: data.primary_type().to_string(),
            variant_kind: variant.as_ref().map(|v| v.kind),
            region: variant.and_then(|v| v.region),
        }
    }
}

/// Raw inputs for one creature
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PokemonBundle {
    pub data: CreatureRecord,
    pub species: SpeciesRecord,
    pub alternate_forms: Vec<AlternateForm>,
}

impl PokemonBundle {
    pub fn new(
        data: CreatureRecord,
        species: SpeciesRecord,
        alternate_forms: Vec<AlternateForm>,
    ) -> Self {
        Self {
            data,
            species,
            alternate_forms,
        }
    }
}

/// Everything a detail page shows
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonDisplayData {
    pub id: u32,
    pub formatted_id: String,
    pub name: String,
    pub native_name: Option<String>,
    pub description: String,
    pub genus: String,
    pub stats: Vec<StatDisplay>,
    pub types: Vec<TypeSlot>,
    pub abilities: Vec<AbilitySlot>,
    pub featured_ability: Option<FeaturedAbility>,
    pub signature_moves: Vec<SignatureMove>,
    /// Meters
    pub height: f64,
    /// Kilograms
    pub weight: f64,
    pub sprite: String,
    pub sprite_shiny: Option<String>,
    pub cry_url: Option<String>,
    pub has_mega_evolution: bool,
    pub alternate_forms: Vec<AlternateForm>,
}

/// A compact entry for list/grid views
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PokemonGridEntry {
    pub id: u32,
    pub formatted_id: String,
    pub name: String,
    pub native_name: Option<String>,
    pub sprite: String,
    pub primary_type: String,
    pub has_mega_evolution: bool,
    pub alternate_forms: Vec<AlternateForm>,
    pub cry_url: Option<String>,
}

/// Parsed creature with its raw inputs kept alongside
#[derive(Debug, Clone, PartialEq)]
pub struct PokemonDetails {
    pub primary_type: String,
    pub raw: CreatureRecord,
    pub species: SpeciesRecord,
    pub display: PokemonDisplayData,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PokemonParseResult {
    pub details: PokemonDetails,
    pub grid_entry: PokemonGridEntry,
}

fn non_empty(s: String) -> Option<String> {
    if s.is_empty() { None } else { Some(s) }
}

pub fn map_display_data(
    bundle: &PokemonBundle,
    locale: Locale,
    featured_ability_override: Option<FeaturedAbility>,
    art_style: ArtStyle,
) -> PokemonDisplayData {
    let PokemonBundle {
        data,
        species,
        alternate_forms,
    } = bundle;

    PokemonDisplayData {
        id: data.id,
        formatted_id: format_pokemon_id(data.id),
        name: extract_localized_display_name(data, Some(species), locale),
        native_name: non_empty(extract_native_name(Some(species), Locale::Ja)),
        description: extract_description(Some(species), locale),
        genus: extract_genus(Some(species), locale),
        stats: map_stats(data),
        types: data.types.clone(),
        abilities: data.abilities.clone(),
        featured_ability: featured_ability_override.or_else(|| select_featured_ability(data)),
        signature_moves: select_signature_moves(data),
        height: data.height as f64 / 10.0,
        weight: data.weight as f64 / 10.0,
        sprite: select_sprite(Some(&data.sprites), art_style, false, SpriteView::Front),
        sprite_shiny: non_empty(select_sprite(
            Some(&data.sprites),
            art_style,
            true,
            SpriteView::Front,
        )),
        cry_url: data.cry_url().map(str::to_string),
        has_mega_evolution: !alternate_forms.is_empty(),
        alternate_forms: alternate_forms.clone(),
    }
}

pub fn map_grid_entry(
    bundle: &PokemonBundle,
    locale: Locale,
    art_style: ArtStyle,
) -> PokemonGridEntry {
    let PokemonBundle {
        data,
        species,
        alternate_forms,
    } = bundle;

    PokemonGridEntry {
        id: data.id,
        formatted_id: format_pokemon_id(data.id),
        name: extract_localized_display_name(data, Some(species), locale),
        native_name: non_empty(extract_native_name(Some(species), Locale::Ja)),
        sprite: select_sprite(Some(&data.sprites), art_style, false, SpriteView::Front),
        primary_type: data.primary_type().to_string(),
        has_mega_evolution: !alternate_forms.is_empty(),
        alternate_forms: alternate_forms.clone(),
        cry_url: data.cry_url().map(str::to_string),
    }
}

/// Map a bundle into detail and grid views
pub fn parse_pokemon(bundle: &PokemonBundle, options: &PokemonParserOptions) -> PokemonParseResult {
    let display = map_display_data(
        bundle,
        options.locale,
        options.featured_ability_override.clone(),
        options.art_style,
    );

    PokemonParseResult {
        details: PokemonDetails {
            primary_type: bundle.data.primary_type().to_string(),
            raw: bundle.data.clone(),
            species: bundle.species.clone(),
            display,
        },
        grid_entry: map_grid_entry(bundle, options.locale, options.art_style),
    }
}
