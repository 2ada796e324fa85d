//! Locale selection for localized species text

use crate::records::{CreatureRecord, Localized, SpeciesRecord};

use super::display::format_pokemon_name;

/// Supported display locales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Locale {
    #[default]
    En,
    Es,
    Ja,
}

impl Locale {
    /// Parse a locale code, unknown codes fall back to English
    pub fn from_code(code: &str) -> Self {
        match code.to_lowercase().as_str() {
            "es" => Locale::Es,
            "ja" => Locale::Ja,
            _ => Locale::En,
        }
    }

    /// API language codes for this locale, most preferred first
    pub fn language_codes(&self) -> &'static [&'static str] {
        match self {
            Locale::En => &["en"],
            Locale::Es => &["es", "es-la"],
            Locale::Ja => &["ja-Hrkt", "ja"],
        }
    }
}

/// Language codes to try for a locale, always ending with English
pub fn language_priority(locale: Locale) -> Vec<&'static str> {
    let mut merged: Vec<&'static str> = Vec::new();
    for code in locale
        .language_codes()
        .iter()
        .chain(Locale::En.language_codes())
    {
        if !merged.contains(code) {
            merged.push(code);
        }
    }
    merged
}

/// First entry matching the locale's language priority
pub fn find_by_language<T: Localized>(entries: &[T], locale: Locale) -> Option<&T> {
    language_priority(locale)
        .into_iter()
        .find_map(|code| entries.iter().find(|entry| entry.language() == code))
}

/// Localized flavor text with line breaks flattened to spaces
pub fn extract_description(species: Option<&SpeciesRecord>, locale: Locale) -> String {
    let Some(species) = species else {
        return String::new();
    };
    find_by_language(&species.flavor_text_entries, locale)
        .map(|entry| {
            entry
                .flavor_text
                .replace(['\u{c}', '\n', '\r'], " ")
                .trim()
                .to_string()
        })
        .unwrap_or_default()
}

/// Localized genus ("Mouse Pokémon")
pub fn extract_genus(species: Option<&SpeciesRecord>, locale: Locale) -> String {
    species
        .and_then(|s| find_by_language(&s.genera, locale))
        .map(|entry| entry.genus.clone())
        .unwrap_or_default()
}

/// Localized species name, empty when none is available
pub fn extract_native_name(species: Option<&SpeciesRecord>, locale: Locale) -> String {
    let Some(species) = species else {
        return String::new();
    };

    if let Some(entry) = find_by_language(&species.names, locale)
        && !entry.name.is_empty()
    {
        return entry.name.clone();
    }

    if locale == Locale::Ja
        && let Some(entry) = species
            .names
            .iter()
            .find(|entry| entry.language() == "ja-Hrkt" && !entry.name.is_empty())
    {
        return entry.name.clone();
    }

    String::new()
}

/// Localized name, falling back to the formatted payload name
pub fn extract_localized_display_name(
    data: &CreatureRecord,
    species: Option<&SpeciesRecord>,
    locale: Locale,
) -> String {
    species
        .and_then(|s| find_by_language(&s.names, locale))
        .map(|entry| entry.name.clone())
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| format_pokemon_name(&data.name))
}
