//! Alternate form classification by name

use serde::{Deserialize, Serialize};

const REGIONAL_VARIANTS: [(&str, &str); 4] = [
    ("alola", "Alola"),
    ("galar", "Galar"),
    ("hisui", "Hisui"),
    ("paldea", "Paldea"),
];

const SPECIAL_VARIANT_KEYWORDS: [&str; 31] = [
    "attack",
    "defense",
    "speed",
    "school",
    "shield",
    "blade",
    "origin",
    "sky",
    "zen",
    "dawn",
    "dusk",
    "midnight",
    "sunny",
    "rainy",
    "snowy",
    "therian",
    "incarnate",
    "resolute",
    "pirouette",
    "trash",
    "sand",
    "average",
    "sensu",
    "pom-pom",
    "pau",
    "baile",
    "heat",
    "wash",
    "frost",
    "fan",
    "mow",
];

/// Kind of alternate form
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariantKind {
    Regional,
    Special,
    Mega,
    Primal,
    Dynamax,
}

/// Classification of a form name
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VariantClassification {
    pub kind: VariantKind,
    /// Region display name for regional forms
    pub region: Option<String>,
}

impl VariantClassification {
    fn of(kind: VariantKind) -> Self {
        Self { kind, region: None }
    }
}

/// Classify a form name (`charizard-mega-x`, `vulpix-alola`, ...).
///
/// Checks run in a fixed order: mega, primal, dynamax, regional, then the
/// special-form keyword list. Plain species names yield `None`.
pub fn classify_variant(name: &str) -> Option<VariantClassification> {
    let normalized = name.to_lowercase();

    if normalized.contains("mega") {
        return Some(VariantClassification::of(VariantKind::Mega));
    }

    if normalized.contains("primal") {
        return Some(VariantClassification::of(VariantKind::Primal));
    }

    if ["gigantamax", "gmax", "dynamax", "dmax"]
        .iter()
        .any(|keyword| normalized.contains(keyword))
    {
        return Some(VariantClassification::of(VariantKind::Dynamax));
    }

    if let Some((_, region)) = REGIONAL_VARIANTS
        .iter()
        .find(|(keyword, _)| normalized.contains(keyword))
    {
        return Some(VariantClassification {
            kind: VariantKind::Regional,
            region: Some(region.to_string()),
        });
    }

    if SPECIAL_VARIANT_KEYWORDS
        .iter()
        .any(|keyword| normalized.contains(keyword))
    {
        return Some(VariantClassification::of(VariantKind::Special));
    }

    None
}
