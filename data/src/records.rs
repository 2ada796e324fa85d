//! Payload records mirroring the PokeAPI JSON shape

use serde::{Deserialize, Serialize};

/// A `{ name, url }` reference to another API resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedResource {
    pub name: String,
    #[serde(default)]
    pub url: String,
}

impl NamedResource {
    /// Create a reference with no URL
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: String::new(),
        }
    }
}

/// Entries that carry a language tag (flavor text, genera, names, effects)
pub trait Localized {
    fn language(&self) -> &str;
}

/// The six permanent stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stat {
    Hp,
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
}

impl Stat {
    /// All stats in API order
    pub const ALL: [Stat; 6] = [
        Stat::Hp,
        Stat::Attack,
        Stat::Defense,
        Stat::SpecialAttack,
        Stat::SpecialDefense,
        Stat::Speed,
    ];

    /// Name used by the API (`special-attack`, ...)
    pub fn api_name(&self) -> &'static str {
        match self {
            Stat::Hp => "hp",
            Stat::Attack => "attack",
            Stat::Defense => "defense",
            Stat::SpecialAttack => "special-attack",
            Stat::SpecialDefense => "special-defense",
            Stat::Speed => "speed",
        }
    }

    /// Parse an API stat name
    pub fn from_api_name(s: &str) -> Option<Self> {
        match s {
            "hp" => Some(Stat::Hp),
            "attack" => Some(Stat::Attack),
            "defense" => Some(Stat::Defense),
            "special-attack" => Some(Stat::SpecialAttack),
            "special-defense" => Some(Stat::SpecialDefense),
            "speed" => Some(Stat::Speed),
            _ => None,
        }
    }

    /// Short display label
    pub fn label(&self) -> &'static str {
        match self {
            Stat::Hp => "HP",
            Stat::Attack => "ATK",
            Stat::Defense => "DEF",
            Stat::SpecialAttack => "SP. ATK",
            Stat::SpecialDefense => "SP. DEF",
            Stat::Speed => "SPD",
        }
    }
}

impl std::fmt::Display for Stat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.api_name())
    }
}

// === Creature payload ===

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatEntry {
    pub base_stat: u32,
    #[serde(default)]
    pub effort: u32,
    pub stat: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeSlot {
    #[serde(default)]
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_ref: NamedResource,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AbilitySlot {
    #[serde(default)]
    pub is_hidden: bool,
    #[serde(default)]
    pub slot: u32,
    pub ability: NamedResource,
}

/// Front/back sprite URLs for one art style
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpriteSet {
    #[serde(default)]
    pub front_default: Option<String>,
    #[serde(default)]
    pub front_shiny: Option<String>,
    #[serde(default)]
    pub back_default: Option<String>,
    #[serde(default)]
    pub back_shiny: Option<String>,
}

impl SpriteSet {
    /// Look up a sprite by view and shininess
    pub fn get(&self, back: bool, shiny: bool) -> Option<&str> {
        let url = match (back, shiny) {
            (false, false) => &self.front_default,
            (false, true) => &self.front_shiny,
            (true, false) => &self.back_default,
            (true, true) => &self.back_shiny,
        };
        url.as_deref()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OtherSprites {
    #[serde(default, rename = "official-artwork")]
    pub official_artwork: Option<SpriteSet>,
    #[serde(default)]
    pub home: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnimatedSprites {
    #[serde(default)]
    pub animated: Option<SpriteSet>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationVSprites {
    #[serde(default, rename = "black-white")]
    pub black_white: Option<AnimatedSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VersionSprites {
    #[serde(default, rename = "generation-v")]
    pub generation_v: Option<GenerationVSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Sprites {
    /// Classic in-game sprites at the top level of the payload
    #[serde(flatten)]
    pub base: SpriteSet,
    #[serde(default)]
    pub other: Option<OtherSprites>,
    #[serde(default)]
    pub versions: Option<VersionSprites>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cries {
    #[serde(default)]
    pub latest: Option<String>,
    #[serde(default)]
    pub legacy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveVersionDetail {
    #[serde(default)]
    pub level_learned_at: u32,
    pub move_learn_method: NamedResource,
    pub version_group: NamedResource,
}

/// A learnable move reference on a creature payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveEntry {
    #[serde(rename = "move")]
    pub move_ref: NamedResource,
    #[serde(default)]
    pub version_group_details: Vec<MoveVersionDetail>,
}

/// Creature payload (`/pokemon/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CreatureRecord {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub weight: u32,
    #[serde(default)]
    pub sprites: Sprites,
    #[serde(default)]
    pub cries: Option<Cries>,
    #[serde(default)]
    pub abilities: Vec<AbilitySlot>,
    #[serde(default)]
    pub types: Vec<TypeSlot>,
    #[serde(default)]
    pub stats: Vec<StatEntry>,
    #[serde(default)]
    pub moves: Vec<MoveEntry>,
}

impl CreatureRecord {
    /// Base value of a stat by API name (0 if absent)
    pub fn base_stat(&self, name: &str) -> u32 {
        self.stats
            .iter()
            .find(|entry| entry.stat.name == name)
            .map(|entry| entry.base_stat)
            .unwrap_or(0)
    }

    /// Type names in payload order
    pub fn type_names(&self) -> Vec<String> {
        self.types.iter().map(|t| t.type_ref.name.clone()).collect()
    }

    /// First listed type, `normal` when the payload has none
    pub fn primary_type(&self) -> &str {
        self.types
            .first()
            .map(|t| t.type_ref.name.as_str())
            .unwrap_or("normal")
    }

    /// Latest cry URL, falling back to the legacy one
    pub fn cry_url(&self) -> Option<&str> {
        let cries = self.cries.as_ref()?;
        cries.latest.as_deref().or(cries.legacy.as_deref())
    }
}

// === Move payload ===

/// Damage class of a move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DamageClass {
    Physical,
    Special,
    Status,
}

impl DamageClass {
    pub fn from_name(s: &str) -> Option<Self> {
        match s {
            "physical" => Some(DamageClass::Physical),
            "special" => Some(DamageClass::Special),
            "status" => Some(DamageClass::Status),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DamageClass::Physical => "physical",
            DamageClass::Special => "special",
            DamageClass::Status => "status",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EffectEntry {
    #[serde(default)]
    pub effect: String,
    #[serde(default)]
    pub short_effect: String,
    pub language: NamedResource,
}

impl Localized for EffectEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

/// Secondary move metadata; every field may be null in the payload
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveMeta {
    #[serde(default)]
    pub ailment: Option<NamedResource>,
    #[serde(default)]
    pub category: Option<NamedResource>,
    #[serde(default)]
    pub min_hits: Option<u32>,
    #[serde(default)]
    pub max_hits: Option<u32>,
    #[serde(default)]
    pub min_turns: Option<u32>,
    #[serde(default)]
    pub max_turns: Option<u32>,
    /// Percent of damage dealt restored (positive) or taken as recoil (negative)
    #[serde(default)]
    pub drain: Option<i32>,
    /// Percent of max HP restored
    #[serde(default)]
    pub healing: Option<i32>,
    #[serde(default)]
    pub crit_rate: Option<u32>,
    #[serde(default)]
    pub ailment_chance: Option<u32>,
    #[serde(default)]
    pub flinch_chance: Option<u32>,
    #[serde(default)]
    pub stat_chance: Option<u32>,
}

/// Move payload (`/move/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MoveRecord {
    #[serde(default)]
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub accuracy: Option<u32>,
    #[serde(default)]
    pub power: Option<u32>,
    #[serde(default)]
    pub pp: Option<u32>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default)]
    pub damage_class: Option<NamedResource>,
    #[serde(default, rename = "type")]
    pub move_type: Option<NamedResource>,
    #[serde(default)]
    pub effect_entries: Vec<EffectEntry>,
    #[serde(default)]
    pub meta: Option<MoveMeta>,
    #[serde(default)]
    pub target: Option<NamedResource>,
}

impl MoveRecord {
    /// Type name, `normal` when the payload omits it
    pub fn type_name(&self) -> &str {
        self.move_type
            .as_ref()
            .map(|t| t.name.as_str())
            .unwrap_or("normal")
    }

    /// Parsed damage class (None if absent or unrecognized)
    pub fn damage_class(&self) -> Option<DamageClass> {
        self.damage_class
            .as_ref()
            .and_then(|class| DamageClass::from_name(&class.name))
    }

    /// Base power, 0 for status and variable-power moves
    pub fn power(&self) -> u32 {
        self.power.unwrap_or(0)
    }

    /// Accuracy as a percentage; a null or zero accuracy counts as absent
    pub fn accuracy(&self) -> Option<u32> {
        self.accuracy.filter(|&acc| acc > 0)
    }

    pub fn drain(&self) -> i32 {
        self.meta.as_ref().and_then(|m| m.drain).unwrap_or(0)
    }

    pub fn healing(&self) -> i32 {
        self.meta.as_ref().and_then(|m| m.healing).unwrap_or(0)
    }

    /// English short effect text, empty when none is provided
    pub fn english_effect(&self) -> &str {
        self.effect_entries
            .iter()
            .find(|entry| entry.language() == "en")
            .map(|entry| entry.short_effect.as_str())
            .unwrap_or("")
    }
}

// === Species payload ===

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FlavorTextEntry {
    pub flavor_text: String,
    pub language: NamedResource,
    #[serde(default)]
    pub version: Option<NamedResource>,
}

impl Localized for FlavorTextEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GenusEntry {
    pub genus: String,
    pub language: NamedResource,
}

impl Localized for GenusEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NameEntry {
    pub name: String,
    pub language: NamedResource,
}

impl Localized for NameEntry {
    fn language(&self) -> &str {
        &self.language.name
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Variety {
    #[serde(default)]
    pub is_default: bool,
    pub pokemon: NamedResource,
}

/// Species payload (`/pokemon-species/{id}`)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SpeciesRecord {
    pub id: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub color: Option<NamedResource>,
    #[serde(default)]
    pub flavor_text_entries: Vec<FlavorTextEntry>,
    #[serde(default)]
    pub genera: Vec<GenusEntry>,
    #[serde(default)]
    pub names: Vec<NameEntry>,
    #[serde(default)]
    pub varieties: Vec<Variety>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stat_api_names_round_trip() {
        for stat in Stat::ALL {
            assert_eq!(Stat::from_api_name(stat.api_name()), Some(stat));
        }
        assert_eq!(Stat::from_api_name("accuracy"), None);
    }

    #[test]
    fn test_move_defaults() {
        let record = MoveRecord {
            name: "struggle-bug".to_string(),
            ..Default::default()
        };
        assert_eq!(record.type_name(), "normal");
        assert_eq!(record.damage_class(), None);
        assert_eq!(record.power(), 0);
        assert_eq!(record.accuracy(), None);
        assert_eq!(record.drain(), 0);
        assert_eq!(record.english_effect(), "");
    }

    #[test]
    fn test_zero_accuracy_is_absent() {
        let record = MoveRecord {
            name: "swift".to_string(),
            accuracy: Some(0),
            ..Default::default()
        };
        assert_eq!(record.accuracy(), None);
    }

    #[test]
    fn test_english_effect_skips_other_languages() {
        let record = MoveRecord {
            name: "tackle".to_string(),
            effect_entries: vec![
                EffectEntry {
                    effect: "Inflige daños.".to_string(),
                    short_effect: "Inflige daños.".to_string(),
                    language: NamedResource::new("es"),
                },
                EffectEntry {
                    effect: "Inflicts regular damage.".to_string(),
                    short_effect: "Inflicts regular damage with no additional effect.".to_string(),
                    language: NamedResource::new("en"),
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            record.english_effect(),
            "Inflicts regular damage with no additional effect."
        );
    }

    #[test]
    fn test_creature_helpers() {
        let creature = CreatureRecord {
            id: 1,
            name: "bulbasaur".to_string(),
            types: vec![
                TypeSlot {
                    slot: 1,
                    type_ref: NamedResource::new("grass"),
                },
                TypeSlot {
                    slot: 2,
                    type_ref: NamedResource::new("poison"),
                },
            ],
            stats: vec![StatEntry {
                base_stat: 45,
                effort: 0,
                stat: NamedResource::new("hp"),
            }],
            ..Default::default()
        };
        assert_eq!(creature.base_stat("hp"), 45);
        assert_eq!(creature.base_stat("speed"), 0);
        assert_eq!(creature.type_names(), vec!["grass", "poison"]);
        assert_eq!(creature.primary_type(), "grass");
        assert_eq!(creature.cry_url(), None);
    }
}
