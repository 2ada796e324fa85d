//! Field conditions

use crate::types::Type;

/// Weather conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Weather {
    Sun,
    Rain,
    Sand,
    Hail,
    Snow, // Gen 9 replacement for Hail
}

impl Weather {
    /// Parse from a weather id or move name
    pub fn from_name(s: &str) -> Option<Self> {
        // Normalize: lowercase and remove spaces
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "sunnyday" | "sun" => Some(Weather::Sun),
            "raindance" | "rain" => Some(Weather::Rain),
            "sandstorm" | "sand" => Some(Weather::Sand),
            "hail" => Some(Weather::Hail),
            "snow" | "snowscape" => Some(Weather::Snow),
            _ => None,
        }
    }

    /// Lowercase id (`"sun"`)
    pub fn id(&self) -> &'static str {
        match self {
            Weather::Sun => "sun",
            Weather::Rain => "rain",
            Weather::Sand => "sand",
            Weather::Hail => "hail",
            Weather::Snow => "snow",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Weather::Sun => "Sun",
            Weather::Rain => "Rain",
            Weather::Sand => "Sandstorm",
            Weather::Hail => "Hail",
            Weather::Snow => "Snow",
        }
    }

    /// Damage multiplier this weather applies to a move of the given type.
    ///
    /// Only sun and rain touch damage: they boost fire / water respectively
    /// and halve the other one.
    pub fn damage_modifier(&self, move_type: Type) -> f64 {
        match (self, move_type) {
            (Weather::Sun, Type::Fire) | (Weather::Rain, Type::Water) => 1.5,
            (Weather::Sun, Type::Water) | (Weather::Rain, Type::Fire) => 0.5,
            _ => 1.0,
        }
    }
}

impl std::fmt::Display for Weather {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Terrain conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Terrain {
    Electric,
    Grassy,
    Psychic,
    Misty,
}

impl Terrain {
    /// Parse from a terrain id or move name
    pub fn from_name(s: &str) -> Option<Self> {
        let normalized = s.to_lowercase().replace([' ', '-'], "");

        match normalized.as_str() {
            "electricterrain" | "electric" => Some(Terrain::Electric),
            "grassyterrain" | "grassy" => Some(Terrain::Grassy),
            "psychicterrain" | "psychic" => Some(Terrain::Psychic),
            "mistyterrain" | "misty" => Some(Terrain::Misty),
            _ => None,
        }
    }

    /// Lowercase id (`"grassy"`)
    pub fn id(&self) -> &'static str {
        match self {
            Terrain::Electric => "electric",
            Terrain::Grassy => "grassy",
            Terrain::Psychic => "psychic",
            Terrain::Misty => "misty",
        }
    }

    /// Get display name
    pub fn as_str(&self) -> &'static str {
        match self {
            Terrain::Electric => "Electric Terrain",
            Terrain::Grassy => "Grassy Terrain",
            Terrain::Psychic => "Psychic Terrain",
            Terrain::Misty => "Misty Terrain",
        }
    }
}

impl std::fmt::Display for Terrain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
