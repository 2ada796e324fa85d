//! Type chart: the 18 types and their attack multipliers

/// The 18 elemental types. Discriminants index [`TYPE_CHART`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[repr(u8)]
pub enum Type {
    Normal,
    Fire,
    Water,
    Electric,
    Grass,
    Ice,
    Fighting,
    Poison,
    Ground,
    Flying,
    Psychic,
    Bug,
    Rock,
    Ghost,
    Dragon,
    Dark,
    Steel,
    Fairy,
}

impl Type {
    /// All 18 Pokemon types, in chart order
    pub const ALL: [Type; 18] = [
        Type::Normal,
        Type::Fire,
        Type::Water,
        Type::Electric,
        Type::Grass,
        Type::Ice,
        Type::Fighting,
        Type::Poison,
        Type::Ground,
        Type::Flying,
        Type::Psychic,
        Type::Bug,
        Type::Rock,
        Type::Ghost,
        Type::Dragon,
        Type::Dark,
        Type::Steel,
        Type::Fairy,
    ];

    pub fn all() -> &'static [Type] {
        &Self::ALL
    }

    /// Multiplier against a single defending type
    pub fn effectiveness(&self, defender: Type) -> f32 {
        TYPE_CHART[*self as usize][defender as usize]
    }

    /// Combined multiplier against every defending type; any immunity wins
    pub fn effectiveness_against(&self, defenders: &[Type]) -> f32 {
        let mut multiplier = 1.0;
        for defender in defenders {
            let factor = self.effectiveness(*defender);
            if factor == 0.0 {
                return 0.0;
            }
            multiplier *= factor;
        }
        multiplier
    }

    /// Defending types this type hits for 2x, in chart order
    pub fn super_effective_targets(&self) -> Vec<Type> {
        Type::ALL
            .iter()
            .copied()
            .filter(|defender| self.effectiveness(*defender) > 1.0)
            .collect()
    }

    /// Parse from an API type name (case-insensitive)
    pub fn from_name(s: &str) -> Option<Self> {
        Type::ALL
            .into_iter()
            .find(|ty| ty.id().eq_ignore_ascii_case(s))
    }

    /// Lowercase API name (`"fire"`)
    pub fn id(&self) -> &'static str {
        match self {
            Type::Normal => "normal",
            Type::Fire => "fire",
            Type::Water => "water",
            Type::Electric => "electric",
            Type::Grass => "grass",
            Type::Ice => "ice",
            Type::Fighting => "fighting",
            Type::Poison => "poison",
            Type::Ground => "ground",
            Type::Flying => "flying",
            Type::Psychic => "psychic",
            Type::Bug => "bug",
            Type::Rock => "rock",
            Type::Ghost => "ghost",
            Type::Dragon => "dragon",
            Type::Dark => "dark",
            Type::Steel => "steel",
            Type::Fairy => "fairy",
        }
    }

    /// Display name (`"Fire"`)
    pub fn as_str(&self) -> &'static str {
        match self {
            Type::Normal => "Normal",
            Type::Fire => "Fire",
            Type::Water => "Water",
            Type::Electric => "Electric",
            Type::Grass => "Grass",
            Type::Ice => "Ice",
            Type::Fighting => "Fighting",
            Type::Poison => "Poison",
            Type::Ground => "Ground",
            Type::Flying => "Flying",
            Type::Psychic => "Psychic",
            Type::Bug => "Bug",
            Type::Rock => "Rock",
            Type::Ghost => "Ghost",
            Type::Dragon => "Dragon",
            Type::Dark => "Dark",
            Type::Steel => "Steel",
            Type::Fairy => "Fairy",
        }
    }
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

const X: f32 = 0.0;
const H: f32 = 0.5;
const N: f32 = 1.0;
const S: f32 = 2.0;

/// Attack multipliers, indexed `[attacker][defender]` in [`Type::ALL`] order
#[rustfmt::skip]
pub static TYPE_CHART: [[f32; 18]; 18] = [
    //        Nor Fir Wat Ele Gra Ice Fig Poi Gro Fly Psy Bug Roc Gho Dra Dar Ste Fai
    /* Nor */ [ N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  H,  X,  N,  N,  H,  N],
    /* Fir */ [ N,  H,  H,  N,  S,  S,  N,  N,  N,  N,  N,  S,  H,  N,  H,  N,  S,  N],
    /* Wat */ [ N,  S,  H,  N,  H,  N,  N,  N,  S,  N,  N,  N,  S,  N,  H,  N,  N,  N],
    /* Ele */ [ N,  N,  S,  H,  H,  N,  N,  N,  X,  S,  N,  N,  N,  N,  H,  N,  N,  N],
    /* Gra */ [ N,  H,  S,  N,  H,  N,  N,  H,  S,  H,  N,  H,  S,  N,  H,  N,  H,  N],
    /* Ice */ [ N,  H,  H,  N,  S,  H,  N,  N,  S,  S,  N,  N,  N,  N,  S,  N,  H,  N],
    /* Fig */ [ S,  N,  N,  N,  N,  S,  N,  H,  N,  H,  H,  H,  S,  X,  N,  S,  S,  H],
    /* Poi */ [ N,  N,  N,  N,  S,  N,  N,  H,  H,  N,  N,  N,  H,  H,  N,  N,  X,  S],
    /* Gro */ [ N,  S,  N,  S,  H,  N,  N,  S,  N,  X,  N,  H,  S,  N,  N,  N,  S,  N],
    /* Fly */ [ N,  N,  N,  H,  S,  N,  S,  N,  N,  N,  N,  S,  H,  N,  N,  N,  H,  N],
    /* Psy */ [ N,  N,  N,  N,  N,  N,  S,  S,  N,  N,  H,  N,  N,  N,  N,  X,  H,  N],
    /* Bug */ [ N,  H,  N,  N,  S,  N,  H,  H,  N,  H,  S,  N,  N,  H,  N,  S,  H,  H],
    /* Roc */ [ N,  S,  N,  N,  N,  S,  H,  N,  H,  S,  N,  S,  N,  N,  N,  N,  H,  N],
    /* Gho */ [ X,  N,  N,  N,  N,  N,  N,  N,  N,  N,  S,  N,  N,  S,  N,  H,  N,  N],
    /* Dra */ [ N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  N,  S,  N,  H,  X],
    /* Dar */ [ N,  N,  N,  N,  N,  N,  H,  N,  N,  N,  S,  N,  N,  S,  N,  H,  N,  H],
    /* Ste */ [ N,  H,  H,  H,  N,  S,  N,  N,  N,  N,  N,  N,  S,  N,  N,  N,  H,  S],
    /* Fai */ [ N,  H,  N,  N,  N,  N,  S,  H,  N,  N,  N,  N,  N,  N,  S,  S,  H,  N],
];
