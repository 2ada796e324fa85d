//! Single-hit damage estimation
//!
//! Implements the standard damage formula at a given level with 31 IVs and
//! no EVs, followed by the usual modifier chain. Every step truncates.

use dexkit_data::{DamageClass, MoveRecord};

use crate::query::effectiveness_multiplier;
use crate::types::{BaseStats, Terrain, Type, Weather, stat_at_level};

/// Lowest random roll
const MIN_ROLL: f64 = 0.85;
const STAB_MULTIPLIER: f64 = 1.5;
const CRITICAL_MULTIPLIER: f64 = 1.5;

/// Inputs for one attack
#[derive(Debug, Clone)]
pub struct DamageContext<'a> {
    pub level: u32,
    pub attacker_stats: BaseStats,
    pub defender_stats: BaseStats,
    pub attacker_types: Vec<String>,
    pub defender_types: Vec<String>,
    pub move_data: &'a MoveRecord,
    pub weather: Option<Weather>,
    /// Carried for callers; terrain does not change damage here
    pub terrain: Option<Terrain>,
    pub is_critical: bool,
    /// Overrides the attacker-type STAB check
    pub is_stab: Option<bool>,
    /// Type effectiveness; 1.0 when not given
    pub effectiveness: Option<f64>,
    /// Extra multiplier; ignored when 0
    pub other_modifiers: Option<f64>,
}

impl<'a> DamageContext<'a> {
    pub fn new(
        level: u32,
        attacker_stats: BaseStats,
        defender_stats: BaseStats,
        move_data: &'a MoveRecord,
    ) -> Self {
        Self {
            level,
            attacker_stats,
            defender_stats,
            attacker_types: Vec::new(),
            defender_types: Vec::new(),
            move_data,
            weather: None,
            terrain: None,
            is_critical: false,
            is_stab: None,
            effectiveness: None,
            other_modifiers: None,
        }
    }

    pub fn attacker_types<S: AsRef<str>>(mut self, types: &[S]) -> Self {
        self.attacker_types = types.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn defender_types<S: AsRef<str>>(mut self, types: &[S]) -> Self {
        self.defender_types = types.iter().map(|t| t.as_ref().to_string()).collect();
        self
    }

    pub fn weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn terrain(mut self, terrain: Terrain) -> Self {
        self.terrain = Some(terrain);
        self
    }

    pub fn critical(mut self, is_critical: bool) -> Self {
        self.is_critical = is_critical;
        self
    }

    pub fn stab(mut self, is_stab: bool) -> Self {
        self.is_stab = Some(is_stab);
        self
    }

    pub fn effectiveness(mut self, effectiveness: f64) -> Self {
        self.effectiveness = Some(effectiveness);
        self
    }

    /// Set effectiveness from the type chart using the defender types
    pub fn chart_effectiveness(mut self) -> Self {
        let multiplier =
            effectiveness_multiplier(self.move_data.type_name(), self.defender_types.as_slice());
        self.effectiveness = Some(multiplier as f64);
        self
    }

    pub fn other_modifiers(mut self, modifier: f64) -> Self {
        self.other_modifiers = Some(modifier);
        self
    }

    fn move_type_name(&self) -> Option<&str> {
        self.move_data.move_type.as_ref().map(|t| t.name.as_str())
    }

    /// STAB override, else whether any attacker type equals the move type
    pub fn resolves_stab(&self) -> bool {
        self.is_stab.unwrap_or_else(|| match self.move_type_name() {
            Some(move_type) => self
                .attacker_types
                .iter()
                .any(|t| t.eq_ignore_ascii_case(move_type)),
            None => false,
        })
    }
}

/// Damage range of one hit
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageResult {
    pub min: u32,
    pub max: u32,
    pub average: u32,
    pub is_critical: bool,
    pub effectiveness: f64,
    pub is_stab: bool,
}

/// Percent chance to KO in one, two and three hits
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KoChance {
    pub ohko: u32,
    pub twohko: u32,
    pub threehko: u32,
}

/// Unmodified damage. Physical moves use Attack vs Defense, everything
/// else Special Attack vs Special Defense.
pub fn calculate_base_damage(context: &DamageContext<'_>) -> u32 {
    let level = context.level;
    let (attack_base, defense_base) = match context.move_data.damage_class() {
        Some(DamageClass::Physical) => (
            context.attacker_stats.attack,
            context.defender_stats.defense,
        ),
        _ => (
            context.attacker_stats.special_attack,
            context.defender_stats.special_defense,
        ),
    };

    let attack = stat_at_level(attack_base, level) as f64;
    let defense = stat_at_level(defense_base, level) as f64;
    let power = context.move_data.power() as f64;

    if power == 0.0 || defense == 0.0 {
        return 0;
    }

    let level_factor = (2.0 * level as f64 / 5.0 + 2.0).floor();
    (level_factor * power * attack / defense / 50.0 + 2.0).floor() as u32
}

/// Apply STAB, effectiveness, weather, critical and extra modifiers to a
/// base damage value, returning the `(min, max)` roll range.
pub fn apply_modifiers(base_damage: u32, context: &DamageContext<'_>) -> (u32, u32) {
    let mut damage = base_damage as f64;

    if context.resolves_stab() {
        damage = (damage * STAB_MULTIPLIER).floor();
    }

    damage = (damage * context.effectiveness.unwrap_or(1.0)).floor();

    if let Some(weather) = context.weather
        && let Some(move_type) = context.move_type_name().and_then(Type::from_name)
    {
        damage = (damage * weather.damage_modifier(move_type)).floor();
    }

    if context.is_critical {
        damage = (damage * CRITICAL_MULTIPLIER).floor();
    }

    if let Some(modifier) = context.other_modifiers.filter(|m| *m != 0.0) {
        damage = (damage * modifier).floor();
    }

    let min = (damage * MIN_ROLL).floor();
    (min as u32, damage as u32)
}

pub fn calculate_damage(context: &DamageContext<'_>) -> DamageResult {
    let base_damage = calculate_base_damage(context);
    let (min, max) = apply_modifiers(base_damage, context);

    DamageResult {
        min,
        max,
        average: (min + max) / 2,
        is_critical: context.is_critical,
        effectiveness: context.effectiveness.unwrap_or(1.0),
        is_stab: context.resolves_stab(),
    }
}

fn hit_chance(min_total: i64, max_total: i64, hp: i64, partial: u32) -> u32 {
    if min_total >= hp {
        100
    } else if max_total >= hp {
        partial
    } else {
        0
    }
}

/// Rough KO odds against a defender with `defender_hp` remaining.
///
/// A guaranteed KO (min roll suffices) is 100; a possible one scores 50,
/// 75 and 85 for one, two and three hits.
pub fn calculate_ko_chance(damage: &DamageResult, defender_hp: i64) -> KoChance {
    if defender_hp <= 0 {
        return KoChance {
            ohko: 100,
            twohko: 100,
            threehko: 100,
        };
    }

    let min = damage.min as i64;
    let max = damage.max as i64;
    KoChance {
        ohko: hit_chance(min, max, defender_hp, 50),
        twohko: hit_chance(min * 2, max * 2, defender_hp, 75),
        threehko: hit_chance(min * 3, max * 3, defender_hp, 85),
    }
}
