//! Base stats, level scaling and stat stages

use dexkit_data::{CreatureRecord, Stat, StatEntry};

/// Individual value assumed for every computed stat
pub const DEFAULT_IV: u32 = 31;

/// The six base stats of a species
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BaseStats {
    /// Build from a payload stat list. Unknown names are ignored and
    /// missing stats stay at 0; the first entry for a stat wins.
    pub fn from_entries(entries: &[StatEntry]) -> Self {
        Self::from_pairs(
            entries
                .iter()
                .map(|entry| (entry.stat.name.as_str(), entry.base_stat)),
        )
    }

    /// Build from `(api name, value)` pairs
    pub fn from_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, u32)>) -> Self {
        let mut stats = Self::default();
        let mut seen = [false; 6];
        for (name, value) in pairs {
            let Some(stat) = Stat::from_api_name(name) else {
                continue;
            };
            let index = stat as usize;
            if !seen[index] {
                seen[index] = true;
                stats.set(stat, value);
            }
        }
        stats
    }

    pub fn from_creature(creature: &CreatureRecord) -> Self {
        Self::from_entries(&creature.stats)
    }

    pub fn get(&self, stat: Stat) -> u32 {
        match stat {
            Stat::Hp => self.hp,
            Stat::Attack => self.attack,
            Stat::Defense => self.defense,
            Stat::SpecialAttack => self.special_attack,
            Stat::SpecialDefense => self.special_defense,
            Stat::Speed => self.speed,
        }
    }

    pub fn set(&mut self, stat: Stat, value: u32) {
        match stat {
            Stat::Hp => self.hp = value,
            Stat::Attack => self.attack = value,
            Stat::Defense => self.defense = value,
            Stat::SpecialAttack => self.special_attack = value,
            Stat::SpecialDefense => self.special_defense = value,
            Stat::Speed => self.speed = value,
        }
    }

    /// HP + Defense + Special Defense
    pub fn bulk(&self) -> u32 {
        self.hp + self.defense + self.special_defense
    }

    /// The higher of the two attacking stats
    pub fn max_offense(&self) -> u32 {
        self.attack.max(self.special_attack)
    }

    pub fn total(&self) -> u32 {
        Stat::ALL.iter().map(|stat| self.get(*stat)).sum()
    }
}

/// Non-HP stat at a level with 31 IVs, no EVs and a neutral nature
pub fn stat_at_level(base: u32, level: u32) -> u32 {
    saturate(scaled_stat(base, level, 0) + 5)
}

/// Non-HP stat at a level with explicit EVs and nature multiplier.
///
/// The nature multiplier is applied after flooring, so the result is
/// fractional for boosting and hindering natures.
pub fn stat_at_level_with(base: u32, level: u32, ev: u32, nature: f64) -> f64 {
    (scaled_stat(base, level, ev) + 5) as f64 * nature
}

/// HP at a level with 31 IVs and no EVs
pub fn hp_at_level(base: u32, level: u32) -> u32 {
    hp_at_level_with(base, level, 0)
}

pub fn hp_at_level_with(base: u32, level: u32, ev: u32) -> u32 {
    saturate(scaled_stat(base, level, ev) + u64::from(level) + 10)
}

/// `floor((2 * base + IV + floor(ev / 4)) * level / 100)`, widened so
/// oversized inputs cannot overflow
fn scaled_stat(base: u32, level: u32, ev: u32) -> u64 {
    (2 * u64::from(base) + u64::from(DEFAULT_IV) + u64::from(ev / 4)) * u64::from(level) / 100
}

fn saturate(value: u64) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Stats that can carry a battle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BoostStat {
    Attack,
    Defense,
    SpecialAttack,
    SpecialDefense,
    Speed,
    Accuracy,
    Evasion,
}

/// Stat stages (-6 to +6)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub attack: i8,
    pub defense: i8,
    pub special_attack: i8,
    pub special_defense: i8,
    pub speed: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    /// Create new stat stages (all at 0)
    pub fn new() -> Self {
        Self::default()
    }

    /// Get stage for a stat
    pub fn get(&self, stat: BoostStat) -> i8 {
        match stat {
            BoostStat::Attack => self.attack,
            BoostStat::Defense => self.defense,
            BoostStat::SpecialAttack => self.special_attack,
            BoostStat::SpecialDefense => self.special_defense,
            BoostStat::Speed => self.speed,
            BoostStat::Accuracy => self.accuracy,
            BoostStat::Evasion => self.evasion,
        }
    }

    /// Set stage for a stat (clamped to -6..+6)
    pub fn set(&mut self, stat: BoostStat, value: i8) {
        let clamped = value.clamp(-6, 6);
        match stat {
            BoostStat::Attack => self.attack = clamped,
            BoostStat::Defense => self.defense = clamped,
            BoostStat::SpecialAttack => self.special_attack = clamped,
            BoostStat::SpecialDefense => self.special_defense = clamped,
            BoostStat::Speed => self.speed = clamped,
            BoostStat::Accuracy => self.accuracy = clamped,
            BoostStat::Evasion => self.evasion = clamped,
        }
    }

    /// Apply a boost to a stat, returns actual change applied
    pub fn boost(&mut self, stat: BoostStat, amount: i8) -> i8 {
        let current = self.get(stat);
        let new_value = current.saturating_add(amount).clamp(-6, 6);
        self.set(stat, new_value);
        new_value - current
    }

    /// Reset all stages to 0
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Check if all stats are at 0
    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Get the multiplier for a stat stage (for atk/def/spa/spd/spe)
    /// +1 = 1.5x, +2 = 2x, ..., +6 = 4x
    /// -1 = 0.67x, -2 = 0.5x, ..., -6 = 0.25x
    pub fn multiplier(stage: i32) -> f64 {
        let stage = stage.clamp(-6, 6);
        if stage >= 0 {
            (2 + stage) as f64 / 2.0
        } else {
            2.0 / (2 - stage) as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexkit_data::NamedResource;

    fn entry(name: &str, base_stat: u32) -> StatEntry {
        StatEntry {
            base_stat,
            effort: 0,
            stat: NamedResource::new(name),
        }
    }

    #[test]
    fn test_base_stats_from_entries() {
        let stats = BaseStats::from_entries(&[
            entry("hp", 95),
            entry("attack", 125),
            entry("defense", 79),
            entry("special-attack", 60),
            entry("special-defense", 100),
            entry("speed", 81),
            entry("accuracy", 999),
        ]);
        assert_eq!(stats.hp, 95);
        assert_eq!(stats.special_attack, 60);
        assert_eq!(stats.get(Stat::Speed), 81);
        assert_eq!(stats.bulk(), 274);
        assert_eq!(stats.max_offense(), 125);
        assert_eq!(stats.total(), 540);
    }

    #[test]
    fn test_base_stats_missing_default_to_zero() {
        let stats = BaseStats::from_pairs([("speed", 130), ("speed", 10)]);
        assert_eq!(stats.speed, 130);
        assert_eq!(stats.hp, 0);
        assert_eq!(stats.bulk(), 0);
        assert_eq!(BaseStats::from_entries(&[]), BaseStats::default());
    }

    #[test]
    fn test_stat_at_level() {
        // Garchomp base 130 Atk at 50: floor((260 + 31) * 50 / 100 + 5) = 150
        assert_eq!(stat_at_level(130, 50), 150);
        assert_eq!(stat_at_level(100, 100), 236);
        assert_eq!(stat_at_level(0, 50), 20);
        assert_eq!(stat_at_level_with(130, 50, 0, 1.0), 150.0);
        assert_eq!(stat_at_level_with(130, 50, 252, 1.1), 182.0 * 1.1);
    }

    #[test]
    fn test_hp_at_level() {
        // base 108 at 50: floor(247 * 50 / 100) + 50 + 10 = 183
        assert_eq!(hp_at_level(108, 50), 183);
        assert_eq!(hp_at_level(1, 100), 143);
        assert_eq!(hp_at_level_with(108, 50, 252), 215);
    }

    #[test]
    fn test_oversized_base_stats_do_not_overflow() {
        // (2 * 50_000_000 + 31) * 100 exceeds u32 before the division
        assert_eq!(stat_at_level(50_000_000, 100), 100_000_036);
        assert_eq!(hp_at_level(50_000_000, 100), 100_000_141);
        assert_eq!(stat_at_level_with(50_000_000, 100, 0, 1.0), 100_000_036.0);
        assert_eq!(stat_at_level(u32::MAX, 100), u32::MAX);
        assert_eq!(hp_at_level_with(u32::MAX, u32::MAX, u32::MAX), u32::MAX);
    }

    #[test]
    fn test_set_clamps_to_bounds() {
        let mut stages = StatStages::new();
        stages.set(BoostStat::Attack, 10);
        assert_eq!(stages.attack, 6);

        stages.set(BoostStat::Defense, -10);
        assert_eq!(stages.defense, -6);
    }

    #[test]
    fn test_boost() {
        let mut stages = StatStages::new();

        let change = stages.boost(BoostStat::Attack, 2);
        assert_eq!(change, 2);
        assert_eq!(stages.attack, 2);

        // Boost that hits cap
        stages.attack = 5;
        let change = stages.boost(BoostStat::Attack, 3);
        assert_eq!(change, 1);
        assert_eq!(stages.attack, 6);

        let change = stages.boost(BoostStat::Speed, -8);
        assert_eq!(change, -6);
        assert_eq!(stages.get(BoostStat::Speed), -6);

        stages.clear();
        assert!(stages.is_clear());
    }

    #[test]
    fn test_stat_multiplier() {
        assert_eq!(StatStages::multiplier(0), 1.0);
        assert_eq!(StatStages::multiplier(1), 1.5);
        assert_eq!(StatStages::multiplier(2), 2.0);
        assert_eq!(StatStages::multiplier(6), 4.0);
        assert_eq!(StatStages::multiplier(9), 4.0);

        assert!((StatStages::multiplier(-1) - 2.0 / 3.0).abs() < 1e-12);
        assert_eq!(StatStages::multiplier(-2), 0.5);
        assert_eq!(StatStages::multiplier(-6), 0.25);
        assert_eq!(StatStages::multiplier(-7), 0.25);
    }
}
