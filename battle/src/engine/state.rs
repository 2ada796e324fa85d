//! Battle scaffolding values built from creature payloads

use std::sync::atomic::{AtomicU64, Ordering};

use dexkit_data::CreatureRecord;

use crate::types::{BaseStats, StatStages, Terrain, Weather, hp_at_level, stat_at_level};

/// Level used when none is given
pub const DEFAULT_LEVEL: u32 = 50;

/// Maximum moves a battler carries
pub const MAX_MOVES: usize = 4;

static NEXT_BATTLER_ID: AtomicU64 = AtomicU64::new(1);

/// Player side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Side {
    Player1,
    Player2,
}

impl Side {
    pub fn opponent(&self) -> Side {
        match self {
            Side::Player1 => Side::Player2,
            Side::Player2 => Side::Player1,
        }
    }
}

/// Level-scaled stats of a battler
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleStats {
    pub hp: u32,
    pub attack: u32,
    pub defense: u32,
    pub special_attack: u32,
    pub special_defense: u32,
    pub speed: u32,
}

impl BattleStats {
    /// Scale base stats to `level` with 31 IVs and no EVs
    pub fn at_level(base: &BaseStats, level: u32) -> Self {
        Self {
            hp: hp_at_level(base.hp, level),
            attack: stat_at_level(base.attack, level),
            defense: stat_at_level(base.defense, level),
            special_attack: stat_at_level(base.special_attack, level),
            special_defense: stat_at_level(base.special_defense, level),
            speed: stat_at_level(base.speed, level),
        }
    }
}

/// A creature prepared for battle
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattlePokemon {
    /// Unique per created battler (`species-N`)
    pub id: String,
    pub species: String,
    pub level: u32,
    pub types: Vec<String>,
    pub stats: BattleStats,
    pub current_hp: u32,
    pub status: Option<String>,
    pub ability: String,
    pub item: Option<String>,
    pub moves: Vec<String>,
    pub boosts: StatStages,
}

impl BattlePokemon {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    /// HP as a percentage (0-100), rounded down
    pub fn hp_percent(&self) -> u32 {
        if self.stats.hp == 0 {
            return 0;
        }
        self.current_hp * 100 / self.stats.hp
    }

    /// Subtract damage, stopping at 0. Returns the HP actually lost.
    pub fn take_damage(&mut self, amount: u32) -> u32 {
        let lost = amount.min(self.current_hp);
        self.current_hp -= lost;
        lost
    }

    /// Restore HP up to the maximum. Returns the HP actually gained.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let gained = amount.min(self.stats.hp - self.current_hp.min(self.stats.hp));
        self.current_hp += gained;
        gained
    }
}

/// One player's side of the battle
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SideState {
    /// Index into `team` of the active battler
    pub active: Option<usize>,
    /// Battlers in party order
    pub team: Vec<BattlePokemon>,
}

impl SideState {
    /// Lead with the first team member, if any
    pub fn new(team: Vec<BattlePokemon>) -> Self {
        let active = if team.is_empty() { None } else { Some(0) };
        Self { active, team }
    }

    /// Get the active battler
    pub fn active_pokemon(&self) -> Option<&BattlePokemon> {
        self.active.and_then(|idx| self.team.get(idx))
    }

    /// Get the active battler mutably
    pub fn active_pokemon_mut(&mut self) -> Option<&mut BattlePokemon> {
        self.active.and_then(|idx| self.team.get_mut(idx))
    }

    /// Iterate over bench battlers (not active, not fainted)
    pub fn bench(&self) -> impl Iterator<Item = (usize, &BattlePokemon)> {
        let active = self.active;
        self.team
            .iter()
            .enumerate()
            .filter(move |(idx, poke)| Some(*idx) != active && poke.is_alive())
    }

    /// Count non-fainted battlers
    pub fn alive_count(&self) -> usize {
        self.team.iter().filter(|p| p.is_alive()).count()
    }
}

/// Full battle snapshot
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    /// Current turn number (0 = not started)
    pub turn: u32,
    pub weather: Option<Weather>,
    pub weather_turns: u32,
    pub terrain: Option<Terrain>,
    pub terrain_turns: u32,
    pub player1: SideState,
    pub player2: SideState,
}

impl BattleState {
    pub fn side(&self, side: Side) -> &SideState {
        match side {
            Side::Player1 => &self.player1,
            Side::Player2 => &self.player2,
        }
    }

    pub fn side_mut(&mut self, side: Side) -> &mut SideState {
        match side {
            Side::Player1 => &mut self.player1,
            Side::Player2 => &mut self.player2,
        }
    }
}

/// Prepare a creature for battle at `level`.
///
/// Stats are scaled with 31 IVs and no EVs. The battler starts at full HP,
/// keeps its first listed ability and its first four learnable moves.
pub fn create_battle_pokemon(creature: &CreatureRecord, level: u32) -> BattlePokemon {
    let stats = BattleStats::at_level(&BaseStats::from_creature(creature), level);
    let serial = NEXT_BATTLER_ID.fetch_add(1, Ordering::Relaxed);

    BattlePokemon {
        id: format!("{}-{}", creature.name, serial),
        species: creature.name.clone(),
        level,
        types: creature.type_names(),
        stats,
        current_hp: stats.hp,
        status: None,
        ability: creature
            .abilities
            .first()
            .map(|slot| slot.ability.name.clone())
            .unwrap_or_default(),
        item: None,
        moves: creature
            .moves
            .iter()
            .take(MAX_MOVES)
            .map(|entry| entry.move_ref.name.clone())
            .collect(),
        boosts: StatStages::new(),
    }
}

/// Turn 0, clear field, each side leading with its first battler
pub fn create_initial_battle_state(
    team1: Vec<BattlePokemon>,
    team2: Vec<BattlePokemon>,
) -> BattleState {
    BattleState {
        player1: SideState::new(team1),
        player2: SideState::new(team2),
        ..Default::default()
    }
}

/// Clamp a stage to -6..=+6
pub fn clamp_boost(boost: i32) -> i32 {
    boost.clamp(-6, 6)
}

/// Scale a stat by its stage multiplier, rounding down
pub fn apply_boost(value: u32, stages: i32) -> u32 {
    (value as f64 * StatStages::multiplier(clamp_boost(stages))).floor() as u32
}
