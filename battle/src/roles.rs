//! Battle role classification from base stats
//!
//! A creature's base stats decide its offensive bias, a set of boolean
//! role flags ([`BattleProfile`]) and a percentage split across the four
//! roles ([`RoleWeights`]).

use crate::types::BaseStats;

const BULK_THRESHOLD: u32 = 335;
const SWEEPER_SPEED_THRESHOLD: u32 = 100;
const WALLBREAKER_ATTACK_THRESHOLD: u32 = 120;
const SUPPORT_BULK_THRESHOLD: u32 = 300;

/// Attack / Special Attack gap needed to lean one way
const BIAS_MARGIN: i64 = 15;

/// Default weight threshold for [`viable_roles`]
pub const DEFAULT_VIABLE_THRESHOLD: u32 = 20;

/// Competitive role archetypes, in tie-break order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Role {
    Sweeper,
    Wallbreaker,
    Tank,
    Support,
}

impl Role {
    /// All roles in tie-break order
    pub const ALL: [Role; 4] = [Role::Sweeper, Role::Wallbreaker, Role::Tank, Role::Support];

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Sweeper => "sweeper",
            Role::Wallbreaker => "wallbreaker",
            Role::Tank => "tank",
            Role::Support => "support",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which attacking stat a creature favors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum OffensiveBias {
    Physical,
    Special,
    #[default]
    Mixed,
}

impl OffensiveBias {
    pub fn from_stats(attack: u32, special_attack: u32) -> Self {
        let difference = attack as i64 - special_attack as i64;
        if difference > BIAS_MARGIN {
            OffensiveBias::Physical
        } else if difference < -BIAS_MARGIN {
            OffensiveBias::Special
        } else {
            OffensiveBias::Mixed
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OffensiveBias::Physical => "physical",
            OffensiveBias::Special => "special",
            OffensiveBias::Mixed => "mixed",
        }
    }
}

/// Boolean role flags derived from base stats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleProfile {
    pub offensive_bias: OffensiveBias,
    /// Raw base Speed
    pub speed: u32,
    pub is_sweeper: bool,
    pub is_tank: bool,
    pub is_wallbreaker: bool,
    pub is_support: bool,
}

impl BattleProfile {
    /// Whether the boolean flag for `role` is set
    pub fn fits(&self, role: Role) -> bool {
        match role {
            Role::Sweeper => self.is_sweeper,
            Role::Wallbreaker => self.is_wallbreaker,
            Role::Tank => self.is_tank,
            Role::Support => self.is_support,
        }
    }
}

/// Percentage split across the four roles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoleWeights {
    pub sweeper: u32,
    pub wallbreaker: u32,
    pub tank: u32,
    pub support: u32,
}

impl RoleWeights {
    pub fn get(&self, role: Role) -> u32 {
        match role {
            Role::Sweeper => self.sweeper,
            Role::Wallbreaker => self.wallbreaker,
            Role::Tank => self.tank,
            Role::Support => self.support,
        }
    }

    /// Role with the largest weight; ties go to the earlier role
    pub fn primary(&self) -> Role {
        let mut best = Role::Sweeper;
        for role in Role::ALL {
            if self.get(role) > self.get(best) {
                best = role;
            }
        }
        best
    }

    /// Roles with weight >= `threshold`, heaviest first
    pub fn viable(&self, threshold: u32) -> Vec<Role> {
        let mut roles: Vec<Role> = Role::ALL
            .into_iter()
            .filter(|role| self.get(*role) >= threshold)
            .collect();
        roles.sort_by(|a, b| self.get(*b).cmp(&self.get(*a)));
        roles
    }
}

pub fn determine_battle_profile(stats: &BaseStats) -> BattleProfile {
    let bulk = stats.bulk();
    let max_offense = stats.max_offense();

    BattleProfile {
        offensive_bias: OffensiveBias::from_stats(stats.attack, stats.special_attack),
        speed: stats.speed,
        is_sweeper: stats.speed >= SWEEPER_SPEED_THRESHOLD,
        is_tank: bulk >= BULK_THRESHOLD,
        is_wallbreaker: max_offense >= WALLBREAKER_ATTACK_THRESHOLD,
        is_support: bulk >= SUPPORT_BULK_THRESHOLD && stats.speed < SWEEPER_SPEED_THRESHOLD,
    }
}

/// Half-up rounding of a non-negative percentage
fn round_percent(value: f64) -> u32 {
    (value + 0.5).floor() as u32
}

pub fn infer_role_weights(stats: &BaseStats) -> RoleWeights {
    let speed = stats.speed as f64;
    let bulk = stats.bulk() as f64;
    let max_offense = stats.max_offense() as f64;

    let mut sweeper = 0.0;
    let mut wallbreaker = 0.0;
    let mut tank = 0.0;
    let mut support = 0.0;

    // Fast with usable offense
    if speed >= 90.0 {
        sweeper += (speed - 90.0) * 1.5;
        sweeper += (max_offense - 80.0).max(0.0) * 0.8;
    }

    // Raw power; slow hitters get a bonus
    if max_offense >= 100.0 {
        wallbreaker += (max_offense - 100.0) * 2.0;
        if speed < 80.0 {
            wallbreaker += 20.0;
        }
    }

    if bulk >= 280.0 {
        tank += (bulk - 280.0) * 0.8;
        if max_offense >= 70.0 {
            tank += 15.0;
        }
    }

    if bulk >= 260.0 && max_offense < 110.0 {
        support += (bulk - 260.0) * 0.6;
        if speed < 70.0 {
            support += 10.0;
        }
    }

    let sum = sweeper + wallbreaker + tank + support;
    let total = if sum == 0.0 { 1.0 } else { sum };

    RoleWeights {
        sweeper: round_percent(sweeper / total * 100.0),
        wallbreaker: round_percent(wallbreaker / total * 100.0),
        tank: round_percent(tank / total * 100.0),
        support: round_percent(support / total * 100.0),
    }
}

pub fn primary_role(stats: &BaseStats) -> Role {
    infer_role_weights(stats).primary()
}

pub fn viable_roles(stats: &BaseStats, threshold: u32) -> Vec<Role> {
    infer_role_weights(stats).viable(threshold)
}
