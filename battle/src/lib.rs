//! Type chart, role classification and damage estimation.
//!
//! This crate provides the battle-side calculations used by move scoring
//! and by any engine plugged in behind [`engine::BattleEngine`].
//!
//! # Overview
//!
//! `dexkit-battle` sits between `dexkit-data` (payload records) and the
//! move scoring layer:
//!
//! ```text
//! dexkit-data (payload records)
//!        │
//!        ▼
//! dexkit-battle (type chart + roles + damage) ← THIS CRATE
//!        │
//!        ▼
//! dexkit-moves (scoring + competitive sets)
//! ```
//!
//! # Main Types
//!
//! ## Domain Types
//! - [`Type`] - Pokemon types with effectiveness chart
//! - [`BaseStats`] - The six base stats of a species
//! - [`StatStages`] - Stat stage modifiers (-6 to +6)
//! - [`Weather`], [`Terrain`] - Field conditions
//!
//! ## Calculations
//! - [`query`] - Type matchups over API type names
//! - [`roles`] - [`BattleProfile`] and [`RoleWeights`] from base stats
//! - [`damage`] - Damage range and KO chance for one hit
//!
//! # Example Usage
//!
//! ```ignore
//! use dexkit_battle::{BaseStats, determine_battle_profile, primary_role};
//!
//! let stats = BaseStats::from_creature(&creature);
//! let profile = determine_battle_profile(&stats);
//! if profile.is_sweeper {
//!     println!("{} leans {}", creature.name, primary_role(&stats));
//! }
//! ```

pub mod damage;
pub mod engine;
pub mod query;
pub mod roles;
pub mod types;

// Re-export main types at crate root for convenience
pub use damage::{
    DamageContext, DamageResult, KoChance, apply_modifiers, calculate_base_damage,
    calculate_damage, calculate_ko_chance,
};
pub use engine::{BattleEngine, GameOutcome};
pub use roles::{
    BattleProfile, DEFAULT_VIABLE_THRESHOLD, OffensiveBias, Role, RoleWeights,
    determine_battle_profile, infer_role_weights, primary_role, viable_roles,
};
pub use types::{
    BaseStats, BoostStat, DEFAULT_IV, StatStages, TYPE_CHART, Terrain, Type, Weather, hp_at_level,
    hp_at_level_with, stat_at_level, stat_at_level_with,
};

// Re-export the stat identifiers payloads use
pub use dexkit_data::Stat;
