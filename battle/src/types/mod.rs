//! Domain types shared by the battle calculations

mod conditions;
mod pokemon_type;
mod stats;

pub use conditions::{Terrain, Weather};
pub use pokemon_type::{TYPE_CHART, Type};
pub use stats::{
    BaseStats, BoostStat, DEFAULT_IV, StatStages, hp_at_level, hp_at_level_with, stat_at_level,
    stat_at_level_with,
};
