//! Typed payload records and decoding for PokeAPI-shaped static data.
//!
//! `dexkit-data` is the leaf crate of the workspace:
//!
//! ```text
//! dexkit-data (records + decoding + display mapping) ← THIS CRATE
//!        │
//!        ▼
//! dexkit-battle (type chart, roles, damage)
//!        │
//!        ▼
//! dexkit-moves (scoring + competitive sets)
//! ```
//!
//! # Main Types
//!
//! - [`CreatureRecord`], [`MoveRecord`], [`SpeciesRecord`] - raw payload records
//! - [`Stat`] - the six permanent stats and their API names
//! - [`parser`] - localized display mapping for creature payloads
//! - [`cache::MemoryCache`] - TTL cache with fresh/stale/expired entries

use thiserror::Error;

pub mod cache;
mod decode;
pub mod parser;
mod records;

pub use decode::{parse_creature, parse_move, parse_species};
pub use records::{
    AbilitySlot, AnimatedSprites, CreatureRecord, Cries, DamageClass, EffectEntry,
    FlavorTextEntry, GenerationVSprites, GenusEntry, Localized, MoveEntry, MoveMeta, MoveRecord,
    MoveVersionDetail, NameEntry, NamedResource, OtherSprites, SpeciesRecord, SpriteSet, Sprites,
    Stat, StatEntry, TypeSlot, Variety, VersionSprites,
};

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Invalid payload format: {0}")]
    InvalidFormat(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("Empty payload")]
    EmptyPayload,
}
