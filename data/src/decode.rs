//! JSON decoding for raw payloads

use anyhow::Result;
use serde::de::DeserializeOwned;

use crate::ParseError;
use crate::records::{CreatureRecord, MoveRecord, SpeciesRecord};

/// Decode a creature payload
pub fn parse_creature(payload: &str) -> Result<CreatureRecord> {
    let record: CreatureRecord = decode(payload, "creature")?;
    require_name(&record.name, "creature name")?;

    if record.stats.is_empty() {
        tracing::warn!(creature = %record.name, "creature payload has no stats");
    }

    Ok(record)
}

/// Decode a move payload
pub fn parse_move(payload: &str) -> Result<MoveRecord> {
    let record: MoveRecord = decode(payload, "move")?;
    require_name(&record.name, "move name")?;

    if record.damage_class.is_none() {
        tracing::warn!(move_name = %record.name, "move payload has no damage class");
    }

    Ok(record)
}

/// Decode a species payload
pub fn parse_species(payload: &str) -> Result<SpeciesRecord> {
    decode(payload, "species")
}

fn decode<T: DeserializeOwned>(payload: &str, kind: &str) -> Result<T> {
    if payload.trim().is_empty() {
        return Err(ParseError::EmptyPayload.into());
    }

    serde_json::from_str(payload)
        .map_err(|e| ParseError::InvalidFormat(format!("{kind} payload: {e}")).into())
}

fn require_name(name: &str, field: &str) -> Result<()> {
    if name.trim().is_empty() {
        return Err(ParseError::MissingField(field.to_string()).into());
    }
    Ok(())
}
