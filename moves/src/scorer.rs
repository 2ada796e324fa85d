//! Per-move viability scoring
//!
//! [`score_move`] turns a move record into a [`MoveScore`]: a numeric
//! viability score plus the semantic tags the set builders select on.

use dexkit_battle::query::{coverage_targets, type_weaknesses};
use dexkit_battle::{BaseStats, OffensiveBias, Type, determine_battle_profile};
use dexkit_data::{CreatureRecord, DamageClass, MoveRecord};
use serde::{Deserialize, Serialize};

use crate::tables::{RELIABLE_RECOVERY_MOVES, SETUP_BONUS, UTILITY_MOVES};
use crate::tag::MoveRoleTag;

/// Minimum power for a STAB move to count as strong
pub const STRONG_STAB_THRESHOLD: u32 = 70;

/// Default cutoff for [`filter_viable_moves`]
pub const DEFAULT_MIN_SCORE: f64 = 30.0;

/// Accuracy factor for moves without an accuracy value
const UNKNOWN_ACCURACY_FACTOR: f64 = 0.85;

const STAB_BONUS: f64 = 25.0;
const BIAS_BONUS: f64 = 10.0;
const PRIORITY_BONUS: f64 = 25.0;
const DRAIN_BONUS: f64 = 15.0;
const RECOIL_PENALTY: f64 = 10.0;
const RECOVERY_BONUS: f64 = 50.0;
const LEECH_SEED_BONUS: f64 = 35.0;
const COVERAGE_BASE_BONUS: f64 = 15.0;
const COVERAGE_PER_TARGET_BONUS: f64 = 5.0;

/// What the scorer knows about the move's owner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScoringContext {
    /// Owner type names, matched exactly against the move type
    pub pokemon_types: Vec<String>,
    pub offensive_bias: OffensiveBias,
    /// Types worth hitting super-effectively
    pub weakness_coverage: Vec<Type>,
}

impl ScoringContext {
    pub fn new(
        pokemon_types: Vec<String>,
        offensive_bias: OffensiveBias,
        weakness_coverage: Vec<Type>,
    ) -> Self {
        Self {
            pokemon_types,
            offensive_bias,
            weakness_coverage,
        }
    }

    /// Context for a creature: its types, the bias of its base stats, and
    /// its own type weaknesses as the coverage wish list
    pub fn for_creature(creature: &CreatureRecord) -> Self {
        let pokemon_types = creature.type_names();
        let profile = determine_battle_profile(&BaseStats::from_creature(creature));
        let weakness_coverage = type_weaknesses(&pokemon_types);
        Self::new(pokemon_types, profile.offensive_bias, weakness_coverage)
    }
}

/// A scored move. Only constructed with `score > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoveScore {
    #[serde(rename = "move")]
    pub move_data: MoveRecord,
    pub score: f64,
    pub tags: Vec<MoveRoleTag>,
    pub is_damaging: bool,
    pub is_stab: bool,
    pub power: u32,
    /// Super-effective targets of the move type within the weakness coverage
    pub coverage_targets: Vec<Type>,
    pub english_effect: String,
}

impl MoveScore {
    pub fn name(&self) -> &str {
        &self.move_data.name
    }

    pub fn has_tag(&self, tag: MoveRoleTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn damage_class(&self) -> Option<DamageClass> {
        self.move_data.damage_class()
    }
}

fn push_unique(tags: &mut Vec<MoveRoleTag>, tag: MoveRoleTag) {
    if !tags.contains(&tag) {
        tags.push(tag);
    }
}

fn matches_bias(bias: OffensiveBias, class: Option<DamageClass>) -> bool {
    matches!(
        (bias, class),
        (OffensiveBias::Physical, Some(DamageClass::Physical))
            | (OffensiveBias::Special, Some(DamageClass::Special))
    )
}

/// Score one move for its owner. Returns `None` when the score is not
/// positive.
pub fn score_move(move_data: &MoveRecord, context: &ScoringContext) -> Option<MoveScore> {
    let type_name = move_data.type_name();
    let is_stab = context.pokemon_types.iter().any(|t| t == type_name);
    let power = move_data.power();
    let damage_class = move_data.damage_class();
    let is_damaging = damage_class != Some(DamageClass::Status) && power > 0;

    let mut score = 0.0;
    let mut tags = Vec::new();

    if is_damaging {
        let accuracy_factor = move_data
            .accuracy()
            .map(|acc| acc as f64 / 100.0)
            .unwrap_or(UNKNOWN_ACCURACY_FACTOR);
        score += power as f64 * accuracy_factor;

        if is_stab {
            score += STAB_BONUS;
            tags.push(MoveRoleTag::Stab);
        }

        if matches_bias(context.offensive_bias, damage_class) {
            score += BIAS_BONUS;
        }

        if move_data.priority > 0 {
            score += PRIORITY_BONUS;
            tags.push(MoveRoleTag::Priority);
        }

        let drain = move_data.drain();
        if drain > 0 {
            score += DRAIN_BONUS;
            tags.push(MoveRoleTag::Drain);
        } else if drain < 0 {
            score -= RECOIL_PENALTY;
        }
    }

    if let Some(bonus) = SETUP_BONUS.get(move_data.name.as_str()) {
        score += *bonus as f64;
        tags.push(MoveRoleTag::Setup);
    }

    if let Some(entry) = UTILITY_MOVES.get(move_data.name.as_str()) {
        score += entry.score as f64;
        tags.push(entry.role_tag);
        if entry.role_tag != MoveRoleTag::Utility {
            tags.push(MoveRoleTag::Utility);
        }
    }

    if RELIABLE_RECOVERY_MOVES.contains(move_data.name.as_str()) || move_data.healing() > 0 {
        score += RECOVERY_BONUS;
        push_unique(&mut tags, MoveRoleTag::Recovery);
    }

    if move_data.name == "leech-seed" {
        score += LEECH_SEED_BONUS;
        push_unique(&mut tags, MoveRoleTag::Recovery);
        push_unique(&mut tags, MoveRoleTag::Status);
    }

    let coverage: Vec<Type> = coverage_targets(type_name)
        .into_iter()
        .filter(|target| context.weakness_coverage.contains(target))
        .collect();
    if !coverage.is_empty() && is_damaging && !is_stab {
        score += COVERAGE_BASE_BONUS + COVERAGE_PER_TARGET_BONUS * coverage.len() as f64;
        tags.push(MoveRoleTag::Coverage);
    }

    if score <= 0.0 {
        tracing::trace!(name = %move_data.name, score, "dropping move with no value");
        return None;
    }

    tracing::trace!(name = %move_data.name, score, ?tags, "scored move");

    Some(MoveScore {
        move_data: move_data.clone(),
        score,
        tags,
        is_damaging,
        is_stab,
        power,
        coverage_targets: coverage,
        english_effect: move_data.english_effect().to_string(),
    })
}

/// Score every move, keeping input order and dropping unscored moves
pub fn score_moves<'a>(
    moves: impl IntoIterator<Item = &'a MoveRecord>,
    context: &ScoringContext,
) -> Vec<MoveScore> {
    moves
        .into_iter()
        .filter_map(|move_data| score_move(move_data, context))
        .collect()
}

/// Keep moves scoring at least `min_score`, best first. Ties keep input order.
pub fn filter_viable_moves(
    scored: impl IntoIterator<Item = Option<MoveScore>>,
    min_score: f64,
) -> Vec<MoveScore> {
    let mut viable: Vec<MoveScore> = scored
        .into_iter()
        .flatten()
        .filter(|entry| entry.score >= min_score)
        .collect();
    viable.sort_by(|a, b| b.score.total_cmp(&a.score));
    viable
}

/// The single tag that best describes a move
pub fn move_role_tag(move_score: &MoveScore) -> MoveRoleTag {
    MoveRoleTag::PRECEDENCE
        .into_iter()
        .find(|tag| move_score.has_tag(*tag))
        .unwrap_or(MoveRoleTag::Utility)
}

/// Damaging STAB move with at least [`STRONG_STAB_THRESHOLD`] power
pub fn is_strong_stab(move_score: &MoveScore) -> bool {
    move_score.is_damaging && move_score.is_stab && move_score.power >= STRONG_STAB_THRESHOLD
}
