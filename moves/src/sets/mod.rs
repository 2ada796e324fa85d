//! Competitive 4-move sets per role archetype
//!
//! Each builder walks a fixed template over the scored pool with its own
//! exclusion set and returns exactly four recommendations, or nothing when
//! the pool cannot fill the template.

mod reason;

use std::collections::HashSet;

use dexkit_battle::{BaseStats, BattleProfile, Role, determine_battle_profile};
use dexkit_data::{CreatureRecord, MoveRecord};
use serde::{Deserialize, Serialize};

use crate::scorer::{MoveScore, ScoringContext, filter_viable_moves, move_role_tag, score_move};
use crate::selector::{
    SelectionOptions, exclude_move, exclude_moves, pick_best_damaging_move, pick_by_tag,
    pick_coverage_moves, pick_recovery_move, pick_setup_move, pick_status_move,
    pick_strong_stab, pick_utility_move,
};
use crate::tag::MoveRoleTag;

pub use reason::build_reason;

/// Moves in a complete set
pub const SET_SIZE: usize = 4;

/// Tags a support set tries to cover first, one move each
const SUPPORT_PRIORITY_TAGS: [MoveRoleTag; 4] = [
    MoveRoleTag::Hazard,
    MoveRoleTag::Removal,
    MoveRoleTag::Taunt,
    MoveRoleTag::Screen,
];

/// One recommended move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecommendation {
    pub name: String,
    /// Move type name, `normal` when the payload omits it
    #[serde(rename = "type")]
    pub move_type: String,
    pub role_tag: MoveRoleTag,
    pub reason: String,
}

impl MoveRecommendation {
    /// Recommend a move, describing it by `role_tag` or else its derived tag
    pub fn from_score(move_score: &MoveScore, role_tag: Option<MoveRoleTag>) -> Self {
        let role_tag = role_tag.unwrap_or_else(|| move_role_tag(move_score));
        Self {
            name: move_score.name().to_string(),
            move_type: move_score.move_data.type_name().to_string(),
            role_tag,
            reason: build_reason(move_score, role_tag),
        }
    }
}

/// Sets for all four archetypes; each holds four moves or none
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompetitiveSets {
    pub sweeper: Vec<MoveRecommendation>,
    pub wallbreaker: Vec<MoveRecommendation>,
    pub tank: Vec<MoveRecommendation>,
    pub support: Vec<MoveRecommendation>,
}

impl CompetitiveSets {
    pub fn get(&self, role: Role) -> &[MoveRecommendation] {
        match role {
            Role::Sweeper => &self.sweeper,
            Role::Wallbreaker => &self.wallbreaker,
            Role::Tank => &self.tank,
            Role::Support => &self.support,
        }
    }

    /// Roles with a complete set, in tie-break order
    pub fn available_roles(&self) -> Vec<Role> {
        Role::ALL
            .into_iter()
            .filter(|role| !self.get(*role).is_empty())
            .collect()
    }
}

/// Selection state for one builder pass
struct SetDraft {
    role: Role,
    selection: Vec<MoveRecommendation>,
    excluded: HashSet<String>,
}

impl SetDraft {
    fn new(role: Role) -> Self {
        Self {
            role,
            selection: Vec::with_capacity(SET_SIZE),
            excluded: HashSet::new(),
        }
    }

    fn options(&self) -> SelectionOptions<'_> {
        SelectionOptions::new().excluding(&self.excluded)
    }

    fn remaining(&self) -> usize {
        SET_SIZE.saturating_sub(self.selection.len())
    }

    fn push(&mut self, move_score: &MoveScore, role_tag: Option<MoveRoleTag>) {
        exclude_move(&mut self.excluded, Some(move_score));
        self.selection
            .push(MoveRecommendation::from_score(move_score, role_tag));
    }

    fn push_all(&mut self, moves: &[&MoveScore], role_tag: Option<MoveRoleTag>) {
        exclude_moves(&mut self.excluded, moves);
        self.selection.extend(
            moves
                .iter()
                .map(|m| MoveRecommendation::from_score(m, role_tag)),
        );
    }

    /// Complete set, or empty when the template could not be filled
    fn finish(self) -> Vec<MoveRecommendation> {
        if self.selection.len() == SET_SIZE {
            self.selection
        } else {
            let why = format!("only {} moves selected", self.selection.len());
            self.abandon(&why)
        }
    }

    fn abandon(self, why: &str) -> Vec<MoveRecommendation> {
        tracing::debug!(role = %self.role, picked = self.selection.len(), why, "no set built");
        Vec::new()
    }
}

/// Optional setup, two strong STAB moves, coverage, then the best
/// remaining attacks
pub fn build_sweeper_set(moves: &[MoveScore], profile: &BattleProfile) -> Vec<MoveRecommendation> {
    let mut draft = SetDraft::new(Role::Sweeper);

    if let Some(setup) = pick_setup_move(moves, draft.options()) {
        draft.push(setup, Some(MoveRoleTag::Setup));
    }

    let stab = pick_strong_stab(moves, profile.offensive_bias, draft.options().count(2));
    if stab.len() < 2 {
        return draft.abandon("fewer than two strong STAB moves");
    }
    draft.push_all(&stab, Some(MoveRoleTag::Stab));

    let slots = draft.remaining();
    if slots > 0 {
        let coverage = pick_coverage_moves(moves, draft.options().count(slots));
        draft.push_all(&coverage, Some(MoveRoleTag::Coverage));
    }

    while draft.remaining() > 0 {
        let Some(filler) = pick_best_damaging_move(moves, draft.options()) else {
            break;
        };
        draft.push(filler, None);
    }

    draft.finish()
}

/// Two strong STAB moves and two coverage moves, backfilled with the best
/// remaining attacks
pub fn build_wallbreaker_set(
    moves: &[MoveScore],
    profile: &BattleProfile,
) -> Vec<MoveRecommendation> {
    let mut draft = SetDraft::new(Role::Wallbreaker);

    let stab = pick_strong_stab(moves, profile.offensive_bias, draft.options().count(2));
    if stab.len() < 2 {
        return draft.abandon("fewer than two strong STAB moves");
    }
    draft.push_all(&stab, Some(MoveRoleTag::Stab));

    let coverage = pick_coverage_moves(moves, draft.options().count(2));
    let shortfall = 2 - coverage.len();
    draft.push_all(&coverage, Some(MoveRoleTag::Coverage));

    for _ in 0..shortfall {
        let Some(filler) = pick_best_damaging_move(moves, draft.options()) else {
            return draft.abandon("not enough damaging moves to backfill coverage");
        };
        draft.push(filler, None);
    }

    draft.finish()
}

/// Damaging STAB, recovery, status, then a utility move (or the best
/// remaining attack)
pub fn build_tank_set(moves: &[MoveScore]) -> Vec<MoveRecommendation> {
    let mut draft = SetDraft::new(Role::Tank);

    let stab = moves
        .iter()
        .filter(|m| m.is_damaging && m.is_stab && !draft.excluded.contains(m.name()))
        .fold(None::<&MoveScore>, |best, m| match best {
            Some(b) if b.score >= m.score => Some(b),
            _ => Some(m),
        });
    let Some(stab) = stab else {
        return draft.abandon("no damaging STAB move");
    };
    draft.push(stab, Some(MoveRoleTag::Stab));

    let Some(recovery) = pick_recovery_move(moves, draft.options()) else {
        return draft.abandon("no recovery move");
    };
    draft.push(recovery, Some(MoveRoleTag::Recovery));

    let Some(status) = pick_status_move(moves, draft.options()) else {
        return draft.abandon("no status move");
    };
    draft.push(status, Some(MoveRoleTag::Status));

    if let Some(utility) = pick_utility_move(moves, draft.options()) {
        draft.push(utility, Some(move_role_tag(utility)));
    } else {
        let Some(fallback) = pick_best_damaging_move(moves, draft.options()) else {
            return draft.abandon("no utility or damaging move left");
        };
        draft.push(fallback, None);
    }

    draft.finish()
}

/// Hazard, removal, taunt and screen picks, then utility / status moves,
/// then STAB moves
pub fn build_support_set(moves: &[MoveScore]) -> Vec<MoveRecommendation> {
    let mut draft = SetDraft::new(Role::Support);

    for tag in SUPPORT_PRIORITY_TAGS {
        if draft.remaining() == 0 {
            break;
        }
        let picked = pick_by_tag(moves, tag, draft.options().count(1));
        draft.push_all(&picked, Some(tag));
    }

    if draft.remaining() > 0 {
        let count = draft.remaining();
        let mut utility: Vec<&MoveScore> = moves
            .iter()
            .filter(|m| {
                !draft.excluded.contains(m.name())
                    && (m.has_tag(MoveRoleTag::Utility) || m.has_tag(MoveRoleTag::Status))
            })
            .collect();
        utility.sort_by(|a, b| b.score.total_cmp(&a.score));
        utility.truncate(count);
        draft.push_all(&utility, None);
    }

    if draft.remaining() > 0 {
        let count = draft.remaining();
        let mut stab: Vec<&MoveScore> = moves
            .iter()
            .filter(|m| m.is_stab && !draft.excluded.contains(m.name()))
            .collect();
        stab.sort_by(|a, b| b.score.total_cmp(&a.score));
        stab.truncate(count);
        draft.push_all(&stab, Some(MoveRoleTag::Stab));
    }

    draft.finish()
}

/// Run every builder over the same pool. The tank set is only attempted
/// for creatures whose profile marks them as tanks.
pub fn build_all_sets(moves: &[MoveScore], profile: &BattleProfile) -> CompetitiveSets {
    CompetitiveSets {
        sweeper: build_sweeper_set(moves, profile),
        wallbreaker: build_wallbreaker_set(moves, profile),
        tank: if profile.is_tank {
            build_tank_set(moves)
        } else {
            Vec::new()
        },
        support: build_support_set(moves),
    }
}

/// Score a creature's move records and build all four sets.
///
/// The creature's own type weaknesses are the coverage targets the scorer
/// rewards. Moves scoring below `min_score` are discarded before building.
pub fn competitive_sets<'a>(
    creature: &CreatureRecord,
    moves: impl IntoIterator<Item = &'a MoveRecord>,
    min_score: f64,
) -> CompetitiveSets {
    let profile = determine_battle_profile(&BaseStats::from_creature(creature));
    let context = ScoringContext::for_creature(creature);
    let viable = filter_viable_moves(
        moves
            .into_iter()
            .map(|move_data| score_move(move_data, &context)),
        min_score,
    );

    tracing::debug!(
        creature = %creature.name,
        viable = viable.len(),
        bias = profile.offensive_bias.as_str(),
        "building competitive sets"
    );

    build_all_sets(&viable, &profile)
}
