//! Move viability scoring and competitive set construction.
//!
//! Scores every move a creature can learn, tags what each move brings to a
//! set, and assembles four-move sets for the sweeper, wallbreaker, tank and
//! support archetypes.
//!
//! # Overview
//!
//! ```text
//! MoveRecord ──► score_move ──► MoveScore ──► filter_viable_moves
//!                    ▲                                │
//!             ScoringContext                          ▼
//!       (types, bias, weaknesses)        build_*_set / build_all_sets
//!                                                     │
//!                                                     ▼
//!                                             CompetitiveSets
//! ```
//!
//! # Main Types
//!
//! - [`MoveScore`] - A scored move with its tags and coverage targets
//! - [`MoveRoleTag`] - What a move contributes (STAB, hazard, setup, ...)
//! - [`MoveRecommendation`] - One slot of a set, with a readable reason
//! - [`CompetitiveSets`] - The four archetype sets for one creature
//!
//! # Example Usage
//!
//! ```ignore
//! use dexkit_moves::{DEFAULT_MIN_SCORE, competitive_sets};
//!
//! let sets = competitive_sets(&creature, &move_records, DEFAULT_MIN_SCORE);
//! for role in sets.available_roles() {
//!     println!("{role}:");
//!     for rec in sets.get(role) {
//!         println!("  {} ({})", rec.name, rec.reason);
//!     }
//! }
//! ```

mod scorer;
mod selector;
pub mod sets;
mod tables;
mod tag;

pub use scorer::{
    DEFAULT_MIN_SCORE, MoveScore, STRONG_STAB_THRESHOLD, ScoringContext, filter_viable_moves,
    is_strong_stab, move_role_tag, score_move, score_moves,
};
pub use selector::{
    SelectionOptions, exclude_move, exclude_moves, pick_best_damaging_move, pick_by_tag,
    pick_coverage_moves, pick_priority_move, pick_recovery_move, pick_setup_move,
    pick_status_move, pick_strong_stab, pick_utility_move,
};
pub use sets::{
    CompetitiveSets, MoveRecommendation, SET_SIZE, build_all_sets, build_reason,
    build_support_set, build_sweeper_set, build_tank_set, build_wallbreaker_set,
    competitive_sets,
};
pub use tables::{RELIABLE_RECOVERY_MOVES, SETUP_BONUS, UTILITY_MOVES, UtilityEntry};
pub use tag::MoveRoleTag;
