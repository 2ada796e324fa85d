//! Type matchup queries
//!
//! Helpers for analyzing attacking and defending type combinations given
//! as API type names.

mod matchup;

pub use matchup::{
    OffensiveCoverageEntry, TypeMatchup, TypeMatchups, coverage_targets, effectiveness_multiplier,
    offensive_coverage, type_matchups, type_weaknesses,
};
