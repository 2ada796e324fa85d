//! Pickers over a scored move pool
//!
//! Every picker borrows the full pool, skips excluded names and returns
//! the best matches by score. Ties keep pool order.

use std::collections::HashSet;

use dexkit_battle::OffensiveBias;
use dexkit_data::DamageClass;

use crate::scorer::{MoveScore, STRONG_STAB_THRESHOLD};
use crate::tag::MoveRoleTag;

const DEFAULT_TAG_COUNT: usize = 1;
const DEFAULT_STAB_COUNT: usize = 2;
const DEFAULT_COVERAGE_COUNT: usize = 2;

/// Options shared by the pickers. Unset values use each picker's default.
#[derive(Debug, Clone, Copy, Default)]
pub struct SelectionOptions<'a> {
    pub excluded: Option<&'a HashSet<String>>,
    pub count: Option<usize>,
    pub min_power: Option<u32>,
}

impl<'a> SelectionOptions<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn excluding(mut self, excluded: &'a HashSet<String>) -> Self {
        self.excluded = Some(excluded);
        self
    }

    pub fn count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    pub fn min_power(mut self, min_power: u32) -> Self {
        self.min_power = Some(min_power);
        self
    }

    fn is_excluded(&self, move_score: &MoveScore) -> bool {
        self.excluded
            .is_some_and(|excluded| excluded.contains(move_score.name()))
    }
}

/// Best `count` non-excluded moves matching `predicate`
fn top_matching<'m>(
    moves: &'m [MoveScore],
    options: &SelectionOptions<'_>,
    count: usize,
    predicate: impl Fn(&MoveScore) -> bool,
) -> Vec<&'m MoveScore> {
    let mut matching: Vec<&MoveScore> = moves
        .iter()
        .filter(|m| !options.is_excluded(m) && predicate(m))
        .collect();
    matching.sort_by(|a, b| b.score.total_cmp(&a.score));
    matching.truncate(count);
    matching
}

fn best_matching<'m>(
    moves: &'m [MoveScore],
    options: &SelectionOptions<'_>,
    predicate: impl Fn(&MoveScore) -> bool,
) -> Option<&'m MoveScore> {
    top_matching(moves, options, 1, predicate).into_iter().next()
}

/// Best moves carrying `tag` (one by default)
pub fn pick_by_tag<'m>(
    moves: &'m [MoveScore],
    tag: MoveRoleTag,
    options: SelectionOptions<'_>,
) -> Vec<&'m MoveScore> {
    let count = options.count.unwrap_or(DEFAULT_TAG_COUNT);
    top_matching(moves, &options, count, |m| m.has_tag(tag))
}

/// Damaging STAB moves with at least `min_power` (70) power, two by default.
///
/// A physical or special bias restricts picks to that damage class.
pub fn pick_strong_stab<'m>(
    moves: &'m [MoveScore],
    bias: OffensiveBias,
    options: SelectionOptions<'_>,
) -> Vec<&'m MoveScore> {
    let count = options.count.unwrap_or(DEFAULT_STAB_COUNT);
    let min_power = options.min_power.unwrap_or(STRONG_STAB_THRESHOLD);
    let preferred_class = match bias {
        OffensiveBias::Physical => Some(DamageClass::Physical),
        OffensiveBias::Special => Some(DamageClass::Special),
        OffensiveBias::Mixed => None,
    };

    top_matching(moves, &options, count, |m| {
        m.is_damaging
            && m.is_stab
            && m.power >= min_power
            && preferred_class.is_none_or(|class| m.damage_class() == Some(class))
    })
}

/// Damaging non-STAB moves that cover a weakness or hit hard, two by default
pub fn pick_coverage_moves<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Vec<&'m MoveScore> {
    let count = options.count.unwrap_or(DEFAULT_COVERAGE_COUNT);
    let min_power = options.min_power.unwrap_or(STRONG_STAB_THRESHOLD);

    top_matching(moves, &options, count, |m| {
        m.is_damaging && !m.is_stab && (m.has_tag(MoveRoleTag::Coverage) || m.power >= min_power)
    })
}

pub fn pick_recovery_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.has_tag(MoveRoleTag::Recovery))
}

pub fn pick_status_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.has_tag(MoveRoleTag::Status))
}

pub fn pick_utility_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.has_tag(MoveRoleTag::Utility))
}

pub fn pick_setup_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.has_tag(MoveRoleTag::Setup))
}

pub fn pick_priority_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.has_tag(MoveRoleTag::Priority))
}

pub fn pick_best_damaging_move<'m>(
    moves: &'m [MoveScore],
    options: SelectionOptions<'_>,
) -> Option<&'m MoveScore> {
    best_matching(moves, &options, |m| m.is_damaging)
}

/// Record a picked move so later picks skip it
pub fn exclude_move(excluded: &mut HashSet<String>, move_score: Option<&MoveScore>) {
    if let Some(move_score) = move_score {
        excluded.insert(move_score.name().to_string());
    }
}

pub fn exclude_moves(excluded: &mut HashSet<String>, moves: &[&MoveScore]) {
    for move_score in moves {
        excluded.insert(move_score.name().to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dexkit_data::{MoveRecord, NamedResource};
    use pretty_assertions::assert_eq;

    fn scored(
        name: &str,
        class: DamageClass,
        power: u32,
        score: f64,
        is_stab: bool,
        tags: &[MoveRoleTag],
    ) -> MoveScore {
        MoveScore {
            move_data: MoveRecord {
                name: name.to_string(),
                power: Some(power).filter(|p| *p > 0),
                damage_class: Some(NamedResource::new(class.as_str())),
                ..Default::default()
            },
            score,
            tags: tags.to_vec(),
            is_damaging: class != DamageClass::Status && power > 0,
            is_stab,
            power,
            coverage_targets: Vec::new(),
            english_effect: String::new(),
        }
    }

    fn pool() -> Vec<MoveScore> {
        use DamageClass::*;
        use MoveRoleTag as T;
        vec![
            scored("close-combat", Physical, 120, 145.0, true, &[T::Stab]),
            scored("aura-sphere", Special, 80, 105.0, true, &[T::Stab]),
            scored("mach-punch", Physical, 40, 90.0, true, &[T::Stab, T::Priority]),
            scored("drain-punch", Physical, 75, 165.0, true, &[T::Stab, T::Drain, T::Recovery]),
            scored("ice-punch", Physical, 75, 100.0, false, &[T::Coverage]),
            scored("thunder-punch", Physical, 75, 85.0, false, &[]),
            scored("bullet-punch", Physical, 40, 65.0, false, &[T::Priority]),
            scored("swords-dance", Status, 0, 60.0, false, &[T::Setup]),
            scored("bulk-up", Status, 0, 45.0, false, &[T::Setup]),
            scored("u-turn", Physical, 70, 95.0, false, &[T::Utility]),
            scored("will-o-wisp", Status, 0, 30.0, false, &[T::Status, T::Utility]),
        ]
    }

    fn names(picked: &[&MoveScore]) -> Vec<String> {
        picked.iter().map(|m| m.name().to_string()).collect()
    }

    #[test]
    fn test_pick_by_tag() {
        let moves = pool();
        let picked = pick_by_tag(&moves, MoveRoleTag::Setup, SelectionOptions::new());
        assert_eq!(names(&picked), vec!["swords-dance"]);

        let picked = pick_by_tag(&moves, MoveRoleTag::Setup, SelectionOptions::new().count(5));
        assert_eq!(names(&picked), vec!["swords-dance", "bulk-up"]);

        assert!(pick_by_tag(&moves, MoveRoleTag::Hazard, SelectionOptions::new()).is_empty());
    }

    #[test]
    fn test_pick_strong_stab() {
        let moves = pool();
        let picked = pick_strong_stab(&moves, OffensiveBias::Mixed, SelectionOptions::new());
        assert_eq!(names(&picked), vec!["drain-punch", "close-combat"]);

        let picked = pick_strong_stab(&moves, OffensiveBias::Special, SelectionOptions::new());
        assert_eq!(names(&picked), vec!["aura-sphere"]);

        let picked = pick_strong_stab(
            &moves,
            OffensiveBias::Physical,
            SelectionOptions::new().count(4).min_power(40),
        );
        assert_eq!(names(&picked), vec!["drain-punch", "close-combat", "mach-punch"]);
    }

    #[test]
    fn test_pick_coverage_moves() {
        let moves = pool();
        let picked = pick_coverage_moves(&moves, SelectionOptions::new().count(3));
        assert_eq!(names(&picked), vec!["ice-punch", "u-turn", "thunder-punch"]);

        let picked = pick_coverage_moves(&moves, SelectionOptions::new().min_power(100));
        assert_eq!(names(&picked), vec!["ice-punch"]);
    }

    #[test]
    fn test_single_pickers() {
        let moves = pool();
        let options = SelectionOptions::new();
        assert_eq!(pick_recovery_move(&moves, options).unwrap().name(), "drain-punch");
        assert_eq!(pick_status_move(&moves, options).unwrap().name(), "will-o-wisp");
        assert_eq!(pick_utility_move(&moves, options).unwrap().name(), "u-turn");
        assert_eq!(pick_setup_move(&moves, options).unwrap().name(), "swords-dance");
        assert_eq!(pick_priority_move(&moves, options).unwrap().name(), "mach-punch");
        assert_eq!(pick_best_damaging_move(&moves, options).unwrap().name(), "drain-punch");
    }

    #[test]
    fn test_exclusions() {
        let moves = pool();
        let mut excluded = HashSet::new();

        let best = pick_best_damaging_move(&moves, SelectionOptions::new().excluding(&excluded));
        exclude_move(&mut excluded, best);
        let stabs = pick_strong_stab(
            &moves,
            OffensiveBias::Mixed,
            SelectionOptions::new().excluding(&excluded),
        );
        assert_eq!(names(&stabs), vec!["close-combat", "aura-sphere"]);
        exclude_moves(&mut excluded, &stabs);

        assert_eq!(excluded.len(), 3);
        assert!(excluded.contains("drain-punch"));
        assert_eq!(
            pick_best_damaging_move(&moves, SelectionOptions::new().excluding(&excluded))
                .unwrap()
                .name(),
            "ice-punch"
        );

        exclude_move(&mut excluded, None);
        assert_eq!(excluded.len(), 3);
    }

    #[test]
    fn test_ties_keep_pool_order() {
        let moves = vec![
            scored("spikes", DamageClass::Status, 0, 50.0, false, &[MoveRoleTag::Hazard]),
            scored("stealth-rock", DamageClass::Status, 0, 50.0, false, &[MoveRoleTag::Hazard]),
        ];
        let picked = pick_by_tag(&moves, MoveRoleTag::Hazard, SelectionOptions::new().count(2));
        assert_eq!(names(&picked), vec!["spikes", "stealth-rock"]);
    }

    #[test]
    fn test_empty_pool() {
        let moves: Vec<MoveScore> = Vec::new();
        assert!(pick_coverage_moves(&moves, SelectionOptions::new()).is_empty());
        assert!(pick_best_damaging_move(&moves, SelectionOptions::new()).is_none());
    }
}
