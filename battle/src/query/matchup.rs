//! Type matchup queries over API type names
//!
//! Payloads carry types as lowercase strings; these helpers accept any
//! `AsRef<str>` slice and degrade unknown names to neutral.

use std::collections::BTreeMap;

use crate::types::Type;

/// One attacking type and its multiplier against a defender
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMatchup {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub attacker: Type,
    pub multiplier: f32,
}

/// Defensive profile of a type combination
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeMatchups {
    /// Multiplier > 1, strongest first
    pub weaknesses: Vec<TypeMatchup>,
    /// 0 < multiplier < 1, strongest resistance first
    pub resistances: Vec<TypeMatchup>,
    /// Multiplier == 0, chart order
    pub immunities: Vec<TypeMatchup>,
}

/// A type hit super-effectively by at least one attacking type
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OffensiveCoverageEntry {
    #[cfg_attr(feature = "serde", serde(rename = "type"))]
    pub target: Type,
    /// Attacking types that hit `target` for 2x, in input order
    pub sources: Vec<Type>,
    pub multiplier: f32,
}

fn parse_types<S: AsRef<str>>(names: &[S]) -> Vec<Option<Type>> {
    names.iter().map(|name| Type::from_name(name.as_ref())).collect()
}

fn multiplier_against(attacker: Type, defenders: &[Option<Type>]) -> f32 {
    let mut multiplier = 1.0;
    for defender in defenders.iter().flatten() {
        let factor = attacker.effectiveness(*defender);
        if factor == 0.0 {
            return 0.0;
        }
        multiplier *= factor;
    }
    multiplier
}

/// Multiplier of an attack type against a defender's types.
///
/// Unknown attack types are neutral (1.0); unknown defender types
/// contribute 1.0. Any immunity makes the result 0.
pub fn effectiveness_multiplier<S: AsRef<str>>(attack_type: &str, defender_types: &[S]) -> f32 {
    match Type::from_name(attack_type) {
        Some(attacker) => multiplier_against(attacker, &parse_types(defender_types)),
        None => 1.0,
    }
}

/// Types the attack type hits for 2x, in chart order (empty when unknown)
pub fn coverage_targets(attack_type: &str) -> Vec<Type> {
    Type::from_name(attack_type)
        .map(|attacker| attacker.super_effective_targets())
        .unwrap_or_default()
}

fn all_multipliers<S: AsRef<str>>(defender_types: &[S]) -> Vec<TypeMatchup> {
    let defenders = parse_types(defender_types);
    Type::all()
        .iter()
        .map(|attacker| TypeMatchup {
            attacker: *attacker,
            multiplier: multiplier_against(*attacker, &defenders),
        })
        .collect()
}

/// Attacking types that hit the defender for more than 1x, in chart order
pub fn type_weaknesses<S: AsRef<str>>(defender_types: &[S]) -> Vec<Type> {
    all_multipliers(defender_types)
        .into_iter()
        .filter(|matchup| matchup.multiplier > 1.0)
        .map(|matchup| matchup.attacker)
        .collect()
}

/// Split every attacking type into weaknesses, resistances and immunities
pub fn type_matchups<S: AsRef<str>>(defender_types: &[S]) -> TypeMatchups {
    let entries = all_multipliers(defender_types);

    let mut weaknesses: Vec<TypeMatchup> = entries
        .iter()
        .filter(|m| m.multiplier > 1.0)
        .copied()
        .collect();
    weaknesses.sort_by(|a, b| b.multiplier.total_cmp(&a.multiplier));

    let mut resistances: Vec<TypeMatchup> = entries
        .iter()
        .filter(|m| m.multiplier > 0.0 && m.multiplier < 1.0)
        .copied()
        .collect();
    resistances.sort_by(|a, b| a.multiplier.total_cmp(&b.multiplier));

    let immunities = entries
        .iter()
        .filter(|m| m.multiplier == 0.0)
        .copied()
        .collect();

    TypeMatchups {
        weaknesses,
        resistances,
        immunities,
    }
}

/// Types covered super-effectively by an attacker's own types.
///
/// Sorted by number of sources (descending), then by type id.
pub fn offensive_coverage<S: AsRef<str>>(attacker_types: &[S]) -> Vec<OffensiveCoverageEntry> {
    let mut coverage: BTreeMap<&'static str, OffensiveCoverageEntry> = BTreeMap::new();

    for attacker in attacker_types
        .iter()
        .filter_map(|name| Type::from_name(name.as_ref()))
    {
        for target in attacker.super_effective_targets() {
            let entry = coverage
                .entry(target.id())
                .or_insert_with(|| OffensiveCoverageEntry {
                    target,
                    sources: Vec::new(),
                    multiplier: 2.0,
                });
            if !entry.sources.contains(&attacker) {
                entry.sources.push(attacker);
            }
        }
    }

    // BTreeMap iteration is already id-ascending; the stable sort keeps it
    let mut entries: Vec<OffensiveCoverageEntry> = coverage.into_values().collect();
    entries.sort_by(|a, b| b.sources.len().cmp(&a.sources.len()));
    entries
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effectiveness_multiplier() {
        assert_eq!(effectiveness_multiplier("fire", &["grass"]), 2.0);
        assert_eq!(effectiveness_multiplier("Fire", &["Grass", "Steel"]), 4.0);
        assert_eq!(effectiveness_multiplier("water", &["water", "dragon"]), 0.25);
        assert_eq!(effectiveness_multiplier("electric", &["water", "ground"]), 0.0);
        assert_eq!(effectiveness_multiplier("normal", &["ghost"]), 0.0);
    }

    #[test]
    fn test_effectiveness_multiplier_unknown_types_are_neutral() {
        assert_eq!(effectiveness_multiplier("shadow", &["grass"]), 1.0);
        assert_eq!(effectiveness_multiplier("fire", &["stellar"]), 1.0);
        assert_eq!(effectiveness_multiplier("fire", &["stellar", "grass"]), 2.0);
        let none: [&str; 0] = [];
        assert_eq!(effectiveness_multiplier("fire", &none), 1.0);
    }

    #[test]
    fn test_coverage_targets() {
        assert_eq!(
            coverage_targets("water"),
            vec![Type::Fire, Type::Ground, Type::Rock]
        );
        assert_eq!(coverage_targets("DRAGON"), vec![Type::Dragon]);
        assert!(coverage_targets("normal").is_empty());
        assert!(coverage_targets("???").is_empty());
    }

    #[test]
    fn test_type_weaknesses() {
        // Steel type is weak to Fire, Fighting, Ground
        assert_eq!(
            type_weaknesses(&["steel"]),
            vec![Type::Fire, Type::Fighting, Type::Ground]
        );
        // Water/Ground (Swampert) is only weak to Grass (4x)
        assert_eq!(type_weaknesses(&["water", "ground"]), vec![Type::Grass]);
    }

    #[test]
    fn test_type_matchups_sorted() {
        // Grass/Steel: 4x fire, 2x fighting
        let matchups = type_matchups(&["grass", "steel"]);
        let weak: Vec<(Type, f32)> = matchups
            .weaknesses
            .iter()
            .map(|m| (m.attacker, m.multiplier))
            .collect();
        assert_eq!(weak, vec![(Type::Fire, 4.0), (Type::Fighting, 2.0)]);

        assert_eq!(matchups.resistances[0].multiplier, 0.25);
        assert!(
            matchups
                .resistances
                .windows(2)
                .all(|pair| pair[0].multiplier <= pair[1].multiplier)
        );

        assert_eq!(matchups.immunities.len(), 1);
        assert_eq!(matchups.immunities[0].attacker, Type::Poison);
    }

    #[test]
    fn test_type_matchups_immunities_in_chart_order() {
        let matchups = type_matchups(&["ghost", "normal"]);
        let immune: Vec<Type> = matchups.immunities.iter().map(|m| m.attacker).collect();
        assert_eq!(immune, vec![Type::Normal, Type::Fighting, Type::Ghost]);
    }

    #[test]
    fn test_offensive_coverage() {
        let coverage = offensive_coverage(&["water", "ground"]);
        // fire and rock are hit by both types
        assert_eq!(coverage[0].target, Type::Fire);
        assert_eq!(coverage[0].sources, vec![Type::Water, Type::Ground]);
        assert_eq!(coverage[1].target, Type::Rock);
        assert_eq!(coverage[1].sources.len(), 2);

        let rest: Vec<&str> = coverage[2..].iter().map(|e| e.target.id()).collect();
        assert_eq!(rest, vec!["electric", "ground", "poison", "steel"]);
        assert!(coverage.iter().all(|e| e.multiplier == 2.0));
    }

    #[test]
    fn test_offensive_coverage_skips_unknown_and_duplicates() {
        let coverage = offensive_coverage(&["dragon", "dragon", "mystery"]);
        assert_eq!(coverage.len(), 1);
        assert_eq!(coverage[0].sources, vec![Type::Dragon]);
        let none: [&str; 0] = [];
        assert!(offensive_coverage(&none).is_empty());
    }
}
