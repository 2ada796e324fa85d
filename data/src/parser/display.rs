//! Display formatting for creature payloads

use serde::{Deserialize, Serialize};

use crate::records::{CreatureRecord, Stat};

/// A stat row as shown on a detail page
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatDisplay {
    pub label: String,
    pub value: u32,
    /// Share of the 255 stat ceiling, capped at 100
    pub percentage: f64,
}

/// The ability highlighted on a detail page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeaturedAbility {
    pub name: String,
    pub slug: String,
    pub is_hidden: bool,
    pub description: Option<String>,
}

/// A notable learnable move
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignatureMove {
    pub name: String,
    pub level: Option<u32>,
    pub method: Option<String>,
    pub version_group: Option<String>,
}

/// Lowercased lookup key for an id or name
pub fn normalize_identifier(identifier: impl std::fmt::Display) -> String {
    identifier.to_string().to_lowercase()
}

/// Capitalize the first character (`pikachu` -> `Pikachu`)
pub fn format_pokemon_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Zero-padded dex number (`#025`)
pub fn format_pokemon_id(id: u32) -> String {
    format!("#{id:03}")
}

/// Title-case a hyphenated move name (`swords-dance` -> `Swords Dance`)
pub fn format_move_label(name: &str) -> String {
    name.split('-')
        .map(format_pokemon_name)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn map_stats(pokemon: &CreatureRecord) -> Vec<StatDisplay> {
    pokemon
        .stats
        .iter()
        .map(|entry| {
            let label = Stat::from_api_name(&entry.stat.name)
                .map(|stat| stat.label().to_string())
                .unwrap_or_else(|| entry.stat.name.to_uppercase());
            let value = entry.base_stat;
            let percentage = (value as f64 / 255.0 * 100.0).min(100.0);
            StatDisplay {
                label,
                value,
                percentage,
            }
        })
        .collect()
}

/// First non-hidden ability, else the first listed one
pub fn select_featured_ability(pokemon: &CreatureRecord) -> Option<FeaturedAbility> {
    let preferred = pokemon
        .abilities
        .iter()
        .find(|slot| !slot.is_hidden)
        .or_else(|| pokemon.abilities.first())?;

    let slug = &preferred.ability.name;
    if slug.is_empty() {
        return None;
    }

    Some(FeaturedAbility {
        name: format_pokemon_name(&slug.replacen('-', " ", 1)),
        slug: slug.clone(),
        is_hidden: preferred.is_hidden,
        description: None,
    })
}

/// Up to four moves, highest learn level first
pub fn select_signature_moves(data: &CreatureRecord) -> Vec<SignatureMove> {
    let mut moves: Vec<SignatureMove> = data
        .moves
        .iter()
        .map(|entry| {
            let name = format_move_label(&entry.move_ref.name);
            let detail = entry
                .version_group_details
                .iter()
                .find(|detail| detail.move_learn_method.name == "level-up")
                .or_else(|| entry.version_group_details.first());

            match detail {
                Some(detail) => SignatureMove {
                    name,
                    level: Some(detail.level_learned_at).filter(|&level| level > 0),
                    method: Some(detail.move_learn_method.name.clone()),
                    version_group: Some(detail.version_group.name.clone()),
                },
                None => SignatureMove {
                    name,
                    level: None,
                    method: None,
                    version_group: None,
                },
            }
        })
        .collect();

    moves.sort_by(|a, b| b.level.unwrap_or(0).cmp(&a.level.unwrap_or(0)));
    moves.truncate(4);
    moves
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::{AbilitySlot, MoveEntry, MoveVersionDetail, NamedResource, StatEntry};

    fn learned(name: &str, method: &str, level: u32) -> MoveEntry {
        MoveEntry {
            move_ref: NamedResource::new(name),
            version_group_details: vec![MoveVersionDetail {
                level_learned_at: level,
                move_learn_method: NamedResource::new(method),
                version_group: NamedResource::new("scarlet-violet"),
            }],
        }
    }

    #[test]
    fn test_format_helpers() {
        assert_eq!(format_pokemon_name("pikachu"), "Pikachu");
        assert_eq!(format_pokemon_name(""), "");
        assert_eq!(format_pokemon_id(25), "#025");
        assert_eq!(format_pokemon_id(1025), "#1025");
        assert_eq!(format_move_label("swords-dance"), "Swords Dance");
        assert_eq!(format_move_label("u-turn"), "U Turn");
        assert_eq!(normalize_identifier("Pikachu"), "pikachu");
        assert_eq!(normalize_identifier(25), "25");
    }

    #[test]
    fn test_map_stats_labels_and_percentages() {
        let creature = CreatureRecord {
            stats: vec![
                StatEntry {
                    base_stat: 255,
                    effort: 2,
                    stat: NamedResource::new("hp"),
                },
                StatEntry {
                    base_stat: 51,
                    effort: 0,
                    stat: NamedResource::new("special-attack"),
                },
                StatEntry {
                    base_stat: 10,
                    effort: 0,
                    stat: NamedResource::new("accuracy"),
                },
            ],
            ..Default::default()
        };

        let stats = map_stats(&creature);
        assert_eq!(stats[0].label, "HP");
        assert_eq!(stats[0].percentage, 100.0);
        assert_eq!(stats[1].label, "SP. ATK");
        assert!((stats[1].percentage - 20.0).abs() < 1e-9);
        assert_eq!(stats[2].label, "ACCURACY");
    }

    #[test]
    fn test_featured_ability_prefers_visible() {
        let creature = CreatureRecord {
            abilities: vec![
                AbilitySlot {
                    is_hidden: true,
                    slot: 3,
                    ability: NamedResource::new("lightning-rod"),
                },
                AbilitySlot {
                    is_hidden: false,
                    slot: 1,
                    ability: NamedResource::new("static"),
                },
            ],
            ..Default::default()
        };

        let featured = select_featured_ability(&creature).unwrap();
        assert_eq!(featured.slug, "static");
        assert_eq!(featured.name, "Static");
        assert!(!featured.is_hidden);
    }

    #[test]
    fn test_featured_ability_replaces_first_hyphen_only() {
        let creature = CreatureRecord {
            abilities: vec![AbilitySlot {
                is_hidden: true,
                slot: 3,
                ability: NamedResource::new("as-one-glastrier"),
            }],
            ..Default::default()
        };

        let featured = select_featured_ability(&creature).unwrap();
        assert_eq!(featured.name, "As one-glastrier");
        assert!(featured.is_hidden);
        assert_eq!(select_featured_ability(&CreatureRecord::default()), None);
    }

    #[test]
    fn test_signature_moves_sorted_by_level() {
        let creature = CreatureRecord {
            moves: vec![
                learned("thunderbolt", "machine", 0),
                learned("thunder", "level-up", 50),
                learned("quick-attack", "level-up", 5),
                learned("spark", "level-up", 20),
                learned("nuzzle", "level-up", 1),
            ],
            ..Default::default()
        };

        let moves = select_signature_moves(&creature);
        let names: Vec<&str> = moves.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["Thunder", "Spark", "Quick Attack", "Nuzzle"]);
        assert_eq!(moves[0].level, Some(50));
        assert_eq!(moves[0].method.as_deref(), Some("level-up"));
    }
}
