//! Human-readable justification for a recommended move

use crate::scorer::MoveScore;
use crate::tag::MoveRoleTag;

/// Characters of effect text used when nothing else describes the move
const EFFECT_PREVIEW_CHARS: usize = 60;

/// Coverage targets named in a reason
const MAX_LISTED_TARGETS: usize = 3;

/// Build the `". "`-joined reason for a move filling `role_tag`
pub fn build_reason(move_score: &MoveScore, role_tag: MoveRoleTag) -> String {
    let mut parts: Vec<String> = Vec::new();
    let has = |tag| move_score.has_tag(tag);

    if move_score.is_damaging {
        let accuracy = match move_score.move_data.accuracy() {
            Some(acc) => format!("{acc}%"),
            None => "variable".to_string(),
        };
        parts.push(format!("BP {} ({accuracy} acc)", move_score.power));
    }

    if has(MoveRoleTag::Setup) {
        parts.push("Immediate setup".to_string());
    }
    if has(MoveRoleTag::Priority) {
        parts.push("Priority move".to_string());
    }
    if has(MoveRoleTag::Stab) {
        parts.push("STAB bonus".to_string());
    }

    if !move_score.coverage_targets.is_empty() {
        let targets: Vec<&str> = move_score
            .coverage_targets
            .iter()
            .take(MAX_LISTED_TARGETS)
            .map(|t| t.id())
            .collect();
        parts.push(format!("Covers: {}", targets.join(", ")));
    }

    if has(MoveRoleTag::Recovery) {
        parts.push("Reliable recovery".to_string());
    } else if has(MoveRoleTag::Drain) {
        parts.push("HP drain".to_string());
    }

    if has(MoveRoleTag::Hazard) {
        parts.push("Entry hazard".to_string());
    }
    if has(MoveRoleTag::Removal) {
        parts.push("Hazard removal".to_string());
    }
    if has(MoveRoleTag::Taunt) {
        parts.push("Blocks setup".to_string());
    }
    if has(MoveRoleTag::Status) {
        parts.push("Status condition".to_string());
    }

    if parts.is_empty() && !move_score.english_effect.is_empty() {
        parts.push(
            move_score
                .english_effect
                .chars()
                .take(EFFECT_PREVIEW_CHARS)
                .collect(),
        );
    }

    parts.push(format!("Role: {role_tag}"));
    parts.join(". ")
}
