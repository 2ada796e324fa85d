//! Static move tables used by the scorer

use phf::{phf_map, phf_set};

use crate::tag::MoveRoleTag;

/// Bonus for stat-boosting moves
pub static SETUP_BONUS: phf::Map<&'static str, u32> = phf_map! {
    "swords-dance" => 60,
    "dragon-dance" => 60,
    "nasty-plot" => 60,
    "calm-mind" => 45,
    "bulk-up" => 45,
    "quiver-dance" => 65,
    "shell-smash" => 70,
    "shift-gear" => 55,
    "coil" => 50,
    "iron-defense" => 35,
    "amnesia" => 35,
    "agility" => 40,
    "rock-polish" => 40,
    "autotomize" => 40,
    "growth" => 35,
    "work-up" => 30,
    "hone-claws" => 35,
};

/// A utility move's bonus and the tag it primarily carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtilityEntry {
    pub score: u32,
    pub role_tag: MoveRoleTag,
}

const fn utility(score: u32, role_tag: MoveRoleTag) -> UtilityEntry {
    UtilityEntry { score, role_tag }
}

pub static UTILITY_MOVES: phf::Map<&'static str, UtilityEntry> = phf_map! {
    "stealth-rock" => utility(70, MoveRoleTag::Hazard),
    "spikes" => utility(50, MoveRoleTag::Hazard),
    "toxic-spikes" => utility(45, MoveRoleTag::Hazard),
    "sticky-web" => utility(55, MoveRoleTag::Hazard),
    "defog" => utility(40, MoveRoleTag::Removal),
    "rapid-spin" => utility(40, MoveRoleTag::Removal),
    "court-change" => utility(35, MoveRoleTag::Removal),
    "taunt" => utility(30, MoveRoleTag::Taunt),
    "encore" => utility(35, MoveRoleTag::Taunt),
    "will-o-wisp" => utility(30, MoveRoleTag::Status),
    "toxic" => utility(30, MoveRoleTag::Status),
    "thunder-wave" => utility(25, MoveRoleTag::Status),
    "glare" => utility(28, MoveRoleTag::Status),
    "spore" => utility(50, MoveRoleTag::Status),
    "sleep-powder" => utility(35, MoveRoleTag::Status),
    "light-screen" => utility(35, MoveRoleTag::Screen),
    "reflect" => utility(35, MoveRoleTag::Screen),
    "aurora-veil" => utility(50, MoveRoleTag::Screen),
    "u-turn" => utility(25, MoveRoleTag::Utility),
    "volt-switch" => utility(25, MoveRoleTag::Utility),
    "flip-turn" => utility(25, MoveRoleTag::Utility),
    "parting-shot" => utility(30, MoveRoleTag::Utility),
    "teleport" => utility(20, MoveRoleTag::Utility),
    "trick" => utility(25, MoveRoleTag::Utility),
    "switcheroo" => utility(25, MoveRoleTag::Utility),
    "knock-off" => utility(35, MoveRoleTag::Utility),
};

/// Moves that restore HP reliably (including the strong draining attacks)
pub static RELIABLE_RECOVERY_MOVES: phf::Set<&'static str> = phf_set! {
    "recover",
    "roost",
    "soft-boiled",
    "slack-off",
    "milk-drink",
    "wish",
    "synthesis",
    "moonlight",
    "morning-sun",
    "shore-up",
    "strength-sap",
    "heal-order",
    "oblivion-wing",
    "purify",
    "pollen-puff",
    "rest",
    "giga-drain",
    "drain-punch",
    "leech-life",
    "horn-leech",
    "draining-kiss",
    "parabolic-charge",
};
