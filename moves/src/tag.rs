//! Semantic move tags

use serde::{Deserialize, Serialize};

/// What a move contributes to a set
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoveRoleTag {
    Stab,
    Coverage,
    Priority,
    Setup,
    Recovery,
    Drain,
    Hazard,
    Removal,
    Taunt,
    Status,
    Screen,
    Utility,
}

impl MoveRoleTag {
    /// Precedence used when a move must be described by a single tag
    pub const PRECEDENCE: [MoveRoleTag; 10] = [
        MoveRoleTag::Setup,
        MoveRoleTag::Recovery,
        MoveRoleTag::Hazard,
        MoveRoleTag::Removal,
        MoveRoleTag::Taunt,
        MoveRoleTag::Status,
        MoveRoleTag::Screen,
        MoveRoleTag::Coverage,
        MoveRoleTag::Priority,
        MoveRoleTag::Stab,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MoveRoleTag::Stab => "stab",
            MoveRoleTag::Coverage => "coverage",
            MoveRoleTag::Priority => "priority",
            MoveRoleTag::Setup => "setup",
            MoveRoleTag::Recovery => "recovery",
            MoveRoleTag::Drain => "drain",
            MoveRoleTag::Hazard => "hazard",
            MoveRoleTag::Removal => "removal",
            MoveRoleTag::Taunt => "taunt",
            MoveRoleTag::Status => "status",
            MoveRoleTag::Screen => "screen",
            MoveRoleTag::Utility => "utility",
        }
    }
}

impl std::fmt::Display for MoveRoleTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
