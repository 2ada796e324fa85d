//! Engine adapter boundary
//!
//! [`BattleEngine`] is the seam a turn-resolution engine plugs into. This
//! crate provides the values that cross it and the helpers that build them;
//! it does not resolve turns itself.

mod state;

use dexkit_data::{CreatureRecord, MoveRecord};

use crate::damage::DamageResult;
use crate::types::{BoostStat, Terrain, Weather};

pub use state::{
    BattlePokemon, BattleState, BattleStats, DEFAULT_LEVEL, MAX_MOVES, Side, SideState,
    apply_boost, clamp_boost, create_battle_pokemon, create_initial_battle_state,
};

/// A choice made by one side for a turn
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleAction {
    Move { side: Side, move_index: usize },
    Switch { side: Side, switch_index: usize },
    Item { side: Side, item_id: String },
}

impl BattleAction {
    /// Side taking the action
    pub fn side(&self) -> Side {
        match self {
            BattleAction::Move { side, .. }
            | BattleAction::Switch { side, .. }
            | BattleAction::Item { side, .. } => *side,
        }
    }
}

/// What happened, as reported by an engine
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEventKind {
    Damage { amount: u32 },
    Heal { amount: u32 },
    Status { status: String },
    Boost { stat: BoostStat, stages: i8 },
    Weather { weather: Option<Weather> },
    Terrain { terrain: Option<Terrain> },
    Switch { switch_index: usize },
    Faint,
}

#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleEvent {
    pub target: Side,
    pub kind: BattleEventKind,
}

impl BattleEvent {
    pub fn new(target: Side, kind: BattleEventKind) -> Self {
        Self { target, kind }
    }
}

/// New state plus the events produced by one action
#[derive(Debug, Clone, PartialEq)]
pub struct ActionOutcome {
    pub state: BattleState,
    pub events: Vec<BattleEvent>,
}

/// Whether (and how) a battle has ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameOutcome {
    #[default]
    Ongoing,
    Winner(Side),
    Draw,
}

impl GameOutcome {
    pub fn is_over(&self) -> bool {
        !matches!(self, GameOutcome::Ongoing)
    }

    pub fn winner(&self) -> Option<Side> {
        match self {
            GameOutcome::Winner(side) => Some(*side),
            _ => None,
        }
    }
}

/// A battle engine behind a uniform interface
pub trait BattleEngine {
    type Error: std::error::Error;

    /// Build the opening state for two teams
    fn initialize(
        &mut self,
        team1: &[CreatureRecord],
        team2: &[CreatureRecord],
    ) -> Result<BattleState, Self::Error>;

    /// Resolve one action against `state`
    fn execute_action(
        &mut self,
        state: &BattleState,
        action: &BattleAction,
    ) -> Result<ActionOutcome, Self::Error>;

    fn calculate_damage(
        &self,
        attacker: &BattlePokemon,
        defender: &BattlePokemon,
        move_data: &MoveRecord,
        state: &BattleState,
    ) -> DamageResult;

    /// Actions `side` may legally choose
    fn valid_actions(&self, state: &BattleState, side: Side) -> Vec<BattleAction>;

    fn outcome(&self, state: &BattleState) -> GameOutcome;
}

#[cfg(test)]
mod tests {
    use std::convert::Infallible;

    use super::*;
    use dexkit_data::{NamedResource, StatEntry};

    /// Every move deals a flat 60 damage to the opposing active battler
    struct FlatDamageEngine;

    impl BattleEngine for FlatDamageEngine {
        type Error = Infallible;

        fn initialize(
            &mut self,
            team1: &[CreatureRecord],
            team2: &[CreatureRecord],
        ) -> Result<BattleState, Infallible> {
            let build = |team: &[CreatureRecord]| -> Vec<BattlePokemon> {
                team.iter()
                    .map(|creature| create_battle_pokemon(creature, DEFAULT_LEVEL))
                    .collect()
            };
            Ok(create_initial_battle_state(build(team1), build(team2)))
        }

        fn execute_action(
            &mut self,
            state: &BattleState,
            action: &BattleAction,
        ) -> Result<ActionOutcome, Infallible> {
            let mut next = state.clone();
            let mut events = Vec::new();
            match action {
                BattleAction::Move { side, .. } => {
                    let target = side.opponent();
                    if let Some(defender) = next.side_mut(target).active_pokemon_mut() {
                        let amount = defender.take_damage(60);
                        events.push(BattleEvent::new(target, BattleEventKind::Damage { amount }));
                        if !defender.is_alive() {
                            events.push(BattleEvent::new(target, BattleEventKind::Faint));
                        }
                    }
                }
                BattleAction::Switch { side, switch_index } => {
                    next.side_mut(*side).active = Some(*switch_index);
                    events.push(BattleEvent::new(
                        *side,
                        BattleEventKind::Switch {
                            switch_index: *switch_index,
                        },
                    ));
                }
                BattleAction::Item { .. } => {}
            }
            next.turn += 1;
            Ok(ActionOutcome {
                state: next,
                events,
            })
        }

        fn calculate_damage(
            &self,
            _attacker: &BattlePokemon,
            _defender: &BattlePokemon,
            _move_data: &MoveRecord,
            _state: &BattleState,
        ) -> DamageResult {
            DamageResult {
                min: 60,
                max: 60,
                average: 60,
                is_critical: false,
                effectiveness: 1.0,
                is_stab: false,
            }
        }

        fn valid_actions(&self, state: &BattleState, side: Side) -> Vec<BattleAction> {
            let own = state.side(side);
            let mut actions: Vec<BattleAction> = own
                .active_pokemon()
                .filter(|active| active.is_alive())
                .map(|active| {
                    (0..active.moves.len())
                        .map(|move_index| BattleAction::Move { side, move_index })
                        .collect()
                })
                .unwrap_or_default();
            actions.extend(own.bench().map(|(switch_index, _)| BattleAction::Switch {
                side,
                switch_index,
            }));
            actions
        }

        fn outcome(&self, state: &BattleState) -> GameOutcome {
            match (state.player1.alive_count(), state.player2.alive_count()) {
                (0, 0) => GameOutcome::Draw,
                (0, _) => GameOutcome::Winner(Side::Player2),
                (_, 0) => GameOutcome::Winner(Side::Player1),
                _ => GameOutcome::Ongoing,
            }
        }
    }

    fn creature(name: &str, hp: u32) -> CreatureRecord {
        CreatureRecord {
            name: name.to_string(),
            stats: vec![StatEntry {
                base_stat: hp,
                effort: 0,
                stat: NamedResource::new("hp"),
            }],
            moves: vec![dexkit_data::MoveEntry {
                move_ref: NamedResource::new("tackle"),
                version_group_details: Vec::new(),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_action_side() {
        let action = BattleAction::Item {
            side: Side::Player2,
            item_id: "potion".to_string(),
        };
        assert_eq!(action.side(), Side::Player2);
        assert_eq!(Side::Player2.opponent(), Side::Player1);
    }

    #[test]
    fn test_engine_round_trip_to_knockout() {
        let mut engine = FlatDamageEngine;
        // base 1 HP at 50: floor(33 * 50 / 100) + 60 = 76 HP
        let state = engine
            .initialize(&[creature("pichu", 1)], &[creature("magikarp", 1), creature("feebas", 1)])
            .unwrap();
        assert_eq!(state.player2.active_pokemon().unwrap().current_hp, 76);

        let actions = engine.valid_actions(&state, Side::Player2);
        assert_eq!(
            actions,
            vec![
                BattleAction::Move {
                    side: Side::Player2,
                    move_index: 0
                },
                BattleAction::Switch {
                    side: Side::Player2,
                    switch_index: 1
                },
            ]
        );

        let first = engine.execute_action(&state, &actions[0]).unwrap();
        assert_eq!(
            first.events,
            vec![BattleEvent::new(
                Side::Player1,
                BattleEventKind::Damage { amount: 60 }
            )]
        );
        assert_eq!(engine.outcome(&first.state), GameOutcome::Ongoing);

        let second = engine.execute_action(&first.state, &actions[0]).unwrap();
        assert_eq!(second.events.len(), 2);
        assert_eq!(second.events[1].kind, BattleEventKind::Faint);
        assert_eq!(second.state.turn, 2);

        let outcome = engine.outcome(&second.state);
        assert!(outcome.is_over());
        assert_eq!(outcome.winner(), Some(Side::Player2));
        assert!(engine.valid_actions(&second.state, Side::Player1).is_empty());
    }
}
