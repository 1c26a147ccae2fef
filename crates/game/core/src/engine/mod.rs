//! Turn scheduling and action execution.
//!
//! [`TurnEngine`] is the authoritative owner of battle state: the roster,
//! the current turn index, and the action pending this turn. One turn walks
//! the phases
//!
//! `AwaitingAction → AwaitingTarget → Resolving → (elimination, advance)`
//!
//! looping back to `AwaitingAction`, or ending in `Terminated` once a single
//! combatant remains. Self-targeted actions skip `AwaitingTarget` entirely.
//! Invalid selections never mutate state; callers re-prompt and try again.

mod errors;

pub use errors::{EngineError, SelectionError};

use crate::catalog::{self, ActionId, ActionSpec, TargetKind};
use crate::combatant::{Combatant, CombatantId};
use crate::event::{BattleEvent, CombatantRef};
use crate::resolve::{self, Role};
use crate::roster::Roster;

/// Where the engine is inside the current turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnPhase {
    /// Waiting for the current combatant's action choice.
    AwaitingAction,
    /// Waiting for an opponent target for the chosen action.
    AwaitingTarget,
    /// Action and target fixed; ready to resolve.
    Resolving,
    /// Game over; the roster holds exactly the winner.
    Terminated,
}

/// What [`TurnEngine::choose_action`] needs next.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TargetRequest {
    /// Self-targeted action; no target query required.
    SelfTarget,
    /// Caller must pick one of these live opponents.
    Opponents(Vec<CombatantId>),
}

/// Everything that happened while resolving one turn.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnReport {
    /// Resolver and elimination events, in occurrence order.
    pub events: Vec<BattleEvent>,
    /// Combatants removed by this turn's elimination sweep.
    pub eliminated: Vec<Combatant>,
    /// Set when this turn ended the game.
    pub winner: Option<CombatantId>,
}

/// State machine driving one battle from setup to a single winner.
#[derive(Debug)]
pub struct TurnEngine {
    roster: Roster,
    current_index: usize,
    pending_action: Option<ActionId>,
    pending_target: Option<CombatantId>,
    phase: TurnPhase,
}

impl TurnEngine {
    /// Creates an engine over a freshly set-up roster.
    ///
    /// Rejects rosters with fewer than two combatants; a game that cannot be
    /// played is an invariant violation, not a playable state.
    pub fn new(roster: Roster) -> Result<Self, EngineError> {
        if roster.len() < 2 {
            return Err(EngineError::InvariantViolation {
                detail: "a battle needs at least two combatants",
            });
        }
        Ok(Self {
            roster,
            current_index: 0,
            pending_action: None,
            pending_target: None,
            phase: TurnPhase::AwaitingAction,
        })
    }

    pub fn phase(&self) -> TurnPhase {
        self.phase
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The combatant whose turn it is; the winner once the game has
    /// terminated.
    ///
    /// # Panics
    ///
    /// Never panics while the engine's roster invariant holds; the current
    /// index always points into the live roster.
    pub fn current(&self) -> &Combatant {
        self.roster
            .by_index(self.current_index)
            .expect("current index always points into the live roster")
    }

    /// The sole survivor once the game has terminated.
    pub fn winner(&self) -> Option<&Combatant> {
        if self.phase == TurnPhase::Terminated {
            self.roster.iter().next()
        } else {
            None
        }
    }

    /// Ordered move list for the current combatant's class.
    pub fn available_actions(&self) -> Result<&'static [ActionSpec], EngineError> {
        Ok(catalog::global().actions_for(self.current().class_kind)?)
    }

    /// Stores the current combatant's action choice.
    ///
    /// Returns what the caller must supply next: nothing for self-targeted
    /// actions, or a pick from the returned opponents. An action outside the
    /// class's catalog is an [`EngineError::InvalidSelection`] and leaves
    /// all state untouched.
    pub fn choose_action(&mut self, action: ActionId) -> Result<TargetRequest, EngineError> {
        self.expect_phase(TurnPhase::AwaitingAction)?;

        let actor = self.current();
        let actor_id = actor.id;
        let spec = self
            .available_actions()?
            .iter()
            .find(|spec| spec.id == action)
            .copied()
            .ok_or(EngineError::InvalidSelection(
                SelectionError::ActionNotAvailable {
                    actor: actor_id,
                    action,
                },
            ))?;

        self.pending_action = Some(action);
        match spec.target_kind {
            TargetKind::SelfTarget => {
                self.pending_target = Some(actor_id);
                self.phase = TurnPhase::Resolving;
                Ok(TargetRequest::SelfTarget)
            }
            TargetKind::Opponent => {
                self.phase = TurnPhase::AwaitingTarget;
                let candidates = self.roster.opponents_of(actor_id).map(|c| c.id).collect();
                Ok(TargetRequest::Opponents(candidates))
            }
        }
    }

    /// Stores the target choice for an opponent-targeted action.
    ///
    /// The target must be a live combatant other than the actor; anything
    /// else is a recoverable [`EngineError::InvalidSelection`].
    pub fn choose_target(&mut self, target: CombatantId) -> Result<(), EngineError> {
        self.expect_phase(TurnPhase::AwaitingTarget)?;

        let actor_id = self.current().id;
        if target == actor_id || self.roster.get(target).is_none() {
            return Err(EngineError::InvalidSelection(
                SelectionError::TargetNotAvailable {
                    actor: actor_id,
                    target,
                },
            ));
        }

        self.pending_target = Some(target);
        self.phase = TurnPhase::Resolving;
        Ok(())
    }

    /// Resolves the pending action, applies its deltas, removes defeated
    /// combatants, and advances the turn (or terminates the game).
    pub fn resolve_turn(&mut self) -> Result<TurnReport, EngineError> {
        self.expect_phase(TurnPhase::Resolving)?;

        let action = self.pending_action.ok_or(EngineError::InvariantViolation {
            detail: "resolving phase without a pending action",
        })?;
        let target_id = self.pending_target.ok_or(EngineError::InvariantViolation {
            detail: "resolving phase without a pending target",
        })?;

        let actor = self.current();
        let actor_id = actor.id;
        // Catalog lookup here can only fail if the catalog changed after the
        // action was validated: fatal, not a user error.
        catalog::global().spec_for(actor.class_kind, action)?;

        let target = self
            .roster
            .get(target_id)
            .ok_or(EngineError::InvariantViolation {
                detail: "pending target left the roster before resolution",
            })?;

        let resolution = resolve::resolve(action, actor, target)?;

        for delta in &resolution.deltas {
            let subject = match delta.subject {
                Role::Actor => actor_id,
                Role::Target => target_id,
            };
            self.roster
                .get_mut(subject)
                .ok_or(EngineError::InvariantViolation {
                    detail: "stat delta addressed a missing combatant",
                })?
                .apply_delta(delta.field, delta.delta);
        }

        let mut events = resolution.events;
        let eliminated = self.roster.remove_defeated();
        for combatant in &eliminated {
            events.push(BattleEvent::Eliminated {
                combatant: CombatantRef::of(combatant),
            });
        }

        self.pending_action = None;
        self.pending_target = None;

        if self.roster.is_empty() {
            return Err(EngineError::InvariantViolation {
                detail: "elimination sweep emptied the roster",
            });
        }

        let winner = if self.roster.len() == 1 {
            self.phase = TurnPhase::Terminated;
            // The sweep may have removed combatants ahead of the survivor,
            // so the old index can point past the end of the roster.
            self.current_index = 0;
            let survivor = self.roster.iter().next().ok_or(
                EngineError::InvariantViolation {
                    detail: "terminated with no survivor",
                },
            )?;
            events.push(BattleEvent::Winner {
                combatant: CombatantRef::of(survivor),
            });
            Some(survivor.id)
        } else {
            // Advance from the actor's post-removal position so removals
            // earlier in the roster cannot skip anyone's turn.
            self.current_index = match self.roster.position(actor_id) {
                Some(position) => (position + 1) % self.roster.len(),
                None => self.current_index % self.roster.len(),
            };
            self.phase = TurnPhase::AwaitingAction;
            None
        };

        Ok(TurnReport {
            events,
            eliminated,
            winner,
        })
    }

    fn expect_phase(&self, expected: TurnPhase) -> Result<(), EngineError> {
        if self.phase == expected {
            Ok(())
        } else {
            Err(EngineError::Phase {
                phase: self.phase,
                expected,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combatant::ClassKind;

    fn engine_of(combatants: Vec<Combatant>) -> TurnEngine {
        TurnEngine::new(Roster::new(combatants)).unwrap()
    }

    fn warrior(id: u32, name: &str) -> Combatant {
        Combatant::new(CombatantId(id), name, ClassKind::Warrior)
    }

    fn mage(id: u32, name: &str) -> Combatant {
        Combatant::new(CombatantId(id), name, ClassKind::Mage)
    }

    /// Plays one full self-targeted turn for the current combatant.
    fn play_self_action(engine: &mut TurnEngine, action: ActionId) -> TurnReport {
        assert_eq!(engine.choose_action(action).unwrap(), TargetRequest::SelfTarget);
        engine.resolve_turn().unwrap()
    }

    /// Plays one full opponent-targeted turn for the current combatant.
    fn play_attack(engine: &mut TurnEngine, action: ActionId, target: CombatantId) -> TurnReport {
        match engine.choose_action(action).unwrap() {
            TargetRequest::Opponents(candidates) => assert!(candidates.contains(&target)),
            TargetRequest::SelfTarget => panic!("expected an opponent-targeted action"),
        }
        engine.choose_target(target).unwrap();
        engine.resolve_turn().unwrap()
    }

    #[test]
    fn rejects_rosters_smaller_than_two() {
        let err = TurnEngine::new(Roster::new(vec![warrior(0, "Solo")])).unwrap_err();
        assert!(matches!(err, EngineError::InvariantViolation { .. }));
    }

    #[test]
    fn turn_order_wraps_around_without_eliminations() {
        let mut engine = engine_of(vec![
            warrior(0, "A"),
            warrior(1, "B"),
            warrior(2, "C"),
        ]);

        let mut order = Vec::new();
        for _ in 0..7 {
            order.push(engine.current().id.0);
            play_self_action(&mut engine, ActionId::Train);
        }
        assert_eq!(order, vec![0, 1, 2, 0, 1, 2, 0]);
    }

    #[test]
    fn self_actions_skip_the_target_phase() {
        let mut engine = engine_of(vec![warrior(0, "A"), warrior(1, "B")]);
        let request = engine.choose_action(ActionId::Train).unwrap();
        assert_eq!(request, TargetRequest::SelfTarget);
        assert_eq!(engine.phase(), TurnPhase::Resolving);
    }

    #[test]
    fn invalid_action_leaves_state_untouched() {
        let mut engine = engine_of(vec![warrior(0, "A"), mage(1, "B")]);
        let before: Vec<Combatant> = engine.roster().iter().cloned().collect();

        let err = engine.choose_action(ActionId::CastSpell).unwrap_err();
        assert!(matches!(
            err,
            EngineError::InvalidSelection(SelectionError::ActionNotAvailable { .. })
        ));
        assert!(err.is_recoverable());
        assert_eq!(engine.phase(), TurnPhase::AwaitingAction);
        let after: Vec<Combatant> = engine.roster().iter().cloned().collect();
        assert_eq!(before, after);
    }

    #[test]
    fn self_and_dead_targets_are_rejected() {
        let mut engine = engine_of(vec![warrior(0, "A"), warrior(1, "B")]);
        engine.choose_action(ActionId::BasicAttack).unwrap();

        let err = engine.choose_target(CombatantId(0)).unwrap_err();
        assert!(err.is_recoverable());
        let err = engine.choose_target(CombatantId(9)).unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(engine.phase(), TurnPhase::AwaitingTarget);

        engine.choose_target(CombatantId(1)).unwrap();
        assert_eq!(engine.phase(), TurnPhase::Resolving);
    }

    #[test]
    fn two_basic_attacks_end_a_two_player_game() {
        // Warrior attack 10 vs Mage life 20: dead after exactly two hits.
        let mut engine = engine_of(vec![warrior(0, "Conan"), mage(1, "Tim")]);

        let report = play_attack(&mut engine, ActionId::BasicAttack, CombatantId(1));
        assert!(report.winner.is_none());
        assert_eq!(engine.roster().get(CombatantId(1)).unwrap().life, 10.0);

        play_self_action(&mut engine, ActionId::Summon);

        let report = play_attack(&mut engine, ActionId::BasicAttack, CombatantId(1));
        assert_eq!(report.winner, Some(CombatantId(0)));
        assert_eq!(report.eliminated.len(), 1);
        assert_eq!(report.eliminated[0].id, CombatantId(1));
        assert_eq!(engine.phase(), TurnPhase::Terminated);
        assert_eq!(engine.winner().unwrap().id, CombatantId(0));
    }

    #[test]
    fn eliminated_combatants_never_act_again() {
        let mut engine = engine_of(vec![
            warrior(0, "A"),
            mage(1, "B").with_stats(5.0, 10.0),
            warrior(2, "C"),
        ]);

        // A kills B outright; next to act must be C, and B is gone for good.
        let report = play_attack(&mut engine, ActionId::BasicAttack, CombatantId(1));
        assert_eq!(report.eliminated[0].id, CombatantId(1));
        assert!(engine.roster().get(CombatantId(1)).is_none());
        assert_eq!(engine.current().id, CombatantId(2));

        // Turn order keeps wrapping over the survivors only.
        play_self_action(&mut engine, ActionId::Train);
        assert_eq!(engine.current().id, CombatantId(0));
    }

    #[test]
    fn removal_before_the_actor_does_not_skip_turns() {
        // B (index 1) kills A (index 0). Post-removal roster is [B, C]; the
        // next actor must be C, not B again.
        let mut engine = engine_of(vec![
            warrior(0, "A").with_stats(5.0, 10.0),
            warrior(1, "B"),
            warrior(2, "C"),
        ]);

        play_self_action(&mut engine, ActionId::Train); // A
        assert_eq!(engine.current().id, CombatantId(1));
        play_attack(&mut engine, ActionId::BasicAttack, CombatantId(0)); // B kills A
        assert_eq!(engine.current().id, CombatantId(2));
    }

    #[test]
    fn exactly_one_combatant_survives_a_full_game() {
        let mut engine = engine_of(vec![warrior(0, "A"), warrior(1, "B"), mage(2, "C")]);

        // Everyone hammers the lowest-id opponent until the game ends.
        let mut guard = 0;
        while engine.phase() != TurnPhase::Terminated {
            let actor = engine.current().id;
            let target = engine
                .roster()
                .opponents_of(actor)
                .map(|c| c.id)
                .min()
                .unwrap();
            play_attack(&mut engine, ActionId::BasicAttack, target);
            guard += 1;
            assert!(guard < 100, "game failed to terminate");
        }
        assert_eq!(engine.roster().len(), 1);
        assert!(engine.winner().is_some());
    }

    #[test]
    fn current_points_at_the_winner_after_termination() {
        // The winner acted from the last roster slot, so the pre-sweep index
        // would dangle once the opener is removed.
        let mut engine = engine_of(vec![
            warrior(0, "A").with_stats(5.0, 10.0),
            warrior(1, "B"),
        ]);

        play_self_action(&mut engine, ActionId::Train); // A
        let report = play_attack(&mut engine, ActionId::BasicAttack, CombatantId(0)); // B kills A

        assert_eq!(report.winner, Some(CombatantId(1)));
        assert_eq!(engine.phase(), TurnPhase::Terminated);
        assert_eq!(engine.current().id, CombatantId(1));
        assert_eq!(engine.winner().unwrap().id, CombatantId(1));
    }

    #[test]
    fn phase_misuse_is_a_fatal_error() {
        let mut engine = engine_of(vec![warrior(0, "A"), warrior(1, "B")]);
        let err = engine.resolve_turn().unwrap_err();
        assert!(matches!(err, EngineError::Phase { .. }));
        assert!(!err.is_recoverable());

        let err = engine.choose_target(CombatantId(1)).unwrap_err();
        assert!(matches!(err, EngineError::Phase { .. }));
    }

    #[test]
    fn roar_weakens_subsequent_attacks() {
        let mut engine = engine_of(vec![warrior(0, "A"), warrior(1, "B")]);

        play_attack(&mut engine, ActionId::Roar, CombatantId(1)); // B attack 10 -> 7
        play_attack(&mut engine, ActionId::BasicAttack, CombatantId(0)); // hits for 7
        assert_eq!(engine.roster().get(CombatantId(0)).unwrap().life, 13.0);
    }

    #[test]
    fn cast_spell_chips_fractional_life() {
        let mut engine = engine_of(vec![mage(0, "A"), warrior(1, "B")]);
        play_attack(&mut engine, ActionId::CastSpell, CombatantId(1));
        assert_eq!(engine.roster().get(CombatantId(1)).unwrap().life, 19.5);
    }
}
