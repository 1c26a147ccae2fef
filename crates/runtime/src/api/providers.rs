//! Abstractions for sourcing player intent and reporting outcomes.
//!
//! Runner users plug in [`IntentProvider`] implementations so the game can
//! run with human input, scripted fixtures, or anything else that can pick
//! a move. Providers are blocking and infallible: the game waits
//! indefinitely for a choice, and re-prompting on unparseable input is the
//! provider's own concern. Choices that parse but are not currently legal
//! are re-requested by the runner.

use arena_core::{ActionId, BattleEvent, CombatantId};

use super::view::{TargetView, TurnView};

/// Supplies the two choices every turn needs.
pub trait IntentProvider {
    /// Pick an action for the current combatant.
    ///
    /// The returned id should come from `view.actions`; if it does not, the
    /// runner calls again with the same view.
    fn choose_action(&mut self, view: &TurnView<'_>) -> ActionId;

    /// Pick a target among `view.candidates`.
    ///
    /// Only called for opponent-targeted actions.
    fn choose_target(&mut self, view: &TargetView<'_>) -> CombatantId;
}

/// One-way reporting sink for human-readable turn outcomes.
///
/// The runner never depends on what a sink does; dropping events is fine.
pub trait EventSink {
    fn notify(&mut self, event: &BattleEvent);
}

/// Sink that discards every event. Useful default and test fixture.
pub struct NullSink;

impl EventSink for NullSink {
    fn notify(&mut self, _event: &BattleEvent) {}
}
