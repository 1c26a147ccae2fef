//! Read-only snapshots handed to intent providers.

use arena_core::{ActionSpec, Combatant, Roster};

/// What a provider sees when asked for an action choice.
pub struct TurnView<'a> {
    /// The combatant whose turn it is.
    pub actor: &'a Combatant,
    /// The actor's moves, in menu order.
    pub actions: &'static [ActionSpec],
    /// The full live roster, for displaying enemies and their stats.
    pub roster: &'a Roster,
}

/// What a provider sees when asked for a target choice.
///
/// Only constructed for opponent-targeted actions; self-targeted actions
/// never reach the target query.
pub struct TargetView<'a> {
    pub actor: &'a Combatant,
    /// Valid targets: live combatants excluding the actor, roster order.
    pub candidates: Vec<&'a Combatant>,
}
