//! Reporting events emitted by resolvers and the engine.
//!
//! Events are a one-way description of what happened during a turn; nothing
//! in the core depends on how (or whether) a client renders them.

use crate::combatant::{Combatant, CombatantId};

/// Identity snapshot carried inside events.
///
/// Eliminated combatants leave the roster before clients see the event, so
/// events carry the name along with the id.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantRef {
    pub id: CombatantId,
    pub name: String,
}

impl CombatantRef {
    pub fn of(combatant: &Combatant) -> Self {
        Self {
            id: combatant.id,
            name: combatant.name.clone(),
        }
    }
}

/// Human-reportable outcome of engine activity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    /// A combatant's turn began.
    TurnStarted { actor: CombatantRef },

    /// `actor` dealt `amount` damage to `target`.
    Damage {
        actor: CombatantRef,
        target: CombatantRef,
        amount: f64,
        remaining_life: f64,
    },

    /// `actor` regained life.
    LifeRestored {
        actor: CombatantRef,
        amount: f64,
        new_life: f64,
    },

    /// `actor`'s own attack went up.
    AttackRaised {
        actor: CombatantRef,
        amount: f64,
        new_attack: f64,
    },

    /// `target`'s attack was reduced (by an opponent, or by the actor's own
    /// move when `actor == target`).
    AttackLowered {
        actor: CombatantRef,
        target: CombatantRef,
        amount: f64,
        new_attack: f64,
    },

    /// A combatant's life reached zero or below and it left the roster.
    Eliminated { combatant: CombatantRef },

    /// The last combatant standing.
    Winner { combatant: CombatantRef },
}
