//! Ordered collection of live combatants.
//!
//! Roster order is turn order: the engine walks it round-robin with
//! wrap-around. Defeated combatants are removed permanently; there is no
//! revival.

use crate::combatant::{Combatant, CombatantId};

/// The currently-live combatants, in turn order.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Roster {
    combatants: Vec<Combatant>,
}

impl Roster {
    pub fn new(combatants: Vec<Combatant>) -> Self {
        Self { combatants }
    }

    pub fn push(&mut self, combatant: Combatant) {
        self.combatants.push(combatant);
    }

    pub fn len(&self) -> usize {
        self.combatants.len()
    }

    pub fn is_empty(&self) -> bool {
        self.combatants.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter()
    }

    /// Returns the combatant with the given id, if still live.
    pub fn get(&self, id: CombatantId) -> Option<&Combatant> {
        self.combatants.iter().find(|c| c.id == id)
    }

    pub fn get_mut(&mut self, id: CombatantId) -> Option<&mut Combatant> {
        self.combatants.iter_mut().find(|c| c.id == id)
    }

    /// Roster position of the given id, if still live.
    pub fn position(&self, id: CombatantId) -> Option<usize> {
        self.combatants.iter().position(|c| c.id == id)
    }

    pub fn by_index(&self, index: usize) -> Option<&Combatant> {
        self.combatants.get(index)
    }

    /// Live combatants excluding `actor`, in roster order.
    pub fn opponents_of(&self, actor: CombatantId) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(move |c| c.id != actor)
    }

    /// Removes every combatant with `life <= 0` in a single roster-ordered
    /// pass and returns them.
    pub fn remove_defeated(&mut self) -> Vec<Combatant> {
        let mut removed = Vec::new();
        self.combatants.retain(|combatant| {
            if combatant.is_defeated() {
                removed.push(combatant.clone());
                false
            } else {
                true
            }
        });
        removed
    }
}
