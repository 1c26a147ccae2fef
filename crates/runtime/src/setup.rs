//! Roster construction from the setup collaborator.

use arena_core::{ClassKind, Combatant, CombatantId, Roster};

use crate::api::{Result, RuntimeError};

/// Minimum roster size for a playable game.
pub const MIN_COMBATANTS: usize = 2;

/// Builds a roster by asking the setup collaborator for each slot.
///
/// `setup` is called once per slot with the slot index and returns the
/// chosen `(name, class)`. Ids are assigned from the slot order, so they are
/// unique even when names collide; keeping names distinct is the
/// collaborator's concern.
pub fn roster_from_setup(
    count: usize,
    mut setup: impl FnMut(usize) -> (String, ClassKind),
) -> Result<Roster> {
    if count < MIN_COMBATANTS {
        return Err(RuntimeError::NotEnoughCombatants {
            min: MIN_COMBATANTS,
            got: count,
        });
    }

    let mut roster = Roster::default();
    for slot in 0..count {
        let (name, class) = setup(slot);
        tracing::debug!(slot, %name, %class, "combatant joined the arena");
        roster.push(Combatant::new(CombatantId(slot as u32), name, class));
    }
    Ok(roster)
}
