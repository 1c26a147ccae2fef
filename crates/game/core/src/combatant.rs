//! Combatant identity and mutable stats.
//!
//! A [`Combatant`] is one participant in the arena: a stable id, a display
//! name, a class, and the two mutable stats every formula operates on. It has
//! no behavior beyond applying stat deltas; all rules live in
//! [`crate::resolve`] and [`crate::engine`].

use std::fmt;

/// Stable handle for one roster slot, assigned in setup order.
///
/// Ids are unique by construction. Display names are free-form and may
/// collide; keeping them unique is the setup collaborator's concern.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantId(pub u32);

impl fmt::Display for CombatantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "combatant#{}", self.0)
    }
}

/// Closed set of character classes.
///
/// Extending the game with a new class means adding a variant here plus a
/// catalog entry in [`crate::catalog`]; the engine itself never changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClassKind {
    Druid,
    Warrior,
    Mage,
}

impl ClassKind {
    /// Starting life for a freshly created combatant of this class.
    pub const fn default_life(self) -> f64 {
        20.0
    }

    /// Starting attack for a freshly created combatant of this class.
    pub const fn default_attack(self) -> f64 {
        match self {
            ClassKind::Druid => 5.0,
            ClassKind::Warrior | ClassKind::Mage => 10.0,
        }
    }
}

/// The two stats resolvers may modify.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StatField {
    Life,
    Attack,
}

/// One participant in the battle.
///
/// Stats are `f64`: the Mage's Cast Spell deals fractional damage, so
/// integer stats cannot reproduce the reference formulas. Floored damage
/// truncates toward zero (`f64::trunc`), matching integer display
/// expectations. Life may go negative transiently; the engine's elimination
/// sweep removes the combatant before it can act again.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Combatant {
    pub id: CombatantId,
    pub name: String,
    pub class_kind: ClassKind,
    pub life: f64,
    pub attack: f64,
}

impl Combatant {
    /// Creates a combatant with its class default stats.
    pub fn new(id: CombatantId, name: impl Into<String>, class_kind: ClassKind) -> Self {
        Self {
            id,
            name: name.into(),
            class_kind,
            life: class_kind.default_life(),
            attack: class_kind.default_attack(),
        }
    }

    /// Overrides the class default stats.
    ///
    /// Callers must not construct a combatant with non-positive life; inputs
    /// are assumed validated upstream.
    pub fn with_stats(mut self, life: f64, attack: f64) -> Self {
        debug_assert!(life > 0.0, "combatant constructed with non-positive life");
        self.life = life;
        self.attack = attack;
        self
    }

    /// Adds `delta` (possibly negative) to the named stat. No clamping.
    pub fn apply_delta(&mut self, field: StatField, delta: f64) {
        match field {
            StatField::Life => self.life += delta,
            StatField::Attack => self.attack += delta,
        }
    }

    /// True once life has reached zero or below; elimination is permanent.
    pub fn is_defeated(&self) -> bool {
        self.life <= 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_defaults_match_reference_stats() {
        let druid = Combatant::new(CombatantId(0), "Malfurion", ClassKind::Druid);
        assert_eq!((druid.life, druid.attack), (20.0, 5.0));

        let warrior = Combatant::new(CombatantId(1), "Garrosh", ClassKind::Warrior);
        assert_eq!((warrior.life, warrior.attack), (20.0, 10.0));

        let mage = Combatant::new(CombatantId(2), "Jaina", ClassKind::Mage);
        assert_eq!((mage.life, mage.attack), (20.0, 10.0));
    }

    #[test]
    fn apply_delta_is_unclamped() {
        let mut combatant = Combatant::new(CombatantId(0), "Test", ClassKind::Warrior);
        combatant.apply_delta(StatField::Life, -25.0);
        assert_eq!(combatant.life, -5.0);
        assert!(combatant.is_defeated());

        combatant.apply_delta(StatField::Attack, -13.0);
        assert_eq!(combatant.attack, -3.0);
    }

    #[test]
    fn stat_overrides_replace_defaults() {
        let combatant =
            Combatant::new(CombatantId(0), "Test", ClassKind::Mage).with_stats(35.0, 1.0);
        assert_eq!((combatant.life, combatant.attack), (35.0, 1.0));
    }
}
