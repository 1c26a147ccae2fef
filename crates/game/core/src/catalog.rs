//! Per-class action catalog.
//!
//! Each class maps to an ordered list of [`ActionSpec`]s: an action id, a
//! display label, and how the action selects its target. The catalog is
//! process-wide static configuration, registered once at startup and
//! read-only during play. Class behavior is data here, not dispatch: the
//! engine looks actions up by `(ClassKind, ActionId)` and never branches on
//! the class itself.

use std::collections::HashMap;
use std::sync::OnceLock;

use crate::combatant::ClassKind;

/// Every move known to the arena, across all classes.
///
/// Ids are unique within a class's catalog; the same id (e.g.
/// [`ActionId::BasicAttack`]) may appear in several catalogs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionId {
    BasicAttack,
    Meditate,
    AnimalHelp,
    Fight,
    Brawl,
    Train,
    Roar,
    Curse,
    Summon,
    CastSpell,
}

/// How an action selects its target.
///
/// An explicit, inspectable config value: the engine reads it to decide
/// whether a target must be requested, replacing any runtime arity
/// inspection of the resolver.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetKind {
    /// The acting combatant is its own target.
    SelfTarget,
    /// A target must be chosen from the roster, excluding the actor.
    Opponent,
}

/// One entry in a class's catalog.
///
/// Static configuration, not game state, so it stays outside the `serde`
/// feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ActionSpec {
    pub id: ActionId,
    pub display_name: &'static str,
    pub target_kind: TargetKind,
}

impl ActionSpec {
    pub const fn new(id: ActionId, display_name: &'static str, target_kind: TargetKind) -> Self {
        Self {
            id,
            display_name,
            target_kind,
        }
    }

    /// True if resolving this action needs an opponent target.
    pub fn requires_target(&self) -> bool {
        self.target_kind == TargetKind::Opponent
    }
}

/// Lookup failures; both indicate a broken catalog, not user error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("no action catalog registered for class {class}")]
    UnknownClass { class: ClassKind },

    #[error("action {action} is not registered for class {class}")]
    UnknownAction { class: ClassKind, action: ActionId },
}

/// Registry mapping each class to its ordered move list.
#[derive(Clone, Debug, Default)]
pub struct ActionCatalog {
    classes: HashMap<ClassKind, Vec<ActionSpec>>,
}

impl ActionCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or replaces) the catalog entry for a class.
    pub fn register(&mut self, class: ClassKind, actions: Vec<ActionSpec>) {
        debug_assert!(
            actions
                .iter()
                .any(|spec| spec.target_kind == TargetKind::Opponent),
            "every class needs at least one opponent-targeted action so games can terminate"
        );
        self.classes.insert(class, actions);
    }

    /// Ordered moves for a class, in menu order.
    pub fn actions_for(&self, class: ClassKind) -> Result<&[ActionSpec], CatalogError> {
        self.classes
            .get(&class)
            .map(Vec::as_slice)
            .ok_or(CatalogError::UnknownClass { class })
    }

    /// Resolves one move of a class.
    pub fn spec_for(&self, class: ClassKind, action: ActionId) -> Result<&ActionSpec, CatalogError> {
        self.actions_for(class)?
            .iter()
            .find(|spec| spec.id == action)
            .ok_or(CatalogError::UnknownAction { class, action })
    }

    /// Builds the reference catalog for the three built-in classes.
    fn builtin() -> Self {
        use ActionId::*;
        use TargetKind::{Opponent, SelfTarget};

        let mut catalog = Self::new();
        catalog.register(
            ClassKind::Druid,
            vec![
                ActionSpec::new(BasicAttack, "Basic Attack", Opponent),
                ActionSpec::new(Meditate, "Meditate", SelfTarget),
                ActionSpec::new(AnimalHelp, "Animal Help", SelfTarget),
                ActionSpec::new(Fight, "Fight", Opponent),
            ],
        );
        catalog.register(
            ClassKind::Warrior,
            vec![
                ActionSpec::new(BasicAttack, "Basic Attack", Opponent),
                ActionSpec::new(Brawl, "Brawl", Opponent),
                ActionSpec::new(Train, "Train", SelfTarget),
                ActionSpec::new(Roar, "Roar", Opponent),
            ],
        );
        catalog.register(
            ClassKind::Mage,
            vec![
                ActionSpec::new(BasicAttack, "Basic Attack", Opponent),
                ActionSpec::new(Curse, "Curse", Opponent),
                ActionSpec::new(Summon, "Summon", SelfTarget),
                ActionSpec::new(CastSpell, "Cast Spell", Opponent),
            ],
        );
        catalog
    }
}

/// Process-wide catalog, initialized on first use and read-only afterwards.
pub fn global() -> &'static ActionCatalog {
    static CATALOG: OnceLock<ActionCatalog> = OnceLock::new();
    CATALOG.get_or_init(ActionCatalog::builtin)
}
