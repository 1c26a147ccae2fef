//! Deterministic battle-arena rules shared across clients.
//!
//! `arena-core` defines the canonical combat rules (combatants, the action
//! catalog, resolvers, and the turn engine) and exposes pure APIs with no
//! I/O. All state mutation flows through [`engine::TurnEngine`]; the runtime
//! and clients depend on the types re-exported here.
pub mod catalog;
pub mod combatant;
pub mod engine;
pub mod event;
pub mod resolve;
pub mod roster;

pub use catalog::{ActionCatalog, ActionId, ActionSpec, CatalogError, TargetKind};
pub use combatant::{ClassKind, Combatant, CombatantId, StatField};
pub use engine::{
    EngineError, SelectionError, TargetRequest, TurnEngine, TurnPhase, TurnReport,
};
pub use event::{BattleEvent, CombatantRef};
pub use resolve::{Resolution, ResolveError, Role, StatDelta};
pub use roster::Roster;
