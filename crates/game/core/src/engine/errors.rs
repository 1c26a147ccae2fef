//! Error types for the turn engine.

use crate::catalog::{ActionId, CatalogError};
use crate::combatant::CombatantId;
use crate::resolve::ResolveError;

use super::TurnPhase;

/// A selection the current combatant is not allowed to make.
///
/// Always recoverable: the caller re-prompts through the same interface and
/// no state changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("action {action} is not available to {actor}")]
    ActionNotAvailable {
        actor: CombatantId,
        action: ActionId,
    },

    #[error("{target} is not a valid target for {actor}")]
    TargetNotAvailable {
        actor: CombatantId,
        target: CombatantId,
    },
}

/// Errors surfaced while driving a turn through the engine.
///
/// Everything except [`EngineError::InvalidSelection`] is fatal: catalog and
/// resolver failures mean broken configuration, phase and invariant failures
/// mean a caller or engine bug.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("invalid selection: {0}")]
    InvalidSelection(SelectionError),

    #[error("operation not allowed in phase {phase:?} (expected {expected:?})")]
    Phase {
        phase: TurnPhase,
        expected: TurnPhase,
    },

    #[error("roster invariant violated: {detail}")]
    InvariantViolation { detail: &'static str },
}

impl EngineError {
    /// True for errors recovered by re-prompting; everything else must
    /// terminate the game with a diagnostic.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, EngineError::InvalidSelection(_))
    }
}
