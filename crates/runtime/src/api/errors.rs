//! Unified error type surfaced by the runtime API.
//!
//! Wraps fatal engine failures and setup mistakes so clients can bubble them
//! up with consistent context. Invalid selections never appear here; the
//! runner recovers them by re-prompting.

use arena_core::EngineError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, thiserror::Error)]
pub enum RuntimeError {
    #[error("a game requires at least {min} combatants (got {got})")]
    NotEnoughCombatants { min: usize, got: usize },

    #[error("game runner requires a roster before building")]
    MissingRoster,

    #[error("game runner requires an intent provider before building")]
    MissingProvider,

    #[error("game already terminated")]
    Terminated,

    #[error("turn engine failed")]
    Engine(#[from] EngineError),
}
