//! Orchestration for the battle-arena turn loop.
//!
//! This crate wires the intent provider abstraction, the event sink, and the
//! core [`arena_core::TurnEngine`] into a blocking game loop. Consumers
//! implement [`IntentProvider`] (human input, scripted fixtures, anything)
//! and [`EventSink`] (rendering, logging), then drive the game through
//! [`GameRunner`].
//!
//! Modules are organized by responsibility:
//! - [`api`] exposes the traits and types downstream clients interact with
//! - [`runner`] hosts the game loop and its builder
//! - [`setup`] builds rosters from the setup collaborator
pub mod api;
pub mod runner;
pub mod setup;

pub use api::{
    EventSink, IntentProvider, NullSink, Result, RuntimeError, TargetView, TurnView,
};
pub use runner::{GameRunner, GameRunnerBuilder};
pub use setup::roster_from_setup;
