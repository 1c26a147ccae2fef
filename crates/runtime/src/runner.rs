//! The blocking game loop and its builder.

use std::fmt;

use arena_core::{
    BattleEvent, Combatant, CombatantId, CombatantRef, Roster, TargetRequest, TurnEngine,
    TurnPhase,
};

use crate::api::{
    EventSink, IntentProvider, NullSink, Result, RuntimeError, TargetView, TurnView,
};

/// Drives one battle from the first turn to the winner announcement.
///
/// Strictly sequential: exactly one combatant acts at a time and the loop
/// blocks while the provider decides. Invalid selections are re-prompted and
/// never escape; fatal engine errors do.
pub struct GameRunner {
    engine: TurnEngine,
    provider: Box<dyn IntentProvider>,
    sink: Box<dyn EventSink>,
}

impl GameRunner {
    /// Create a new runner builder.
    pub fn builder() -> GameRunnerBuilder {
        GameRunnerBuilder::new()
    }

    pub fn roster(&self) -> &Roster {
        self.engine.roster()
    }

    pub fn phase(&self) -> TurnPhase {
        self.engine.phase()
    }

    /// The sole survivor once the game has terminated.
    pub fn winner(&self) -> Option<&Combatant> {
        self.engine.winner()
    }

    /// Runs one full turn: query the action (until valid), query the target
    /// when the action needs one (until valid), resolve, report.
    ///
    /// Returns the winner's id when this turn ended the game.
    pub fn step(&mut self) -> Result<Option<CombatantId>> {
        if self.engine.phase() == TurnPhase::Terminated {
            return Err(RuntimeError::Terminated);
        }

        let actor = CombatantRef::of(self.engine.current());
        tracing::debug!(actor = %actor.id, name = %actor.name, "turn started");
        self.sink.notify(&BattleEvent::TurnStarted { actor });

        let request = loop {
            let actions = self.engine.available_actions()?;
            let choice = self.provider.choose_action(&TurnView {
                actor: self.engine.current(),
                actions,
                roster: self.engine.roster(),
            });
            match self.engine.choose_action(choice) {
                Ok(request) => break request,
                Err(err) if err.is_recoverable() => {
                    tracing::debug!(%err, "re-prompting action choice");
                }
                Err(err) => return Err(err.into()),
            }
        };

        if let TargetRequest::Opponents(candidate_ids) = request {
            loop {
                let candidates: Vec<&Combatant> = candidate_ids
                    .iter()
                    .filter_map(|id| self.engine.roster().get(*id))
                    .collect();
                let choice = self.provider.choose_target(&TargetView {
                    actor: self.engine.current(),
                    candidates,
                });
                match self.engine.choose_target(choice) {
                    Ok(()) => break,
                    Err(err) if err.is_recoverable() => {
                        tracing::debug!(%err, "re-prompting target choice");
                    }
                    Err(err) => return Err(err.into()),
                }
            }
        }

        let report = self.engine.resolve_turn()?;
        for event in &report.events {
            self.sink.notify(event);
        }
        for combatant in &report.eliminated {
            tracing::info!(id = %combatant.id, name = %combatant.name, "combatant eliminated");
        }
        if let Some(winner) = report.winner {
            tracing::info!(id = %winner, "game over");
        }
        Ok(report.winner)
    }

    /// Runs turns until a single combatant remains; returns the winner's id.
    pub fn run(&mut self) -> Result<CombatantId> {
        loop {
            if let Some(winner) = self.step()? {
                return Ok(winner);
            }
        }
    }
}

// The provider and sink are opaque trait objects; only the engine state is
// worth printing.
impl fmt::Debug for GameRunner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GameRunner")
            .field("engine", &self.engine)
            .finish_non_exhaustive()
    }
}

/// Builder for [`GameRunner`] with flexible configuration.
pub struct GameRunnerBuilder {
    roster: Option<Roster>,
    provider: Option<Box<dyn IntentProvider>>,
    sink: Option<Box<dyn EventSink>>,
}

impl GameRunnerBuilder {
    fn new() -> Self {
        Self {
            roster: None,
            provider: None,
            sink: None,
        }
    }

    /// Provide the initial roster (required).
    pub fn roster(mut self, roster: Roster) -> Self {
        self.roster = Some(roster);
        self
    }

    /// Set the intent provider (required).
    pub fn provider(mut self, provider: impl IntentProvider + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }

    /// Set the event sink (optional; defaults to [`NullSink`]).
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the runner.
    pub fn build(self) -> Result<GameRunner> {
        let roster = self.roster.ok_or(RuntimeError::MissingRoster)?;
        let provider = self.provider.ok_or(RuntimeError::MissingProvider)?;
        let sink = self.sink.unwrap_or_else(|| Box::new(NullSink));
        let engine = TurnEngine::new(roster)?;
        Ok(GameRunner {
            engine,
            provider,
            sink,
        })
    }
}
