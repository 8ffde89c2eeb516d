//! Computer player backed by a [`MoveSelector`].

use super::Participant;
use anyhow::Result;
use std::time::Duration;
use strictly_dots::{Match, Move, MoveSelector, Strategy};
use tracing::{debug, instrument};

/// AI seat that pauses for a configurable "thinking" delay and then asks its
/// selector for a move.
pub struct AiPlayer {
    name: String,
    selector: MoveSelector,
    think_delay: Duration,
}

impl AiPlayer {
    /// Creates an AI player with its own selector.
    pub fn new(name: impl Into<String>, selector: MoveSelector, think_delay: Duration) -> Self {
        Self {
            name: name.into(),
            selector,
            think_delay,
        }
    }

    /// Creates an AI player with no delay, seeded or from entropy.
    pub fn instant(name: impl Into<String>, strategy: Strategy, seed: Option<u64>) -> Self {
        let selector = match seed {
            Some(seed) => MoveSelector::seeded(strategy, seed),
            None => MoveSelector::new(strategy),
        };
        Self::new(name, selector, Duration::ZERO)
    }

    /// Returns the strategy in use.
    pub fn strategy(&self) -> Strategy {
        self.selector.strategy()
    }
}

impl Participant for AiPlayer {
    #[instrument(skip(self, game), fields(ai = %self.name, strategy = %self.selector.strategy()))]
    fn choose_move(&mut self, game: &Match) -> Result<Option<Move>> {
        if !self.think_delay.is_zero() {
            std::thread::sleep(self.think_delay);
        }
        let mv = self.selector.select(game.board())?;
        debug!(%mv, "AI chose move");
        Ok(Some(mv))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
