//! Drives a match between two participants.

use crate::config::GameConfig;
use crate::players::{AiPlayer, Participant};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use strictly_dots::{
    Match, MatchError, Move, MoveReport, MoveSelector, Outcome, Player, PlayerId, PlayerRole,
};
use tracing::{debug, info, instrument, warn};

/// Consecutive rejections tolerated from one participant before giving up.
const MAX_REJECTIONS: usize = 32;

/// Something that happened while a match was being played.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The match is about to start.
    Started,
    /// A seat is being asked for a move.
    TurnStarted(PlayerId),
    /// The engine accepted a move.
    MoveApplied(MoveReport),
    /// The engine refused a move; the same seat is asked again.
    MoveRejected {
        /// Seat that chose the move.
        player: PlayerId,
        /// The refused move.
        mv: Move,
        /// Why it was refused.
        error: MatchError,
    },
    /// A participant gave up.
    Abandoned(PlayerId),
    /// Every line has been drawn.
    Finished(Outcome),
}

/// Result of one orchestrated match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchReport {
    /// Final outcome; `None` if a participant quit.
    pub outcome: Option<Outcome>,
    /// Boxes won by player 1 and player 2.
    pub scores: [u32; 2],
    /// Accepted moves.
    pub moves: usize,
    /// Seat that quit, if any.
    pub abandoned_by: Option<PlayerId>,
}

/// Owns a [`Match`] and the two participants playing it.
pub struct Orchestrator {
    game: Match,
    participants: [Box<dyn Participant>; 2],
}

impl Orchestrator {
    /// Seats `one` and `two` at `game`.
    pub fn new(game: Match, one: Box<dyn Participant>, two: Box<dyn Participant>) -> Self {
        Self {
            game,
            participants: [one, two],
        }
    }

    /// Builds a match and its participants from configuration.
    ///
    /// Human seats are created by `human`; AI seats use the configured
    /// strategy, seed and delay. With a seed, the second AI seat is seeded
    /// one higher so the two seats do not mirror each other.
    #[instrument(skip_all, fields(mode = %config.mode(), grid = config.grid_size()))]
    pub fn from_config(
        config: &GameConfig,
        mut human: impl FnMut(&Player) -> Box<dyn Participant>,
    ) -> Result<Self> {
        config.validate()?;
        let roles = config.mode().roles();
        let names = [config.player_one_name(), config.player_two_name()];

        let mut seat = |id: PlayerId| -> (Player, Box<dyn Participant>) {
            let role = roles[id.index()];
            let player = match names[id.index()] {
                Some(name) => Player::new(id, name.clone(), role),
                None => Player::default_for(id, role),
            };
            let participant: Box<dyn Participant> = match role {
                PlayerRole::Human => human(&player),
                PlayerRole::Ai => {
                    let selector = match config.seed() {
                        Some(seed) => MoveSelector::seeded(
                            *config.strategy(),
                            seed.wrapping_add(id.index() as u64),
                        ),
                        None => MoveSelector::new(*config.strategy()),
                    };
                    Box::new(AiPlayer::new(
                        player.name(),
                        selector,
                        Duration::from_millis(*config.think_delay_ms()),
                    ))
                }
            };
            (player, participant)
        };

        let (player_one, one) = seat(PlayerId::One);
        let (player_two, two) = seat(PlayerId::Two);
        let game = Match::with_players(*config.grid_size(), [player_one, player_two])?;
        Ok(Self::new(game, one, two))
    }

    /// Returns the match.
    pub fn game(&self) -> &Match {
        &self.game
    }

    /// Clears the board for a rematch with the same participants.
    pub fn restart(&mut self) {
        self.game.restart();
    }

    /// Plays until the board is full or a participant quits.
    ///
    /// `observer` sees every event together with the match state right after
    /// it.
    #[instrument(skip_all, fields(grid = %self.game.board().grid_size()))]
    pub fn run(&mut self, mut observer: impl FnMut(&Match, &GameEvent)) -> Result<MatchReport> {
        info!("Running match");
        observer(&self.game, &GameEvent::Started);

        let mut rejections = 0;
        while let Some(active) = self.game.active_player() {
            observer(&self.game, &GameEvent::TurnStarted(active));
            let participant = &mut self.participants[active.index()];

            let Some(mv) = participant.choose_move(&self.game)? else {
                info!(player = %active, "Participant quit");
                observer(&self.game, &GameEvent::Abandoned(active));
                return Ok(self.report(Some(active)));
            };

            match self.game.submit_move(mv) {
                Ok(report) => {
                    rejections = 0;
                    debug!(%mv, completed = report.completed.len(), "Move applied");
                    observer(&self.game, &GameEvent::MoveApplied(report));
                }
                Err(error @ MatchError::RejectedMove(_)) => {
                    rejections += 1;
                    warn!(player = %active, %mv, "Move rejected");
                    participant.move_rejected(mv, &error.to_string());
                    observer(
                        &self.game,
                        &GameEvent::MoveRejected {
                            player: active,
                            mv,
                            error,
                        },
                    );
                    if rejections >= MAX_REJECTIONS {
                        anyhow::bail!(
                            "{} had {} moves rejected in a row",
                            participant.name(),
                            rejections
                        );
                    }
                }
                Err(other) => return Err(other.into()),
            }
        }

        self.game.verify_scores()?;
        if let Some(outcome) = self.game.outcome() {
            observer(&self.game, &GameEvent::Finished(outcome));
        }
        Ok(self.report(None))
    }

    fn report(&self, abandoned_by: Option<PlayerId>) -> MatchReport {
        MatchReport {
            outcome: self.game.outcome(),
            scores: [
                self.game.score(PlayerId::One),
                self.game.score(PlayerId::Two),
            ],
            moves: self.game.history().len(),
            abandoned_by,
        }
    }
}
