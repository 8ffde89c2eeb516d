//! The match state machine: turn order, extra turns, scoring and the end of
//! the game.

use super::contracts::{Contract, MoveContract};
use super::rules::decide_outcome;
use super::{
    Board, BoxCell, GridSize, MatchError, MatchStatus, Move, Outcome, PlayedMove, Player,
    PlayerId, PlayerRole,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// What happened when a move was accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveReport {
    /// Who drew the line.
    pub player: PlayerId,
    /// The line that was drawn.
    pub mv: Move,
    /// Boxes closed by this line, in evaluation order.
    pub completed: Vec<BoxCell>,
    /// True if the same player moves again.
    pub extra_turn: bool,
    /// Status after the move.
    pub status: MatchStatus,
}

/// A two-player Dots and Boxes match.
///
/// Player 1 always opens. A player who closes at least one box moves again;
/// otherwise the turn passes. Once every line is drawn the match moves to
/// [`MatchStatus::GameOver`] and rejects further moves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Match {
    pub(crate) board: Board,
    pub(crate) players: [Player; 2],
    pub(crate) status: MatchStatus,
    pub(crate) history: Vec<PlayedMove>,
}

impl Match {
    /// Creates a human-vs-human match on a `grid_size` x `grid_size` dot grid.
    #[instrument]
    pub fn new(grid_size: usize) -> Result<Self, MatchError> {
        Self::with_roles(grid_size, PlayerRole::Human, PlayerRole::Human)
    }

    /// Creates a match with default player names for the given roles.
    #[instrument]
    pub fn with_roles(
        grid_size: usize,
        one: PlayerRole,
        two: PlayerRole,
    ) -> Result<Self, MatchError> {
        Self::with_players(
            grid_size,
            [
                Player::default_for(PlayerId::One, one),
                Player::default_for(PlayerId::Two, two),
            ],
        )
    }

    /// Creates a match with explicit players.
    ///
    /// The players must occupy seats One and Two in that order. Scores are
    /// reset to zero.
    #[instrument(skip(players))]
    pub fn with_players(grid_size: usize, players: [Player; 2]) -> Result<Self, MatchError> {
        let grid = GridSize::new(grid_size)?;
        if players[0].id() != PlayerId::One || players[1].id() != PlayerId::Two {
            return Err(MatchError::InvalidConfiguration(
                "players must be listed as seat 1 then seat 2".to_string(),
            ));
        }

        let mut players = players;
        players.iter_mut().for_each(Player::reset_score);

        info!(grid = %grid, one = %players[0], two = %players[1], "Starting match");
        Ok(Self {
            board: Board::with_grid(grid),
            players,
            status: MatchStatus::AwaitingMove(PlayerId::One),
            history: Vec::new(),
        })
    }

    /// Builds a match by submitting `moves` in order.
    ///
    /// Fails on the first rejected move.
    #[instrument(skip(moves), fields(moves = moves.len()))]
    pub fn replay(grid_size: usize, moves: &[Move]) -> Result<Self, MatchError> {
        let mut game = Self::new(grid_size)?;
        for mv in moves {
            game.submit_move(*mv)?;
        }
        Ok(game)
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current status.
    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// Returns the player to move, or `None` once the match is over.
    pub fn active_player(&self) -> Option<PlayerId> {
        self.status.to_move()
    }

    /// Returns the player in seat `id`.
    pub fn player(&self, id: PlayerId) -> &Player {
        &self.players[id.index()]
    }

    /// Returns both players, seat 1 first.
    pub fn players(&self) -> &[Player; 2] {
        &self.players
    }

    /// Returns the number of boxes `id` has won.
    pub fn score(&self, id: PlayerId) -> u32 {
        self.player(id).score()
    }

    /// Returns true once every line has been drawn.
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Returns the outcome once the match is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.status.outcome()
    }

    /// Returns every accepted move in order.
    pub fn history(&self) -> &[PlayedMove] {
        &self.history
    }

    /// Returns the open lines, or an empty list when the match is over.
    pub fn legal_moves(&self) -> Vec<Move> {
        if self.is_over() {
            Vec::new()
        } else {
            self.board.legal_moves()
        }
    }

    /// Draws `mv` for the active player.
    ///
    /// # Errors
    ///
    /// - [`MatchError::GameAlreadyOver`] if the match has ended.
    /// - [`MatchError::RejectedMove`] if the slot is out of range or drawn.
    /// - [`MatchError::InvariantViolation`] in debug builds, if the match was
    ///   already inconsistent before the move.
    ///
    /// On error the match is unchanged.
    #[instrument(skip(self), fields(status = %self.status))]
    pub fn submit_move(&mut self, mv: Move) -> Result<MoveReport, MatchError> {
        MoveContract::pre(self, &mv)?;
        let Some(player) = self.active_player() else {
            return Err(MatchError::GameAlreadyOver);
        };

        #[cfg(debug_assertions)]
        let before = self.clone();

        let completed = self.board.place(mv, player)?;
        let points = completed.len();
        self.players[player.index()].add_score(points as u32);
        self.history.push(PlayedMove::new(player, mv, points));

        self.status = if self.board.is_terminal() {
            let outcome = decide_outcome(self.score(PlayerId::One), self.score(PlayerId::Two));
            info!(%outcome, "Match over");
            MatchStatus::GameOver(outcome)
        } else if points > 0 {
            debug!(%player, points, "Box completed, extra turn");
            MatchStatus::AwaitingMove(player)
        } else {
            MatchStatus::AwaitingMove(player.opponent())
        };

        #[cfg(debug_assertions)]
        if let Err(e) = MoveContract::post(&before, self) {
            warn!(error = %e, "Postcondition failed, rolling back move");
            *self = before;
            return Err(e);
        }

        Ok(MoveReport {
            player,
            mv,
            completed,
            extra_turn: points > 0 && !self.is_over(),
            status: self.status,
        })
    }

    /// Clears the board and scores and hands the first move back to player 1.
    ///
    /// Grid size, names and roles are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        info!("Restarting match");
        self.board = Board::with_grid(self.board.grid_size());
        self.players.iter_mut().for_each(Player::reset_score);
        self.status = MatchStatus::AwaitingMove(PlayerId::One);
        self.history.clear();
    }

    /// Cross-checks stored scores against box ownership on the board.
    ///
    /// # Errors
    ///
    /// [`MatchError::InvariantViolation`] naming the first seat whose score
    /// disagrees with the boxes it owns.
    #[instrument(skip(self))]
    pub fn verify_scores(&self) -> Result<(), MatchError> {
        for player in &self.players {
            let owned = self.board.boxes_owned_by(player.id()) as u32;
            if owned != player.score() {
                warn!(player = %player.id(), owned, score = player.score(), "Score mismatch");
                return Err(MatchError::InvariantViolation(format!(
                    "player {} has score {} but owns {} boxes",
                    player.id(),
                    player.score(),
                    owned
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_box_zero(game: &mut Match) -> MoveReport {
        // P1 h(0,0), P2 h(1,0), P1 v(0,0), P2 v(0,1) closes (0,0).
        for mv in [
            Move::horizontal(0, 0),
            Move::horizontal(1, 0),
            Move::vertical(0, 0),
        ] {
            game.submit_move(mv).unwrap();
        }
        game.submit_move(Move::vertical(0, 1)).unwrap()
    }

    #[test]
    fn test_new_match_starts_with_player_one() {
        let game = Match::new(4).unwrap();
        assert_eq!(game.status(), MatchStatus::AwaitingMove(PlayerId::One));
        assert_eq!(game.score(PlayerId::One), 0);
        assert_eq!(game.score(PlayerId::Two), 0);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_new_rejects_small_grid() {
        assert!(matches!(
            Match::new(1),
            Err(MatchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_turn_passes_without_completion() {
        let mut game = Match::new(3).unwrap();
        let report = game.submit_move(Move::horizontal(0, 0)).unwrap();
        assert!(report.completed.is_empty());
        assert!(!report.extra_turn);
        assert_eq!(game.active_player(), Some(PlayerId::Two));
    }

    #[test]
    fn test_completion_grants_extra_turn() {
        let mut game = Match::new(4).unwrap();
        let report = close_box_zero(&mut game);

        assert_eq!(report.player, PlayerId::Two);
        assert_eq!(report.completed.len(), 1);
        assert!(report.extra_turn);
        assert_eq!(game.score(PlayerId::Two), 1);
        assert_eq!(game.active_player(), Some(PlayerId::Two));
    }

    #[test]
    fn test_rejected_move_leaves_match_unchanged() {
        let mut game = Match::new(3).unwrap();
        game.submit_move(Move::horizontal(0, 0)).unwrap();
        let before = game.clone();

        assert_eq!(
            game.submit_move(Move::horizontal(0, 0)),
            Err(MatchError::RejectedMove(Move::horizontal(0, 0)))
        );
        assert_eq!(
            game.submit_move(Move::vertical(2, 0)),
            Err(MatchError::RejectedMove(Move::vertical(2, 0)))
        );
        assert_eq!(game, before);
    }

    #[test]
    #[cfg(debug_assertions)]
    fn test_failed_postcondition_rolls_back() {
        let mut game = Match::new(3).unwrap();
        game.players[0].add_score(1);
        let before = game.clone();

        assert!(matches!(
            game.submit_move(Move::horizontal(0, 0)),
            Err(MatchError::InvariantViolation(_))
        ));
        assert_eq!(game, before);
        assert_eq!(game.board().placed_count(), 0);
        assert_eq!(game.active_player(), Some(PlayerId::One));
    }

    #[test]
    fn test_game_over_rejects_moves() {
        let mut game = Match::new(2).unwrap();
        for mv in [
            Move::horizontal(0, 0),
            Move::horizontal(1, 0),
            Move::vertical(0, 0),
        ] {
            game.submit_move(mv).unwrap();
        }
        let report = game.submit_move(Move::vertical(0, 1)).unwrap();

        assert!(game.is_over());
        assert!(!report.extra_turn);
        assert_eq!(game.outcome(), Some(Outcome::Winner(PlayerId::Two)));
        assert_eq!(
            game.submit_move(Move::horizontal(0, 0)),
            Err(MatchError::GameAlreadyOver)
        );
        assert!(game.legal_moves().is_empty());
    }

    #[test]
    fn test_with_players_rejects_swapped_seats() {
        let players = [
            Player::default_for(PlayerId::Two, PlayerRole::Human),
            Player::default_for(PlayerId::One, PlayerRole::Human),
        ];
        assert!(matches!(
            Match::with_players(3, players),
            Err(MatchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_with_roles_names_ai_seat() {
        let game = Match::with_roles(3, PlayerRole::Human, PlayerRole::Ai).unwrap();
        assert_eq!(game.player(PlayerId::One).name(), "Player 1");
        assert_eq!(game.player(PlayerId::Two).name(), "AI");
        assert!(game.player(PlayerId::Two).is_ai());
    }

    #[test]
    fn test_restart_clears_state() {
        let mut game = Match::with_roles(4, PlayerRole::Human, PlayerRole::Ai).unwrap();
        close_box_zero(&mut game);
        game.restart();

        assert_eq!(game.status(), MatchStatus::AwaitingMove(PlayerId::One));
        assert_eq!(game.score(PlayerId::Two), 0);
        assert_eq!(game.board().placed_count(), 0);
        assert!(game.history().is_empty());
        assert_eq!(game.player(PlayerId::Two).name(), "AI");
    }

    #[test]
    fn test_verify_scores_detects_drift() {
        let mut game = Match::new(4).unwrap();
        close_box_zero(&mut game);
        assert!(game.verify_scores().is_ok());

        game.players[0].add_score(2);
        assert!(matches!(
            game.verify_scores(),
            Err(MatchError::InvariantViolation(_))
        ));
    }
}
