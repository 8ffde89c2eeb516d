//! Plain-text drawing of the board and scores.

use strictly_dots::{Board, Match, MatchStatus, Move, Outcome, PlayerId};

const DOT: char = 'o';
const HORIZONTAL: &str = "---";
const VERTICAL: char = '|';

/// Draws `board` with row and column labels.
///
/// ```text
///     0   1   2
///  0  o---o   o
///     | 1 |
///  1  o---o   o
/// ```
///
/// Completed boxes show the owner's number.
pub fn render_board(board: &Board) -> String {
    let dots = board.grid_size().dots();
    let mut out = String::new();

    let header: String = (0..dots).map(|c| format!("{:<4}", c)).collect();
    out.push_str(format!("    {}", header).trim_end());
    out.push('\n');

    for row in 0..dots {
        let mut line = format!("{:>2}  ", row);
        for col in 0..dots {
            line.push(DOT);
            if col + 1 < dots {
                line.push_str(if board.is_placed(Move::horizontal(row, col)) {
                    HORIZONTAL
                } else {
                    "   "
                });
            }
        }
        out.push_str(line.trim_end());
        out.push('\n');

        if row + 1 < dots {
            let mut line = String::from("    ");
            for col in 0..dots {
                line.push(if board.is_placed(Move::vertical(row, col)) {
                    VERTICAL
                } else {
                    ' '
                });
                if col + 1 < dots {
                    let owner = board.box_cell(row, col).and_then(|cell| cell.owner);
                    match owner {
                        Some(player) => line.push_str(&format!(" {} ", player)),
                        None => line.push_str("   "),
                    }
                }
            }
            out.push_str(line.trim_end());
            out.push('\n');
        }
    }
    out
}

/// One-line score and status summary.
pub fn render_status(game: &Match) -> String {
    let one = game.player(PlayerId::One);
    let two = game.player(PlayerId::Two);
    let scores = format!(
        "{}: {}  {}: {}",
        one.name(),
        one.score(),
        two.name(),
        two.score()
    );
    let status = match game.status() {
        MatchStatus::AwaitingMove(id) => format!("{} to move", game.player(id).name()),
        MatchStatus::GameOver(Outcome::Winner(id)) => {
            format!("Game over: {} wins!", game.player(id).name())
        }
        MatchStatus::GameOver(Outcome::Draw) => "Game over: draw".to_string(),
    };
    format!("{}  |  {}", scores, status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_board() {
        let board = Board::new(2).unwrap();
        assert_eq!(render_board(&board), "    0   1\n 0  o   o\n\n 1  o   o\n");
    }

    #[test]
    fn test_owned_box() {
        let game = Match::replay(
            2,
            &[
                Move::horizontal(0, 0),
                Move::horizontal(1, 0),
                Move::vertical(0, 0),
                Move::vertical(0, 1),
            ],
        )
        .unwrap();
        assert_eq!(
            render_board(game.board()),
            "    0   1\n 0  o---o\n    | 2 |\n 1  o---o\n"
        );
        assert!(render_status(&game).ends_with("Game over: Player 2 wins!"));
    }

    #[test]
    fn test_status_names_active_player() {
        let game = Match::new(3).unwrap();
        assert_eq!(
            render_status(&game),
            "Player 1: 0  Player 2: 0  |  Player 1 to move"
        );
    }
}
