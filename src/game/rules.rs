//! Win and draw detection over the full board.

use super::board::{Board, COLS, ROWS};
use super::player::Player;

/// Result of inspecting a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    InProgress,
    Win(Player),
    Draw,
}

/// True iff `player` owns four collinear, contiguous cells anywhere on the
/// board. All four orientations are scanned exhaustively; detection does
/// not depend on knowing the last move.
pub fn is_winner(board: &Board, player: Player) -> bool {
    let cell = player.to_cell();

    // Horizontal
    for row in 0..ROWS {
        for col in 0..COLS - 3 {
            if (0..4).all(|i| board.get(row, col + i) == cell) {
                return true;
            }
        }
    }

    // Vertical
    for col in 0..COLS {
        for row in 0..ROWS - 3 {
            if (0..4).all(|i| board.get(row + i, col) == cell) {
                return true;
            }
        }
    }

    // Diagonal (top-left to bottom-right)
    for row in 0..ROWS - 3 {
        for col in 0..COLS - 3 {
            if (0..4).all(|i| board.get(row + i, col + i) == cell) {
                return true;
            }
        }
    }

    // Diagonal (bottom-left to top-right)
    for row in 3..ROWS {
        for col in 0..COLS - 3 {
            if (0..4).all(|i| board.get(row - i, col + i) == cell) {
                return true;
            }
        }
    }

    false
}

/// Classify a position: a win for either player, a draw on a full board,
/// or still in progress.
pub fn outcome(board: &Board) -> Outcome {
    if is_winner(board, Player::Red) {
        Outcome::Win(Player::Red)
    } else if is_winner(board, Player::Yellow) {
        Outcome::Win(Player::Yellow)
    } else if board.is_full() {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}
