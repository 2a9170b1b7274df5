use crate::game::{is_winner, Board, Player};

use super::agent::Agent;
use super::heuristic::evaluate_board;
use crate::error::AgentError;

/// Fixed-depth minimax over board copies, no pruning.
///
/// `player` is the perspective the whole search scores for; only the
/// maximizing/minimizing role alternates between plies. Returns the best
/// reachable score and the root move achieving it; the move is `None` at
/// terminal positions and at depth 0.
pub(crate) fn minimax(
    board: &Board,
    depth: usize,
    maximizing: bool,
    player: Player,
) -> (i32, Option<usize>) {
    if depth == 0
        || is_winner(board, player)
        || is_winner(board, player.other())
        || board.is_full()
    {
        return (evaluate_board(board, player), None);
    }

    if maximizing {
        let mut best_score = i32::MIN;
        let mut best_move = None;
        for col in board.legal_moves() {
            let mut next = *board;
            next.drop_piece(col).expect("column is legal");
            next.switch_player();
            let (score, _) = minimax(&next, depth - 1, false, player);
            if score > best_score {
                best_score = score;
                best_move = Some(col);
            }
        }
        (best_score, best_move)
    } else {
        let mut best_score = i32::MAX;
        let mut best_move = None;
        for col in board.legal_moves() {
            let mut next = *board;
            next.drop_piece(col).expect("column is legal");
            next.switch_player();
            let (score, _) = minimax(&next, depth - 1, true, player);
            if score < best_score {
                best_score = score;
                best_move = Some(col);
            }
        }
        (best_score, best_move)
    }
}

/// Full minimax agent.
pub struct MinimaxAgent {
    depth: usize,
}

impl MinimaxAgent {
    pub const DEFAULT_DEPTH: usize = 3;

    pub fn new(depth: usize) -> Result<Self, AgentError> {
        if depth == 0 {
            return Err(AgentError::InvalidDepth(depth));
        }
        Ok(MinimaxAgent { depth })
    }
}

impl Agent for MinimaxAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let (_, best_move) = minimax(board, self.depth, true, player);
        best_move
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent { depth: self.depth })
    }
}
