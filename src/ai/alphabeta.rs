use crate::game::{is_winner, Board, Player};

use super::agent::Agent;
use super::heuristic::evaluate_board;
use crate::error::AgentError;

/// Minimax with alpha-beta bounds. `alpha` is the best score the
/// maximizer has guaranteed so far, `beta` the minimizer's counterpart;
/// once `beta <= alpha` the remaining siblings cannot influence the root
/// and are skipped. Pruning changes which subtrees get visited, never the
/// value returned at the root.
pub(crate) fn alphabeta(
    board: &Board,
    depth: usize,
    mut alpha: i32,
    mut beta: i32,
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
            let (score, _) = alphabeta(&next, depth - 1, alpha, beta, false, player);
            if score > best_score {
                best_score = score;
                best_move = Some(col);
            }
            alpha = alpha.max(score);
            if beta <= alpha {
                break;
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
            let (score, _) = alphabeta(&next, depth - 1, alpha, beta, true, player);
            if score < best_score {
                best_score = score;
                best_move = Some(col);
            }
            beta = beta.min(score);
            if beta <= alpha {
                break;
            }
        }
        (best_score, best_move)
    }
}

/// Alpha-beta pruned minimax agent. The pruning speedup affords one ply
/// more than [`MinimaxAgent`](super::MinimaxAgent) by default.
pub struct AlphaBetaAgent {
    depth: usize,
}

impl AlphaBetaAgent {
    pub const DEFAULT_DEPTH: usize = 4;

    pub fn new(depth: usize) -> Result<Self, AgentError> {
        if depth == 0 {
            return Err(AgentError::InvalidDepth(depth));
        }
        Ok(AlphaBetaAgent { depth })
    }
}

impl Agent for AlphaBetaAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        let (_, best_move) = alphabeta(board, self.depth, i32::MIN, i32::MAX, true, player);
        best_move
    }

    fn name(&self) -> &str {
        "AlphaBeta"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(AlphaBetaAgent { depth: self.depth })
    }
}
