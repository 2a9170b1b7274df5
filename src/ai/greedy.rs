use crate::game::{Board, Player};

use super::agent::Agent;
use super::heuristic::evaluate_board;

/// One-ply lookahead: try every legal column on a copy of the board and
/// keep the one whose resulting position scores highest for the mover.
/// Ties go to the lowest column, since candidates are scanned in
/// ascending order and only a strictly better score replaces the best.
fn best_scoring_column(board: &Board, player: Player) -> Option<usize> {
    let mut best_score = i32::MIN;
    let mut best_move = None;

    for col in board.legal_moves() {
        let mut next = *board;
        next.drop_piece(col).expect("column is legal");
        next.switch_player();

        let score = evaluate_board(&next, player);
        if score > best_score {
            best_score = score;
            best_move = Some(col);
        }
    }

    best_move
}

/// Agent that plays the best-scoring immediate move.
pub struct GreedyAgent;

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        best_scoring_column(board, player)
    }

    fn name(&self) -> &str {
        "Greedy"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(GreedyAgent)
    }
}

/// Best-first heuristic scan over the immediate successors.
///
/// Its decision procedure coincides with [`GreedyAgent`], but it is kept
/// as a separately selectable strategy rather than an alias, so the two
/// identities stay independent in configuration and reporting.
pub struct BestFirstScanAgent;

impl BestFirstScanAgent {
    pub fn new() -> Self {
        BestFirstScanAgent
    }
}

impl Default for BestFirstScanAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for BestFirstScanAgent {
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize> {
        best_scoring_column(board, player)
    }

    fn name(&self) -> &str {
        "BestFirstScan"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(BestFirstScanAgent)
    }
}
