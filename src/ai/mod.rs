//! Move-selecting agents built on the game core: a one-ply greedy scan,
//! full minimax, alpha-beta pruned minimax, a best-first heuristic scan,
//! and a random baseline, all sharing one heuristic evaluator.

mod agent;
mod alphabeta;
mod greedy;
mod heuristic;
mod minimax;
mod random;

pub use agent::{Agent, AgentKind};
pub use alphabeta::AlphaBetaAgent;
pub use greedy::{BestFirstScanAgent, GreedyAgent};
pub use heuristic::{evaluate_board, evaluate_window, CENTER_COLUMN};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;

use crate::error::AgentError;
use crate::game::{Board, Player};

/// One-call move selection: build the requested strategy and ask it for a
/// column on `player`'s behalf. `depth` applies to the recursive
/// searchers and falls back to their defaults when `None`; `Ok(None)`
/// means no legal move remains.
pub fn select_move(
    kind: AgentKind,
    board: &Board,
    player: Player,
    depth: Option<usize>,
) -> Result<Option<usize>, AgentError> {
    let mut agent = kind.build(depth)?;
    Ok(agent.select_move(board, player))
}
