use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::{Board, Player};

use super::agent::Agent;

/// An agent that selects uniformly at random from the legal columns.
/// Useful as a strength baseline for the search agents.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic variant for reproducible match-ups.
    pub fn from_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_move(&mut self, board: &Board, _player: Player) -> Option<usize> {
        let moves = board.legal_moves();
        if moves.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..moves.len());
        Some(moves[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(RandomAgent::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{outcome, Outcome};

    #[test]
    fn test_random_agent_selects_legal_move() {
        let mut agent = RandomAgent::from_seed(1);
        let board = Board::new();
        let legal = board.legal_moves();

        for _ in 0..100 {
            let col = agent.select_move(&board, Player::Red).unwrap();
            assert!(legal.contains(&col), "column {} is not legal", col);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut red = RandomAgent::from_seed(2);
        let mut yellow = RandomAgent::from_seed(3);
        let mut board = Board::new();

        while outcome(&board) == Outcome::InProgress {
            let player = board.current_player();
            let agent = match player {
                Player::Red => &mut red,
                Player::Yellow => &mut yellow,
            };
            let col = agent.select_move(&board, player).unwrap();
            board.drop_piece(col).unwrap();
            if outcome(&board) == Outcome::InProgress {
                board.switch_player();
            }
        }

        assert_ne!(outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
