use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AgentError;
use crate::game::{Board, Player};

use super::alphabeta::AlphaBetaAgent;
use super::greedy::{BestFirstScanAgent, GreedyAgent};
use super::minimax::MinimaxAgent;
use super::random::RandomAgent;

/// Universal interface for all move-selecting agents.
pub trait Agent {
    /// Pick a column for `player` on the given position, or `None` when no
    /// legal move remains (the caller treats that as a draw, not an
    /// error). The live board is never touched; exploration happens on
    /// copies.
    fn select_move(&mut self, board: &Board, player: Player) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;

    /// Clone the agent into a boxed trait object.
    fn clone_agent(&self) -> Box<dyn Agent>;
}

/// The closed set of selectable strategies, resolved once at
/// configuration time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgentKind {
    Greedy,
    Minimax,
    AlphaBeta,
    BestFirstScan,
    Random,
}

impl AgentKind {
    pub const ALL: [AgentKind; 5] = [
        AgentKind::Greedy,
        AgentKind::Minimax,
        AgentKind::AlphaBeta,
        AgentKind::BestFirstScan,
        AgentKind::Random,
    ];

    /// Depth used when the configuration does not supply one. Only the
    /// recursive searchers take a depth.
    pub fn default_depth(self) -> Option<usize> {
        match self {
            AgentKind::Minimax => Some(MinimaxAgent::DEFAULT_DEPTH),
            AgentKind::AlphaBeta => Some(AlphaBetaAgent::DEFAULT_DEPTH),
            _ => None,
        }
    }

    /// Build the agent, resolving the default depth where none is given.
    /// A zero depth is a configuration bug and fails fast instead of
    /// falling back silently.
    pub fn build(self, depth: Option<usize>) -> Result<Box<dyn Agent>, AgentError> {
        if depth == Some(0) {
            return Err(AgentError::InvalidDepth(0));
        }
        Ok(match self {
            AgentKind::Greedy => Box::new(GreedyAgent::new()),
            AgentKind::Minimax => Box::new(MinimaxAgent::new(
                depth.unwrap_or(MinimaxAgent::DEFAULT_DEPTH),
            )?),
            AgentKind::AlphaBeta => Box::new(AlphaBetaAgent::new(
                depth.unwrap_or(AlphaBetaAgent::DEFAULT_DEPTH),
            )?),
            AgentKind::BestFirstScan => Box::new(BestFirstScanAgent::new()),
            AgentKind::Random => Box::new(RandomAgent::new()),
        })
    }

    fn token(self) -> &'static str {
        match self {
            AgentKind::Greedy => "greedy",
            AgentKind::Minimax => "minimax",
            AgentKind::AlphaBeta => "alpha_beta",
            AgentKind::BestFirstScan => "best_first_scan",
            AgentKind::Random => "random",
        }
    }
}

impl fmt::Display for AgentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for AgentKind {
    type Err = AgentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "greedy" => Ok(AgentKind::Greedy),
            "minimax" => Ok(AgentKind::Minimax),
            "alpha_beta" => Ok(AgentKind::AlphaBeta),
            "best_first_scan" => Ok(AgentKind::BestFirstScan),
            "random" => Ok(AgentKind::Random),
            other => Err(AgentError::UnknownKind(other.to_string())),
        }
    }
}
