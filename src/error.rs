//! Error types for agent construction and search.

use crate::interface::AgentIndex;
use thiserror::Error;

/// Everything that can go wrong while building an agent or searching.
///
/// None of these are retryable: the search is a pure computation, so the
/// same inputs fail the same way.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    #[error("unknown evaluation function '{name}' (expected one of: {expected})")]
    UnknownEvaluator { name: String, expected: String },

    #[error("search depth must be a positive number of rounds, got {depth}")]
    InvalidDepth { depth: i64 },

    #[error("invalid agent option '{option}': {reason}")]
    InvalidOption { option: String, reason: String },

    #[error("controlled agent {agent} does not exist in a game of {num_agents} agents")]
    ControlledAgentOutOfRange { agent: AgentIndex, num_agents: usize },

    #[error("agent {agent} has no legal moves in a live state at depth {depth}")]
    NoLegalMoves { agent: AgentIndex, depth: usize },

    #[error("game reports no agents")]
    NoAgents,
}

impl Error {
    /// The agent could not be built from its configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::UnknownEvaluator { .. }
                | Error::InvalidDepth { .. }
                | Error::InvalidOption { .. }
                | Error::ControlledAgentOutOfRange { .. }
        )
    }

    /// The game broke its side of the `Game` contract.
    pub fn is_contract_violation(&self) -> bool {
        matches!(self, Error::NoLegalMoves { .. } | Error::NoAgents)
    }
}

/// Convenience type alias for Results using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
