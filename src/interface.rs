//! The common structures and traits.

use crate::error::Result;
use std::sync::Arc;

/// An assessment of a game state from the perspective of the controlled agent.
/// Higher values mean a more favorable state.
pub type Evaluation = f64;

/// Identifies an agent. Agents take turns in increasing index order, wrapping
/// around after the last one.
pub type AgentIndex = usize;

/// Evaluates a game's positions.
pub trait Evaluator {
    /// The type of game that can be evaluated.
    type G: Game;
    /// Evaluate the state from the perspective of the controlled agent.
    /// Never NaN; searches compare values with `>`.
    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation;
}

impl<E: Evaluator + ?Sized> Evaluator for &E {
    type G = E::G;
    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation {
        (**self).evaluate(s)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Box<E> {
    type G = E::G;
    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation {
        (**self).evaluate(s)
    }
}

impl<E: Evaluator + ?Sized> Evaluator for Arc<E> {
    type G = E::G;
    fn evaluate(&self, s: &<Self::G as Game>::S) -> Evaluation {
        (**self).evaluate(s)
    }
}

/// A shareable, type-erased evaluator, as handed out by a `Registry`.
pub type DynEvaluator<G> = Arc<dyn Evaluator<G = G>>;

/// Scores a single move, looking only one ply ahead.
///
/// Unlike an `Evaluator`, this sees both the state before the move and the
/// move itself, so it can reward things like "this move eats something".
pub trait MoveEvaluator {
    /// The type of game whose moves are scored.
    type G: Game;
    /// Score `m` played by `agent` in `s`. Never NaN.
    fn evaluate_move(
        &self, s: &<Self::G as Game>::S, agent: AgentIndex, m: &<Self::G as Game>::M,
    ) -> Evaluation;
}

/// Defines the rules for a turn-alternating, perfect-knowledge game between
/// any number of agents.
///
/// A game ties together types for the state and moves, generates the legal
/// moves of an agent, and determines whether a state is won or lost. Moves
/// never modify a state: `apply` produces the successor.
pub trait Game: Sized {
    /// The type of the game state.
    type S;
    /// The type of game moves.
    type M: Clone;

    /// Number of agents taking turns in this state. Must be at least one.
    fn num_agents(s: &Self::S) -> usize;

    /// Append the legal moves of `agent` at the given state to `moves`.
    ///
    /// The list is expected to be empty only in terminal states.
    fn generate_moves(s: &Self::S, agent: AgentIndex, moves: &mut Vec<Self::M>);

    /// The state reached when `agent` plays `m`.
    fn apply(s: &Self::S, agent: AgentIndex, m: &Self::M) -> Self::S;

    /// Whether the controlled agent has won.
    fn is_win(s: &Self::S) -> bool;

    /// Whether the controlled agent has lost.
    fn is_lose(s: &Self::S) -> bool;

    fn is_terminal(s: &Self::S) -> bool {
        Self::is_win(s) || Self::is_lose(s)
    }

    /// Return a human-readable notation for this move in this game state.
    fn notation(_s: &Self::S, _agent: AgentIndex, _m: &Self::M) -> Option<String> {
        None
    }
}

/// Defines a method of choosing a move for one agent.
pub trait Strategy<G: Game> {
    /// Choose the move to play from `s`.
    ///
    /// Returns `Ok(None)` when the game is already over.
    fn choose_move(&mut self, s: &G::S) -> Result<Option<G::M>>;
}
