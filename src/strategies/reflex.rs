//! A single-ply agent that scores each of its moves directly.
//!
//! No search happens: every legal move is scored by a `MoveEvaluator` and
//! one of the highest-scoring moves is played. Unlike the search strategies,
//! ties are broken uniformly at random rather than by move order.

use super::super::error::{Error, Result};
use super::super::interface::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Reflex<E: MoveEvaluator, R = StdRng> {
    agent: AgentIndex,
    eval: E,
    rng: R,
}

impl<E: MoveEvaluator> Reflex<E> {
    pub fn new(eval: E) -> Self {
        Self::with_rng(eval, StdRng::from_entropy())
    }
}

impl<E: MoveEvaluator, R: Rng> Reflex<E, R> {
    pub fn with_rng(eval: E, rng: R) -> Self {
        Reflex { agent: 0, eval, rng }
    }

    pub fn with_controlled_agent(mut self, agent: AgentIndex) -> Self {
        self.agent = agent;
        self
    }
}

impl<E: MoveEvaluator, R: Rng> Strategy<E::G> for Reflex<E, R> {
    fn choose_move(&mut self, s: &<E::G as Game>::S) -> Result<Option<<E::G as Game>::M>> {
        if E::G::is_terminal(s) {
            return Ok(None);
        }
        let mut moves = Vec::new();
        E::G::generate_moves(s, self.agent, &mut moves);

        let mut best = Evaluation::NEG_INFINITY;
        let mut candidates = Vec::new();
        for (i, m) in moves.iter().enumerate() {
            let e = self.eval.evaluate_move(s, self.agent, m);
            debug_assert!(!e.is_nan(), "move evaluation returned NaN");
            if e == best {
                candidates.push(i);
            } else if e > best || candidates.is_empty() {
                candidates.clear();
                candidates.push(i);
                best = e;
            }
        }
        if candidates.is_empty() {
            return Err(Error::NoLegalMoves { agent: self.agent, depth: 0 });
        }
        let chosen = candidates[self.rng.gen_range(0..candidates.len())];
        Ok(Some(moves.swap_remove(chosen)))
    }
}
