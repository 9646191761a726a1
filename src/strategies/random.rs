//! A strategy that randomly chooses a move, for opponents in play-outs and tests.

use super::super::error::{Error, Result};
use super::super::interface::*;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

pub struct Random<R = StdRng> {
    agent: AgentIndex,
    rng: R,
}

impl Random {
    /// Random moves for `agent`.
    pub fn new(agent: AgentIndex) -> Self {
        Self::with_rng(agent, StdRng::from_entropy())
    }
}

impl<R: Rng> Random<R> {
    pub fn with_rng(agent: AgentIndex, rng: R) -> Self {
        Random { agent, rng }
    }
}

impl<G: Game, R: Rng> Strategy<G> for Random<R> {
    fn choose_move(&mut self, s: &G::S) -> Result<Option<G::M>> {
        if G::is_terminal(s) {
            return Ok(None);
        }
        let mut moves = Vec::new();
        G::generate_moves(s, self.agent, &mut moves);
        match moves.choose(&mut self.rng) {
            Some(m) => Ok(Some(m.clone())),
            None => Err(Error::NoLegalMoves { agent: self.agent, depth: 0 }),
        }
    }
}
