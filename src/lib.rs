//! Adversarial search agents for deterministic, turn-alternating games.
//!
//! One controlled agent maximizes; every other agent either minimizes
//! (`Minimax`, `AlphaBeta`) or moves uniformly at random (`Expectimax`).
//! Games plug in through the [`Game`] trait and positions are scored by an
//! [`Evaluator`], optionally looked up by name in a [`Registry`].

pub mod config;
pub mod error;
pub mod evaluators;
pub mod interface;
pub mod strategies;
pub mod tree;
pub mod util;

pub use config::{AgentConfig, SearchOptions};
pub use error::{Error, Result};
pub use evaluators::{from_fn, Registry};
pub use interface::{
    AgentIndex, DynEvaluator, Evaluation, Evaluator, Game, MoveEvaluator, Strategy,
};
pub use strategies::alphabeta::AlphaBeta;
pub use strategies::expectimax::Expectimax;
pub use strategies::minimax::Minimax;
pub use strategies::random::Random;
pub use strategies::reflex::Reflex;
pub use strategies::{Kind, SearchAgent, SearchStats};
pub use util::{play_game, Outcome, PlayOut};
