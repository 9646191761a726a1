//! Utility functions for playing games out, mostly for tests and demos.

use super::error::{Error, Result};
use super::interface::{Game, Strategy};
use tracing::trace;

/// How a played-out game ended, from the controlled agent's side.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Outcome {
    Win,
    Lose,
    /// The turn limit was reached, or a strategy had no move to offer.
    Unfinished,
}

/// The end of a played-out game.
#[derive(Debug, Clone)]
pub struct PlayOut<S> {
    pub outcome: Outcome,
    pub state: S,
    /// Number of moves played, over all agents.
    pub turns: usize,
}

/// Play a game from `state`, agent `i` moving with `strategies[i]`.
///
/// Agents move in round-robin order starting with agent 0 until the game is
/// won or lost, a strategy returns no move, or `max_turns` moves were made.
pub fn play_game<G: Game>(
    mut state: G::S, strategies: &mut [&mut dyn Strategy<G>], max_turns: usize,
) -> Result<PlayOut<G::S>> {
    let num_agents = G::num_agents(&state);
    if num_agents == 0 {
        return Err(Error::NoAgents);
    }
    if strategies.len() != num_agents {
        return Err(Error::InvalidOption {
            option: format!("{} strategies", strategies.len()),
            reason: format!("the game has {} agents", num_agents),
        });
    }
    let mut turns = 0;
    while !G::is_terminal(&state) && turns < max_turns {
        let agent = turns % num_agents;
        let m = match strategies[agent].choose_move(&state)? {
            Some(m) => m,
            None => break,
        };
        if let Some(notation) = G::notation(&state, agent, &m) {
            trace!(turn = turns, agent, mv = notation.as_str(), "play");
        }
        state = G::apply(&state, agent, &m);
        turns += 1;
    }
    let outcome = if G::is_win(&state) {
        Outcome::Win
    } else if G::is_lose(&state) {
        Outcome::Lose
    } else {
        Outcome::Unfinished
    };
    Ok(PlayOut { outcome, state, turns })
}
