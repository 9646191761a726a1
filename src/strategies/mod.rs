//! Strategy implementations.

pub mod agent;
pub mod alphabeta;
pub mod expectimax;
pub mod minimax;
pub mod random;
pub mod reflex;
mod search;

pub use agent::{Kind, SearchAgent};
pub use search::SearchStats;

use super::config::SearchOptions;
use super::error::Result;
use super::interface::*;
use search::{Rule, Search};
use tracing::debug;

/// Outcome of one searched decision.
pub(crate) struct Searched<M> {
    pub(crate) best: Option<M>,
    pub(crate) value: Option<Evaluation>,
    pub(crate) stats: SearchStats,
}

// Run the shared traversal from the root and log a summary.
pub(crate) fn search_root<E: Evaluator>(
    strategy: &'static str, eval: &E, opts: SearchOptions, adversary: Rule, pruning: bool,
    s: &<E::G as Game>::S,
) -> Result<Searched<<E::G as Game>::M>> {
    let mut search = Search::new(eval, opts, adversary, pruning);
    let decision = search.decide(s)?;
    let stats = search.stats;
    debug!(
        strategy,
        depth = opts.max_depth,
        value = ?decision.as_ref().map(|d| d.value),
        nodes = stats.nodes,
        evaluations = stats.evaluations,
        cutoffs = stats.cutoffs,
        "search finished"
    );
    Ok(match decision {
        Some(d) => Searched { best: Some(d.best), value: Some(d.value), stats },
        None => Searched { best: None, value: None, stats },
    })
}
