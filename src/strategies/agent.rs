//! The agent shared by `Minimax`, `AlphaBeta` and `Expectimax`.
//!
//! Each strategy is a zero-sized `Kind` marker telling the traversal how the
//! other agents combine their children and whether bounds are threaded
//! through; `SearchAgent` does the rest.

use super::super::config::{AgentConfig, SearchOptions};
use super::super::error::Result;
use super::super::evaluators::Registry;
use super::super::interface::*;
use super::search::Rule;
use super::{search_root, SearchStats};
use std::marker::PhantomData;

pub(crate) mod sealed {
    pub trait Sealed {}
}

/// How the agents other than the controlled one are searched.
pub trait Kind: sealed::Sealed {
    /// Name used in log records.
    const NAME: &'static str;
    /// Average over the other agents' moves instead of minimizing.
    const AVERAGE: bool;
    /// Thread alpha-beta bounds through the search.
    const PRUNING: bool;
}

fn adversary<K: Kind>() -> Rule {
    if K::AVERAGE {
        Rule::Average
    } else {
        Rule::Minimize
    }
}

/// A depth-limited search agent of kind `K`, scoring leaves with `E`.
pub struct SearchAgent<K: Kind, E: Evaluator> {
    opts: SearchOptions,
    eval: E,
    prev_value: Evaluation,
    stats: SearchStats,
    kind: PhantomData<K>,
}

impl<K: Kind, E: Evaluator> SearchAgent<K, E> {
    /// Search `depth` full rounds on behalf of agent 0.
    pub fn new(eval: E, depth: usize) -> Result<Self> {
        Ok(Self::with_options(eval, SearchOptions::with_max_depth(depth)?))
    }

    pub fn with_options(eval: E, opts: SearchOptions) -> Self {
        SearchAgent { opts, eval, prev_value: 0.0, stats: SearchStats::default(), kind: PhantomData }
    }

    /// Choose moves for `agent` instead of agent 0.
    pub fn with_controlled_agent(mut self, agent: AgentIndex) -> Self {
        self.opts.controlled_agent = agent;
        self
    }

    /// Value of the move chosen by the last search. For `Expectimax` this is
    /// an expected value.
    #[doc(hidden)]
    pub fn root_value(&self) -> Evaluation {
        self.prev_value
    }

    /// Counters of the last search.
    pub fn stats(&self) -> SearchStats {
        self.stats
    }
}

impl<K: Kind, G: Game> SearchAgent<K, DynEvaluator<G>> {
    /// Build an agent from its configuration, looking the evaluation
    /// function up by name.
    pub fn from_config(registry: &Registry<G>, config: &AgentConfig) -> Result<Self> {
        let opts = config.validate()?;
        let eval = registry.get(&config.evaluation_function_name)?;
        Ok(Self::with_options(eval, opts))
    }
}

impl<K: Kind, E: Evaluator> Strategy<E::G> for SearchAgent<K, E> {
    fn choose_move(&mut self, s: &<E::G as Game>::S) -> Result<Option<<E::G as Game>::M>> {
        let searched = search_root(K::NAME, &self.eval, self.opts, adversary::<K>(), K::PRUNING, s)?;
        self.stats = searched.stats;
        if let Some(value) = searched.value {
            self.prev_value = value;
        }
        Ok(searched.best)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::alphabeta::Pruning;
    use crate::strategies::expectimax::Averaging;
    use crate::strategies::minimax::Minimizing;
    use crate::tree::{NodeValue, Spec};

    #[test]
    fn kinds_select_rule_and_pruning() {
        assert_eq!(adversary::<Minimizing>(), Rule::Minimize);
        assert_eq!(adversary::<Pruning>(), Rule::Minimize);
        assert_eq!(adversary::<Averaging>(), Rule::Average);
        assert!(Pruning::PRUNING && !Minimizing::PRUNING && !Averaging::PRUNING);
    }

    #[test]
    fn kinds_share_the_agent_surface() {
        let root = Spec::node(vec![Spec::leaves(&[1.0, 3.0]), Spec::leaves(&[2.0, 2.0])]).build(2);
        let mut plain = SearchAgent::<Minimizing, _>::new(NodeValue::default(), 1).unwrap();
        let mut pruned = SearchAgent::<Pruning, _>::new(NodeValue::default(), 1).unwrap();
        let mut chance = SearchAgent::<Averaging, _>::new(NodeValue::default(), 1).unwrap();
        assert_eq!(plain.choose_move(&root).unwrap(), Some(1));
        assert_eq!(pruned.choose_move(&root).unwrap(), Some(1));
        // Both moves average 2; the first one is kept.
        assert_eq!(chance.choose_move(&root).unwrap(), Some(0));
        assert_eq!(plain.root_value(), 2.0);
        assert_eq!(pruned.root_value(), 2.0);
        assert_eq!(chance.root_value(), 2.0);
        assert_eq!(plain.stats().evaluations, 4);
        assert_eq!(chance.stats().evaluations, 4);
    }
}
