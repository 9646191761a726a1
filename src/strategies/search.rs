//! The recursive traversal shared by every search strategy.
//!
//! A node is the triple (state, depth, agent) and only exists on the call
//! stack. Depth counts completed rounds and advances exactly when the turn
//! wraps back to the controlled agent. How a node combines the values of its
//! children is described by a `Rule`; alpha-beta additionally threads a
//! `Window` through the recursion.

use super::super::config::SearchOptions;
use super::super::error::{Error, Result};
use super::super::interface::*;
use tracing::trace;

/// How a node folds the values of its children.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Rule {
    Maximize,
    Minimize,
    Average,
}

/// Pruning bounds: the best values the maximizer and the minimizer can
/// already guarantee on the path to this node.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct Window {
    pub(crate) alpha: Evaluation,
    pub(crate) beta: Evaluation,
}

impl Window {
    pub(crate) fn open() -> Self {
        Window { alpha: Evaluation::NEG_INFINITY, beta: Evaluation::INFINITY }
    }

    // Fold a node's running value into the bounds and report a cutoff.
    fn tighten(&mut self, rule: Rule, running: Evaluation) -> bool {
        match rule {
            Rule::Maximize => self.alpha = self.alpha.max(running),
            Rule::Minimize => self.beta = self.beta.min(running),
            Rule::Average => return false,
        }
        self.alpha >= self.beta
    }
}

/// Running combination of child values.
struct Fold {
    rule: Rule,
    acc: Evaluation,
    count: usize,
}

impl Fold {
    fn new(rule: Rule) -> Self {
        let acc = match rule {
            Rule::Maximize => Evaluation::NEG_INFINITY,
            Rule::Minimize => Evaluation::INFINITY,
            Rule::Average => 0.0,
        };
        Fold { rule, acc, count: 0 }
    }

    fn push(&mut self, value: Evaluation) {
        self.count += 1;
        self.acc = match self.rule {
            Rule::Maximize => self.acc.max(value),
            Rule::Minimize => self.acc.min(value),
            Rule::Average => self.acc + value,
        };
    }

    // Only meaningful for min and max; a partial sum bounds nothing.
    fn running(&self) -> Evaluation {
        self.acc
    }

    fn finish(self) -> Evaluation {
        match self.rule {
            Rule::Average => self.acc / self.count as Evaluation,
            _ => self.acc,
        }
    }
}

/// Counters for one decision.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Nodes visited, the root excluded.
    pub nodes: u64,
    /// Evaluation function calls.
    pub evaluations: u64,
    /// Nodes whose remaining moves were skipped by pruning.
    pub cutoffs: u64,
}

/// The best root move and its value.
pub(crate) struct Decision<M> {
    pub(crate) best: M,
    pub(crate) value: Evaluation,
}

pub(crate) struct Search<'a, E: Evaluator> {
    eval: &'a E,
    opts: SearchOptions,
    num_agents: usize,
    // What every agent other than the controlled one does.
    adversary: Rule,
    pruning: bool,
    pub(crate) stats: SearchStats,
}

impl<'a, E: Evaluator> Search<'a, E> {
    pub(crate) fn new(eval: &'a E, opts: SearchOptions, adversary: Rule, pruning: bool) -> Self {
        debug_assert!(adversary != Rule::Maximize);
        debug_assert!(!(pruning && adversary == Rule::Average));
        Search { eval, opts, num_agents: 0, adversary, pruning, stats: SearchStats::default() }
    }

    fn leaf(&mut self, s: &<E::G as Game>::S) -> Evaluation {
        self.stats.evaluations += 1;
        let value = self.eval.evaluate(s);
        debug_assert!(!value.is_nan(), "evaluation function returned NaN");
        value
    }

    // Whose turn follows `agent`, and at which depth.
    fn advance(&self, agent: AgentIndex, depth: usize) -> (AgentIndex, usize) {
        let next = (agent + 1) % self.num_agents;
        if next == self.opts.controlled_agent {
            (next, depth + 1)
        } else {
            (next, depth)
        }
    }

    /// Value of `s` with `agent` to move, `depth` rounds into the search.
    pub(crate) fn value(
        &mut self, s: &<E::G as Game>::S, depth: usize, agent: AgentIndex,
        mut window: Option<Window>,
    ) -> Result<Evaluation> {
        self.stats.nodes += 1;
        if E::G::is_terminal(s) {
            return Ok(self.leaf(s));
        }
        if depth == self.opts.max_depth && agent == self.opts.controlled_agent {
            return Ok(self.leaf(s));
        }

        let mut moves = Vec::new();
        E::G::generate_moves(s, agent, &mut moves);
        if moves.is_empty() {
            return Err(Error::NoLegalMoves { agent, depth });
        }
        let (next_agent, next_depth) = self.advance(agent, depth);
        let rule = if agent == self.opts.controlled_agent { Rule::Maximize } else { self.adversary };

        let mut fold = Fold::new(rule);
        for m in moves.iter() {
            let child = E::G::apply(s, agent, m);
            fold.push(self.value(&child, next_depth, next_agent, window)?);
            if let Some(w) = window.as_mut() {
                if w.tighten(rule, fold.running()) {
                    self.stats.cutoffs += 1;
                    break;
                }
            }
        }
        Ok(fold.finish())
    }

    /// Pick the controlled agent's best move at the root.
    ///
    /// The first move reaching the maximum wins ties. With pruning, alpha is
    /// carried across root moves so later ones are cut against earlier ones.
    pub(crate) fn decide(&mut self, s: &<E::G as Game>::S) -> Result<Option<Decision<<E::G as Game>::M>>> {
        self.num_agents = E::G::num_agents(s);
        if self.num_agents == 0 {
            return Err(Error::NoAgents);
        }
        let agent = self.opts.controlled_agent;
        if agent >= self.num_agents {
            return Err(Error::ControlledAgentOutOfRange { agent, num_agents: self.num_agents });
        }
        if E::G::is_terminal(s) {
            return Ok(None);
        }

        let mut moves = Vec::new();
        E::G::generate_moves(s, agent, &mut moves);
        if moves.is_empty() {
            return Err(Error::NoLegalMoves { agent, depth: 0 });
        }
        let (next_agent, next_depth) = self.advance(agent, 0);

        let mut window = if self.pruning { Some(Window::open()) } else { None };
        let mut best: Option<Decision<_>> = None;
        for m in moves.into_iter() {
            let child = E::G::apply(s, agent, &m);
            let value = self.value(&child, next_depth, next_agent, window)?;
            trace!(
                agent,
                value,
                mv = E::G::notation(s, agent, &m).as_deref().unwrap_or("?"),
                "root move"
            );
            let better = best.as_ref().map_or(true, |b| value > b.value);
            if better {
                best = Some(Decision { best: m, value });
            }
            if let (Some(w), Some(b)) = (window.as_mut(), best.as_ref()) {
                w.alpha = w.alpha.max(b.value);
            }
        }
        Ok(best)
    }
}
