//! Plain minimax for one maximizing agent against any number of minimizers.
//!
//! Every branch is searched to the full depth. `AlphaBeta` returns the same
//! moves while skipping branches that cannot matter.

use super::agent::{sealed, Kind, SearchAgent};

/// Every other agent minimizes; nothing is pruned.
#[derive(Debug, Clone, Copy, Default)]
pub struct Minimizing;

impl sealed::Sealed for Minimizing {}

impl Kind for Minimizing {
    const NAME: &'static str = "minimax";
    const AVERAGE: bool = false;
    const PRUNING: bool = false;
}

/// Plain minimax agent.
pub type Minimax<E> = SearchAgent<Minimizing, E>;
