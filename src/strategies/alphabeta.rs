//! Minimax with alpha-beta pruning.
//!
//! Alpha is the value the maximizer can already guarantee on the current
//! path, beta the value the minimizers can already hold it to. Once
//! `alpha >= beta` at a node, its remaining moves cannot change the decision
//! and are skipped. Alpha also carries over between root moves, so a later
//! root move can be cut against the best one found so far.
//!
//! The chosen move is always the one `Minimax` would choose.

use super::agent::{sealed, Kind, SearchAgent};

/// Every other agent minimizes, with alpha-beta cutoffs.
#[derive(Debug, Clone, Copy, Default)]
pub struct Pruning;

impl sealed::Sealed for Pruning {}

impl Kind for Pruning {
    const NAME: &'static str = "alphabeta";
    const AVERAGE: bool = false;
    const PRUNING: bool = true;
}

/// Minimax agent with alpha-beta pruning.
pub type AlphaBeta<E> = SearchAgent<Pruning, E>;
