//! Expectimax: the other agents move uniformly at random.
//!
//! The controlled agent maximizes as in minimax, but every other agent's
//! node is worth the mean of its children. Means cannot be bounded the way
//! minima can, so nothing is pruned.

use super::agent::{sealed, Kind, SearchAgent};

/// Every other agent is worth the mean of its moves.
#[derive(Debug, Clone, Copy, Default)]
pub struct Averaging;

impl sealed::Sealed for Averaging {}

impl Kind for Averaging {
    const NAME: &'static str = "expectimax";
    const AVERAGE: bool = true;
    const PRUNING: bool = false;
}

pub type Expectimax<E> = SearchAgent<Averaging, E>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::Strategy;
    use crate::tree::{NodeValue, Spec};

    #[test]
    fn averages_random_replies() {
        let root = Spec::node(vec![Spec::leaves(&[2.0, 4.0, 9.0])]).build(2);
        let mut s = Expectimax::new(NodeValue::default(), 1).unwrap();
        assert_eq!(s.choose_move(&root).unwrap(), Some(0));
        assert_eq!(s.root_value(), 5.0);
    }

    #[test]
    fn prefers_gamble_that_minimax_avoids() {
        let root = Spec::node(vec![Spec::leaves(&[100.0, -50.0]), Spec::leaves(&[5.0, 6.0])]).build(2);
        let mut s = Expectimax::new(NodeValue::default(), 1).unwrap();
        assert_eq!(s.choose_move(&root).unwrap(), Some(0));
        assert_eq!(s.root_value(), 25.0);
        assert_eq!(s.stats().cutoffs, 0);
    }
}
