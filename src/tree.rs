//! Explicit game trees, for use in tests.
//!
//! A tree is written out by hand as a `Spec` and built into a `Node`, the
//! state type of the `Tree` game. Every node carries the value an evaluator
//! sees when the search stops there. Moves are child positions, so move `1`
//! from a node leads to its second child, whichever agent plays it.
//!
//! The built tree counts how often moves were generated and applied, which
//! makes pruning and depth accounting observable.

use crate::interface::{AgentIndex, Evaluation, Evaluator, Game};
use std::cell::Cell;
use std::fmt;
use std::rc::Rc;

/// A hand-written game tree.
#[derive(Clone, Debug, PartialEq)]
pub enum Spec {
    /// A live node without moves.
    Leaf(Evaluation),
    /// A won terminal node.
    Win(Evaluation),
    /// A lost terminal node.
    Lose(Evaluation),
    /// A live node with its own value and its children.
    Node(Evaluation, Vec<Spec>),
}

impl Spec {
    /// An inner node whose own value is zero.
    pub fn node(children: Vec<Spec>) -> Spec {
        Spec::Node(0.0, children)
    }

    /// A tree of leaves with the given values, one level below a zero node.
    pub fn leaves(values: &[Evaluation]) -> Spec {
        Spec::node(values.iter().map(|&v| Spec::Leaf(v)).collect())
    }

    /// A complete tree with `levels` levels below the root and `branching`
    /// children per node, every node valued by `value`.
    pub fn full(levels: usize, branching: usize, value: &mut impl FnMut() -> Evaluation) -> Spec {
        let v = value();
        if levels == 0 {
            return Spec::Leaf(v);
        }
        Spec::Node(v, (0..branching).map(|_| Spec::full(levels - 1, branching, &mut *value)).collect())
    }

    /// Build the tree for a game of `num_agents` agents.
    pub fn build(&self, num_agents: usize) -> Node {
        let mut entries = Vec::new();
        flatten(self, &mut entries);
        Node {
            shared: Rc::new(Shared {
                num_agents,
                entries,
                generated: Cell::new(0),
                applied: Cell::new(0),
            }),
            id: 0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Status {
    Live,
    Win,
    Lose,
}

struct Entry {
    value: Evaluation,
    status: Status,
    children: Vec<usize>,
}

struct Shared {
    num_agents: usize,
    entries: Vec<Entry>,
    generated: Cell<usize>,
    applied: Cell<usize>,
}

fn flatten(spec: &Spec, entries: &mut Vec<Entry>) -> usize {
    let id = entries.len();
    let (value, status) = match *spec {
        Spec::Leaf(v) | Spec::Node(v, _) => (v, Status::Live),
        Spec::Win(v) => (v, Status::Win),
        Spec::Lose(v) => (v, Status::Lose),
    };
    entries.push(Entry { value, status, children: Vec::new() });
    if let Spec::Node(_, children) = spec {
        let ids = children.iter().map(|c| flatten(c, entries)).collect();
        entries[id].children = ids;
    }
    id
}

/// A position in a built tree.
#[derive(Clone)]
pub struct Node {
    shared: Rc<Shared>,
    id: usize,
}

impl Node {
    fn entry(&self) -> &Entry {
        &self.shared.entries[self.id]
    }

    /// Position of this node in depth-first order; the root is 0.
    pub fn id(&self) -> usize {
        self.id
    }

    pub fn value(&self) -> Evaluation {
        self.entry().value
    }

    /// Number of `generate_moves` calls made anywhere in this tree.
    pub fn generated(&self) -> usize {
        self.shared.generated.get()
    }

    /// Number of `apply` calls made anywhere in this tree.
    pub fn applied(&self) -> usize {
        self.shared.applied.get()
    }

    pub fn reset_counts(&self) {
        self.shared.generated.set(0);
        self.shared.applied.set(0);
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("id", &self.id)
            .field("value", &self.value())
            .field("status", &self.entry().status)
            .finish()
    }
}

/// The game played on a built tree.
pub struct Tree;

impl Game for Tree {
    type S = Node;
    type M = usize;

    fn num_agents(s: &Node) -> usize {
        s.shared.num_agents
    }

    fn generate_moves(s: &Node, _agent: AgentIndex, moves: &mut Vec<usize>) {
        s.shared.generated.set(s.shared.generated.get() + 1);
        moves.extend(0..s.entry().children.len());
    }

    fn apply(s: &Node, _agent: AgentIndex, m: &usize) -> Node {
        s.shared.applied.set(s.shared.applied.get() + 1);
        Node { shared: Rc::clone(&s.shared), id: s.entry().children[*m] }
    }

    fn is_win(s: &Node) -> bool {
        s.entry().status == Status::Win
    }

    fn is_lose(s: &Node) -> bool {
        s.entry().status == Status::Lose
    }

    fn notation(_s: &Node, agent: AgentIndex, m: &usize) -> Option<String> {
        Some(format!("{}:{}", agent, m))
    }
}

/// Scores a node by its own value, counting the calls.
#[derive(Default)]
pub struct NodeValue {
    calls: Cell<usize>,
}

impl NodeValue {
    pub fn calls(&self) -> usize {
        self.calls.get()
    }
}

impl Evaluator for NodeValue {
    type G = Tree;
    fn evaluate(&self, s: &Node) -> Evaluation {
        self.calls.set(self.calls.get() + 1);
        s.value()
    }
}
