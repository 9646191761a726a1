// Hand-written game trees pinning down the search contract: when depth
// advances, when the search stops, how adversaries are combined, and which
// failures are reported.

use minimax_agents::tree::{NodeValue, Spec, Tree};
use minimax_agents::{
    from_fn, AgentConfig, AlphaBeta, Error, Expectimax, Minimax, Registry, Strategy,
};

fn counter() -> impl FnMut() -> f64 {
    let mut n = 0.0;
    move || {
        n += 1.0;
        n
    }
}

// Run all three searches on `root` and return their choices.
fn choose_all(root: &minimax_agents::tree::Node, depth: usize) -> [Option<usize>; 3] {
    [
        Minimax::new(NodeValue::default(), depth).unwrap().choose_move(root).unwrap(),
        AlphaBeta::new(NodeValue::default(), depth).unwrap().choose_move(root).unwrap(),
        Expectimax::new(NodeValue::default(), depth).unwrap().choose_move(root).unwrap(),
    ]
}

#[test]
fn depth_counts_full_rounds() {
    // Three agents, two moves each, three rounds deep.
    let spec = Spec::full(9, 2, &mut counter());
    for (depth, leaves) in [(1, 8u64), (2, 64), (3, 512)] {
        let root = spec.build(3);
        let eval = NodeValue::default();
        let mut s = Minimax::new(&eval, depth).unwrap();
        assert!(s.choose_move(&root).unwrap().is_some());
        assert_eq!(eval.calls() as u64, leaves);
        assert_eq!(s.stats().evaluations, leaves);
        // Nodes where the search stopped are never expanded.
        let expanded = (0..3 * depth as u32).map(|level| 2usize.pow(level)).sum::<usize>();
        assert_eq!(root.generated(), expanded);

        let eval = NodeValue::default();
        let mut s = Expectimax::new(&eval, depth).unwrap();
        s.choose_move(&root).unwrap();
        assert_eq!(eval.calls() as u64, leaves);
    }
}

#[test]
fn single_agent_game_advances_depth_every_move() {
    let root = Spec::node(vec![
        Spec::Node(2.0, vec![Spec::Leaf(1.0), Spec::Leaf(5.0)]),
        Spec::Node(3.0, vec![Spec::Leaf(3.0), Spec::Leaf(4.0)]),
    ])
    .build(1);

    let mut s = Minimax::new(NodeValue::default(), 1).unwrap();
    assert_eq!(s.choose_move(&root).unwrap(), Some(1));
    assert_eq!(s.root_value(), 3.0);

    let mut s = Minimax::new(NodeValue::default(), 2).unwrap();
    assert_eq!(s.choose_move(&root).unwrap(), Some(0));
    assert_eq!(s.root_value(), 5.0);
}

#[test]
fn controlled_agent_is_configurable() {
    // Agent 1 maximizes, agent 0 minimizes, rounds start and end with agent 1.
    let root = Spec::node(vec![Spec::leaves(&[1.0, 8.0]), Spec::leaves(&[4.0, 5.0])]).build(2);
    let mut s = Minimax::new(NodeValue::default(), 1).unwrap().with_controlled_agent(1);
    assert_eq!(s.choose_move(&root).unwrap(), Some(1));
    assert_eq!(s.root_value(), 4.0);

    let mut s = AlphaBeta::new(NodeValue::default(), 1).unwrap().with_controlled_agent(2);
    assert_eq!(
        s.choose_move(&root),
        Err(Error::ControlledAgentOutOfRange { agent: 2, num_agents: 2 })
    );
}

#[test]
fn terminal_states_end_the_search_mid_round() {
    let root = Spec::node(vec![
        // Agent 1 can only move into a win; agent 2 never gets to move.
        Spec::node(vec![Spec::Win(50.0)]),
        Spec::node(vec![Spec::node(vec![Spec::Leaf(10.0)])]),
        Spec::Lose(-100.0),
    ])
    .build(3);
    assert_eq!(choose_all(&root, 1), [Some(0); 3]);

    let mut s = Minimax::new(NodeValue::default(), 1).unwrap();
    s.choose_move(&root).unwrap();
    assert_eq!(s.root_value(), 50.0);
}

#[test]
fn winning_line_is_found_within_depth() {
    // Move 1 forces a win in the second round whatever agent 1 does; move 0
    // looks better at depth one.
    let root = Spec::node(vec![
        Spec::node(vec![Spec::Node(30.0, vec![Spec::leaves(&[0.0])])]),
        Spec::node(vec![
            Spec::Node(1.0, vec![Spec::Win(100.0), Spec::leaves(&[0.0])]),
            Spec::Node(2.0, vec![Spec::Win(100.0)]),
        ]),
    ])
    .build(2);
    assert_eq!(choose_all(&root, 1), [Some(0); 3]);
    assert_eq!(choose_all(&root, 2), [Some(1); 3]);
}

#[test]
fn finished_game_has_no_move() {
    for spec in [Spec::Win(1.0), Spec::Lose(-1.0)] {
        assert_eq!(choose_all(&spec.build(2), 2), [None; 3]);
    }
}

#[test]
fn missing_moves_are_a_contract_violation() {
    // Agent 1 has nothing to play in a live state.
    let root = Spec::node(vec![Spec::leaves(&[1.0]), Spec::Leaf(3.0)]).build(2);
    let expected = Err(Error::NoLegalMoves { agent: 1, depth: 0 });
    assert_eq!(Minimax::new(NodeValue::default(), 1).unwrap().choose_move(&root), expected);
    assert_eq!(AlphaBeta::new(NodeValue::default(), 1).unwrap().choose_move(&root), expected);
    assert_eq!(Expectimax::new(NodeValue::default(), 1).unwrap().choose_move(&root), expected);

    // The controlled agent itself is stuck at the root.
    let root = Spec::Leaf(0.0).build(2);
    let err = Minimax::new(NodeValue::default(), 1).unwrap().choose_move(&root).unwrap_err();
    assert_eq!(err, Error::NoLegalMoves { agent: 0, depth: 0 });
    assert!(err.is_contract_violation());
}

#[test]
fn expectimax_divides_once_by_move_count() {
    let root = Spec::node(vec![
        Spec::leaves(&[2.0, 4.0, 9.0]),
        Spec::leaves(&[5.5]),
    ])
    .build(2);
    let mut s = Expectimax::new(NodeValue::default(), 1).unwrap();
    assert_eq!(s.choose_move(&root).unwrap(), Some(1));
    assert_eq!(s.root_value(), 5.5);

    let mut s = Minimax::new(NodeValue::default(), 1).unwrap();
    assert_eq!(s.choose_move(&root).unwrap(), Some(1));

    // With two random agents the means nest.
    let root = Spec::node(vec![Spec::node(vec![
        Spec::leaves(&[1.0, 3.0]),
        Spec::leaves(&[10.0]),
    ])])
    .build(3);
    let mut s = Expectimax::new(NodeValue::default(), 1).unwrap();
    s.choose_move(&root).unwrap();
    assert_eq!(s.root_value(), 6.0);
}

#[test]
fn alphabeta_carries_alpha_across_root_moves() {
    let root = Spec::node(vec![
        Spec::leaves(&[10.0, 12.0]),
        Spec::leaves(&[3.0, 50.0, 60.0]),
        Spec::leaves(&[9.0, 70.0]),
        Spec::leaves(&[11.0, 20.0]),
    ])
    .build(2);
    let mut minimax = Minimax::new(NodeValue::default(), 1).unwrap();
    assert_eq!(minimax.choose_move(&root).unwrap(), Some(3));
    assert_eq!(root.applied(), 4 + 9);

    root.reset_counts();
    let mut alphabeta = AlphaBeta::new(NodeValue::default(), 1).unwrap();
    assert_eq!(alphabeta.choose_move(&root).unwrap(), Some(3));
    assert_eq!(alphabeta.root_value(), 11.0);
    // Moves 1 and 2 are each refuted by their first reply.
    assert_eq!(root.applied(), 4 + 2 + 1 + 1 + 2);
    assert_eq!(alphabeta.stats().cutoffs, 2);
}

#[test]
fn agents_from_configuration() {
    let registry = Registry::<Tree>::new().with("value", from_fn::<Tree, _>(|s| s.value()));
    let root = Spec::node(vec![Spec::leaves(&[1.0]), Spec::leaves(&[2.0])]).build(2);

    let config: AgentConfig = "evalFn=value,depth=1".parse().unwrap();
    let mut s = AlphaBeta::from_config(&registry, &config).unwrap();
    assert_eq!(s.choose_move(&root).unwrap(), Some(1));
    assert!(Minimax::from_config(&registry, &config).is_ok());
    assert!(Expectimax::from_config(&registry, &config).is_ok());

    let err = Minimax::from_config(&registry, &config.clone().with_evaluator("better")).err().unwrap();
    assert!(matches!(err, Error::UnknownEvaluator { .. }));
    assert!(err.is_configuration());

    let err = Expectimax::from_config(&registry, &config.with_depth(0)).err().unwrap();
    assert_eq!(err, Error::InvalidDepth { depth: 0 });
}
