use switch_graph::{
    all_unique, degree_sequence_graphical, directed_degree_sequence_graphical,
    simple_degree_sequence_graphical, valid_bipartite_graph, valid_directed_graph,
    valid_multi_hypergraph, valid_simple_graph, BipartiteGraph, DirectedDegree, DirectedGraph,
    MultiHypergraph, SimpleGraph,
};
use switch_core::SwitchError;

#[test]
fn bipartite_bounds_and_duplicates() {
    assert!(valid_bipartite_graph(2, 3, &[(0, 0), (0, 2), (1, 2)]));
    assert!(!valid_bipartite_graph(2, 3, &[(2, 0)]));
    assert!(!valid_bipartite_graph(2, 3, &[(0, 3)]));
    assert!(!valid_bipartite_graph(2, 3, &[(0, 1), (0, 1)]));
    assert!(valid_bipartite_graph(0, 0, &[]));
}

#[test]
fn directed_edges_are_ordered_and_loopless() {
    assert!(valid_directed_graph(3, &[(0, 1), (1, 0), (2, 1)]));
    assert!(!valid_directed_graph(3, &[(1, 1)]));
    assert!(!valid_directed_graph(3, &[(0, 1), (0, 1)]));
    assert!(!valid_directed_graph(3, &[(0, 3)]));
}

#[test]
fn simple_edges_are_unordered() {
    assert!(valid_simple_graph(3, &[(0, 1), (1, 2)]));
    assert!(!valid_simple_graph(3, &[(0, 1), (1, 0)]));
    assert!(!valid_simple_graph(3, &[(2, 2)]));
    assert!(!valid_simple_graph(2, &[(0, 2)]));
}

#[test]
fn hyperedges_may_repeat_but_not_their_members() {
    assert!(valid_multi_hypergraph(3, &[vec![0, 1], vec![0, 1], vec![2]]));
    assert!(!valid_multi_hypergraph(3, &[vec![0, 0]]));
    assert!(!valid_multi_hypergraph(3, &[vec![]]));
    assert!(!valid_multi_hypergraph(3, &[vec![0, 3]]));
}

#[test]
fn checks_do_not_depend_on_call_history() {
    let edges = [(0usize, 1usize), (1, 2)];
    let first = valid_simple_graph(3, &edges);
    let _ = valid_simple_graph(3, &[(0, 0)]);
    assert_eq!(first, valid_simple_graph(3, &edges));
}

#[test]
fn uniqueness_helper() {
    assert!(all_unique([1, 2, 3]));
    assert!(!all_unique([1, 2, 1]));
    assert!(all_unique(Vec::<u8>::new()));
}

#[test]
fn graphicality_tests() {
    assert!(!degree_sequence_graphical(&[5, 5, 5], &[3]));
    assert!(degree_sequence_graphical(&[2, 1], &[1, 1, 1]));
    assert!(degree_sequence_graphical(&[], &[]));
    assert!(!simple_degree_sequence_graphical(&[10, 2, 2, 2]));
    assert!(!simple_degree_sequence_graphical(&[1, 1, 1]));
    assert!(simple_degree_sequence_graphical(&[2; 5]));
    assert!(directed_degree_sequence_graphical(&[
        DirectedDegree::new(1, 1),
        DirectedDegree::new(1, 1),
    ]));
    // one vertex cannot feed itself
    assert!(!directed_degree_sequence_graphical(&[DirectedDegree::new(1, 1)]));
    assert!(!directed_degree_sequence_graphical(&[
        DirectedDegree::new(2, 0),
        DirectedDegree::new(0, 1),
    ]));
}

#[test]
fn constructors_report_the_offending_edge() {
    let err = SimpleGraph::new(3, &[(0, 1), (2, 2)]).unwrap_err();
    match err {
        SwitchError::InvalidGraph(info) => {
            assert_eq!(info.code, "self-loop");
            assert_eq!(info.context.get("edge").map(String::as_str), Some("(2, 2)"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    let err = BipartiteGraph::new(1, 1, &[(0, 0), (0, 0)]).unwrap_err();
    assert_eq!(err.info().code, "duplicate-edge");
    let err = DirectedGraph::new(2, &[(0, 2)]).unwrap_err();
    assert_eq!(err.info().code, "out-of-bounds");
    let err = MultiHypergraph::new(2, &[vec![]]).unwrap_err();
    assert_eq!(err.info().code, "empty-hyperedge");
}

#[test]
fn non_graphical_sequences_are_refused() {
    let err = BipartiteGraph::from_degree_sequence(&[5, 5, 5], &[3]).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidDegreeSequence(_)));
    let err = SimpleGraph::from_degree_sequence(&[10, 2, 2, 2]).unwrap_err();
    assert_eq!(err.info().code, "not-graphical");
    let err = DirectedGraph::from_degree_sequence(&[DirectedDegree::new(1, 1)]).unwrap_err();
    assert!(matches!(err, SwitchError::InvalidDegreeSequence(_)));
    let err = MultiHypergraph::from_degree_sequence(&[1, 1], &[2, 0]).unwrap_err();
    assert_eq!(err.info().code, "empty-hyperedge");
}
