use std::collections::BTreeSet;

use proptest::prelude::*;
use switch_core::{RngHandle, SwitchError};
use switch_graph::{
    BipartiteGraph, DirectedDegree, DirectedGraph, EdgeOrder, MultiHypergraph, Side, SimpleGraph,
    SwitchGraph,
};

/// Runs `steps` switches and checks the 0 or 2+2 edge delta on every step.
fn drive<G: SwitchGraph>(graph: &mut G, rng: &mut RngHandle, steps: usize) -> usize {
    let degrees = graph.degree_sequence();
    let mut accepted = 0;
    for _ in 0..steps {
        let before: BTreeSet<G::Edge> = graph.edges().into_iter().collect();
        let applied = graph.switch(rng).unwrap();
        let after: BTreeSet<G::Edge> = graph.edges().into_iter().collect();
        let removed = before.difference(&after).count();
        let added = after.difference(&before).count();
        if applied {
            accepted += 1;
            assert_eq!((removed, added), (2, 2));
        } else {
            assert_eq!((removed, added), (0, 0));
        }
        assert_eq!(graph.degree_sequence(), degrees);
    }
    accepted
}

proptest! {
    #[test]
    fn bipartite_switches_keep_degrees(seed in any::<u64>(), nx in 2usize..7, d in 1usize..3) {
        let graph_degrees = vec![d; nx];
        let mut graph = BipartiteGraph::from_degree_sequence(&graph_degrees, &graph_degrees).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        drive(&mut graph, &mut rng, 50);
    }

    #[test]
    fn simple_switches_keep_degrees_and_simplicity(seed in any::<u64>(), n in 4usize..9) {
        let mut graph = SimpleGraph::from_degree_sequence(&vec![2; n]).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        drive(&mut graph, &mut rng, 50);
        prop_assert!(graph.simple());
        prop_assert_eq!(graph.edge_count(), n);
    }

    #[test]
    fn directed_switches_never_create_loops(seed in any::<u64>(), n in 3usize..7) {
        let mut graph = DirectedGraph::from_degree_sequence(&vec![DirectedDegree::new(2, 2); n]).unwrap();
        let mut rng = RngHandle::from_seed(seed);
        drive(&mut graph, &mut rng, 50);
        prop_assert!(graph.simple());
        prop_assert!(graph.edges().iter().all(|(u, v)| u != v));
    }
}

#[test]
fn bipartite_chain_keeps_regular_sequence() {
    let dx = vec![5; 12];
    let dy = vec![3; 20];
    let mut graph = BipartiteGraph::from_degree_sequence(&dx, &dy).unwrap();
    let mut rng = RngHandle::from_seed(2021);
    let mut accepted = 0;
    for _ in 0..10_000 {
        if graph.switch(&mut rng).unwrap() {
            accepted += 1;
        }
    }
    assert!(accepted > 0);
    let degrees = graph.degree_sequence();
    assert_eq!(degrees.x, dx);
    assert_eq!(degrees.y, dy);
    assert_eq!(graph.edge_count(), 60);
}

#[test]
fn two_regular_five_vertices_stays_a_cycle() {
    let mut graph = SimpleGraph::from_degree_sequence(&[2; 5]).unwrap();
    let mut rng = RngHandle::from_seed(5);
    for _ in 0..200 {
        graph.switch(&mut rng).unwrap();
        let edges = graph.edges();
        assert_eq!(edges.len(), 5);
        // walk the cycle from vertex 0
        let mut seen = BTreeSet::from([0usize]);
        let mut previous = 0usize;
        let mut current = edges.iter().find(|(u, _)| *u == 0).map(|&(_, v)| v).unwrap();
        while current != 0 {
            seen.insert(current);
            let next = edges
                .iter()
                .filter_map(|&(u, v)| match (u == current, v == current) {
                    (true, _) if v != previous => Some(v),
                    (_, true) if u != previous => Some(u),
                    _ => None,
                })
                .next()
                .unwrap();
            previous = current;
            current = next;
        }
        assert_eq!(seen.len(), 5);
    }
}

#[test]
fn same_seed_same_edges() {
    let build = || SimpleGraph::from_degree_sequence(&[3; 8]).unwrap();
    let (mut a, mut b) = (build(), build());
    let mut rng_a = RngHandle::from_seed(11);
    let mut rng_b = RngHandle::from_seed(11);
    for _ in 0..500 {
        a.switch(&mut rng_a).unwrap();
        b.switch(&mut rng_b).unwrap();
    }
    assert_eq!(a, b);
}

#[test]
fn contains_edge_follows_switches() {
    let graph = BipartiteGraph::new(2, 3, &[(0, 2), (1, 0)]).unwrap();
    assert!(graph.contains_edge(0, 2));
    assert!(!graph.contains_edge(2, 0));
    assert!(!graph.contains_edge(5, 0));

    let graph = DirectedGraph::new(3, &[(0, 1), (2, 0)]).unwrap();
    assert!(graph.contains_edge(0, 1));
    assert!(!graph.contains_edge(1, 0));
    assert!(!graph.contains_edge(7, 1));

    let mut graph = SimpleGraph::from_degree_sequence(&[3; 8]).unwrap();
    let mut rng = RngHandle::from_seed(31);
    for _ in 0..100 {
        graph.switch(&mut rng).unwrap();
        for (u, v) in graph.edges() {
            assert!(graph.contains_edge(u, v));
            assert!(graph.contains_edge(v, u));
        }
        let present = (0..8)
            .flat_map(|u| (0..8).map(move |v| (u, v)))
            .filter(|&(u, v)| graph.contains_edge(u, v))
            .count();
        assert_eq!(present, 2 * graph.edge_count());
    }
}

#[test]
fn switching_an_empty_graph_fails() {
    let mut rng = RngHandle::from_seed(0);
    let mut graph = SimpleGraph::new(3, &[]).unwrap();
    assert!(matches!(graph.switch(&mut rng), Err(SwitchError::EmptyCollection(_))));
    let mut graph = BipartiteGraph::new(0, 0, &[]).unwrap();
    assert!(matches!(graph.switch(&mut rng), Err(SwitchError::EmptyCollection(_))));
}

#[test]
fn h_simple_tracks_repeated_neighbourhoods() {
    let graph = BipartiteGraph::new(2, 2, &[(0, 0), (1, 0), (0, 1), (1, 1)]).unwrap();
    assert!(!graph.simple());
    let graph = BipartiteGraph::new(2, 2, &[(0, 0), (1, 1)]).unwrap();
    assert!(graph.simple());
    assert_eq!(
        graph.neighbourhoods(Side::Y),
        vec![BTreeSet::from([0]), BTreeSet::from([1])]
    );
}

fn assert_incidence_agrees(graph: &MultiHypergraph, rng: &mut RngHandle) {
    let hyperedges = graph.edges();
    for vertex in 0..graph.n() {
        let expected: Vec<usize> = hyperedges
            .iter()
            .enumerate()
            .filter(|(_, members)| members.contains(&vertex))
            .map(|(label, _)| label)
            .collect();
        assert_eq!(graph.incident_edges(vertex), expected);
    }
    let incidence = graph.to_bipartite_graph(EdgeOrder::Sorted, rng).unwrap();
    let mut expected = hyperedges;
    expected.sort();
    let from_incidence: Vec<Vec<usize>> = incidence
        .neighbourhoods(Side::Y)
        .into_iter()
        .map(|members| members.into_iter().collect())
        .collect();
    assert_eq!(from_incidence, expected);
}

#[test]
fn hypergraph_switch_moves_one_vertex_between_two_hyperedges() {
    let mut graph = MultiHypergraph::from_degree_sequence(&[3; 8], &[4; 6]).unwrap();
    let mut rng = RngHandle::from_seed(23);
    let mut accepted = 0;
    for _ in 0..500 {
        let before = graph.edges();
        let applied = graph.switch(&mut rng).unwrap();
        let after = graph.edges();
        let changed: Vec<usize> = before
            .iter()
            .zip(&after)
            .enumerate()
            .filter(|(_, (old, new))| old != new)
            .map(|(label, _)| label)
            .collect();
        if applied {
            accepted += 1;
            assert_eq!(changed.len(), 2);
            for &label in &changed {
                let removed = before[label].iter().filter(|v| !after[label].contains(v)).count();
                let added = after[label].iter().filter(|v| !before[label].contains(v)).count();
                assert_eq!((removed, added), (1, 1));
            }
        } else {
            assert!(changed.is_empty());
        }
        assert_incidence_agrees(&graph, &mut rng);
    }
    assert!(accepted > 0);
}

#[test]
fn hypergraph_switches_keep_both_sequences() {
    let mut graph = MultiHypergraph::from_degree_sequence(&[2; 6], &[3; 4]).unwrap();
    let degrees = graph.degree_sequence();
    let sizes = graph.edge_sizes();
    let mut rng = RngHandle::from_seed(17);
    for _ in 0..1_000 {
        graph.switch(&mut rng).unwrap();
    }
    assert_eq!(graph.degree_sequence(), degrees);
    assert_eq!(graph.edge_sizes(), sizes);
    assert_eq!(graph.edges().iter().map(Vec::len).collect::<Vec<_>>(), sizes);

    let incidence = graph.to_bipartite_graph(EdgeOrder::Sorted, &mut rng).unwrap();
    let mut hyperedges = graph.edges();
    hyperedges.sort();
    let from_incidence: Vec<Vec<usize>> = incidence
        .neighbourhoods(Side::Y)
        .into_iter()
        .map(|members| members.into_iter().collect())
        .collect();
    assert_eq!(from_incidence, hyperedges);
    assert_eq!(incidence.degree_sequence().x, degrees);
}

#[test]
fn shuffled_incidence_keeps_the_hyperedge_multiset() {
    let graph = MultiHypergraph::new(4, &[vec![0, 1], vec![2, 3], vec![0, 2]]).unwrap();
    let mut rng = RngHandle::from_seed(9);
    let incidence = graph.to_bipartite_graph(EdgeOrder::Shuffled, &mut rng).unwrap();
    let mut from_incidence: Vec<Vec<usize>> = incidence
        .neighbourhoods(Side::Y)
        .into_iter()
        .map(|members| members.into_iter().collect())
        .collect();
    from_incidence.sort();
    let mut expected = graph.edges();
    expected.sort();
    assert_eq!(from_incidence, expected);
}

#[test]
fn multi_hypergraph_simplicity() {
    let graph = MultiHypergraph::new(3, &[vec![0, 1, 2], vec![2, 1, 0]]).unwrap();
    assert!(!graph.simple());
    let graph = MultiHypergraph::new(3, &[vec![0, 1], vec![1, 2]]).unwrap();
    assert!(graph.simple());
}

#[test]
fn display_truncates_degrees() {
    let graph = SimpleGraph::new(4, &[(0, 1), (1, 2), (1, 3), (2, 0)]).unwrap();
    assert_eq!(graph.to_string(), "Switch Simple Graph with n=4, degrees=(2, 3, 2, 1)");
    let graph = SimpleGraph::from_degree_sequence(&[1; 12]).unwrap();
    assert_eq!(
        graph.to_string(),
        "Switch Simple Graph with n=12, degrees=(1, 1, 1, 1, 1, 1, 1, 1, 1, ...)"
    );
}
