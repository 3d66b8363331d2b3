use switch_core::{RngHandle, SwitchError, SwitchGraph};
use switch_graph::{BipartiteGraph, DirectedDegree, DirectedGraph, MultiHypergraph, SimpleGraph};

/// Applies `n_iter` switches to `graph`.
///
/// Fails with [`SwitchError::EmptyCollection`] when `n_iter > 0` and the
/// graph has no edges.
pub fn resample<G: SwitchGraph>(
    graph: &mut G,
    n_iter: usize,
    rng: &mut RngHandle,
) -> Result<(), SwitchError> {
    let mut accepted = 0usize;
    for _ in 0..n_iter {
        if graph.switch(rng)? {
            accepted += 1;
        }
    }
    tracing::debug!(n_iter, accepted, "resampled");
    Ok(())
}

/// Samples a bipartite graph with X degrees `dx` and Y degrees `dy`.
pub fn sample_bipartite_graph(
    dx: &[usize],
    dy: &[usize],
    n_iter: usize,
    rng: &mut RngHandle,
) -> Result<Vec<(usize, usize)>, SwitchError> {
    let mut graph = BipartiteGraph::from_degree_sequence(dx, dy)?;
    resample(&mut graph, n_iter, rng)?;
    Ok(graph.edges())
}

/// Samples a loopless directed graph with the given `(out, in)` degrees.
pub fn sample_directed_graph(
    degree_sequence: &[DirectedDegree],
    n_iter: usize,
    rng: &mut RngHandle,
) -> Result<Vec<(usize, usize)>, SwitchError> {
    let mut graph = DirectedGraph::from_degree_sequence(degree_sequence)?;
    resample(&mut graph, n_iter, rng)?;
    Ok(graph.edges())
}

/// Samples a simple graph with the given degrees.
pub fn sample_simple_graph(
    degree_sequence: &[usize],
    n_iter: usize,
    rng: &mut RngHandle,
) -> Result<Vec<(usize, usize)>, SwitchError> {
    let mut graph = SimpleGraph::from_degree_sequence(degree_sequence)?;
    resample(&mut graph, n_iter, rng)?;
    Ok(graph.edges())
}

/// Samples a multi-hypergraph with the given vertex degrees and hyperedge sizes.
pub fn sample_multi_hypergraph(
    degree_sequence: &[usize],
    edge_sizes: &[usize],
    n_iter: usize,
    rng: &mut RngHandle,
) -> Result<Vec<Vec<usize>>, SwitchError> {
    let mut graph = MultiHypergraph::from_degree_sequence(degree_sequence, edge_sizes)?;
    resample(&mut graph, n_iter, rng)?;
    Ok(graph.edges())
}
